//! Configuration of timecard.
//!
//! A small json file in the user's config directory. Everything in it is
//! optional, the tool runs fine without one.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::*;

/// Directory under the home directory holding the project logs by default.
pub const BASE_DIR_NAME: &str = ".project";

const CONFIG_FILE: &str = "timecard.json";

#[derive(Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
pub struct Config {
    /// Base directory for project logs, overriding `<home>/.project`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Config {
    /// Location of the config file, `timecard.json` in the user's config
    /// directory.
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_FILE))
            .ok_or_else(|| eyre!("Could not determine the configuration directory"))
    }

    /// Read the configuration, falling back to defaults if there is none.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        match File::open(&path) {
            Ok(f) => serde_json::from_reader(BufReader::new(f))
                .wrap_err_with(|| format!("Failed to parse configuration {:?}", path.as_ref())),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Write the configuration to `path`.
    pub fn store<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(&path)
            .wrap_err_with(|| format!("Failed to write configuration {:?}", path.as_ref()))?;
        serde_json::to_writer_pretty(file, self)
            .wrap_err("Failed to serialize configuration to json")
    }

    /// Resolve the base directory for this invocation: command line flag
    /// first, then the configured directory, then `<home>/.project`.
    pub fn base_dir(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(dir) = flag.or_else(|| self.directory.clone()) {
            return Ok(dir);
        }
        dirs::home_dir()
            .map(|home| home.join(BASE_DIR_NAME))
            .ok_or_else(|| eyre!("Could not determine your home directory"))
    }
}
