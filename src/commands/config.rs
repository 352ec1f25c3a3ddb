//! Tune configuration via command line.
//!
//! Handler for the `--configure` switch.

use std::path::{Path, PathBuf};

use log::info;

use crate::config::{Config, BASE_DIR_NAME};
use crate::errors::*;

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.directory {
            Some(dir) => write!(f, "Directory for project logs: {}", dir.display()),
            None => write!(f, "Directory for project logs: <home>/{BASE_DIR_NAME} (default)"),
        }
    }
}

/// Shows the current configuration, asks for new values and saves on
/// confirmation.
pub fn configure<P: AsRef<Path>>(path: P) -> Result<()> {
    let mut config = Config::load(&path)?;
    println!("Current configuration:");
    println!("    {config}");
    println!();
    println!("Let's change the configuration. Enter your desired value, leave blank for keeping the current value.");

    println!("    Directory for project logs: ");
    let input = read_line()?;
    if !input.is_empty() {
        config.directory = Some(PathBuf::from(input));
    }

    println!("Save this configuration? (yes/no)");
    if confirmed()? {
        config.store(&path)?;
        info!("Wrote configuration to {:?}", path.as_ref());
    } else {
        info!("Keeping the previous configuration.");
    }
    Ok(())
}

fn read_line() -> Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .wrap_err("Failed to read line from stdin")?;
    Ok(input.trim().to_string())
}

/// Loops until the answer reads as yes or no.
fn confirmed() -> Result<bool> {
    loop {
        match read_line()?.to_lowercase().as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" => return Ok(false),
            other => println!("Failed to parse {other:?}, answer 'yes' or 'no'."),
        }
    }
}
