use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDateTime;
pub use clap::Parser;
use clap::CommandFactory;
use timecard::{delta::parse_offset, errors::TrackErr};

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Name of the project to track.
    pub project: Option<String>,
    /// What to do with it: start, stop, status or abort.
    pub action: Option<String>,
    /// Note attached when stopping work, required by stop.
    pub message: Option<String>,
    /// Directory holding the project logs, overrides the configured one.
    #[arg(short, long)]
    pub directory: Option<PathBuf>,
    /// Offset to current time in format `XX[h|m|s][+-]`, used by start and stop.
    #[arg(short, long, value_parser = parse_offset)]
    pub offset: Option<NaiveDateTime>,
    /// Print shell completions and exit.
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
    /// Interactively edit the configuration and exit.
    #[arg(long)]
    pub configure: bool,
}

/// The four things one can do with a project log.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Action {
    Start,
    Stop,
    Status,
    Abort,
}

impl FromStr for Action {
    type Err = TrackErr;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "start" => Ok(Action::Start),
            "stop" => Ok(Action::Stop),
            "status" => Ok(Action::Status),
            "abort" => Ok(Action::Abort),
            _ => Err(TrackErr::Usage(format!(
                "Unknown action `{input}`, expected start, stop, status or abort\n\n{}",
                usage()
            ))),
        }
    }
}

/// Usage line for hand-rolled argument errors.
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}
