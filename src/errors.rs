//! Errors for timecard.

use std::path::PathBuf;

use num_enum::IntoPrimitive;
use thiserror::Error;

pub use color_eyre::eyre::{bail, eyre, Result, WrapErr};

/// Process exit codes of the tool.
///
/// Anything that bubbles up without a [`TrackErr`] attached exits through
/// color-eyre with `Failure`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, IntoPrimitive)]
#[repr(i32)]
pub enum ExitStatus {
    /// Malformed invocation or unreadable log.
    Failure = 1,
    /// A precondition of start, stop or abort does not hold.
    Precondition = 3,
    /// Status was asked for a project that does not exist.
    NoProject = 4,
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum TrackErr {
    #[error("{0}")]
    Usage(String),
    #[error("Parsing failed: {0}")]
    Parse(String),
    #[error("There is no project directory {0:?}, start working first. It creates the directory if necessary")]
    MissingDirectory(PathBuf),
    #[error("There is no project log {0:?}, start working first. It creates the file if necessary")]
    MissingLog(PathBuf),
    #[error("Stopping needs a message, tell me what you did")]
    EmptyMessage,
    #[error("There is no open task, you did not start working")]
    NothingOpen,
    #[error("You already started at {0}")]
    AlreadyOpen(String),
    #[error("There is no project {0}, start working on it first")]
    UnknownProject(String),
}

impl TrackErr {
    /// Exit code the process terminates with for this error.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            TrackErr::Usage(_) | TrackErr::Parse(_) => ExitStatus::Failure,
            TrackErr::MissingDirectory(_)
            | TrackErr::MissingLog(_)
            | TrackErr::EmptyMessage
            | TrackErr::NothingOpen
            | TrackErr::AlreadyOpen(_) => ExitStatus::Precondition,
            TrackErr::UnknownProject(_) => ExitStatus::NoProject,
        }
    }
}
