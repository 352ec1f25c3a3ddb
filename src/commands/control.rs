//! Handlers for the start, stop and abort actions.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::{debug, info};

use crate::entry::{hours, TIME_FORMAT};
use crate::errors::{Result, TrackErr, WrapErr};
use crate::storage::ProjectLog;

/// Handles the start of a working period, called by the `start` action.
///
/// Creates the base directory and the project log if they do not exist.
/// Returns an error if an entry is already open.
pub fn start<P: AsRef<Path>>(dir: P, project: &str, time: NaiveDateTime) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("Failed to create project directory {dir:?}"))?;
        info!("Created project directory {}", dir.display());
    }
    let path = dir.join(project);
    let mut log = if path.exists() {
        ProjectLog::from_file(&path)?
    } else {
        ProjectLog::new()
    };
    log.start(time)
        .map_err(|open| TrackErr::AlreadyOpen(open.format(TIME_FORMAT).to_string()))?;
    debug!("log: {:?}", log);
    log.to_file(&path)?;
    info!(
        "Started on {} at {}. Now be productive!",
        project,
        time.format("%H:%M")
    );
    Ok(())
}

/// Closes the open entry with a message, called by the `stop` action.
///
/// Requires the base directory, the project log, a non-empty message and an
/// open entry, in that order.
pub fn stop<P: AsRef<Path>>(
    dir: P,
    project: &str,
    time: NaiveDateTime,
    message: &str,
) -> Result<()> {
    let path = existing_log(dir, project)?;
    if message.trim().is_empty() {
        return Err(TrackErr::EmptyMessage.into());
    }
    let mut log = ProjectLog::from_file(&path)?;
    let duration = log.stop(time, message)?;
    log.to_file(&path)?;
    info!(
        "You worked {:.4} h on {}. Enjoy your evening \u{1F389}",
        hours(duration),
        project
    );
    Ok(())
}

/// Discards the open entry entirely, called by the `abort` action.
///
/// The log is rewritten without the entry, as if start was never invoked.
pub fn abort<P: AsRef<Path>>(dir: P, project: &str) -> Result<()> {
    let path = existing_log(dir, project)?;
    let mut log = ProjectLog::from_file(&path)?;
    let dropped = log.cancel()?;
    log.to_file(&path)?;
    info!(
        "Aborted the task on {} started at {}.",
        project,
        dropped.start().format(TIME_FORMAT)
    );
    Ok(())
}

/// Path of the project log, failing if directory or file are absent.
fn existing_log<P: AsRef<Path>>(dir: P, project: &str) -> Result<PathBuf, TrackErr> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Err(TrackErr::MissingDirectory(dir.to_path_buf()));
    }
    let path = dir.join(project);
    if !path.exists() {
        return Err(TrackErr::MissingLog(path));
    }
    Ok(path)
}
