//! Prints a summary of the tracked time of one project.
//!
//! Handler for the `status` action.

use std::path::Path;

use chrono::Local;
use colored::Colorize;
use log::info;

use crate::entry::{hours, StopTime, TIME_FORMAT};
use crate::errors::{Result, TrackErr};
use crate::storage::ProjectLog;

const RULE_WIDTH: usize = 64;

/// Prints one row per entry and the total of all closed ones. The running
/// entry counts against now but stays out of the total.
pub fn status<P: AsRef<Path>>(dir: P, project: &str) -> Result<()> {
    let path = dir.as_ref().join(project);
    if !path.exists() {
        return Err(TrackErr::UnknownProject(project.to_string()).into());
    }
    let log = ProjectLog::from_file(&path)?;
    let now = Local::now().naive_local();

    info!("Here is what you did on {}:", project);
    println!("{}", "-".repeat(RULE_WIDTH));
    for entry in log.entries() {
        let row = format!(
            "{:>9.4} h  started {}",
            hours(entry.elapsed(now)),
            entry.start().format(TIME_FORMAT)
        );
        match entry.stop() {
            StopTime::At(_) => println!("{}  {}", row, entry.message()),
            StopTime::Open => println!("{}  {}", row, "ON-GOING".yellow().bold()),
        }
    }
    println!("{}", "-".repeat(RULE_WIDTH));
    println!("{} {:>9.4} h", "Total:".green(), hours(log.closed_total()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_of_unknown_project_fails() {
        let tmp = tempfile::tempdir().expect("tempdir works");
        let err = status(tmp.path(), "ghost").expect_err("no such project");
        assert!(matches!(
            err.downcast_ref::<TrackErr>(),
            Some(TrackErr::UnknownProject(_))
        ));
    }

    #[test]
    fn status_handles_open_and_closed_entries() {
        let tmp = tempfile::tempdir().expect("tempdir works");
        let path = tmp.path().join("acme");
        std::fs::write(
            &path,
            "2021-01-27 09:00:00;2021-01-27 10:00:00;docs\n2021-01-27 11:00:00;-1;\n",
        )
        .expect("write works");
        status(tmp.path(), "acme").expect("status works");
    }
}
