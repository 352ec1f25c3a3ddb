//! Flat-file storage of project logs.
//!
//! Load, rewrite and manipulate the entries of one project. A log is read as
//! a whole, mutated in memory and written back in full; comment lines are
//! dropped on read and therefore lost across a rewrite cycle. There is no
//! locking, concurrent invocations race with last-writer-wins.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use chrono::{Duration, NaiveDateTime};
use itertools::Itertools;

use crate::entry::{Entry, COMMENT_MARKER};
use crate::errors::{Result, TrackErr, WrapErr};

/// Ordered entries of one project, mirroring one file on disk.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct ProjectLog {
    entries: Vec<Entry>,
}

impl ProjectLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a log from `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)
            .wrap_err_with(|| format!("Failed to open project log {:?}", path.as_ref()))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a log line by line, skipping comments and blank lines.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let record = line.trim_end();
            if record.is_empty() || record.starts_with(COMMENT_MARKER) {
                continue;
            }
            entries.push(record.parse::<Entry>()?);
        }
        let log = Self { entries };
        log.validate()?;
        Ok(log)
    }

    /// A well-formed log has at most one open entry and it is the last one.
    fn validate(&self) -> Result<(), TrackErr> {
        let open = self
            .entries
            .iter()
            .positions(Entry::is_open)
            .at_most_one()
            .map_err(|_| TrackErr::Parse("more than one open entry in the log".to_string()))?;
        match open {
            Some(idx) if idx + 1 != self.entries.len() => Err(TrackErr::Parse(
                "an open entry is followed by later entries".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        for entry in &self.entries {
            writeln!(writer, "{entry}")?;
        }
        Ok(())
    }

    /// Rewrite the whole log to `path`, creating the file if necessary.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(&path)
            .wrap_err_with(|| format!("Failed to write project log {:?}", path.as_ref()))?;
        self.write(&mut file)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The running entry, if any. Only ever the last one.
    pub fn open_entry(&self) -> Option<&Entry> {
        self.entries.last().filter(|e| e.is_open())
    }

    /// Append a new open entry. Fails with the start of the running entry if
    /// one is already open.
    pub fn start(&mut self, time: NaiveDateTime) -> Result<(), NaiveDateTime> {
        match self.open_entry() {
            Some(open) => Err(open.start()),
            None => {
                self.entries.push(Entry::begin(time));
                Ok(())
            }
        }
    }

    /// Close the running entry at `time` with `message`, returning the
    /// recorded duration.
    pub fn stop(&mut self, time: NaiveDateTime, message: &str) -> Result<Duration, TrackErr> {
        match self.entries.last_mut().filter(|e| e.is_open()) {
            Some(open) => {
                open.close(time, message);
                Ok(open.elapsed(time))
            }
            None => Err(TrackErr::NothingOpen),
        }
    }

    /// Drop the running entry entirely, as if start was never invoked.
    pub fn cancel(&mut self) -> Result<Entry, TrackErr> {
        match self.entries.pop() {
            Some(open) if open.is_open() => Ok(open),
            Some(closed) => {
                self.entries.push(closed);
                Err(TrackErr::NothingOpen)
            }
            None => Err(TrackErr::NothingOpen),
        }
    }

    /// Sum of all closed entries, the total of the status report.
    pub fn closed_total(&self) -> Duration {
        self.entries
            .iter()
            .filter_map(Entry::duration)
            .fold(Duration::zero(), |acc, d| acc + d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 1, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn from_reader_skips_comments_and_blanks() {
        let raw = "# tracked hours for acme\n\n2021-01-27 09:00:00;2021-01-27 10:00:00;docs\n";
        let log = ProjectLog::from_reader(raw.as_bytes()).expect("log parses");
        assert_eq!(log.entries().len(), 1);
        assert_eq!(log.entries()[0].message(), "docs");
    }

    #[test]
    fn comments_are_not_rewritten() {
        let raw = "# a note to myself\n2021-01-27 09:00:00;-1;\n";
        let log = ProjectLog::from_reader(raw.as_bytes()).expect("log parses");
        let mut rewritten: Vec<u8> = Vec::new();
        log.write(&mut rewritten).expect("write works");
        assert_eq!(
            std::str::from_utf8(&rewritten).unwrap(),
            "2021-01-27 09:00:00;-1;\n"
        );
    }

    #[test]
    fn rejects_two_open_entries() {
        let raw = "2021-01-27 09:00:00;-1;\n2021-01-27 10:00:00;-1;\n";
        assert!(ProjectLog::from_reader(raw.as_bytes()).is_err());
    }

    #[test]
    fn rejects_open_entry_before_closed_one() {
        let raw = "2021-01-27 09:00:00;-1;\n2021-01-27 10:00:00;2021-01-27 11:00:00;x\n";
        assert!(ProjectLog::from_reader(raw.as_bytes()).is_err());
    }

    #[test]
    fn rejects_malformed_record() {
        let raw = "yesterday;-1;\n";
        assert!(ProjectLog::from_reader(raw.as_bytes()).is_err());
    }

    #[test]
    fn write_read_round_trip() {
        let mut log = ProjectLog::new();
        log.start(dt(27, 9, 0)).expect("start works");
        log.stop(dt(27, 10, 30), "reviewed patches").expect("stop works");
        log.start(dt(28, 8, 0)).expect("second start works");

        let mut raw: Vec<u8> = Vec::new();
        log.write(&mut raw).expect("write works");
        let reread = ProjectLog::from_reader(raw.as_slice()).expect("reread works");
        assert_eq!(reread, log);
    }

    #[test]
    fn start_refuses_while_open() {
        let mut log = ProjectLog::new();
        log.start(dt(27, 9, 0)).expect("start works");
        assert_eq!(log.start(dt(27, 10, 0)), Err(dt(27, 9, 0)));
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn stop_on_empty_log_is_nothing_open() {
        let mut log = ProjectLog::new();
        assert!(matches!(log.stop(dt(27, 9, 0), "x"), Err(TrackErr::NothingOpen)));
    }

    #[test]
    fn stop_closes_the_open_entry() {
        let mut log = ProjectLog::new();
        log.start(dt(27, 9, 0)).expect("start works");
        let dur = log.stop(dt(27, 11, 15), "wrote docs").expect("stop works");
        assert_eq!(dur, Duration::minutes(135));
        assert!(log.open_entry().is_none());
        assert_eq!(log.entries()[0].message(), "wrote docs");
    }

    #[test]
    fn cancel_removes_the_open_entry() {
        let mut log = ProjectLog::new();
        log.start(dt(27, 9, 0)).expect("start works");
        log.stop(dt(27, 10, 0), "x").expect("stop works");
        log.start(dt(27, 11, 0)).expect("start works");
        let dropped = log.cancel().expect("cancel works");
        assert_eq!(dropped.start(), dt(27, 11, 0));
        assert_eq!(log.entries().len(), 1);
        assert!(matches!(log.cancel(), Err(TrackErr::NothingOpen)));
    }

    #[test]
    fn closed_total_sums_pairs_and_skips_open() {
        let mut log = ProjectLog::new();
        log.start(dt(27, 9, 0)).expect("start works");
        log.stop(dt(27, 10, 0), "a").expect("stop works");
        log.start(dt(27, 12, 0)).expect("start works");
        log.stop(dt(27, 12, 45), "b").expect("stop works");
        log.start(dt(27, 14, 0)).expect("start works");
        assert_eq!(log.closed_total(), Duration::minutes(105));
    }
}
