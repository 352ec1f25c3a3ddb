//! Model of a single tracked work interval.
//!
//! One entry is one line in a project log: `start;stop;message`. An entry
//! still in progress carries the sentinel `-1` in place of its stop time.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime};

use crate::errors::TrackErr;

/// Timestamp format used in the log files, local time.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Literal standing in for the stop time of an entry in progress.
pub const OPEN_SENTINEL: &str = "-1";
/// Lines starting with this marker are dropped on read and never rewritten.
pub const COMMENT_MARKER: char = '#';

const SEPARATOR: char = ';';

/// Stop time of an entry, tagged instead of overloading a timestamp.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StopTime {
    /// Work is still going on.
    Open,
    /// Work ended at this point in time.
    At(NaiveDateTime),
}

/// One work interval of a project.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Entry {
    start: NaiveDateTime,
    stop: StopTime,
    message: String,
}

impl Entry {
    /// Creates an open entry starting at `start` with an empty message.
    pub fn begin(start: NaiveDateTime) -> Self {
        Self {
            start,
            stop: StopTime::Open,
            message: String::new(),
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn stop(&self) -> StopTime {
        self.stop
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_open(&self) -> bool {
        self.stop == StopTime::Open
    }

    /// Closes the entry at `stop` and attaches the message.
    pub fn close(&mut self, stop: NaiveDateTime, message: &str) {
        self.stop = StopTime::At(stop);
        self.message = message.to_string();
    }

    /// Time spent on this entry. Open entries count up to `now`.
    pub fn elapsed(&self, now: NaiveDateTime) -> Duration {
        match self.stop {
            StopTime::Open => now.signed_duration_since(self.start),
            StopTime::At(stop) => stop.signed_duration_since(self.start),
        }
    }

    /// Recorded duration of a closed entry, `None` while still open.
    pub fn duration(&self) -> Option<Duration> {
        match self.stop {
            StopTime::Open => None,
            StopTime::At(stop) => Some(stop.signed_duration_since(self.start)),
        }
    }
}

/// Converts a duration to fractional hours, the unit the status report uses.
pub fn hours(dur: Duration) -> f64 {
    dur.num_seconds() as f64 / 3600.0
}

impl FromStr for Entry {
    type Err = TrackErr;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.splitn(3, SEPARATOR);
        let start = fields
            .next()
            .ok_or_else(|| TrackErr::Parse(format!("empty record `{line}`")))?;
        let start = NaiveDateTime::parse_from_str(start, TIME_FORMAT)
            .map_err(|e| TrackErr::Parse(format!("bad start time `{start}`: {e}")))?;
        let stop = fields
            .next()
            .ok_or_else(|| TrackErr::Parse(format!("record `{line}` has no stop field")))?;
        let stop = if stop == OPEN_SENTINEL {
            StopTime::Open
        } else {
            StopTime::At(
                NaiveDateTime::parse_from_str(stop, TIME_FORMAT)
                    .map_err(|e| TrackErr::Parse(format!("bad stop time `{stop}`: {e}")))?,
            )
        };
        let message = fields.next().unwrap_or_default().to_string();
        Ok(Self {
            start,
            stop,
            message,
        })
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start.format(TIME_FORMAT);
        match self.stop {
            StopTime::Open => write!(f, "{}{}{}{}{}", start, SEPARATOR, OPEN_SENTINEL, SEPARATOR, self.message),
            StopTime::At(stop) => write!(
                f,
                "{}{}{}{}{}",
                start,
                SEPARATOR,
                stop.format(TIME_FORMAT),
                SEPARATOR,
                self.message
            ),
        }
    }
}
