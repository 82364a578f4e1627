//! Wall-clock times of day and opening intervals.
//!
//! Schedule data writes times as zero-padded 24-hour `HH:mm` strings and the
//! status logic compares them lexically. [`TimeOfDay`] stores minutes since
//! midnight instead; for zero-padded `HH:mm` text the two orderings agree,
//! so every boundary decision matches a string comparison.

use std::fmt;
use std::str::FromStr;

use cn_core::errors::{Error, Result};
use cn_core::utilities::data_parsers::parse_hhmm;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A wall-clock time with minute precision, `00:00` to `23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Create a time from an hour (0–23) and minute (0–59).
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::Time(format!(
                "{hour}:{minute:02} is not a valid time of day"
            )));
        }
        Ok(TimeOfDay(hour as u16 * 60 + minute as u16))
    }

    /// Parse `HH:mm` (a single-digit hour is accepted).
    pub fn parse(s: &str) -> Result<Self> {
        let (h, m) = parse_hhmm(s).ok_or_else(|| Error::Time(format!("not an HH:mm time: {s:?}")))?;
        Self::new(h, m)
    }

    /// Hour component (0–23).
    pub fn hour(&self) -> u8 {
        (self.0 / 60) as u8
    }

    /// Minute component (0–59).
    pub fn minute(&self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> u16 {
        self.0
    }

    /// Render without zero-padding the hour (`9:00`, `16:30`).
    pub fn unpadded(&self) -> String {
        format!("{}:{:02}", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TimeOfDay::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TimeOfDay::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A half-open opening interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    /// Opening time (inclusive).
    pub start: TimeOfDay,
    /// Closing time (exclusive).
    pub end: TimeOfDay,
}

impl Interval {
    /// Create an interval, requiring `start < end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        cn_core::ensure!(start < end, "interval {start}-{end} must start before it ends");
        Ok(Self { start, end })
    }

    /// Parse an interval from two `HH:mm` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(TimeOfDay::parse(start)?, TimeOfDay::parse(end)?)
    }

    /// Return `true` if `t` falls inside `[start, end)`.
    pub fn contains(&self, t: TimeOfDay) -> bool {
        self.start <= t && t < self.end
    }
}

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            start: TimeOfDay,
            end: TimeOfDay,
        }

        let raw = Raw::deserialize(deserializer)?;
        Interval::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Render a list of intervals as `09:00-12:40, 13:40-16:30`.
///
/// An empty list renders as the empty string.
pub fn format_intervals(hours: &[Interval]) -> String {
    hours
        .iter()
        .map(Interval::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check that every interval is non-empty and that `hours` are strictly
/// ascending and non-overlapping.
///
/// Adjacent intervals may touch (`end == next.start`).
pub fn check_ascending(hours: &[Interval]) -> Result<()> {
    if let Some(iv) = hours.iter().find(|iv| iv.start >= iv.end) {
        return Err(Error::Time(format!("interval {iv} must start before it ends")));
    }
    for pair in hours.windows(2) {
        if pair[1].start < pair[0].end {
            return Err(Error::Time(format!(
                "intervals {} and {} overlap or are out of order",
                pair[0], pair[1]
            )));
        }
    }
    Ok(())
}
