//! The campus clock.
//!
//! Every resolution call takes "now" as an explicit [`LocalDateTime`]
//! already expressed in the campus time zone. [`CampusClock`] is the one
//! place where a UTC instant is turned into that local value, so the engine
//! itself never sees a time zone.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use cn_core::errors::{Error, Result};
use cn_core::utilities::data_parsers::parse_local_datetime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::Date;
use crate::time_of_day::TimeOfDay;

/// Name of the campus time zone used when none is configured.
pub const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";

/// A civil date and wall-clock time in the campus time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDateTime {
    /// Calendar day.
    pub date: Date,
    /// Time of day.
    pub time: TimeOfDay,
}

impl LocalDateTime {
    /// Combine a date and a time of day.
    pub fn new(date: Date, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Parse `YYYY-MM-DDTHH:mm`.
    pub fn parse(s: &str) -> Result<Self> {
        let ((y, mo, d), (h, mi)) = parse_local_datetime(s)
            .ok_or_else(|| Error::Date(format!("not a local date-time: {s:?}")))?;
        Ok(Self::new(Date::from_ymd(y, mo, d)?, TimeOfDay::new(h, mi)?))
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl FromStr for LocalDateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LocalDateTime::parse(s)
    }
}

impl Serialize for LocalDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LocalDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        LocalDateTime::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse a time-zone name, falling back to [`DEFAULT_TIMEZONE`].
pub fn parse_tz(name: &str) -> Tz {
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(e) => {
            tracing::warn!(
                timezone = name,
                fallback = DEFAULT_TIMEZONE,
                error = %e,
                "unknown time zone"
            );
            chrono_tz::Asia::Tokyo
        }
    }
}

/// Source of "now" for the presentation layer.
///
/// A clock may carry a fixed override instant, which replaces the system time
/// for previews and reproducible screenshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampusClock {
    tz: Tz,
    fixed: Option<LocalDateTime>,
}

impl Default for CampusClock {
    fn default() -> Self {
        Self::new(chrono_tz::Asia::Tokyo)
    }
}

impl CampusClock {
    /// A clock reading system time in `tz`.
    pub fn new(tz: Tz) -> Self {
        Self { tz, fixed: None }
    }

    /// A clock for the named zone; unknown names fall back to
    /// [`DEFAULT_TIMEZONE`].
    pub fn from_name(name: &str) -> Self {
        Self::new(parse_tz(name))
    }

    /// Pin the clock to `at`.
    pub fn with_override(mut self, at: LocalDateTime) -> Self {
        self.fixed = Some(at);
        self
    }

    /// Pin the clock to an instant written as `YYYY-MM-DDTHH:mm`.
    ///
    /// Unparseable text leaves the clock on system time, matching how a bad
    /// preview parameter is ignored.
    pub fn with_override_str(self, at: &str) -> Self {
        match LocalDateTime::parse(at) {
            Ok(local) => self.with_override(local),
            Err(e) => {
                tracing::debug!(value = at, error = %e, "ignoring clock override");
                self
            }
        }
    }

    /// Return `true` if the clock is pinned to an override instant.
    pub fn is_overridden(&self) -> bool {
        self.fixed.is_some()
    }

    /// The campus time zone.
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Express a UTC instant in campus-local terms.
    pub fn localize(&self, instant: DateTime<Utc>) -> Result<LocalDateTime> {
        let local = instant.with_timezone(&self.tz);
        let date = Date::try_from(local.date_naive())?;
        // hour() < 24 and minute() < 60 by construction.
        let time = TimeOfDay::new(local.hour() as u8, local.minute() as u8)?;
        Ok(LocalDateTime::new(date, time))
    }

    /// The current campus-local date and time.
    pub fn now(&self) -> Result<LocalDateTime> {
        match self.fixed {
            Some(at) => Ok(at),
            None => self.localize(Utc::now()),
        }
    }
}
