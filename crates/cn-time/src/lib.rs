//! # cn-time
//!
//! Calendar dates, wall-clock times, national-holiday calendars, and the
//! campus clock.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Campus-local instants and the clock that produces them.
pub mod clock;

/// `Date` type.
pub mod date;

/// `HolidayCalendar` trait and the Japanese national-holiday table.
pub mod holidays;

/// `TimeOfDay` and opening `Interval`s.
pub mod time_of_day;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use clock::{CampusClock, LocalDateTime, DEFAULT_TIMEZONE};
pub use date::{Date, DateRange};
pub use holidays::{Holiday, HolidayCalendar, HolidayTable, Japan, NoHolidays};
pub use time_of_day::{format_intervals, Interval, TimeOfDay};
pub use weekday::Weekday;
