//! # campus-navigator
//!
//! Opening hours and live open/closed status for the facilities of a
//! university campus, resolved against a hand-authored rule calendar and the
//! Japanese national-holiday table.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `cn-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use campus_navigator::prelude::*;
//!
//! let engine = Engine::builtin(&EngineConfig::default());
//! let now = LocalDateTime::parse("2026-01-19T10:00").unwrap();
//! let status = engine.status(FacilityId::Library, now.date, now);
//! assert!(status.is_open);
//! assert_eq!(status.next_change_text, "閉館 20:00");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, translation, and text parsers.
pub use cn_core as core;

/// Dates, times of day, holidays, and the campus clock.
pub use cn_time as time;

/// Rules, matching, status, calendar projection, and search.
pub use cn_schedule as schedule;

/// The types most callers need.
pub mod prelude {
    pub use cn_core::{Catalog, Error, Language, Result, Translate};
    pub use cn_schedule::{
        ColorTag, DailyInfo, Engine, EngineConfig, EventStatus, FacilityId, FacilityStatus,
        GlobalAlert, ScheduleType, SearchResult, StatusResult,
    };
    pub use cn_time::{CampusClock, Date, Japan, LocalDateTime, TimeOfDay};
}
