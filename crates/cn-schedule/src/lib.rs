//! # cn-schedule
//!
//! Opening-hours resolution for campus facilities.
//!
//! A [`RuleStore`] maps every [`FacilityId`] to an ordered list of
//! [`ScheduleRule`]s plus per-date exceptions. The [`matcher`] picks the rule
//! governing a day, [`status`] turns it into live open/break/closed state,
//! [`daily`] into calendar cells, and [`search`](mod@search) scans the whole store for
//! dated events. [`Engine`] ties these together behind one handle.
//!
//! ```
//! use cn_schedule::{Engine, EngineConfig, FacilityId, FacilityStatus};
//! use cn_time::LocalDateTime;
//!
//! let engine = Engine::builtin(&EngineConfig::default());
//! let now = LocalDateTime::parse("2026-01-19T13:00").unwrap();
//! let status = engine.status(FacilityId::AcademicAffairs, now.date, now);
//! assert_eq!(status.status, FacilityStatus::Break);
//! assert_eq!(status.next_change_text, "開館 13:40");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Site-wide alerts.
pub mod alerts;

/// `EngineConfig` and its TOML loader.
pub mod config;

/// Calendar-cell projection and colour palettes.
pub mod daily;

/// Built-in schedule data.
pub mod data;

/// The resolution engine.
pub mod engine;

/// Facility identifiers and per-facility data.
pub mod facility;

/// The rule-matching cascade.
pub mod matcher;

/// Schedule rules.
pub mod rule;

/// Event search and facility filtering.
pub mod search;

/// Live status computation.
pub mod status;

/// The validated rule store.
pub mod store;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use alerts::{global_alerts, AlertLevel, GlobalAlert};
pub use config::EngineConfig;
pub use daily::{
    color_for, daily_info, monthly_schedule, palette, ColorTag, DailyInfo, DailySchedule,
    Palette, ScheduleType,
};
pub use data::{is_data_stale, DATA_LAST_UPDATED};
pub use engine::Engine;
pub use facility::{
    Category, Exception, ExceptionStatus, FacilityData, FacilityId, FacilitySummary,
};
pub use matcher::{match_rule, MatchTier, MatchedRule};
pub use rule::{RuleKind, ScheduleRule, HOLIDAY_PLACEHOLDER};
pub use search::{filter_facilities, search, EventStatus, SearchResult};
pub use status::{compute_status, FacilityStatus, StatusResult};
pub use store::{validate_facility, RuleStore};

/// Every facility in the built-in data, in declaration order.
pub fn facilities() -> Vec<FacilitySummary> {
    RuleStore::builtin().summaries()
}
