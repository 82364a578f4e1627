//! Site-wide alerts derived from the schedule.

use cn_core::translate::Translate;
use cn_time::Date;
use serde::Serialize;

use crate::facility::FacilityId;
use crate::rule::RuleKind;
use crate::store::RuleStore;

/// Severity of a [`GlobalAlert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    /// Informational.
    Info,
    /// Worth planning around.
    Warning,
    /// Needs attention now.
    Urgent,
}

/// A banner shown across the whole dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalAlert {
    /// Stable identifier, used to dismiss the banner.
    pub id: &'static str,
    /// Display text.
    pub message: String,
    /// Severity.
    pub level: AlertLevel,
}

/// Alerts relevant on `today`.
///
/// Currently a single check: a warning when the library is closed tomorrow
/// by a date-specific rule.
pub fn global_alerts(store: &RuleStore, today: Date, t: &dyn Translate) -> Vec<GlobalAlert> {
    let mut alerts = Vec::new();
    let Some(tomorrow) = today.succ() else {
        return alerts;
    };

    let closure = store.facility(FacilityId::Library).rules.iter().find(|r| {
        r.is_closed && matches!(&r.kind, RuleKind::SpecificDate { dates } if dates.contains(&tomorrow))
    });
    if let Some(rule) = closure {
        let note = rule.note.as_deref().map(|n| t.note(n)).unwrap_or_default();
        alerts.push(GlobalAlert {
            id: "lib-closed-tmr",
            message: format!("明日 ({}) は図書館が休館日です: {note}", tomorrow.format_md()),
            level: AlertLevel::Warning,
        });
    }
    alerts
}
