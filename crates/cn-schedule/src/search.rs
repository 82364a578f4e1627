//! The Search/Filter Adapter.
//!
//! Two read-only scans over the Rule Store used by the search box:
//! [`search`] lists dated events whose text matches a query, and
//! [`filter_facilities`] narrows the dashboard to matching facilities.

use cn_core::translate::Translate;
use cn_time::{Date, HolidayCalendar};
use serde::Serialize;

use crate::facility::{Category, ExceptionStatus, FacilityId};
use crate::rule::{RuleKind, ScheduleRule};
use crate::store::RuleStore;

/// Whether a matched event closes the facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// The facility is closed that day.
    Closed,
    /// The facility keeps unusual hours that day.
    Irregular,
}

impl EventStatus {
    fn from_closed(is_closed: bool) -> Self {
        if is_closed {
            EventStatus::Closed
        } else {
            EventStatus::Irregular
        }
    }
}

/// One dated event matching a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Day of the event.
    pub date: Date,
    /// Facility the event belongs to.
    pub facility: FacilityId,
    /// Japanese facility name.
    pub facility_name: String,
    /// The matching note, reason, or holiday name (translated).
    pub event_text: String,
    /// Closed or irregular.
    pub status: EventStatus,
}

/// Facilities matched by the "shop" keywords.
const SHOPS: [FacilityId; 4] = [
    FacilityId::Cafeteria1f,
    FacilityId::Sabor2f,
    FacilityId::Store,
    FacilityId::CafeCastalia,
];

const SHOP_KEYWORDS: [&str; 3] = ["shop", "食", "売"];
const ADMIN_KEYWORDS: [&str; 2] = ["admin", "事務"];

/// List every dated event whose text contains `query`, sorted by date.
///
/// Matching is a case-insensitive substring test on the trimmed query
/// against exception reasons and the notes of `specific_date` and `range`
/// rules (ranges yield one result per day). Facilities with a
/// `national_holiday` rule also yield each holiday in `window` whose name,
/// or the rule's own note, matches. Duplicates across facilities are kept.
pub fn search(
    store: &RuleStore,
    query: &str,
    holidays: &dyn HolidayCalendar,
    window: (Date, Date),
    t: &dyn Translate,
) -> Vec<SearchResult> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let needle = trimmed.to_lowercase();
    let matches = |text: &str| !text.is_empty() && text.to_lowercase().contains(&needle);

    let mut results = Vec::new();
    for (id, data) in store.iter() {
        let mut push = |date, event_text: String, status| {
            results.push(SearchResult {
                date,
                facility: id,
                facility_name: data.name.clone(),
                event_text,
                status,
            })
        };

        for (&date, exception) in &data.exceptions {
            let reason = t.note(exception.reason.as_deref().unwrap_or_default());
            if matches(&reason) {
                let closed = exception.status == ExceptionStatus::Closed;
                push(date, reason, EventStatus::from_closed(closed));
            }
        }

        for rule in &data.rules {
            let note = t.note(rule.note.as_deref().unwrap_or_default());
            let status = EventStatus::from_closed(rule.is_closed);
            match &rule.kind {
                RuleKind::SpecificDate { dates } if matches(&note) => {
                    for &date in dates {
                        push(date, note.clone(), status);
                    }
                }
                RuleKind::Range { start, end } if matches(&note) => {
                    for date in Date::range_inclusive(*start, *end) {
                        push(date, note.clone(), status);
                    }
                }
                RuleKind::NationalHoliday { .. } => {
                    let note_matches = matches(&note);
                    for h in holidays.between(window.0, window.1) {
                        let name_matches =
                            h.name.contains(trimmed) || h.name_en.to_lowercase().contains(&needle);
                        if name_matches || note_matches {
                            push(h.date, h.name.to_string(), status);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    results.sort_by_key(|r| r.date);
    tracing::debug!(query = trimmed, results = results.len(), "event search");
    results
}

/// Facilities matching `query`, in declaration order.
///
/// Returns `None` for a blank query, meaning "no filter". A facility
/// matches when its Japanese or English name contains the query, when the
/// query contains a shop or admin keyword and the facility is in that
/// group, or when any rule note or exception reason contains the query.
pub fn filter_facilities(store: &RuleStore, query: &str) -> Option<Vec<FacilityId>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    let contains = |text: &str| text.to_lowercase().contains(&needle);
    let is_shop_query = SHOP_KEYWORDS.iter().any(|k| needle.contains(k));
    let is_admin_query = ADMIN_KEYWORDS.iter().any(|k| needle.contains(k));

    let ids = store
        .iter()
        .filter(|(id, data)| {
            let by_name = contains(&data.name) || contains(&data.name_en);
            let by_group = (is_shop_query && SHOPS.contains(id))
                || (is_admin_query
                    && (data.category == Category::Admin || *id == FacilityId::AdminBldg));
            let by_event = data
                .rules
                .iter()
                .filter_map(|r: &ScheduleRule| r.note.as_deref())
                .chain(data.exceptions.values().filter_map(|e| e.reason.as_deref()))
                .any(contains);
            by_name || by_group || by_event
        })
        .map(|(id, _)| id)
        .collect();
    Some(ids)
}
