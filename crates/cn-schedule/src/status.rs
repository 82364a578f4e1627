//! The Status Calculator.
//!
//! Turns a facility's schedule for one day into the live state shown on a
//! dashboard card: open, on break, or closed, with the next transition and
//! the day's note as an informational alert.
//!
//! Checks run in a fixed order:
//!
//! 1. maintenance mode closes everything;
//! 2. a closed exception for the day;
//! 3. no matching rule, or a rule marked closed;
//! 4. a day other than today shows that day's hours as a preview;
//! 5. today is compared against each interval, which are half-open
//!    `[start, end)`.
//!
//! An `open` exception is deliberately not consulted here; it only affects
//! the calendar projection.

use cn_core::translate::Translate;
use cn_time::{format_intervals, Date, HolidayCalendar, Interval, LocalDateTime};
use serde::Serialize;

use crate::facility::{ExceptionStatus, FacilityData};
use crate::matcher::{match_rule, MatchedRule};

/// Live state of a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityStatus {
    /// Inside an opening interval.
    Open,
    /// Outside every opening interval, or closed all day.
    Closed,
    /// Between two opening intervals of the same day.
    Break,
    /// Shortly before closing.
    // TODO: produce this once a closing threshold (minutes before `end`) is
    // agreed with the dashboard; no path sets it yet.
    ClosingSoon,
}

/// The result of a status computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResult {
    /// Live state.
    pub status: FacilityStatus,
    /// Headline text (a status label, a closure reason, or preview hours).
    pub status_text: String,
    /// Text announcing the next transition; empty when there is none.
    pub next_change_text: String,
    /// The day's note, shown as a banner regardless of status.
    pub alert: Option<String>,
    /// `true` only when currently inside an opening interval.
    pub is_open: bool,
    /// The current interval when open, or the first interval of a previewed
    /// day.
    pub hours: Option<Interval>,
}

impl StatusResult {
    fn closed(status_text: String, next_change_text: String, alert: Option<String>) -> Self {
        Self {
            status: FacilityStatus::Closed,
            status_text,
            next_change_text,
            alert,
            is_open: false,
            hours: None,
        }
    }

    /// The fixed result reported while maintenance mode is on.
    pub fn maintenance() -> Self {
        Self::closed(
            "Maintenance".to_string(),
            "Under maintenance".to_string(),
            Some("System Maintenance".to_string()),
        )
    }
}

/// Compute the status of `data` on `date` as seen at `now`.
///
/// `now` must already be expressed in the campus time zone. When `date` is
/// not `now.date` the result is a preview of that day's hours.
pub fn compute_status(
    data: &FacilityData,
    date: Date,
    now: LocalDateTime,
    holidays: &dyn HolidayCalendar,
    t: &dyn Translate,
    maintenance_mode: bool,
) -> StatusResult {
    if maintenance_mode {
        return StatusResult::maintenance();
    }

    if let Some(exception) = data.exception(date) {
        if exception.status == ExceptionStatus::Closed {
            let reason = exception.reason.as_deref().map(|r| t.note(r));
            return StatusResult::closed(
                reason
                    .clone()
                    .unwrap_or_else(|| t.translate("status.closed")),
                "Exceptional Closure".to_string(),
                reason,
            );
        }
    }

    status_for_rule(match_rule(data, date, holidays), date, now, t)
}

/// Status derived from an already matched rule (steps 3–5).
pub fn status_for_rule(
    matched: Option<MatchedRule<'_>>,
    date: Date,
    now: LocalDateTime,
    t: &dyn Translate,
) -> StatusResult {
    let matched = match matched {
        Some(m) if !m.is_closed() => m,
        other => {
            let note = other.and_then(|m| m.note).map(|n| t.note(n));
            return StatusResult::closed(
                note.clone()
                    .unwrap_or_else(|| t.translate("status.closed")),
                String::new(),
                note,
            );
        }
    };

    let hours = &matched.rule.hours;
    let alert = matched.note.map(|n| t.note(n));

    if date != now.date {
        let text = format_intervals(hours);
        return StatusResult {
            status_text: if text.is_empty() {
                t.translate("status.closed")
            } else {
                text
            },
            hours: hours.first().copied(),
            ..StatusResult::closed(String::new(), String::new(), alert)
        };
    }

    let at = now.time;
    if let Some(current) = hours.iter().find(|h| h.contains(at)) {
        return StatusResult {
            status: FacilityStatus::Open,
            status_text: t.translate("status.open"),
            next_change_text: format!("{} {}", t.translate("status.closes_at"), current.end.unpadded()),
            alert,
            is_open: true,
            hours: Some(*current),
        };
    }

    let opens_at = |start| format!("{} {start}", t.translate("status.opens_at"));

    if let Some(next) = hours
        .windows(2)
        .find(|pair| pair[0].end <= at && at < pair[1].start)
        .map(|pair| pair[1])
    {
        return StatusResult {
            status: FacilityStatus::Break,
            status_text: t.translate("status.break"),
            ..StatusResult::closed(String::new(), opens_at(next.start), alert)
        };
    }

    match hours.iter().find(|h| at < h.start) {
        Some(next) => StatusResult::closed(t.translate("status.closed"), opens_at(next.start), alert),
        None => StatusResult::closed(t.translate("status.closed"), String::new(), alert),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::{Category, Exception};
    use crate::rule::ScheduleRule;
    use cn_core::translate::{Catalog, Language};
    use cn_time::{NoHolidays, TimeOfDay};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn at(d: Date, hh: u8, mm: u8) -> LocalDateTime {
        LocalDateTime::new(d, TimeOfDay::new(hh, mm).unwrap())
    }

    fn split_day() -> FacilityData {
        let hours = vec![
            Interval::parse("09:00", "12:00").unwrap(),
            Interval::parse("13:00", "17:00").unwrap(),
        ];
        FacilityData::new("入試課", "Admissions", Category::Admin)
            .with_rules(vec![ScheduleRule::weekday(hours, Some("昼休み 12:00-13:00"))])
    }

    fn status(data: &FacilityData, now: LocalDateTime) -> StatusResult {
        let t = Catalog::new(Language::En);
        compute_status(data, now.date, now, &NoHolidays, &t, false)
    }

    #[test]
    fn boundaries_are_half_open() {
        let data = split_day();
        let monday = date(2026, 1, 19);

        let s = status(&data, at(monday, 9, 0));
        assert_eq!(s.status, FacilityStatus::Open);
        assert_eq!(s.next_change_text, "Closes at 12:00");
        assert_eq!(s.hours, Some(Interval::parse("09:00", "12:00").unwrap()));

        let s = status(&data, at(monday, 12, 0));
        assert_eq!(s.status, FacilityStatus::Break);
        assert!(!s.is_open);
        assert_eq!(s.next_change_text, "Opens at 13:00");
    }

    #[test]
    fn break_announces_next_opening() {
        let s = status(&split_day(), at(date(2026, 1, 19), 12, 30));
        assert_eq!(s.status, FacilityStatus::Break);
        assert_eq!(s.status_text, "On Break");
        assert_eq!(s.next_change_text, "Opens at 13:00");
        assert_eq!(s.alert.as_deref(), Some("昼休み 12:00-13:00"));
    }

    #[test]
    fn before_and_after_hours() {
        let monday = date(2026, 1, 19);
        let s = status(&split_day(), at(monday, 8, 0));
        assert_eq!(s.status, FacilityStatus::Closed);
        assert_eq!(s.next_change_text, "Opens at 09:00");

        let s = status(&split_day(), at(monday, 17, 0));
        assert_eq!(s.status, FacilityStatus::Closed);
        assert_eq!(s.next_change_text, "");
    }

    #[test]
    fn closes_at_uses_unpadded_hour() {
        let data = FacilityData::new("x", "x", Category::Facility).with_rules(vec![
            ScheduleRule::weekday(vec![Interval::parse("07:00", "09:30").unwrap()], None),
        ]);
        let s = status(&data, at(date(2026, 1, 19), 8, 0));
        assert_eq!(s.next_change_text, "Closes at 9:30");
    }

    #[test]
    fn other_days_are_previews() {
        let data = split_day();
        let t = Catalog::new(Language::En);
        let now = at(date(2026, 1, 19), 10, 0);
        let s = compute_status(&data, date(2026, 1, 20), now, &NoHolidays, &t, false);
        assert_eq!(s.status, FacilityStatus::Closed);
        assert!(!s.is_open);
        assert_eq!(s.status_text, "09:00-12:00, 13:00-17:00");
        assert_eq!(s.next_change_text, "");
        assert_eq!(s.hours, Some(Interval::parse("09:00", "12:00").unwrap()));
    }

    #[test]
    fn unmatched_day_is_closed_without_note() {
        // 2026-01-24 is a Saturday and the facility has no Saturday rule.
        let s = status(&split_day(), at(date(2026, 1, 24), 10, 0));
        assert_eq!(s.status_text, "Closed");
        assert_eq!(s.alert, None);
        assert_eq!(s.next_change_text, "");
    }

    #[test]
    fn closed_rule_shows_translated_note() {
        let d = date(2026, 2, 25);
        let data = split_day().with_rules(vec![ScheduleRule::closed_date(d, Some("note.entrance_exam"))]);
        let s = status(&data, at(d, 10, 0));
        assert_eq!(s.status_text, "Entrance Examination");
        assert_eq!(s.alert.as_deref(), Some("Entrance Examination"));
    }

    #[test]
    fn closed_exception_overrides_rules() {
        let d = date(2026, 1, 19);
        let data = split_day().with_exception(d, Exception::closed(Some("停電")));
        let s = status(&data, at(d, 10, 0));
        assert!(!s.is_open);
        assert_eq!(s.status_text, "停電");
        assert_eq!(s.next_change_text, "Exceptional Closure");

        let data = split_day().with_exception(d, Exception::closed(None));
        assert_eq!(status(&data, at(d, 10, 0)).status_text, "Closed");
    }

    #[test]
    fn open_exception_is_ignored() {
        let d = date(2026, 1, 24);
        let hours = vec![Interval::parse("10:00", "12:00").unwrap()];
        let data = split_day().with_exception(d, Exception::open(hours, None));
        let s = status(&data, at(d, 11, 0));
        assert_eq!(s.status, FacilityStatus::Closed);
    }

    #[test]
    fn maintenance_wins() {
        let t = Catalog::default();
        let now = at(date(2026, 1, 19), 10, 0);
        let s = compute_status(&split_day(), now.date, now, &NoHolidays, &t, true);
        assert_eq!(s, StatusResult::maintenance());
        assert_eq!(s.status_text, "Maintenance");
    }
}
