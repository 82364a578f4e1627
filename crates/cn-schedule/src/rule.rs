//! Schedule rules.
//!
//! A facility's schedule is an ordered list of [`ScheduleRule`]s. The
//! [`RuleKind`] decides *when* a rule applies; the remaining fields say what
//! the day looks like once it does.

use cn_time::{Date, Interval};
use serde::Serialize;

/// Note stored on national-holiday rules that should display the actual
/// holiday name instead.
pub const HOLIDAY_PLACEHOLDER: &str = "祝日";

/// When a rule applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleKind {
    /// Monday–Friday fallback.
    Weekday,
    /// Wednesday hours.
    ///
    /// Never selected by the matcher: the day-of-week tier only looks at
    /// `sunday`, `saturday`, and `weekday`. Kept so existing data still loads.
    Wednesday,
    /// Saturday fallback.
    Saturday,
    /// Sunday fallback.
    Sunday,
    /// Applies on each listed calendar day.
    SpecificDate {
        /// The days this rule covers.
        dates: Vec<Date>,
    },
    /// Applies on every day of an inclusive date range.
    Range {
        /// First day (inclusive).
        start: Date,
        /// Last day (inclusive).
        end: Date,
    },
    /// Applies on any national holiday.
    NationalHoliday {
        /// The stored note is the generic placeholder and is replaced by the
        /// holiday's name at match time.
        generic_note: bool,
    },
}

/// One row of a facility's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRule {
    /// When the rule applies.
    #[serde(flatten)]
    pub kind: RuleKind,
    /// Opening intervals, ascending and non-overlapping. Empty means no
    /// defined hours.
    pub hours: Vec<Interval>,
    /// Reason or label; may be a translation key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Forces the day closed regardless of `hours`.
    pub is_closed: bool,
}

impl ScheduleRule {
    fn new(kind: RuleKind, hours: Vec<Interval>, note: Option<&str>) -> Self {
        Self {
            kind,
            hours,
            note: note.map(str::to_string),
            is_closed: false,
        }
    }

    /// Open with `hours` on a single day.
    pub fn on_date(date: Date, hours: Vec<Interval>, note: Option<&str>) -> Self {
        Self::new(RuleKind::SpecificDate { dates: vec![date] }, hours, note)
    }

    /// Open with `hours` on every listed day.
    pub fn on_dates(dates: Vec<Date>, hours: Vec<Interval>, note: Option<&str>) -> Self {
        Self::new(RuleKind::SpecificDate { dates }, hours, note)
    }

    /// Open with `hours` on every day of `[start, end]`.
    pub fn range(start: Date, end: Date, hours: Vec<Interval>, note: Option<&str>) -> Self {
        Self::new(RuleKind::Range { start, end }, hours, note)
    }

    /// Weekday fallback hours.
    pub fn weekday(hours: Vec<Interval>, note: Option<&str>) -> Self {
        Self::new(RuleKind::Weekday, hours, note)
    }

    /// Wednesday, Saturday, or Sunday hours.
    ///
    /// # Panics
    /// Panics if `kind` is not one of the three sub-weekday kinds.
    pub fn sub_weekday(kind: RuleKind, hours: Vec<Interval>, is_closed: bool) -> Self {
        assert!(
            matches!(
                kind,
                RuleKind::Wednesday | RuleKind::Saturday | RuleKind::Sunday
            ),
            "sub_weekday requires wednesday, saturday, or sunday, got {kind:?}"
        );
        Self {
            is_closed,
            ..Self::new(kind, hours, None)
        }
    }

    /// National-holiday rule. Without an explicit note the holiday's own name
    /// is shown.
    pub fn national_holiday(is_closed: bool, note: Option<&str>) -> Self {
        let note = note.unwrap_or(HOLIDAY_PLACEHOLDER);
        Self {
            is_closed,
            ..Self::new(
                RuleKind::NationalHoliday {
                    generic_note: note == HOLIDAY_PLACEHOLDER,
                },
                Vec::new(),
                Some(note),
            )
        }
    }

    /// Closed on a single day.
    pub fn closed_date(date: Date, note: Option<&str>) -> Self {
        Self::on_date(date, Vec::new(), note).closed()
    }

    /// Closed on every day of `[start, end]`.
    pub fn closed_range(start: Date, end: Date, note: Option<&str>) -> Self {
        Self::range(start, end, Vec::new(), note).closed()
    }

    /// Closed on Saturdays and Sundays.
    pub fn closed_weekends() -> [Self; 2] {
        [
            Self::sub_weekday(RuleKind::Saturday, Vec::new(), true),
            Self::sub_weekday(RuleKind::Sunday, Vec::new(), true),
        ]
    }

    /// The same rule, forced closed.
    pub fn closed(mut self) -> Self {
        self.is_closed = true;
        self
    }

    /// Return `true` if this rule can apply on `date` by its date
    /// predicate alone (specific dates and ranges only).
    pub fn covers(&self, date: Date) -> bool {
        match &self.kind {
            RuleKind::SpecificDate { dates } => dates.contains(&date),
            RuleKind::Range { start, end } => date.is_within(*start, *end),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn holiday_rule_placeholder_detection() {
        let generic = ScheduleRule::national_holiday(true, None);
        assert_eq!(generic.kind, RuleKind::NationalHoliday { generic_note: true });
        assert_eq!(generic.note.as_deref(), Some(HOLIDAY_PLACEHOLDER));

        // Spelling out the placeholder is the same as omitting it.
        let explicit = ScheduleRule::national_holiday(true, Some("祝日"));
        assert_eq!(explicit.kind, RuleKind::NationalHoliday { generic_note: true });

        // Anything else, even text mentioning holidays, is kept verbatim.
        let custom = ScheduleRule::national_holiday(true, Some("祝日休館"));
        assert_eq!(custom.kind, RuleKind::NationalHoliday { generic_note: false });
    }

    #[test]
    fn closed_shortcuts() {
        let r = ScheduleRule::closed_range(date(2026, 1, 1), date(2026, 1, 4), Some("年始休業"));
        assert!(r.is_closed);
        assert!(r.hours.is_empty());
        assert!(r.covers(date(2026, 1, 4)));
        assert!(!r.covers(date(2026, 1, 5)));

        let [sat, sun] = ScheduleRule::closed_weekends();
        assert_eq!((sat.kind, sat.is_closed), (RuleKind::Saturday, true));
        assert_eq!((sun.kind, sun.is_closed), (RuleKind::Sunday, true));
    }

    #[test]
    #[should_panic(expected = "sub_weekday requires")]
    fn sub_weekday_rejects_weekday() {
        ScheduleRule::sub_weekday(RuleKind::Weekday, Vec::new(), false);
    }

    #[test]
    fn serializes_with_type_tag() {
        let r = ScheduleRule::closed_date(date(2026, 2, 25), Some("note.entrance_exam"));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["type"], "specific_date");
        assert_eq!(json["dates"][0], "2026-02-25");
        assert_eq!(json["is_closed"], true);
    }
}
