//! The Rule Matcher.
//!
//! Selects the single rule that governs a facility on a calendar day. Tiers
//! are tried in a fixed order and each tier scans the rule list in
//! declaration order, so the first rule satisfying the highest tier wins:
//!
//! 1. `specific_date` rules listing the day;
//! 2. the first `national_holiday` rule, if the day is a holiday;
//! 3. `range` rules covering the day;
//! 4. the day-of-week fallback (`sunday`, `saturday`, or `weekday`).
//!
//! Per-date exceptions sit above all four tiers and are handled by the
//! callers, which see them before asking for a rule.

use std::fmt;

use cn_time::{Date, HolidayCalendar, Weekday};

use crate::facility::FacilityData;
use crate::rule::{RuleKind, ScheduleRule};

/// Which tier of the cascade produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchTier {
    /// A `specific_date` rule listing the day.
    SpecificDate,
    /// A `national_holiday` rule on a holiday.
    NationalHoliday,
    /// A `range` rule covering the day.
    Range,
    /// A `sunday`, `saturday`, or `weekday` fallback.
    DayOfWeek,
}

impl MatchTier {
    /// Short lowercase name used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchTier::SpecificDate => "specific_date",
            MatchTier::NationalHoliday => "national_holiday",
            MatchTier::Range => "range",
            MatchTier::DayOfWeek => "day_of_week",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule selected for a particular day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedRule<'a> {
    /// The winning rule as stored.
    pub rule: &'a ScheduleRule,
    /// The tier that selected it.
    pub tier: MatchTier,
    /// The note to display. For a holiday rule carrying the generic
    /// placeholder this is the holiday's own name.
    pub note: Option<&'a str>,
}

impl<'a> MatchedRule<'a> {
    fn new(rule: &'a ScheduleRule, tier: MatchTier) -> Self {
        Self {
            rule,
            tier,
            note: rule.note.as_deref(),
        }
    }

    /// Return `true` if the day is closed under this rule.
    pub fn is_closed(&self) -> bool {
        self.rule.is_closed
    }

    /// Return `true` if the rule is the generic Monday–Friday fallback.
    pub fn is_weekday_fallback(&self) -> bool {
        self.rule.kind == RuleKind::Weekday
    }
}

/// Select the rule governing `data` on `date`.
///
/// Returns `None` when no tier matches; callers treat that as closed with no
/// note.
pub fn match_rule<'a>(
    data: &'a FacilityData,
    date: Date,
    holidays: &dyn HolidayCalendar,
) -> Option<MatchedRule<'a>> {
    let rules = &data.rules;

    if let Some(rule) = rules
        .iter()
        .find(|r| matches!(&r.kind, RuleKind::SpecificDate { dates } if dates.contains(&date)))
    {
        return Some(MatchedRule::new(rule, MatchTier::SpecificDate));
    }

    if let Some(holiday) = holidays.holiday(date) {
        if let Some(rule) = rules
            .iter()
            .find(|r| matches!(r.kind, RuleKind::NationalHoliday { .. }))
        {
            let mut matched = MatchedRule::new(rule, MatchTier::NationalHoliday);
            if let RuleKind::NationalHoliday { generic_note: true } = rule.kind {
                matched.note = Some(holiday.name);
            }
            return Some(matched);
        }
    }

    if let Some(rule) = rules
        .iter()
        .find(|r| matches!(r.kind, RuleKind::Range { start, end } if date.is_within(start, end)))
    {
        return Some(MatchedRule::new(rule, MatchTier::Range));
    }

    let wanted = match date.weekday() {
        Weekday::Sunday => RuleKind::Sunday,
        Weekday::Saturday => RuleKind::Saturday,
        _ => RuleKind::Weekday,
    };
    rules
        .iter()
        .find(|r| r.kind == wanted)
        .map(|rule| MatchedRule::new(rule, MatchTier::DayOfWeek))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::Category;
    use cn_time::{Holiday, HolidayTable, Interval, NoHolidays};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn hours(s: &str, e: &str) -> Vec<Interval> {
        vec![Interval::parse(s, e).unwrap()]
    }

    fn calendar() -> HolidayTable {
        HolidayTable::new(
            "test",
            vec![Holiday {
                date: date(2026, 1, 12),
                name: "成人の日",
                name_en: "Coming of Age Day",
            }],
        )
    }

    fn facility(rules: Vec<ScheduleRule>) -> FacilityData {
        FacilityData::new("x", "x", Category::Facility).with_rules(rules)
    }

    #[test]
    fn first_rule_in_a_tier_wins() {
        let data = facility(vec![
            ScheduleRule::on_date(date(2026, 1, 5), hours("09:00", "12:00"), Some("first")),
            ScheduleRule::on_date(date(2026, 1, 5), hours("10:00", "11:00"), Some("second")),
        ]);
        let m = match_rule(&data, date(2026, 1, 5), &NoHolidays).unwrap();
        assert_eq!(m.tier, MatchTier::SpecificDate);
        assert_eq!(m.note, Some("first"));
    }

    #[test]
    fn holiday_beats_range_and_weekday() {
        let data = facility(vec![
            ScheduleRule::range(date(2026, 1, 5), date(2026, 1, 30), hours("11:00", "14:30"), None),
            ScheduleRule::weekday(hours("09:00", "20:00"), None),
            ScheduleRule::national_holiday(true, None),
        ]);
        let m = match_rule(&data, date(2026, 1, 12), &calendar()).unwrap();
        assert_eq!(m.tier, MatchTier::NationalHoliday);
        assert!(m.is_closed());
        assert_eq!(m.note, Some("成人の日"));

        // The same day without a holiday calendar falls to the range.
        let m = match_rule(&data, date(2026, 1, 12), &NoHolidays).unwrap();
        assert_eq!(m.tier, MatchTier::Range);
    }

    #[test]
    fn custom_holiday_note_is_kept() {
        let data = facility(vec![ScheduleRule::national_holiday(true, Some("祝日休館"))]);
        let m = match_rule(&data, date(2026, 1, 12), &calendar()).unwrap();
        assert_eq!(m.note, Some("祝日休館"));
    }

    #[test]
    fn holiday_without_rule_falls_through() {
        let data = facility(vec![ScheduleRule::weekday(hours("09:00", "17:00"), None)]);
        let m = match_rule(&data, date(2026, 1, 12), &calendar()).unwrap();
        assert_eq!(m.tier, MatchTier::DayOfWeek);
        assert!(m.is_weekday_fallback());
    }

    #[test]
    fn wednesday_rules_are_never_selected() {
        let data = facility(vec![
            ScheduleRule::sub_weekday(RuleKind::Wednesday, hours("11:30", "13:30"), false),
            ScheduleRule::weekday(hours("11:30", "14:30"), None),
        ]);
        // 2026-01-07 is a Wednesday.
        let m = match_rule(&data, date(2026, 1, 7), &NoHolidays).unwrap();
        assert_eq!(m.rule.kind, RuleKind::Weekday);
    }

    #[test]
    fn weekend_without_rule_is_unmatched() {
        let data = facility(vec![ScheduleRule::weekday(hours("09:00", "17:00"), None)]);
        // 2026-01-10 is a Saturday.
        assert!(match_rule(&data, date(2026, 1, 10), &NoHolidays).is_none());
        assert!(match_rule(&data, date(2026, 1, 11), &NoHolidays).is_none());
    }
}
