//! Integration tests for the rule-matching cascade, against both synthetic
//! facilities and the built-in schedule data.

use cn_schedule::{
    match_rule, Category, FacilityData, FacilityId, MatchTier, RuleKind, RuleStore, ScheduleRule,
};
use cn_time::{Date, HolidayCalendar, Interval, Japan, NoHolidays};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn builtin(id: FacilityId) -> &'static FacilityData {
    RuleStore::builtin().facility(id)
}

// ─── Built-in data ────────────────────────────────────────────────────────────

#[test]
fn restricted_entry_closes_buildings() {
    for id in [FacilityId::CircleBldg, FacilityId::LectureBldg, FacilityId::AgoraGlobal] {
        for d in [date(2026, 1, 16), date(2026, 1, 17), date(2026, 2, 24), date(2026, 2, 25), date(2026, 3, 12)] {
            let m = match_rule(builtin(id), d, &Japan).unwrap();
            assert!(m.is_closed(), "{id} on {d}");
        }
    }

    // The circle building is otherwise open every day, weekends included.
    let m = match_rule(builtin(FacilityId::CircleBldg), date(2026, 1, 25), &Japan).unwrap();
    assert!(!m.is_closed());
    assert_eq!(m.rule.hours, vec![Interval::parse("07:00", "20:00").unwrap()]);
}

#[test]
fn lecture_building_restrictions_beat_its_own_dates() {
    // lecture_bldg lists 2026-01-16 closed without a note, but the derived
    // restricted-entry rule comes first and carries the reason.
    let m = match_rule(builtin(FacilityId::LectureBldg), date(2026, 1, 16), &Japan).unwrap();
    assert_eq!(m.tier, MatchTier::SpecificDate);
    assert_eq!(m.note, Some("note.class_cancellation_restricted"));
}

#[test]
fn library_january() {
    let lib = builtin(FacilityId::Library);

    let m = match_rule(lib, date(2026, 1, 2), &Japan).unwrap();
    assert_eq!(m.tier, MatchTier::Range);
    assert_eq!(m.note, Some("note.new_year_holiday"));

    // 2026-01-01 is both a holiday and inside the New Year range.
    let m = match_rule(lib, date(2026, 1, 1), &Japan).unwrap();
    assert_eq!(m.tier, MatchTier::NationalHoliday);
    assert_eq!(m.note, Some("元日"));

    let m = match_rule(lib, date(2026, 1, 16), &Japan).unwrap();
    assert_eq!(m.rule.hours, vec![Interval::parse("09:00", "17:00").unwrap()]);

    let m = match_rule(lib, date(2026, 1, 24), &Japan).unwrap();
    assert_eq!(m.rule.kind, RuleKind::Saturday);
    assert_eq!(m.rule.hours, vec![Interval::parse("13:00", "20:00").unwrap()]);
}

#[test]
fn cafeteria_wednesdays_use_weekday_hours() {
    let cafe = builtin(FacilityId::Cafeteria1f);
    // 2026-04-01 is a Wednesday outside every dated rule.
    let m = match_rule(cafe, date(2026, 4, 1), &Japan).unwrap();
    assert_eq!(m.rule.kind, RuleKind::Weekday);
    assert_eq!(m.rule.hours, vec![Interval::parse("11:30", "14:30").unwrap()]);
}

#[test]
fn sabor_weekdays_are_closed() {
    let m = match_rule(builtin(FacilityId::Sabor2f), date(2026, 4, 6), &Japan).unwrap();
    assert!(m.is_weekday_fallback());
    assert!(m.is_closed());
    assert_eq!(m.note, Some("closed"));
}

#[test]
fn admin_offices_close_on_holidays() {
    for id in [
        FacilityId::AcademicAffairs,
        FacilityId::Admission,
        FacilityId::Accounting,
        FacilityId::CertMachine,
    ] {
        let m = match_rule(builtin(id), date(2026, 3, 20), &Japan).unwrap();
        assert_eq!(m.tier, MatchTier::NationalHoliday, "{id}");
        assert!(m.is_closed());
        assert_eq!(m.note, Some("春分の日"));
    }
}

#[test]
fn every_day_resolves_for_offices() {
    // Offices declare weekday, Saturday, and Sunday coverage, so every day
    // in the data's season produces a rule.
    for d in Date::range_inclusive(date(2026, 1, 1), date(2026, 3, 31)) {
        assert!(match_rule(builtin(FacilityId::Accounting), d, &Japan).is_some(), "{d}");
    }
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    /// A specific-date rule outranks the holiday rule on every holiday.
    #[test]
    fn specific_date_beats_holiday(index in 0usize..1000) {
        let all = Japan.holidays();
        let holiday = all[index % all.len()];
        let data = FacilityData::new("x", "x", Category::Facility).with_rules(vec![
            ScheduleRule::national_holiday(true, None),
            ScheduleRule::on_date(holiday.date, vec![Interval::parse("10:00", "15:00").unwrap()], Some("特別開館")),
        ]);
        let m = match_rule(&data, holiday.date, &Japan).unwrap();
        prop_assert_eq!(m.tier, MatchTier::SpecificDate);
        prop_assert!(!m.is_closed());
        prop_assert_eq!(m.note, Some("特別開館"));
    }

    /// Without holidays, a weekday-only facility resolves Monday–Friday and
    /// never on weekends.
    #[test]
    fn weekday_fallback_follows_the_calendar(offset in 0i32..3000) {
        let d = date(2024, 1, 1) + offset;
        let data = FacilityData::new("x", "x", Category::Admin)
            .with_rules(vec![ScheduleRule::weekday(vec![Interval::parse("09:00", "17:00").unwrap()], None)]);
        let m = match_rule(&data, d, &NoHolidays);
        prop_assert_eq!(m.is_some(), d.weekday().is_weekday());
    }
}
