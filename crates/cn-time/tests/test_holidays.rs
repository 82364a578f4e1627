//! Integration tests for the national-holiday calendar.

use cn_time::{Date, HolidayCalendar, Japan, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Japanese holidays ────────────────────────────────────────────────────────

#[test]
fn winter_term_holidays_2026() {
    let cal = Japan;
    let expected = [
        (date(2026, 1, 1), "元日"),
        (date(2026, 1, 12), "成人の日"),
        (date(2026, 2, 11), "建国記念の日"),
        (date(2026, 2, 23), "天皇誕生日"),
        (date(2026, 3, 20), "春分の日"),
    ];
    for (d, name) in expected {
        assert!(cal.is_holiday(d), "{d} should be a holiday");
        assert_eq!(cal.name_of(d), Some(name), "{d}");
    }
}

#[test]
fn golden_week_2026_includes_substitute() {
    let cal = Japan;
    let days: Vec<(Date, &str)> = cal
        .between(date(2026, 4, 29), date(2026, 5, 6))
        .iter()
        .map(|h| (h.date, h.name))
        .collect();
    assert_eq!(
        days,
        vec![
            (date(2026, 4, 29), "昭和の日"),
            (date(2026, 5, 3), "憲法記念日"),
            (date(2026, 5, 4), "みどりの日"),
            (date(2026, 5, 5), "こどもの日"),
            (date(2026, 5, 6), "振替休日"),
        ]
    );
}

#[test]
fn silver_week_2026_citizens_holiday() {
    let cal = Japan;
    assert_eq!(cal.name_of(date(2026, 9, 21)), Some("敬老の日"));
    assert_eq!(cal.name_of(date(2026, 9, 22)), Some("国民の休日"));
    assert_eq!(cal.name_of(date(2026, 9, 23)), Some("秋分の日"));
}

#[test]
fn happy_monday_holidays_fall_on_mondays() {
    let cal = Japan;
    let mondays = ["成人の日", "海の日", "敬老の日", "スポーツの日"];
    for h in cal.holidays().iter().filter(|h| mondays.contains(&h.name)) {
        assert_eq!(h.date.weekday(), Weekday::Monday, "{} {}", h.date, h.name);
    }
}

#[test]
fn table_is_sorted_without_duplicates() {
    let all = Japan.holidays();
    for pair in all.windows(2) {
        assert!(pair[0].date < pair[1].date, "{} !< {}", pair[0].date, pair[1].date);
    }
}

#[test]
fn weekends_are_not_holidays_by_themselves() {
    // 2026-01-17 is a Saturday with no holiday.
    assert_eq!(date(2026, 1, 17).weekday(), Weekday::Saturday);
    assert!(!Japan.is_holiday(date(2026, 1, 17)));
}
