//! Integration tests for `Date`, `TimeOfDay`, and `Interval`.

use cn_time::{Date, Interval, TimeOfDay};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn serde_uses_iso_text() {
    let d = date(2026, 3, 31);
    assert_eq!(serde_json::to_string(&d).unwrap(), "\"2026-03-31\"");
    let back: Date = serde_json::from_str("\"2026-03-31\"").unwrap();
    assert_eq!(back, d);
    assert!(serde_json::from_str::<Date>("\"2026-13-01\"").is_err());

    let iv = Interval::parse("11:30", "13:00").unwrap();
    assert_eq!(
        serde_json::to_string(&iv).unwrap(),
        r#"{"start":"11:30","end":"13:00"}"#
    );
}

#[test]
fn whole_month_iteration() {
    let feb = date(2026, 2, 14);
    let days: Vec<Date> = Date::range_inclusive(feb.start_of_month(), feb.end_of_month()).collect();
    assert_eq!(days.len(), 28);
    assert_eq!(days.first(), Some(&date(2026, 2, 1)));
    assert_eq!(days.last(), Some(&date(2026, 2, 28)));
}

proptest! {
    #[test]
    fn iso_text_roundtrips(serial in 1i32..=109_573) {
        let d = Date::MIN + (serial - 1);
        let text = d.to_string();
        prop_assert_eq!(Date::from_iso(&text).unwrap(), d);
    }

    #[test]
    fn weekday_advances_by_one(serial in 1i32..109_573) {
        let d = Date::MIN + (serial - 1);
        let next = d + 1;
        prop_assert_ne!(d.weekday(), next.weekday());
        prop_assert_eq!((d + 7).weekday(), d.weekday());
    }

    #[test]
    fn time_order_matches_padded_text(a in 0u8..24, b in 0u8..60, c in 0u8..24, e in 0u8..60) {
        let x = TimeOfDay::new(a, b).unwrap();
        let y = TimeOfDay::new(c, e).unwrap();
        prop_assert_eq!(x.cmp(&y), x.to_string().cmp(&y.to_string()));
    }
}
