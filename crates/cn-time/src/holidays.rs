//! National-holiday calendars.
//!
//! A [`HolidayCalendar`] answers three questions about a calendar day: is it
//! a national holiday, what is it called, and which holidays fall inside a
//! window. Answers depend only on the civil date, never on the time of day.
//!
//! [`Japan`] is backed by a fixed table. Movable holidays (Happy Monday
//! holidays, equinoxes, substitute holidays) are listed explicitly rather
//! than computed, so the table is the single source of truth.

use std::sync::OnceLock;

use serde::Serialize;

use crate::date::Date;

/// A named national holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Holiday {
    /// The calendar day.
    pub date: Date,
    /// Japanese name (e.g. `成人の日`).
    pub name: &'static str,
    /// English name (e.g. `Coming of Age Day`).
    pub name_en: &'static str,
}

/// A national-holiday calendar.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Japan"`).
    fn name(&self) -> &str;

    /// All holidays known to this calendar, sorted by date.
    fn holidays(&self) -> &[Holiday];

    /// Return the holiday falling on `date`, if any.
    fn holiday(&self, date: Date) -> Option<&Holiday> {
        let all = self.holidays();
        all.binary_search_by_key(&date, |h| h.date)
            .ok()
            .map(|i| &all[i])
    }

    /// Return `true` if `date` is a national holiday.
    fn is_holiday(&self, date: Date) -> bool {
        self.holiday(date).is_some()
    }

    /// Return the display name of the holiday on `date`, if any.
    fn name_of(&self, date: Date) -> Option<&'static str> {
        self.holiday(date).map(|h| h.name)
    }

    /// Holidays in the inclusive window `[start, end]`, in date order.
    fn between(&self, start: Date, end: Date) -> &[Holiday] {
        let all = self.holidays();
        let lo = all.partition_point(|h| h.date < start);
        let hi = all.partition_point(|h| h.date <= end).max(lo);
        &all[lo..hi]
    }
}

/// A calendar without any holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn name(&self) -> &str {
        "None"
    }

    fn holidays(&self) -> &[Holiday] {
        &[]
    }
}

/// A calendar whose holidays are supplied by the caller.
#[derive(Debug, Clone)]
pub struct HolidayTable {
    name: String,
    holidays: Vec<Holiday>,
}

impl HolidayTable {
    /// Create a table; holidays are sorted by date and duplicates on the same
    /// day keep the first entry.
    pub fn new(name: impl Into<String>, mut holidays: Vec<Holiday>) -> Self {
        holidays.sort_by_key(|h| h.date);
        holidays.dedup_by_key(|h| h.date);
        Self {
            name: name.into(),
            holidays,
        }
    }
}

impl HolidayCalendar for HolidayTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }
}

/// Japanese national holidays, 2024–2027.
///
/// Includes substitute holidays (振替休日) that follow a holiday falling on a
/// Sunday, and citizens' holidays (国民の休日) sandwiched between two
/// holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct Japan;

impl Japan {
    /// First and last day covered by the table.
    pub fn coverage() -> (Date, Date) {
        let all = japan_table();
        match (all.first(), all.last()) {
            (Some(first), Some(last)) => (first.date.start_of_month(), last.date.end_of_month()),
            _ => (Date::MIN, Date::MIN),
        }
    }
}

impl HolidayCalendar for Japan {
    fn name(&self) -> &str {
        "Japan"
    }

    fn holidays(&self) -> &[Holiday] {
        japan_table()
    }
}

const NEW_YEAR: (&str, &str) = ("元日", "New Year's Day");
const COMING_OF_AGE: (&str, &str) = ("成人の日", "Coming of Age Day");
const FOUNDATION: (&str, &str) = ("建国記念の日", "National Foundation Day");
const EMPEROR: (&str, &str) = ("天皇誕生日", "Emperor's Birthday");
const VERNAL: (&str, &str) = ("春分の日", "Vernal Equinox Day");
const SHOWA: (&str, &str) = ("昭和の日", "Showa Day");
const CONSTITUTION: (&str, &str) = ("憲法記念日", "Constitution Memorial Day");
const GREENERY: (&str, &str) = ("みどりの日", "Greenery Day");
const CHILDREN: (&str, &str) = ("こどもの日", "Children's Day");
const MARINE: (&str, &str) = ("海の日", "Marine Day");
const MOUNTAIN: (&str, &str) = ("山の日", "Mountain Day");
const AGED: (&str, &str) = ("敬老の日", "Respect for the Aged Day");
const AUTUMNAL: (&str, &str) = ("秋分の日", "Autumnal Equinox Day");
const SPORTS: (&str, &str) = ("スポーツの日", "Sports Day");
const CULTURE: (&str, &str) = ("文化の日", "Culture Day");
const LABOR: (&str, &str) = ("勤労感謝の日", "Labor Thanksgiving Day");
const SUBSTITUTE: (&str, &str) = ("振替休日", "Holiday in lieu");
const CITIZENS: (&str, &str) = ("国民の休日", "Citizen's Holiday");

type Row = (u16, u8, u8, (&'static str, &'static str));

#[rustfmt::skip]
const JAPAN_ROWS: &[Row] = &[
    // 2024
    (2024, 1, 1, NEW_YEAR), (2024, 1, 8, COMING_OF_AGE), (2024, 2, 11, FOUNDATION),
    (2024, 2, 12, SUBSTITUTE), (2024, 2, 23, EMPEROR), (2024, 3, 20, VERNAL),
    (2024, 4, 29, SHOWA), (2024, 5, 3, CONSTITUTION), (2024, 5, 4, GREENERY),
    (2024, 5, 5, CHILDREN), (2024, 5, 6, SUBSTITUTE), (2024, 7, 15, MARINE),
    (2024, 8, 11, MOUNTAIN), (2024, 8, 12, SUBSTITUTE), (2024, 9, 16, AGED),
    (2024, 9, 22, AUTUMNAL), (2024, 9, 23, SUBSTITUTE), (2024, 10, 14, SPORTS),
    (2024, 11, 3, CULTURE), (2024, 11, 4, SUBSTITUTE), (2024, 11, 23, LABOR),
    // 2025
    (2025, 1, 1, NEW_YEAR), (2025, 1, 13, COMING_OF_AGE), (2025, 2, 11, FOUNDATION),
    (2025, 2, 23, EMPEROR), (2025, 2, 24, SUBSTITUTE), (2025, 3, 20, VERNAL),
    (2025, 4, 29, SHOWA), (2025, 5, 3, CONSTITUTION), (2025, 5, 4, GREENERY),
    (2025, 5, 5, CHILDREN), (2025, 5, 6, SUBSTITUTE), (2025, 7, 21, MARINE),
    (2025, 8, 11, MOUNTAIN), (2025, 9, 15, AGED), (2025, 9, 23, AUTUMNAL),
    (2025, 10, 13, SPORTS), (2025, 11, 3, CULTURE), (2025, 11, 23, LABOR),
    (2025, 11, 24, SUBSTITUTE),
    // 2026
    (2026, 1, 1, NEW_YEAR), (2026, 1, 12, COMING_OF_AGE), (2026, 2, 11, FOUNDATION),
    (2026, 2, 23, EMPEROR), (2026, 3, 20, VERNAL), (2026, 4, 29, SHOWA),
    (2026, 5, 3, CONSTITUTION), (2026, 5, 4, GREENERY), (2026, 5, 5, CHILDREN),
    (2026, 5, 6, SUBSTITUTE), (2026, 7, 20, MARINE), (2026, 8, 11, MOUNTAIN),
    (2026, 9, 21, AGED), (2026, 9, 22, CITIZENS), (2026, 9, 23, AUTUMNAL),
    (2026, 10, 12, SPORTS), (2026, 11, 3, CULTURE), (2026, 11, 23, LABOR),
    // 2027
    (2027, 1, 1, NEW_YEAR), (2027, 1, 11, COMING_OF_AGE), (2027, 2, 11, FOUNDATION),
    (2027, 2, 23, EMPEROR), (2027, 3, 21, VERNAL), (2027, 3, 22, SUBSTITUTE),
    (2027, 4, 29, SHOWA), (2027, 5, 3, CONSTITUTION), (2027, 5, 4, GREENERY),
    (2027, 5, 5, CHILDREN), (2027, 7, 19, MARINE), (2027, 8, 11, MOUNTAIN),
    (2027, 9, 20, AGED), (2027, 9, 23, AUTUMNAL), (2027, 10, 11, SPORTS),
    (2027, 11, 3, CULTURE), (2027, 11, 23, LABOR),
];

fn japan_table() -> &'static [Holiday] {
    static TABLE: OnceLock<Vec<Holiday>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table: Vec<Holiday> = JAPAN_ROWS
            .iter()
            .filter_map(|&(y, m, d, (name, name_en))| {
                Date::from_ymd(y, m, d).ok().map(|date| Holiday {
                    date,
                    name,
                    name_en,
                })
            })
            .collect();
        table.sort_by_key(|h| h.date);
        table
    })
}
