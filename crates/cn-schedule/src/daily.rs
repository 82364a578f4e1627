//! The Daily Info Projector.
//!
//! Summarises a facility's nominal schedule for a whole day, independent of
//! the time of day, for calendar grids. Colour tags come from a small fixed
//! palette; a few facilities recolour days by the exact hours text so that
//! recurring patterns (standard, short, winter, exam hours) stand out.

use cn_core::translate::Translate;
use cn_time::{format_intervals, Date, HolidayCalendar};
use serde::Serialize;

use crate::facility::{ExceptionStatus, FacilityData, FacilityId};
use crate::matcher::{match_rule, MatchedRule};

/// Classification of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleType {
    /// The generic weekday fallback applies.
    Standard,
    /// Any other rule, or an open exception, applies.
    Irregular,
    /// Closed all day.
    Closed,
    /// On or after the facility's publication cutoff.
    Unpublished,
}

/// Calendar cell colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    /// Standard hours.
    Green,
    /// Irregular hours.
    Pink,
    /// Closed or unavailable.
    Gray,
    /// Facility-specific pattern.
    Orange,
    /// Facility-specific pattern.
    Blue,
    /// Facility-specific pattern.
    Purple,
}

/// Calendar-cell summary of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyInfo {
    /// Classification.
    pub schedule_type: ScheduleType,
    /// Hours (`09:00-12:40, 13:40-16:30`) or a label such as the closed text.
    pub hours_text: String,
    /// The day's note, translated.
    pub note: Option<String>,
    /// Cell colour.
    pub color: ColorTag,
}

impl DailyInfo {
    fn closed(t: &dyn Translate, note: Option<String>) -> Self {
        Self {
            schedule_type: ScheduleType::Closed,
            hours_text: t.translate("status.closed"),
            note,
            color: ColorTag::Gray,
        }
    }

    fn unpublished(t: &dyn Translate) -> Self {
        Self {
            schedule_type: ScheduleType::Unpublished,
            hours_text: t.translate("status.unpublished"),
            note: None,
            color: ColorTag::Gray,
        }
    }

    /// The summary reported for every day while maintenance mode is on.
    pub fn maintenance() -> Self {
        Self {
            schedule_type: ScheduleType::Closed,
            hours_text: "Maintenance".to_string(),
            note: Some("System Maintenance".to_string()),
            color: ColorTag::Gray,
        }
    }
}

/// One day of a monthly calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySchedule {
    /// The day.
    pub date: Date,
    /// Its summary.
    pub info: DailyInfo,
}

// ── Palettes ──────────────────────────────────────────────────────────────────

/// A facility's colour overrides, keyed by the exact rendered hours text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// `(hours text, colour)` pairs.
    pub overrides: &'static [(&'static str, ColorTag)],
    /// Colour for any other hours text.
    pub fallback: ColorTag,
}

impl Palette {
    /// Colour for `hours_text`.
    pub fn color(&self, hours_text: &str) -> ColorTag {
        self.overrides
            .iter()
            .find(|(text, _)| *text == hours_text)
            .map_or(self.fallback, |(_, color)| *color)
    }

    /// Return `true` if this palette can produce `color`.
    pub fn contains(&self, color: ColorTag) -> bool {
        self.fallback == color || self.overrides.iter().any(|(_, c)| *c == color)
    }
}

const STORE: Palette = Palette {
    overrides: &[
        ("11:00-16:30", ColorTag::Green),
        ("11:00-15:00", ColorTag::Orange),
        ("11:30-13:00", ColorTag::Blue),
        ("11:30-14:30", ColorTag::Purple),
    ],
    fallback: ColorTag::Pink,
};

const CAFETERIA_1F: Palette = Palette {
    overrides: &[
        ("11:00-14:30", ColorTag::Green),
        ("11:00-13:30", ColorTag::Orange),
        ("11:30-13:00", ColorTag::Blue),
        ("11:30-13:30", ColorTag::Purple),
    ],
    fallback: ColorTag::Pink,
};

const SABOR_2F: Palette = Palette {
    overrides: &[("11:00-14:30", ColorTag::Orange)],
    fallback: ColorTag::Gray,
};

const LIBRARY: Palette = Palette {
    overrides: &[
        ("09:00-20:00", ColorTag::Green),
        ("13:00-20:00", ColorTag::Blue),
        ("09:00-17:00", ColorTag::Orange),
    ],
    fallback: ColorTag::Gray,
};

const LECTURE_BLDG: Palette = Palette {
    overrides: &[("07:00-20:00", ColorTag::Green)],
    fallback: ColorTag::Gray,
};

/// The colour overrides for `facility`, if it has any.
pub fn palette(facility: FacilityId) -> Option<&'static Palette> {
    match facility {
        FacilityId::Store => Some(&STORE),
        FacilityId::Cafeteria1f => Some(&CAFETERIA_1F),
        FacilityId::Sabor2f => Some(&SABOR_2F),
        FacilityId::Library => Some(&LIBRARY),
        FacilityId::LectureBldg => Some(&LECTURE_BLDG),
        _ => None,
    }
}

/// Colour for an open day: the facility's palette when it has one, else
/// green for standard days and pink for irregular ones.
pub fn color_for(facility: FacilityId, schedule_type: ScheduleType, hours_text: &str) -> ColorTag {
    match palette(facility) {
        Some(p) => p.color(hours_text),
        None if schedule_type == ScheduleType::Standard => ColorTag::Green,
        None => ColorTag::Pink,
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

/// Summarise `facility` on `date`.
pub fn daily_info(
    facility: FacilityId,
    data: &FacilityData,
    date: Date,
    holidays: &dyn HolidayCalendar,
    t: &dyn Translate,
) -> DailyInfo {
    if data.is_unpublished(date) {
        return DailyInfo::unpublished(t);
    }

    if let Some(exception) = data.exception(date) {
        let reason = exception.reason.as_deref().map(|r| t.note(r));
        match exception.status {
            ExceptionStatus::Closed => return DailyInfo::closed(t, reason),
            ExceptionStatus::Open if !exception.hours.is_empty() => {
                return DailyInfo {
                    schedule_type: ScheduleType::Irregular,
                    hours_text: format_intervals(&exception.hours),
                    note: reason,
                    color: ColorTag::Pink,
                };
            }
            ExceptionStatus::Open => {}
        }
    }

    info_for_rule(facility, match_rule(data, date, holidays), t)
}

/// Summary derived from an already matched rule.
pub fn info_for_rule(facility: FacilityId, matched: Option<MatchedRule<'_>>, t: &dyn Translate) -> DailyInfo {
    let matched = match matched {
        Some(m) if !m.is_closed() => m,
        other => return DailyInfo::closed(t, other.and_then(|m| m.note).map(|n| t.note(n))),
    };

    let schedule_type = if matched.is_weekday_fallback() {
        ScheduleType::Standard
    } else {
        ScheduleType::Irregular
    };
    let hours_text = format_intervals(&matched.rule.hours);
    DailyInfo {
        schedule_type,
        color: color_for(facility, schedule_type, &hours_text),
        hours_text,
        note: matched.note.map(|n| t.note(n)),
    }
}

/// One [`DailyInfo`] per day of the month containing `month`.
pub fn monthly_schedule(
    facility: FacilityId,
    data: &FacilityData,
    month: Date,
    holidays: &dyn HolidayCalendar,
    t: &dyn Translate,
    maintenance_mode: bool,
) -> Vec<DailySchedule> {
    Date::range_inclusive(month.start_of_month(), month.end_of_month())
        .map(|date| DailySchedule {
            date,
            info: if maintenance_mode {
                DailyInfo::maintenance()
            } else {
                daily_info(facility, data, date, holidays, t)
            },
        })
        .collect()
}
