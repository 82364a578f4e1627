//! Built-in schedule data, January–March 2026.
//!
//! This is configuration, not logic. Rule order matters: within a matching
//! tier the first rule in a facility's list wins, so shared rule blocks are
//! spliced in before or after a facility's own rules on purpose.

use cn_core::errors::Result;
use cn_time::{Date, Interval};

use crate::facility::{Category, FacilityData, FacilityId};
use crate::rule::{RuleKind, ScheduleRule};

/// Date the built-in data was last revised.
pub const DATA_LAST_UPDATED: &str = "2026-01-10";

/// Return `true` once `today` is a calendar month or more past
/// [`DATA_LAST_UPDATED`], when the built-in hours should no longer be
/// trusted without checking the official notices.
pub fn is_data_stale(today: Date) -> bool {
    Date::from_iso(DATA_LAST_UPDATED)
        .and_then(|d| d.add_months(1))
        .map_or(true, |limit| today >= limit)
}

/// Note key marking days when classes are cancelled and campus entry is
/// restricted.
const RESTRICTED_KEY: &str = "note.class_cancellation_restricted";

/// Literal marker for restricted campus entry.
const RESTRICTED_MARK: &str = "入構制限";

// ── Rule helpers ──────────────────────────────────────────────────────────────

fn times(start: &str, end: &str) -> Result<Vec<Interval>> {
    Ok(vec![Interval::parse(start, end)?])
}

fn on(date: &str, hours: Vec<Interval>, note: Option<&str>) -> Result<ScheduleRule> {
    Ok(ScheduleRule::on_date(Date::from_iso(date)?, hours, note))
}

fn range(start: &str, end: &str, hours: Vec<Interval>, note: Option<&str>) -> Result<ScheduleRule> {
    Ok(ScheduleRule::range(
        Date::from_iso(start)?,
        Date::from_iso(end)?,
        hours,
        note,
    ))
}

fn closed_on(date: &str, note: Option<&str>) -> Result<ScheduleRule> {
    Ok(ScheduleRule::closed_date(Date::from_iso(date)?, note))
}

fn closed_range(start: &str, end: &str, note: Option<&str>) -> Result<ScheduleRule> {
    Ok(ScheduleRule::closed_range(
        Date::from_iso(start)?,
        Date::from_iso(end)?,
        note,
    ))
}

fn saturday(hours: Vec<Interval>, is_closed: bool) -> ScheduleRule {
    ScheduleRule::sub_weekday(RuleKind::Saturday, hours, is_closed)
}

fn sunday(hours: Vec<Interval>, is_closed: bool) -> ScheduleRule {
    ScheduleRule::sub_weekday(RuleKind::Sunday, hours, is_closed)
}

fn wednesday(hours: Vec<Interval>) -> ScheduleRule {
    ScheduleRule::sub_weekday(RuleKind::Wednesday, hours, false)
}

// ── Shared hours ──────────────────────────────────────────────────────────────

struct CommonHours {
    default: Vec<Interval>,
    early_late: Vec<Interval>,
    lunch_std: Vec<Interval>,
    lunch_short: Vec<Interval>,
    lunch_exam: Vec<Interval>,
    lunch_winter: Vec<Interval>,
    store_std: Vec<Interval>,
    store_short: Vec<Interval>,
    admin_std: Vec<Interval>,
    admin_lunch: Vec<Interval>,
    admission_lunch: Vec<Interval>,
}

impl CommonHours {
    fn new() -> Result<Self> {
        Ok(Self {
            default: times("09:00", "20:00")?,
            early_late: times("07:00", "20:00")?,
            lunch_std: times("11:00", "14:30")?,
            lunch_short: times("11:00", "13:30")?,
            lunch_exam: times("11:30", "13:30")?,
            lunch_winter: times("11:30", "13:00")?,
            store_std: times("11:00", "16:30")?,
            store_short: times("11:00", "15:00")?,
            admin_std: times("09:00", "17:00")?,
            admin_lunch: vec![
                Interval::parse("09:00", "12:40")?,
                Interval::parse("13:40", "16:30")?,
            ],
            admission_lunch: vec![
                Interval::parse("09:00", "12:00")?,
                Interval::parse("13:00", "17:00")?,
            ],
        })
    }
}

// ── Shared rule blocks ────────────────────────────────────────────────────────

/// Closures shared by every administrative office.
fn common_admin_rules() -> Result<Vec<ScheduleRule>> {
    let [sat, sun] = ScheduleRule::closed_weekends();
    Ok(vec![
        closed_range("2026-01-01", "2026-01-04", Some("年始休業"))?,
        ScheduleRule::national_holiday(true, None),
        sat,
        sun,
    ])
}

/// The academic calendar.
fn university_events_rules() -> Result<Vec<ScheduleRule>> {
    let none = Vec::new;
    Ok(vec![
        on("2026-01-05", none(), Some("授業再開"))?,
        on("2026-01-08", none(), Some("履修登録･修正期間(冬学期)"))?,
        on(
            "2026-01-09",
            none(),
            Some("履修登録･修正期間(冬学期) / 卒業論文・卒業研究 提出締切"),
        )?,
        on("2026-01-13", none(), Some("金曜授業実施日"))?,
        on("2026-01-15", none(), Some("秋学期授業終了"))?,
        on("2026-01-15", none(), Some("秋学期授業終了"))?,
        closed_on("2026-01-16", Some(RESTRICTED_KEY))?,
        closed_range("2026-01-17", "2026-01-18", Some(RESTRICTED_KEY))?,
        range("2026-01-19", "2026-01-23", none(), Some("秋学期 定期試験期間"))?,
        on("2026-01-26", none(), Some("冬学期 授業開始"))?,
        // February 2026
        on(
            "2026-02-02",
            none(),
            Some("秋学期成績Web閲覧開始(9:00) / 問い合わせ期間開始"),
        )?,
        range("2026-02-03", "2026-02-05", none(), Some("秋学期成績問い合わせ期間"))?,
        on(
            "2026-02-06",
            none(),
            Some("冬学期 授業終了 / 秋学期成績問い合わせ期限(~16:30)"),
        )?,
        on(
            "2026-02-16",
            none(),
            Some("冬学期成績Web閲覧開始(9:00) / 問い合わせ期間開始"),
        )?,
        range("2026-02-17", "2026-02-19", none(), Some("冬学期成績問い合わせ期間"))?,
        on("2026-02-20", none(), Some("冬学期成績問い合わせ期限(~16:30)"))?,
        closed_on("2026-02-24", Some(RESTRICTED_KEY))?,
        closed_on("2026-02-25", Some("第2次学力試験（前期）/ 入構制限"))?,
        // March 2026
        closed_range("2026-03-11", "2026-03-12", Some(RESTRICTED_KEY))?,
        on("2026-03-12", none(), Some("第2次学力試験（後期）"))?,
        range("2026-03-11", "2026-03-20", none(), Some("卒業者・進級者発表"))?,
        on("2026-03-20", none(), Some("卒業式（学位記授与式）"))?,
        on("2026-03-31", none(), Some("学年終わり"))?,
        // Fallbacks carry no note rather than an empty one.
        ScheduleRule::weekday(none(), None),
        saturday(none(), false),
        sunday(none(), false),
    ])
}

/// Academic-calendar days with restricted campus entry, forced closed.
///
/// Buildings splice these in first so they beat the building's own
/// date-specific rules.
fn restricted_entry_rules(events: &[ScheduleRule]) -> Vec<ScheduleRule> {
    events
        .iter()
        .filter(|r| {
            r.note
                .as_deref()
                .is_some_and(|n| n == RESTRICTED_KEY || n.contains(RESTRICTED_MARK))
        })
        .cloned()
        .map(ScheduleRule::closed)
        .collect()
}

// ── Facilities ────────────────────────────────────────────────────────────────

fn library(h: &CommonHours) -> Result<FacilityData> {
    Ok(FacilityData::new("附属図書館", "TUFS Library", Category::Facility)
        .with_unpublished_from(Date::from_iso("2026-03-01")?)
        .with_rules(vec![
            // January 2026
            closed_range("2026-01-01", "2026-01-04", Some("note.new_year_holiday"))?,
            on("2026-01-16", times("09:00", "17:00")?, None)?,
            closed_range("2026-01-17", "2026-01-18", Some("note.common_test"))?,
            // February 2026
            on("2026-02-24", times("09:00", "17:00")?, None)?,
            closed_on("2026-02-25", Some("note.entrance_exam"))?,
            closed_on("2026-02-27", Some("note.designated_closed"))?,
            ScheduleRule::national_holiday(true, None),
            ScheduleRule::weekday(h.default.clone(), None),
            saturday(times("13:00", "20:00")?, false),
            sunday(Vec::new(), true),
        ]))
}

fn cafeteria_1f(h: &CommonHours) -> Result<FacilityData> {
    let tbd = Some("営業時間未定");
    let regular = Some("定休日");
    Ok(
        FacilityData::new("1階食堂ミール", "Cafeteria Meal (1F)", Category::Facility)
            .with_unpublished_from(Date::from_iso("2026-04-01")?)
            .with_rules(vec![
                closed_range("2026-01-01", "2026-01-04", Some("年始休業"))?,
                range("2026-01-05", "2026-01-06", h.lunch_std.clone(), None)?,
                on("2026-01-07", h.lunch_short.clone(), Some("短縮営業"))?,
                range("2026-01-08", "2026-01-09", h.lunch_std.clone(), None)?,
                closed_range("2026-01-10", "2026-01-12", Some("note.includes_holiday"))?,
                on("2026-01-13", h.lunch_std.clone(), None)?,
                on("2026-01-14", h.lunch_short.clone(), Some("note.short_hours"))?,
                on("2026-01-15", h.lunch_std.clone(), None)?,
                closed_range("2026-01-16", "2026-01-18", None)?,
                range("2026-01-19", "2026-01-23", h.lunch_exam.clone(), None)?,
                closed_range("2026-01-24", "2026-01-25", None)?,
                range("2026-01-26", "2026-01-30", h.lunch_winter.clone(), None)?,
                closed_on("2026-01-31", None)?,
                // February 2026
                closed_on("2026-02-01", Some("note.regular_holiday"))?,
                range("2026-02-02", "2026-02-06", h.lunch_winter.clone(), None)?,
                closed_on("2026-02-07", Some("note.regular_holiday"))?,
                closed_on("2026-02-08", Some("note.regular_holiday"))?,
                range("2026-02-09", "2026-02-10", h.lunch_winter.clone(), None)?,
                closed_on("2026-02-11", Some("note.national_holiday"))?,
                range("2026-02-12", "2026-02-13", h.lunch_winter.clone(), None)?,
                closed_on("2026-02-14", Some("note.regular_holiday"))?,
                closed_on("2026-02-15", Some("note.regular_holiday"))?,
                range("2026-02-16", "2026-02-20", h.lunch_winter.clone(), None)?,
                closed_on("2026-02-21", regular)?,
                closed_on("2026-02-22", regular)?,
                closed_on("2026-02-23", Some("天皇誕生日（祝日）"))?,
                closed_on("2026-02-24", None)?,
                closed_on("2026-02-25", None)?,
                range("2026-02-26", "2026-02-27", h.lunch_winter.clone(), None)?,
                closed_on("2026-02-28", regular)?,
                // March 2026
                closed_on("2026-03-01", regular)?,
                range("2026-03-02", "2026-03-06", Vec::new(), tbd)?,
                closed_range("2026-03-07", "2026-03-08", regular)?,
                range("2026-03-09", "2026-03-10", Vec::new(), tbd)?,
                closed_range("2026-03-11", "2026-03-12", Some("後期日程試験（入構制限）"))?,
                on("2026-03-13", Vec::new(), tbd)?,
                closed_range("2026-03-14", "2026-03-15", regular)?,
                on("2026-03-16", Vec::new(), tbd)?,
                range("2026-03-17", "2026-03-19", Vec::new(), tbd)?,
                on("2026-03-20", h.lunch_short.clone(), Some("卒業式"))?,
                closed_range("2026-03-21", "2026-03-22", regular)?,
                range("2026-03-23", "2026-03-27", Vec::new(), tbd)?,
                closed_range("2026-03-28", "2026-03-29", regular)?,
                range("2026-03-30", "2026-03-31", Vec::new(), tbd)?,
                // Fallbacks
                ScheduleRule::weekday(times("11:30", "14:30")?, None),
                wednesday(h.lunch_exam.clone()),
                saturday(Vec::new(), true),
                sunday(Vec::new(), true),
            ]),
    )
}

fn sabor_2f(h: &CommonHours) -> Result<FacilityData> {
    let special = Some("note.sabor_special");
    Ok(
        FacilityData::new("2階食堂さぼおる", "Cafeteria Sabor (2F)", Category::Facility)
            .with_unpublished_from(Date::from_iso("2026-04-01")?)
            .with_rules(vec![
                closed_range("2026-01-01", "2026-01-04", Some("年始休業"))?,
                range("2026-01-05", "2026-01-09", h.lunch_std.clone(), special)?,
                closed_range("2026-01-10", "2026-01-12", None)?,
                range("2026-01-13", "2026-01-15", h.lunch_std.clone(), special)?,
                closed_range("2026-01-16", "2026-01-31", Some("1月末まで休業"))?,
                // February 2026
                closed_range("2026-02-01", "2026-02-28", Some("2月全日休業"))?,
                // March 2026
                closed_range("2026-03-01", "2026-03-31", Some("3月全日休業"))?,
                // Fallbacks
                ScheduleRule::weekday(Vec::new(), Some("closed")).closed(),
                saturday(Vec::new(), true),
                sunday(Vec::new(), true),
            ]),
    )
}

fn store(h: &CommonHours) -> Result<FacilityData> {
    let tbd = Some("営業時間未定");
    let regular = Some("定休日");
    let short = Some("短縮営業");
    Ok(
        FacilityData::new("購買書籍部ハッチポッチ", "Co-op Store Hatchpotch", Category::Facility)
            .with_unpublished_from(Date::from_iso("2026-04-01")?)
            .with_rules(vec![
                closed_range("2026-01-01", "2026-01-04", Some("年始休業"))?,
                range("2026-01-05", "2026-01-06", h.store_std.clone(), None)?,
                on("2026-01-07", h.store_short.clone(), short)?,
                range("2026-01-08", "2026-01-09", h.store_std.clone(), None)?,
                closed_range("2026-01-10", "2026-01-12", Some("祝日含む"))?,
                on("2026-01-13", h.store_std.clone(), None)?,
                on("2026-01-14", h.store_short.clone(), short)?,
                on("2026-01-15", h.store_std.clone(), None)?,
                closed_range("2026-01-16", "2026-01-18", None)?,
                range("2026-01-19", "2026-01-23", times("11:30", "14:30")?, None)?,
                closed_range("2026-01-24", "2026-01-25", None)?,
                range("2026-01-26", "2026-01-30", h.lunch_winter.clone(), None)?,
                closed_on("2026-01-31", None)?,
                // February 2026
                closed_on("2026-02-01", regular)?,
                range("2026-02-02", "2026-02-06", h.lunch_winter.clone(), short)?,
                closed_on("2026-02-07", regular)?,
                closed_on("2026-02-08", regular)?,
                range("2026-02-09", "2026-02-10", h.lunch_winter.clone(), short)?,
                closed_on("2026-02-11", Some("建国記念の日（祝日）"))?,
                range("2026-02-12", "2026-02-13", h.lunch_winter.clone(), short)?,
                closed_on("2026-02-14", regular)?,
                closed_on("2026-02-15", regular)?,
                range("2026-02-16", "2026-02-20", h.lunch_winter.clone(), short)?,
                closed_on("2026-02-21", regular)?,
                closed_on("2026-02-22", regular)?,
                closed_on("2026-02-23", Some("天皇誕生日（祝日）"))?,
                closed_on("2026-02-24", None)?,
                closed_on("2026-02-25", None)?,
                range("2026-02-26", "2026-02-27", h.lunch_winter.clone(), short)?,
                closed_on("2026-02-28", regular)?,
                // March 2026
                closed_on("2026-03-01", regular)?,
                range("2026-03-02", "2026-03-06", Vec::new(), tbd)?,
                closed_range("2026-03-07", "2026-03-08", regular)?,
                range("2026-03-09", "2026-03-11", Vec::new(), tbd)?,
                closed_on("2026-03-12", Some("後期日程試験（入構制限）"))?,
                on("2026-03-13", Vec::new(), tbd)?,
                closed_range("2026-03-14", "2026-03-15", regular)?,
                range("2026-03-16", "2026-03-19", Vec::new(), tbd)?,
                on("2026-03-20", h.store_std.clone(), Some("卒業式"))?,
                closed_range("2026-03-21", "2026-03-22", regular)?,
                range("2026-03-23", "2026-03-27", Vec::new(), tbd)?,
                closed_range("2026-03-28", "2026-03-29", regular)?,
                range("2026-03-30", "2026-03-31", Vec::new(), tbd)?,
                // Fallbacks
                ScheduleRule::weekday(h.store_std.clone(), None),
                wednesday(h.store_short.clone()),
                saturday(Vec::new(), true),
                sunday(Vec::new(), true),
            ]),
    )
}

fn admin_office(
    name: &str,
    name_en: &str,
    category: Category,
    weekday: ScheduleRule,
) -> Result<FacilityData> {
    let mut rules = common_admin_rules()?;
    rules.push(weekday);
    Ok(FacilityData::new(name, name_en, category)
        .with_unpublished_from(Date::from_iso("2026-04-01")?)
        .with_rules(rules))
}

fn building(
    name: &str,
    name_en: &str,
    restricted: &[ScheduleRule],
    own: Vec<ScheduleRule>,
) -> Result<FacilityData> {
    let mut rules = restricted.to_vec();
    rules.extend(own);
    Ok(FacilityData::new(name, name_en, Category::Facility)
        .with_unpublished_from(Date::from_iso("2026-04-01")?)
        .with_rules(rules))
}

fn lecture_bldg(h: &CommonHours, restricted: &[ScheduleRule]) -> Result<FacilityData> {
    let ext = || h.early_late.clone();
    building(
        "研究講義棟",
        "Research & Lecture Bldg",
        restricted,
        vec![
            closed_range("2026-01-01", "2026-01-04", Some("年始休業"))?,
            on("2026-01-05", ext(), None)?,
            on("2026-01-08", ext(), None)?,
            on("2026-01-09", ext(), None)?,
            on("2026-01-13", ext(), None)?,
            on("2026-01-15", ext(), None)?,
            closed_on("2026-01-16", None)?,
            range("2026-01-19", "2026-01-23", ext(), None)?,
            on("2026-01-26", ext(), None)?,
            // Fallbacks
            ScheduleRule::weekday(ext(), None),
            saturday(Vec::new(), true),
            sunday(Vec::new(), true),
        ],
    )
}

fn admin_bldg(h: &CommonHours) -> Result<FacilityData> {
    Ok(
        FacilityData::new("本部管理棟", "Administration Building", Category::Admin)
            .with_unpublished_from(Date::from_iso("2026-04-01")?)
            .with_rules(vec![
                closed_range("2026-01-01", "2026-01-04", Some("年始休業"))?,
                // Holidays are listed by hand rather than by a holiday rule.
                closed_on("2026-01-12", Some("成人の日"))?,
                closed_on("2026-02-11", Some("建国記念の日"))?,
                closed_on("2026-02-23", Some("天皇誕生日"))?,
                closed_on("2026-03-20", Some("春分の日"))?,
                ScheduleRule::weekday(h.admin_std.clone(), None),
                saturday(Vec::new(), true),
                sunday(Vec::new(), true),
            ]),
    )
}

/// Build the schedule for every facility, in declaration order.
pub fn builtin_facilities() -> Result<Vec<(FacilityId, FacilityData)>> {
    let h = CommonHours::new()?;
    let events = university_events_rules()?;
    let restricted = restricted_entry_rules(&events);

    Ok(vec![
        (FacilityId::Library, library(&h)?),
        (FacilityId::Cafeteria1f, cafeteria_1f(&h)?),
        (FacilityId::Sabor2f, sabor_2f(&h)?),
        (FacilityId::Store, store(&h)?),
        (
            FacilityId::AcademicAffairs,
            admin_office(
                "教務・学生・留学生課",
                "Academic, Student & International Student Affairs",
                Category::Admin,
                ScheduleRule::weekday(h.admin_lunch.clone(), Some("昼休み 12:40-13:40")),
            )?,
        ),
        (
            FacilityId::Admission,
            admin_office(
                "入試課",
                "Admissions",
                Category::Admin,
                ScheduleRule::weekday(h.admission_lunch.clone(), Some("昼休み 12:00-13:00")),
            )?,
        ),
        (
            FacilityId::Accounting,
            admin_office(
                "会計課",
                "Accounting Division",
                Category::Admin,
                ScheduleRule::weekday(h.admin_std.clone(), Some("現金受付は15:00まで")),
            )?,
        ),
        (
            FacilityId::CertMachine,
            admin_office(
                "証明書発行機",
                "Certificate Machine",
                Category::Facility,
                ScheduleRule::weekday(times("09:00", "17:00")?, None),
            )?,
        ),
        (
            FacilityId::CircleBldg,
            building(
                "サークル棟",
                "Circle Building",
                &restricted,
                vec![
                    ScheduleRule::weekday(h.early_late.clone(), None),
                    saturday(h.early_late.clone(), false),
                    sunday(h.early_late.clone(), false),
                ],
            )?,
        ),
        (FacilityId::LectureBldg, lecture_bldg(&h, &restricted)?),
        (
            FacilityId::AgoraGlobal,
            building(
                "アゴラ・グローバル",
                "Agora Global",
                &restricted,
                vec![
                    ScheduleRule::weekday(h.early_late.clone(), None),
                    saturday(Vec::new(), true),
                    sunday(Vec::new(), true),
                ],
            )?,
        ),
        (
            FacilityId::CafeCastalia,
            FacilityData::new("カフェ・カスタリア", "Cafe Castalia", Category::Facility)
                .with_unpublished_from(Date::from_iso("2026-04-01")?)
                .with_rules(vec![
                    ScheduleRule::weekday(times("11:00", "17:00")?, None),
                    saturday(Vec::new(), true),
                    sunday(Vec::new(), true),
                ]),
        ),
        (FacilityId::AdminBldg, admin_bldg(&h)?),
        (
            FacilityId::UniversityEvents,
            FacilityData::new("大学行事予定", "University Events", Category::Facility)
                .with_unpublished_from(Date::from_iso("2026-04-01")?)
                .with_rules(events),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_goes_stale_a_month_after_revision() {
        let revised = Date::from_iso(DATA_LAST_UPDATED).unwrap();
        assert!(!is_data_stale(revised));
        assert!(!is_data_stale(Date::from_ymd(2026, 2, 9).unwrap()));
        assert!(is_data_stale(Date::from_ymd(2026, 2, 10).unwrap()));
        assert!(is_data_stale(Date::from_ymd(2026, 4, 1).unwrap()));
    }

    #[test]
    fn every_facility_is_listed_once_in_order() {
        let ids: Vec<FacilityId> = builtin_facilities().unwrap().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, FacilityId::ALL.to_vec());
    }

    #[test]
    fn restricted_rules_are_derived_from_events() {
        let events = university_events_rules().unwrap();
        let restricted = restricted_entry_rules(&events);
        assert_eq!(restricted.len(), 5);
        assert!(restricted.iter().all(|r| r.is_closed));
        let exam_day = Date::from_iso("2026-02-25").unwrap();
        assert!(restricted.iter().any(|r| r.covers(exam_day)));
    }

    #[test]
    fn buildings_put_restricted_rules_first() {
        let facilities = builtin_facilities().unwrap();
        let (_, lecture) = facilities
            .iter()
            .find(|(id, _)| *id == FacilityId::LectureBldg)
            .unwrap();
        let first = &lecture.rules[0];
        assert!(first.is_closed);
        assert_eq!(first.note.as_deref(), Some(RESTRICTED_KEY));
    }
}
