//! The resolution engine.
//!
//! [`Engine`] bundles a [`RuleStore`], a holiday calendar, a translator, and
//! an [`EngineConfig`], and exposes every resolution operation keyed by
//! [`FacilityId`]. It holds no mutable state: any number of callers may share
//! one engine, and each call recomputes its answer from scratch.

use cn_core::errors::Result;
use cn_core::translate::{Catalog, Translate};
use cn_time::{CampusClock, Date, HolidayCalendar, Japan, LocalDateTime};

use crate::alerts::{self, GlobalAlert};
use crate::config::EngineConfig;
use crate::daily::{self, DailyInfo, DailySchedule};
use crate::facility::{ExceptionStatus, FacilityId, FacilitySummary};
use crate::matcher::{self, MatchedRule};
use crate::search::{self, SearchResult};
use crate::status::{self, StatusResult};
use crate::store::RuleStore;

/// Schedule resolution over one rule store.
#[derive(Clone, Copy)]
pub struct Engine<'a> {
    store: &'a RuleStore,
    holidays: &'a dyn HolidayCalendar,
    translator: Option<&'a dyn Translate>,
    catalog: Catalog,
    clock: CampusClock,
    maintenance_mode: bool,
    search_window: (Date, Date),
}

impl std::fmt::Debug for Engine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("holidays", &self.holidays.name())
            .field("custom_translator", &self.translator.is_some())
            .field("catalog", &self.catalog)
            .field("clock", &self.clock)
            .field("maintenance_mode", &self.maintenance_mode)
            .field("search_window", &self.search_window)
            .finish_non_exhaustive()
    }
}

impl<'a> Engine<'a> {
    /// Create an engine over `store` with the given holiday calendar.
    pub fn new(store: &'a RuleStore, holidays: &'a dyn HolidayCalendar, config: &EngineConfig) -> Self {
        Self {
            store,
            holidays,
            translator: None,
            catalog: config.catalog(),
            clock: config.clock(),
            maintenance_mode: config.maintenance_mode,
            search_window: config.search_window(),
        }
    }

    /// Replace the built-in catalogue with a caller-supplied translator.
    pub fn with_translator(mut self, translator: &'a dyn Translate) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Pin the engine's clock, e.g. to a preview instant.
    pub fn with_clock(mut self, clock: CampusClock) -> Self {
        self.clock = clock;
        self
    }

    /// Return the engine's clock.
    pub fn clock(&self) -> &CampusClock {
        &self.clock
    }

    /// Return the rule store.
    pub fn store(&self) -> &'a RuleStore {
        self.store
    }

    /// Return `true` if maintenance mode is on.
    pub fn maintenance_mode(&self) -> bool {
        self.maintenance_mode
    }

    fn t(&self) -> &dyn Translate {
        match self.translator {
            Some(t) => t,
            None => &self.catalog,
        }
    }

    /// The rule governing `facility` on `date`, ignoring exceptions.
    pub fn match_rule(&self, facility: FacilityId, date: Date) -> Option<MatchedRule<'a>> {
        let matched = matcher::match_rule(self.store.facility(facility), date, self.holidays);
        tracing::debug!(
            facility = %facility,
            date = %date,
            tier = matched.map_or("none", |m| m.tier.as_str()),
            "matched rule"
        );
        matched
    }

    /// Live status of `facility` on `date`, as seen at `now`.
    pub fn status(&self, facility: FacilityId, date: Date, now: LocalDateTime) -> StatusResult {
        if self.maintenance_mode {
            return StatusResult::maintenance();
        }
        let data = self.store.facility(facility);
        let closed_exception = data
            .exception(date)
            .is_some_and(|e| e.status == ExceptionStatus::Closed);
        if closed_exception {
            tracing::debug!(facility = %facility, date = %date, tier = "exception", "matched rule");
            return status::compute_status(data, date, now, self.holidays, self.t(), false);
        }
        status::status_for_rule(self.match_rule(facility, date), date, now, self.t())
    }

    /// Live status of `facility` today, read from the engine's clock.
    pub fn status_now(&self, facility: FacilityId) -> Result<StatusResult> {
        let now = self.clock.now()?;
        Ok(self.status(facility, now.date, now))
    }

    /// Calendar summary of `facility` on `date`.
    pub fn daily_info(&self, facility: FacilityId, date: Date) -> DailyInfo {
        let data = self.store.facility(facility);
        let overridden = data.exception(date).is_some_and(|e| {
            e.status == ExceptionStatus::Closed || !e.hours.is_empty()
        });
        if data.is_unpublished(date) || overridden {
            return daily::daily_info(facility, data, date, self.holidays, self.t());
        }
        daily::info_for_rule(facility, self.match_rule(facility, date), self.t())
    }

    /// One summary per day of the month containing `month`.
    pub fn monthly_schedule(&self, facility: FacilityId, month: Date) -> Vec<DailySchedule> {
        daily::monthly_schedule(
            facility,
            self.store.facility(facility),
            month,
            self.holidays,
            self.t(),
            self.maintenance_mode,
        )
    }

    /// Dated events matching `query`, sorted by date.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        search::search(self.store, query, self.holidays, self.search_window, self.t())
    }

    /// Facilities matching `query`, or `None` for a blank query.
    pub fn filter_facilities(&self, query: &str) -> Option<Vec<FacilityId>> {
        search::filter_facilities(self.store, query)
    }

    /// Site-wide alerts for `today`.
    pub fn global_alerts(&self, today: Date) -> Vec<GlobalAlert> {
        alerts::global_alerts(self.store, today, self.t())
    }

    /// Every facility, in declaration order.
    pub fn facilities(&self) -> Vec<FacilitySummary> {
        self.store.summaries()
    }
}

impl Engine<'static> {
    /// An engine over the built-in data and the Japanese holiday table.
    pub fn builtin(config: &EngineConfig) -> Self {
        Engine::new(RuleStore::builtin(), &Japan, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cn_core::translate::Language;
    use cn_time::TimeOfDay;

    use crate::daily::ScheduleType;
    use crate::status::FacilityStatus;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn at(d: Date, hh: u8, mm: u8) -> LocalDateTime {
        LocalDateTime::new(d, TimeOfDay::new(hh, mm).unwrap())
    }

    fn engine() -> Engine<'static> {
        Engine::builtin(&EngineConfig::default().with_language(Language::En))
    }

    #[test]
    fn library_weekday_is_open() {
        let d = date(2026, 1, 19);
        let s = engine().status(FacilityId::Library, d, at(d, 10, 0));
        assert_eq!(s.status, FacilityStatus::Open);
        assert_eq!(s.next_change_text, "Closes at 20:00");
    }

    #[test]
    fn generic_holiday_note_becomes_holiday_name() {
        let d = date(2026, 2, 11);
        let s = engine().status(FacilityId::Library, d, at(d, 10, 0));
        assert_eq!(s.status_text, "建国記念の日");
        assert_eq!(s.alert.as_deref(), Some("建国記念の日"));
    }

    #[test]
    fn custom_translator_is_used() {
        let shout = |key: &str| key.to_uppercase();
        let e = engine().with_translator(&shout);
        let d = date(2026, 1, 19);
        let s = e.status(FacilityId::Library, d, at(d, 10, 0));
        assert_eq!(s.status_text, "STATUS.OPEN");
    }

    #[test]
    fn maintenance_is_threaded_through() {
        let e = Engine::builtin(&EngineConfig::default().with_maintenance_mode(true));
        assert!(e.maintenance_mode());
        let d = date(2026, 1, 19);
        assert_eq!(e.status(FacilityId::Library, d, at(d, 10, 0)), StatusResult::maintenance());
        let month = e.monthly_schedule(FacilityId::Library, d);
        assert!(month.iter().all(|day| day.info.hours_text == "Maintenance"));
    }

    #[test]
    fn daily_info_matches_projection() {
        let e = engine();
        for d in Date::range_inclusive(date(2026, 1, 1), date(2026, 3, 31)) {
            for id in FacilityId::ALL {
                let direct = daily::daily_info(id, e.store().facility(id), d, &Japan, &e.catalog);
                assert_eq!(e.daily_info(id, d), direct, "{id} on {d}");
            }
        }
    }

    #[test]
    fn unpublished_library_in_march() {
        let info = engine().daily_info(FacilityId::Library, date(2026, 3, 2));
        assert_eq!(info.schedule_type, ScheduleType::Unpublished);
    }

    #[test]
    fn status_now_reads_the_pinned_clock() {
        let clock = CampusClock::default().with_override_str("2026-01-16T12:00");
        let s = engine().with_clock(clock).status_now(FacilityId::Library).unwrap();
        // The library closes early (17:00) on 2026-01-16.
        assert_eq!(s.status, FacilityStatus::Open);
        assert_eq!(s.next_change_text, "Closes at 17:00");
    }

    #[test]
    fn listing_has_every_facility() {
        let list = engine().facilities();
        assert_eq!(list.len(), FacilityId::ALL.len());
        assert_eq!(list[1].id, FacilityId::Cafeteria1f);
        assert_eq!(list[1].name, "1階食堂ミール");
    }
}
