//! Facility identifiers and per-facility schedule data.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use cn_core::errors::{Error, Result};
use cn_time::{Date, Interval};
use serde::{Deserialize, Serialize};

use crate::rule::ScheduleRule;

/// The closed set of facilities the engine knows about.
///
/// Declaration order is the display order used by listings and search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityId {
    /// University library.
    Library,
    /// First-floor cafeteria.
    #[serde(rename = "cafeteria_1f")]
    Cafeteria1f,
    /// Second-floor cafeteria.
    #[serde(rename = "sabor_2f")]
    Sabor2f,
    /// Co-op store.
    Store,
    /// Academic, student, and international student affairs office.
    AcademicAffairs,
    /// Admissions office.
    Admission,
    /// Accounting division.
    Accounting,
    /// Certificate issuing machine.
    CertMachine,
    /// Student club building.
    CircleBldg,
    /// Research and lecture building.
    LectureBldg,
    /// Agora Global building.
    AgoraGlobal,
    /// Café Castalia.
    CafeCastalia,
    /// Administration building.
    AdminBldg,
    /// The university events calendar.
    UniversityEvents,
}

impl FacilityId {
    /// Every facility, in declaration order.
    pub const ALL: [FacilityId; 14] = [
        FacilityId::Library,
        FacilityId::Cafeteria1f,
        FacilityId::Sabor2f,
        FacilityId::Store,
        FacilityId::AcademicAffairs,
        FacilityId::Admission,
        FacilityId::Accounting,
        FacilityId::CertMachine,
        FacilityId::CircleBldg,
        FacilityId::LectureBldg,
        FacilityId::AgoraGlobal,
        FacilityId::CafeCastalia,
        FacilityId::AdminBldg,
        FacilityId::UniversityEvents,
    ];

    /// Position in [`FacilityId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The stable string identifier (e.g. `"cafeteria_1f"`).
    pub fn as_str(self) -> &'static str {
        match self {
            FacilityId::Library => "library",
            FacilityId::Cafeteria1f => "cafeteria_1f",
            FacilityId::Sabor2f => "sabor_2f",
            FacilityId::Store => "store",
            FacilityId::AcademicAffairs => "academic_affairs",
            FacilityId::Admission => "admission",
            FacilityId::Accounting => "accounting",
            FacilityId::CertMachine => "cert_machine",
            FacilityId::CircleBldg => "circle_bldg",
            FacilityId::LectureBldg => "lecture_bldg",
            FacilityId::AgoraGlobal => "agora_global",
            FacilityId::CafeCastalia => "cafe_castalia",
            FacilityId::AdminBldg => "admin_bldg",
            FacilityId::UniversityEvents => "university_events",
        }
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FacilityId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FacilityId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::UnknownFacility(s.to_string()))
    }
}

/// Which dashboard section a facility belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Student-facing facility (library, cafeterias, buildings).
    Facility,
    /// Administrative office.
    Admin,
}

/// Whether a per-date exception closes or opens the facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExceptionStatus {
    /// Closed all day.
    Closed,
    /// Open, optionally with its own hours.
    Open,
}

/// A per-date override that bypasses rule matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exception {
    /// Open or closed.
    pub status: ExceptionStatus,
    /// Reason shown to users; may be a translation key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Hours for an `open` exception.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hours: Vec<Interval>,
}

impl Exception {
    /// A closed-all-day exception.
    pub fn closed(reason: Option<&str>) -> Self {
        Self {
            status: ExceptionStatus::Closed,
            reason: reason.map(str::to_string),
            hours: Vec::new(),
        }
    }

    /// An open exception with explicit hours.
    pub fn open(hours: Vec<Interval>, reason: Option<&str>) -> Self {
        Self {
            status: ExceptionStatus::Open,
            reason: reason.map(str::to_string),
            hours,
        }
    }
}

/// Everything the engine knows about one facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityData {
    /// Japanese display name.
    pub name: String,
    /// English display name.
    pub name_en: String,
    /// Dashboard section.
    pub category: Category,
    /// Rules in declaration order; earlier rules win within a tier.
    pub rules: Vec<ScheduleRule>,
    /// Per-date overrides.
    pub exceptions: BTreeMap<Date, Exception>,
    /// Calendar display is suppressed on and after this date.
    pub unpublished_from: Option<Date>,
}

impl FacilityData {
    /// Create a facility with no rules.
    pub fn new(name: &str, name_en: &str, category: Category) -> Self {
        Self {
            name: name.to_string(),
            name_en: name_en.to_string(),
            category,
            rules: Vec::new(),
            exceptions: BTreeMap::new(),
            unpublished_from: None,
        }
    }

    /// Replace the rule list.
    pub fn with_rules(mut self, rules: Vec<ScheduleRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Add an exception for `date`, replacing any existing one.
    pub fn with_exception(mut self, date: Date, exception: Exception) -> Self {
        self.exceptions.insert(date, exception);
        self
    }

    /// Set the unpublished-from cutoff.
    pub fn with_unpublished_from(mut self, date: Date) -> Self {
        self.unpublished_from = Some(date);
        self
    }

    /// The exception for `date`, if any.
    pub fn exception(&self, date: Date) -> Option<&Exception> {
        self.exceptions.get(&date)
    }

    /// Return `true` if calendar display is suppressed for `date`.
    pub fn is_unpublished(&self, date: Date) -> bool {
        self.unpublished_from.is_some_and(|cutoff| date >= cutoff)
    }
}

/// Listing entry for a facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacilitySummary {
    /// Identifier.
    pub id: FacilityId,
    /// Japanese display name.
    pub name: String,
    /// English display name.
    pub name_en: String,
    /// Dashboard section.
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_roundtrip_through_text() {
        for id in FacilityId::ALL {
            assert_eq!(id.as_str().parse::<FacilityId>().unwrap(), id);
        }
        assert_eq!(
            "gym".parse::<FacilityId>(),
            Err(Error::UnknownFacility("gym".into()))
        );
    }

    #[test]
    fn index_follows_declaration_order() {
        for (i, id) in FacilityId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn serde_names_match_as_str() {
        for id in FacilityId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }

    #[test]
    fn unpublished_cutoff_is_inclusive() {
        let cutoff = Date::from_ymd(2026, 4, 1).unwrap();
        let data = FacilityData::new("x", "x", Category::Facility).with_unpublished_from(cutoff);
        assert!(!data.is_unpublished(cutoff - 1));
        assert!(data.is_unpublished(cutoff));
        assert!(data.is_unpublished(cutoff + 30));
    }
}
