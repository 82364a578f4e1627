//! The Rule Store: an immutable, total mapping from [`FacilityId`] to
//! [`FacilityData`].
//!
//! A store is validated once when it is built. After that every lookup is
//! infallible, and the store is shared freely between threads.

use std::sync::OnceLock;

use cn_core::errors::{Error, Result};
use cn_time::time_of_day::check_ascending;

use crate::data;
use crate::facility::{FacilityData, FacilityId, FacilitySummary};
use crate::rule::{RuleKind, HOLIDAY_PLACEHOLDER};

/// Validated schedule data for every facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleStore {
    /// Indexed by [`FacilityId::index`].
    facilities: Vec<FacilityData>,
}

impl RuleStore {
    /// Build a store from one entry per facility.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if a facility is missing or listed twice, or
    /// if any facility's data is malformed (see [`validate_facility`]).
    pub fn new(entries: impl IntoIterator<Item = (FacilityId, FacilityData)>) -> Result<Self> {
        let mut slots: Vec<Option<FacilityData>> = vec![None; FacilityId::ALL.len()];
        for (id, data) in entries {
            validate_facility(id, &data)?;
            let slot = &mut slots[id.index()];
            if slot.is_some() {
                return Err(Error::Config(format!("facility {id} is defined twice")));
            }
            *slot = Some(data);
        }
        let facilities = slots
            .into_iter()
            .zip(FacilityId::ALL)
            .map(|(slot, id)| slot.ok_or_else(|| Error::Config(format!("facility {id} has no schedule"))))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { facilities })
    }

    /// The compiled-in schedule data, validated on first use.
    ///
    /// # Panics
    /// Panics if the built-in data fails validation. The data ships with the
    /// code, so this can only happen through an authoring mistake, which the
    /// test suite catches.
    pub fn builtin() -> &'static RuleStore {
        static STORE: OnceLock<RuleStore> = OnceLock::new();
        STORE.get_or_init(|| {
            let store = data::builtin_facilities()
                .and_then(RuleStore::new)
                .unwrap_or_else(|e| panic!("built-in schedule data is invalid: {e}"));
            tracing::info!(
                facilities = store.facilities.len(),
                rules = store.rule_count(),
                last_updated = data::DATA_LAST_UPDATED,
                "loaded built-in schedule data"
            );
            store
        })
    }

    /// Replace one facility's data, validating the replacement.
    pub fn with_facility(mut self, id: FacilityId, data: FacilityData) -> Result<Self> {
        validate_facility(id, &data)?;
        self.facilities[id.index()] = data;
        Ok(self)
    }

    /// Schedule data for `id`.
    pub fn facility(&self, id: FacilityId) -> &FacilityData {
        &self.facilities[id.index()]
    }

    /// Every facility with its data, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FacilityId, &FacilityData)> + '_ {
        FacilityId::ALL.into_iter().zip(self.facilities.iter())
    }

    /// Total number of rules across all facilities.
    pub fn rule_count(&self) -> usize {
        self.facilities.iter().map(|f| f.rules.len()).sum()
    }

    /// Listing of every facility, in declaration order.
    pub fn summaries(&self) -> Vec<FacilitySummary> {
        self.iter()
            .map(|(id, data)| FacilitySummary {
                id,
                name: data.name.clone(),
                name_en: data.name_en.clone(),
                category: data.category,
            })
            .collect()
    }
}

/// Check one facility's data for authoring mistakes.
///
/// * every rule's and exception's hours are ascending and non-overlapping;
/// * every `range` has `start <= end`;
/// * every `specific_date` rule lists at least one day;
/// * a national-holiday rule carries no hours unless it is open;
/// * a national-holiday rule is marked generic exactly when its note is the
///   [`HOLIDAY_PLACEHOLDER`].
pub fn validate_facility(id: FacilityId, data: &FacilityData) -> Result<()> {
    for (i, rule) in data.rules.iter().enumerate() {
        check_ascending(&rule.hours)
            .map_err(|e| Error::Config(format!("{id} rule #{i}: {e}")))?;
        match &rule.kind {
            RuleKind::Range { start, end } if end < start => {
                return Err(Error::Config(format!(
                    "{id} rule #{i}: range {start}..{end} ends before it starts"
                )));
            }
            RuleKind::SpecificDate { dates } if dates.is_empty() => {
                return Err(Error::Config(format!("{id} rule #{i}: no dates listed")));
            }
            RuleKind::NationalHoliday { .. } if rule.is_closed && !rule.hours.is_empty() => {
                return Err(Error::Config(format!(
                    "{id} rule #{i}: closed holiday rule must not list hours"
                )));
            }
            RuleKind::NationalHoliday { generic_note }
                if *generic_note != (rule.note.as_deref() == Some(HOLIDAY_PLACEHOLDER)) =>
            {
                return Err(Error::Config(format!(
                    "{id} rule #{i}: generic holiday flag does not match note {:?}",
                    rule.note
                )));
            }
            _ => {}
        }
    }
    for (date, exception) in &data.exceptions {
        check_ascending(&exception.hours)
            .map_err(|e| Error::Config(format!("{id} exception {date}: {e}")))?;
    }
    Ok(())
}
