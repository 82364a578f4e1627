//! Translation seam between the resolution engine and the presentation layer.
//!
//! The engine never hard-codes user-facing labels. Status labels are looked
//! up through a [`Translate`] implementation supplied by the caller, and
//! schedule notes that start with [`NOTE_KEY_PREFIX`] are treated as keys
//! rather than literal text.
//!
//! [`Catalog`] is the built-in message table. Callers with their own
//! localisation layer can pass any closure `Fn(&str) -> String` instead.

use serde::{Deserialize, Serialize};

/// Prefix that marks a schedule note as a translation key.
pub const NOTE_KEY_PREFIX: &str = "note.";

/// Return `true` if `text` is a translation key rather than literal text.
pub fn is_translation_key(text: &str) -> bool {
    text.starts_with(NOTE_KEY_PREFIX)
}

/// Look up user-facing text for a key.
///
/// Implementations return the key itself when no entry exists.
pub trait Translate {
    /// Translate `key` into display text.
    fn translate(&self, key: &str) -> String;

    /// Resolve a schedule note: keys are translated, literal text passes
    /// through unchanged.
    fn note(&self, note: &str) -> String {
        if is_translation_key(note) {
            self.translate(note)
        } else {
            note.to_string()
        }
    }
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Display language of the built-in catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Japanese.
    #[default]
    Ja,
    /// English.
    En,
}

/// The built-in message catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Catalog {
    language: Language,
}

impl Catalog {
    /// Create a catalogue for the given language.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Return the catalogue language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Return the entry for `key`, or `None` if the key is unknown.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        MESSAGES
            .iter()
            .find(|(k, _, _)| *k == key)
            .map(|(_, ja, en)| match self.language {
                Language::Ja => *ja,
                Language::En => *en,
            })
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }
}

/// `(key, ja, en)`
const MESSAGES: &[(&str, &str, &str)] = &[
    // Status labels
    ("status.open", "営業中", "Open"),
    ("status.closed", "営業時間外", "Closed"),
    ("status.break", "休憩中", "On Break"),
    ("status.closing_soon", "もうすぐ終了", "Closing Soon"),
    ("status.unknown", "不明", "Unknown"),
    ("status.unpublished", "未公開", "Unpublished"),
    ("status.opens_at", "開館", "Opens at"),
    ("status.closes_at", "閉館", "Closes at"),
    // Schedule notes
    ("note.lunch_only", "平日ランチのみ", "Weekday Lunch Only"),
    ("note.cash_until_15", "現金受付は15:00まで", "Cash accepted until 15:00"),
    ("note.indoor", "屋内施設", "Indoor Facility"),
    ("note.short_hours", "短縮開館", "Short Hours"),
    (
        "note.common_test",
        "共通テスト/月末休館",
        "Closed for Common Test/Month-end",
    ),
    ("note.closed_period", "期間外閉店", "Closed during this period"),
    ("note.new_year_holiday", "年末年始休館", "New Year Holidays"),
    ("note.entrance_exam", "入学試験", "Entrance Examination"),
    ("note.designated_closed", "特別休館日", "Designated Closing Day"),
    ("note.includes_holiday", "祝日含む", "Includes National Holiday"),
    ("note.regular_holiday", "定休日", "Regular Holiday"),
    ("note.national_holiday", "祝日", "National Holiday"),
    ("note.sabor_special", "特別営業", "Special Service"),
    (
        "note.class_cancellation_restricted",
        "休講・入構制限",
        "No Classes / Restricted Entry",
    ),
];
