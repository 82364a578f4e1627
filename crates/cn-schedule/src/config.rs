//! Engine configuration.
//!
//! ```toml
//! maintenance_mode = false
//! timezone = "Asia/Tokyo"
//! language = "en"
//! search_window_start = "2026-01-01"
//! search_window_end = "2026-04-30"
//! ```
//!
//! Every key is optional; missing keys take the defaults shown above
//! (`language` defaults to `ja`).

use std::path::Path;

use cn_core::errors::{Error, Result};
use cn_core::translate::{Catalog, Language};
use cn_time::{CampusClock, Date, DEFAULT_TIMEZONE};
use serde::{Deserialize, Serialize};

/// Settings threaded into every resolution call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Report every facility as closed for maintenance.
    pub maintenance_mode: bool,
    /// IANA name of the campus time zone.
    pub timezone: String,
    /// Language of the built-in message catalogue.
    pub language: Language,
    /// First day of the holiday window scanned by event search.
    pub search_window_start: Date,
    /// Last day (inclusive) of the holiday window scanned by event search.
    pub search_window_end: Date,
}

fn ymd(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).expect("constant date is valid")
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            maintenance_mode: false,
            timezone: DEFAULT_TIMEZONE.to_string(),
            language: Language::default(),
            search_window_start: ymd(2026, 1, 1),
            search_window_end: ymd(2026, 4, 30),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EngineConfig =
            toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        if self.search_window_end < self.search_window_start {
            return Err(Error::Config(format!(
                "search window {}..{} ends before it starts",
                self.search_window_start, self.search_window_end
            )));
        }
        Ok(())
    }

    /// Enable or disable maintenance mode.
    pub fn with_maintenance_mode(mut self, on: bool) -> Self {
        self.maintenance_mode = on;
        self
    }

    /// Select the catalogue language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// The search window as `(start, end)`.
    pub fn search_window(&self) -> (Date, Date) {
        (self.search_window_start, self.search_window_end)
    }

    /// A clock reading system time in the configured zone.
    pub fn clock(&self) -> CampusClock {
        CampusClock::from_name(&self.timezone)
    }

    /// The built-in catalogue in the configured language.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn keys_override_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            maintenance_mode = true
            language = "en"
            search_window_end = "2026-03-31"
            "#,
        )
        .unwrap();
        assert!(config.maintenance_mode);
        assert_eq!(config.catalog().language(), Language::En);
        assert_eq!(config.search_window().1, Date::from_ymd(2026, 3, 31).unwrap());
        assert_eq!(config.timezone, "Asia/Tokyo");
    }

    #[test]
    fn malformed_documents_are_rejected() {
        for text in [
            "language = \"fr\"",
            "search_window_start = \"2026-13-01\"",
            "maintenance = true",
            "search_window_start = \"2026-05-01\"",
        ] {
            let err = EngineConfig::from_toml_str(text).unwrap_err();
            assert!(matches!(err, Error::Config(_)), "{text}: {err}");
        }
    }

    #[test]
    fn unknown_timezone_falls_back() {
        let config = EngineConfig {
            timezone: "Nowhere/Special".into(),
            ..EngineConfig::default()
        };
        assert_eq!(config.clock().timezone(), CampusClock::default().timezone());
    }
}
