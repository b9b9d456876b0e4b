//! # Portal configuration (`portal.toml`)
//!
//! Optional TOML document stored under [`CONFIG_KEY`](crate::storage::CONFIG_KEY).
//! It seeds the process-wide appearance state and tunes the student
//! dashboard. A missing file, a missing section, or a missing field all fall
//! back to the defaults below.
//!
//! ```toml
//! [appearance]
//! dark_mode = false
//! language = "en"     # "en" or "ar"
//!
//! [dashboard]
//! load_delay_ms = 1000   # simulated data load; 0 loads immediately
//! ```

use serde::{Deserialize, Serialize};

use crate::i18n::{Language, Preferences};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Initial theme and language.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub language: Language,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Delay before mock dashboard data appears, in milliseconds.
    #[serde(default = "default_load_delay")]
    pub load_delay_ms: u32,
}

fn default_load_delay() -> u32 {
    1000
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: default_load_delay(),
        }
    }
}

impl PortalConfig {
    /// Builder method to set the initial language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.appearance.language = language;
        self
    }

    /// Builder method to start in dark mode.
    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.appearance.dark_mode = dark_mode;
        self
    }

    /// Builder method to set the simulated load delay.
    #[cfg(test)]
    pub fn with_load_delay(mut self, ms: u32) -> Self {
        self.dashboard.load_delay_ms = ms;
        self
    }

    /// Copy the appearance half of `prefs` into the configuration.
    pub fn with_preferences(self, prefs: &Preferences) -> Self {
        self.with_dark_mode(prefs.dark_mode).with_language(prefs.language)
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = PortalConfig::from_toml("").unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.dashboard.load_delay_ms, 1000);
        assert_eq!(config.appearance.language, Language::En);
        assert!(!config.appearance.dark_mode);
    }

    #[test]
    fn test_partial_document() {
        let config = PortalConfig::from_toml("[appearance]\nlanguage = \"ar\"\n").unwrap();
        assert_eq!(config.appearance.language, Language::Ar);
        assert!(!config.appearance.dark_mode);
        assert_eq!(config.dashboard.load_delay_ms, 1000);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = PortalConfig::default()
            .with_language(Language::Ar)
            .with_dark_mode(true)
            .with_load_delay(0);
        let text = config.to_toml().unwrap();
        assert!(text.contains("language = \"ar\""));
        assert_eq!(PortalConfig::from_toml(&text).unwrap(), config);
    }
}
