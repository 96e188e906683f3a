use serde::{Deserialize, Serialize};

use crate::Language;

pub const DEFAULT_API_BASE_URL: &str = "https://portal.jawafdehi.org/api";

/// Where the accountability API lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Join the base URL and a relative API path with exactly one slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Display preferences for dates and labels.
///
/// Every field has a default so that a missing or incomplete
/// `[display]` table still yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub default_language: Language,
    #[serde(default = "default_true")]
    pub show_bs_dates: bool,
    #[serde(default = "default_ongoing_en")]
    pub ongoing_label_en: String,
    #[serde(default = "default_ongoing_ne")]
    pub ongoing_label_ne: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            show_bs_dates: true,
            ongoing_label_en: default_ongoing_en(),
            ongoing_label_ne: default_ongoing_ne(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_ongoing_en() -> String {
    "Ongoing".to_string()
}

fn default_ongoing_ne() -> String {
    "चलिरहेको".to_string()
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl SiteConfig {
    /// Label appended to a case date range that has no end date.
    pub fn ongoing_label(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.display.ongoing_label_en,
            Language::Ne => &self.display.ongoing_label_ne,
        }
    }
}
