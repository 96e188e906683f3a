use serde::{Deserialize, Serialize};
use std::fmt;

/// Display language of the site. Nepali is the default for new visitors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Ne,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ne];

    /// Two-letter code used in translation catalogs and query strings.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ne => "ne",
        }
    }

    /// Parse a language code, accepting region suffixes like `en-US`.
    pub fn parse(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "ne" | "np" => Some(Language::Ne),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
