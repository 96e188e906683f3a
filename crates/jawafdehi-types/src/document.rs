use serde::{Deserialize, Serialize};

use crate::{JawafEntity, PaginatedList};

/// Known document source categories.
///
/// The API may still return legacy values outside this list, so
/// `DocumentSource` keeps the raw string and callers parse on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentSourceType {
    LegalCourtOrder,
    LegalProcedural,
    OfficialGovernment,
    FinancialForensic,
    InternalCorporate,
    MediaNews,
    InvestigativeReport,
    PublicComplaint,
    LegislativeDoc,
    SocialMedia,
    OtherVisual,
}

impl DocumentSourceType {
    pub const ALL: [DocumentSourceType; 11] = [
        DocumentSourceType::LegalCourtOrder,
        DocumentSourceType::LegalProcedural,
        DocumentSourceType::OfficialGovernment,
        DocumentSourceType::FinancialForensic,
        DocumentSourceType::InternalCorporate,
        DocumentSourceType::MediaNews,
        DocumentSourceType::InvestigativeReport,
        DocumentSourceType::PublicComplaint,
        DocumentSourceType::LegislativeDoc,
        DocumentSourceType::SocialMedia,
        DocumentSourceType::OtherVisual,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentSourceType::LegalCourtOrder => "LEGAL_COURT_ORDER",
            DocumentSourceType::LegalProcedural => "LEGAL_PROCEDURAL",
            DocumentSourceType::OfficialGovernment => "OFFICIAL_GOVERNMENT",
            DocumentSourceType::FinancialForensic => "FINANCIAL_FORENSIC",
            DocumentSourceType::InternalCorporate => "INTERNAL_CORPORATE",
            DocumentSourceType::MediaNews => "MEDIA_NEWS",
            DocumentSourceType::InvestigativeReport => "INVESTIGATIVE_REPORT",
            DocumentSourceType::PublicComplaint => "PUBLIC_COMPLAINT",
            DocumentSourceType::LegislativeDoc => "LEGISLATIVE_DOC",
            DocumentSourceType::SocialMedia => "SOCIAL_MEDIA",
            DocumentSourceType::OtherVisual => "OTHER_VISUAL",
        }
    }

    /// Parse an API value; unknown (legacy) values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    /// Key of the label in the translation catalog.
    pub fn translation_key(self) -> String {
        format!("sourceType.{}", self.as_str())
    }
}

/// The `url` field is a list, but older records carry a bare string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceUrls {
    Many(Vec<String>),
    One(String),
}

/// A document backing one or more allegations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSource {
    pub id: u64,
    pub source_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Raw category; see [`DocumentSourceType::parse`].
    pub source_type: String,
    /// May be missing or null on records still being migrated.
    #[serde(default)]
    pub url: Option<SourceUrls>,
    #[serde(default)]
    pub related_entities: Vec<JawafEntity>,
    pub created_at: String,
    pub updated_at: String,
}

impl DocumentSource {
    pub fn kind(&self) -> Option<DocumentSourceType> {
        DocumentSourceType::parse(&self.source_type)
    }

    /// Non-blank URLs, whichever shape the API sent.
    pub fn urls(&self) -> Vec<&str> {
        match &self.url {
            None => Vec::new(),
            Some(SourceUrls::One(url)) => {
                if url.trim().is_empty() {
                    Vec::new()
                } else {
                    vec![url.as_str()]
                }
            }
            Some(SourceUrls::Many(urls)) => urls
                .iter()
                .map(String::as_str)
                .filter(|u| !u.trim().is_empty())
                .collect(),
        }
    }

    /// Link captions: a lone link reads "View Source", several are numbered.
    pub fn view_source_labels(&self) -> Vec<String> {
        let urls = self.urls();
        if urls.len() == 1 {
            return vec!["View Source".to_string()];
        }
        (1..=urls.len()).map(|n| format!("View Source {n}")).collect()
    }
}

/// Card heading for a cited source, which may not have been fetched.
pub fn source_display_title(source: Option<&DocumentSource>, source_id: u64) -> String {
    source
        .map(|s| s.title.trim())
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Source {source_id}"))
}

pub type PaginatedDocumentSourceList = PaginatedList<DocumentSource>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSourceSearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}
