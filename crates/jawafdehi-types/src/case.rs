use serde::{Deserialize, Serialize};

use crate::{JawafEntity, PaginatedList};

// ── Enums ───────────────────────────────────────────────────────────

/// Kind of accountability record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseType {
    Corruption,
    Promises,
}

impl CaseType {
    pub fn as_str(self) -> &'static str {
        match self {
            CaseType::Corruption => "CORRUPTION",
            CaseType::Promises => "PROMISES",
        }
    }
}

// ── Nested records ──────────────────────────────────────────────────

/// A dated event in the case chronology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// ISO date.
    pub date: String,
    pub title: String,
    pub description: String,
}

/// A reference from a case to a document source backing an allegation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceEntry {
    pub source_id: u64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_summary: Option<String>,
    pub datetime: String,
}

/// Complete edit trail of a case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditHistory {
    #[serde(default)]
    pub versions: Vec<VersionInfo>,
}

impl AuditHistory {
    /// Most recent version, by version number.
    pub fn latest(&self) -> Option<&VersionInfo> {
        self.versions.iter().max_by_key(|v| v.version_number)
    }
}

// ── Case ────────────────────────────────────────────────────────────

/// A published case as returned by the list and detail endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: u64,
    /// Identifier shared across versions of the same case.
    pub case_id: String,
    pub case_type: CaseType,
    pub title: String,
    /// ISO date.
    pub case_start_date: Option<String>,
    /// ISO date.
    pub case_end_date: Option<String>,
    #[serde(default)]
    pub alleged_entities: Vec<JawafEntity>,
    #[serde(default)]
    pub related_entities: Vec<JawafEntity>,
    #[serde(default)]
    pub locations: Vec<JawafEntity>,
    /// Categorization tags, e.g. `land-encroachment`.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Rich text description.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub key_allegations: Vec<String>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub evidence: Vec<EvidenceEntry>,
    #[serde(default, rename = "versionInfo", skip_serializing_if = "Option::is_none")]
    pub version_info: Option<VersionInfo>,
    pub created_at: String,
    pub updated_at: String,
}

impl Case {
    /// Source IDs cited as evidence, in citation order without repeats.
    pub fn evidence_source_ids(&self) -> Vec<u64> {
        let mut ids = Vec::with_capacity(self.evidence.len());
        for entry in &self.evidence {
            if !ids.contains(&entry.source_id) {
                ids.push(entry.source_id);
            }
        }
        ids
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Detail endpoint shape: a case plus its audit history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseDetail {
    #[serde(flatten)]
    pub case: Case,
    #[serde(default)]
    pub audit_history: AuditHistory,
}

pub type PaginatedCaseList = PaginatedList<Case>;

// ── Search parameters ───────────────────────────────────────────────

/// Filters accepted by the case list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseSearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_type: Option<CaseType>,
    /// Comma-separated tag filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl CaseSearchParams {
    /// Query string pairs for the set, non-blank filters.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(case_type) = self.case_type {
            pairs.push(("case_type", case_type.as_str().to_string()));
        }
        if let Some(tags) = self.tags.as_deref().filter(|t| !t.trim().is_empty()) {
            pairs.push(("tags", tags.trim().to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("search", search.trim().to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}
