use serde::{Deserialize, Serialize};

/// Label used when an entity reference carries no display name.
pub const UNKNOWN_ENTITY_LABEL: &str = "Unknown Entity";

/// A person, organization or location referenced by cases and sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JawafEntity {
    pub id: u64,
    /// Identifier in the Nepal Entity Service, when linked.
    pub nes_id: Option<String>,
    pub display_name: Option<String>,
    /// IDs of cases in which this entity is alleged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alleged_cases: Option<Vec<u64>>,
    /// IDs of cases in which this entity is related.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_cases: Option<Vec<u64>>,
}

impl JawafEntity {
    /// Name to render, never blank.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_ENTITY_LABEL)
    }

    /// Whether the entity can link to a profile page.
    pub fn has_profile(&self) -> bool {
        self.nes_id.as_deref().is_some_and(|id| !id.trim().is_empty())
    }

    /// Number of cases the entity appears in, alleged or related.
    pub fn case_count(&self) -> usize {
        self.alleged_cases.as_ref().map_or(0, Vec::len)
            + self.related_cases.as_ref().map_or(0, Vec::len)
    }
}
