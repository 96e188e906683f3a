use jawafdehi_types::{Case, DocumentSource};
use serde_json::Value;

/// A published case as the list endpoint returns it. `overrides` is merged
/// over the defaults, so tests only spell out the fields they care about.
pub fn case_fixture(overrides: Value) -> Case {
    let mut body = serde_json::json!({
        "id": 207,
        "case_id": "case-207",
        "case_type": "CORRUPTION",
        "title": "Rabi Lamichhane Cooperative Fraud",
        "case_start_date": "2024-01-01",
        "case_end_date": null,
        "alleged_entities": [
            {"id": 11, "nes_id": "entity:person/rabi-lamichhane", "display_name": "Rabi Lamichhane"}
        ],
        "related_entities": [],
        "locations": [
            {"id": 40, "nes_id": null, "display_name": "Kathmandu"}
        ],
        "tags": ["cooperative-fraud"],
        "description": "<p>Misuse of cooperative deposits.</p>",
        "key_allegations": ["Diverted deposits"],
        "timeline": [
            {"date": "2024-01-01", "title": "Complaint filed", "description": ""},
            {"date": "2024-04-13", "title": "Charge sheet", "description": ""}
        ],
        "evidence": [
            {"source_id": 3, "description": "Audit report"},
            {"source_id": 5, "description": "Bank statement"},
            {"source_id": 3, "description": "Audit annex"}
        ],
        "created_at": "2024-01-02T04:00:00Z",
        "updated_at": "2024-05-01T04:00:00Z"
    });
    merge(&mut body, overrides);
    serde_json::from_value(body).expect("case fixture should deserialize")
}

pub fn source_fixture(source_type: &str, url: Value) -> DocumentSource {
    serde_json::from_value(serde_json::json!({
        "id": 3,
        "source_id": "source:20240101:abc",
        "title": "Office of the Auditor General report",
        "description": "",
        "source_type": source_type,
        "url": url,
        "related_entities": [],
        "created_at": "2024-01-02T04:00:00Z",
        "updated_at": "2024-01-02T04:00:00Z"
    }))
    .expect("source fixture should deserialize")
}

fn merge(base: &mut Value, overrides: Value) {
    if let (Value::Object(base), Value::Object(overrides)) = (base, overrides) {
        for (key, value) in overrides {
            base.insert(key, value);
        }
    }
}
