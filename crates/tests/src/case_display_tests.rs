use jawafdehi_format::{
    case_date_range, case_path, display_date, source_type_label, tag_description, timeline_dates,
    Catalog, NOT_APPLICABLE,
};
use jawafdehi_types::{source_display_title, Language, SiteConfig};
use pretty_assertions::assert_eq;

use crate::common::{case_fixture, source_fixture};

fn catalog() -> Catalog {
    Catalog::from_json(&[
        (
            Language::En,
            serde_json::json!({
                "sourceType": {"OFFICIAL_GOVERNMENT": "Official (Government)"}
            }),
        ),
        (
            Language::Ne,
            serde_json::json!({
                "sourceType": {"OFFICIAL_GOVERNMENT": "आधिकारिक (सरकारी)", "MEDIA_NEWS": ""}
            }),
        ),
    ])
}

// ── Case pages ──────────────────────────────────────────────────────

#[test]
fn case_card_fields() {
    let case = case_fixture(serde_json::json!({}));
    let config = SiteConfig::default();

    assert_eq!(case_path(&case), "/case/207-rabi-lamichhane-cooperative-fraud");
    assert_eq!(
        case_date_range(&case, Language::Ne, &config),
        "Jan 1, 2024 (२०८० पौष १६) - चलिरहेको"
    );
    assert_eq!(case.evidence_source_ids(), vec![3, 5]);
    assert_eq!(case.alleged_entities[0].label(), "Rabi Lamichhane");
}

#[test]
fn closed_case_range() {
    let case = case_fixture(serde_json::json!({
        "case_start_date": "2024-01-01",
        "case_end_date": "2024-04-13"
    }));
    assert_eq!(
        case_date_range(&case, Language::En, &SiteConfig::default()),
        "Jan 1, 2024 (२०८० पौष १६) - Apr 13, 2024 (२०८१ बैशाख १)"
    );
}

#[test]
fn undated_case() {
    let case = case_fixture(serde_json::json!({
        "case_start_date": null,
        "case_end_date": null
    }));
    assert_eq!(case_date_range(&case, Language::En, &SiteConfig::default()), NOT_APPLICABLE);
}

#[test]
fn timeline_without_bs_dates() {
    let case = case_fixture(serde_json::json!({}));
    let mut config = SiteConfig::default();
    config.display.show_bs_dates = false;
    assert_eq!(timeline_dates(&case, &config), vec!["Jan 1, 2024", "Apr 13, 2024"]);
    assert_eq!(display_date(None, &config), NOT_APPLICABLE);
}

#[test]
fn unknown_tags_read_as_words() {
    let case = case_fixture(serde_json::json!({}));
    assert!(case.has_tag("cooperative-fraud"));
    assert_eq!(tag_description(&case.tags[0], Language::Ne), "Cooperative Fraud");
}

// ── Sources ─────────────────────────────────────────────────────────

#[test]
fn source_labels() {
    let catalog = catalog();
    let official = source_fixture("OFFICIAL_GOVERNMENT", serde_json::json!(["https://oag.gov.np/r.pdf"]));
    assert_eq!(source_type_label(&official, &catalog, Language::Ne), "आधिकारिक (सरकारी)");
    assert_eq!(source_type_label(&official, &catalog, Language::En), "Official (Government)");

    // Empty translation and no English entry: raw value.
    let news = source_fixture("MEDIA_NEWS", serde_json::json!([]));
    assert_eq!(source_type_label(&news, &catalog, Language::Ne), "MEDIA_NEWS");

    let legacy = source_fixture("government", serde_json::json!("https://example.org"));
    assert_eq!(source_type_label(&legacy, &catalog, Language::En), "government");
}

#[test]
fn source_urls_accept_both_shapes() {
    let one = source_fixture("MEDIA_NEWS", serde_json::json!("https://kathmandupost.com/a"));
    assert_eq!(one.view_source_labels(), vec!["View Source"]);

    let many = source_fixture(
        "MEDIA_NEWS",
        serde_json::json!(["https://a.example", " ", "https://b.example"]),
    );
    assert_eq!(many.view_source_labels(), vec!["View Source 1", "View Source 2"]);

    let missing = source_fixture("MEDIA_NEWS", serde_json::Value::Null);
    assert!(missing.urls().is_empty());
}

#[test]
fn unfetched_source_title() {
    let source = source_fixture("MEDIA_NEWS", serde_json::Value::Null);
    assert_eq!(
        source_display_title(Some(&source), 3),
        "Office of the Auditor General report"
    );
    assert_eq!(source_display_title(None, 9), "Source 9");
}
