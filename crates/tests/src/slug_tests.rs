use jawafdehi_format::{extract_id_from_slug, generate_case_slug, generate_slug};
use pretty_assertions::assert_eq;

use crate::common::case_fixture;

const TITLES: &[&str] = &[
    "Rabi Lamichhane Cooperative Fraud",
    "2079 Election Fund Misuse",
    "Case #123: Special! Characters?",
    "रवि लामिछाने सहकारी घोटाला",
    "Melamchi Water Supply – Delay & Cost Overrun",
    "",
    "   ",
];

// ── Round trip ──────────────────────────────────────────────────────

#[test]
fn id_survives_slug_round_trip() {
    for id in [1u64, 7, 42, 207, 10_000, u64::MAX] {
        for title in TITLES {
            let slug = generate_case_slug(id, title);
            assert_eq!(extract_id_from_slug(&slug), Some(id), "slug {slug:?}");
        }
    }
}

#[test]
fn case_slug_has_no_stray_hyphens() {
    for title in TITLES {
        let slug = generate_case_slug(207, title);
        assert!(!slug.ends_with('-'), "{slug:?}");
        assert!(!slug.contains("--"), "{slug:?}");
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }
}

#[test]
fn title_slug_is_stable_under_reslugging() {
    for title in TITLES {
        let once = generate_slug(title);
        assert_eq!(generate_slug(&once), once);
    }
}

// ── Against API records ─────────────────────────────────────────────

#[test]
fn slug_from_deserialized_case() {
    let case = case_fixture(serde_json::json!({
        "id": 175,
        "title": "Case with many words and numbers 123"
    }));
    let slug = generate_case_slug(case.id, &case.title);
    assert_eq!(slug, "175-case-with-many-words-and-numbers-123");
    assert_eq!(extract_id_from_slug(&slug), Some(175));
}

#[test]
fn legacy_numeric_paths_still_resolve() {
    assert_eq!(extract_id_from_slug("207"), Some(207));
}

#[test]
fn garbage_paths_do_not_resolve() {
    for segment in ["", "-", "abc", "abc-207", "-207-x", "0", "0-zero"] {
        assert_eq!(extract_id_from_slug(segment), None, "segment {segment:?}");
    }
}
