//! Case URL slugs.
//!
//! A case path segment is the numeric case ID followed by a readable
//! rendering of the title: `207-rabi-lamichhane-cooperative-fraud`. Only
//! the ID is ever read back, so the title part may be lossy. Devanagari
//! and other non-Latin text is dropped rather than transliterated.

use std::fmt::Display;

/// Reduce text to lowercase ASCII letters and digits joined by single hyphens.
///
/// Underscores, whitespace, hyphens and every character outside
/// `[A-Za-z0-9]` all act as separators; runs of separators collapse into
/// one hyphen and none survive at either end. Text with no ASCII letters or
/// digits yields an empty string.
pub fn generate_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for c in lowered.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Path segment for a case: `"{id}-{slug}"`, or just `"{id}"` when the
/// title has nothing slug-worthy in it.
pub fn generate_case_slug(id: impl Display, title: &str) -> String {
    let slug = generate_slug(title);
    if slug.is_empty() {
        id.to_string()
    } else {
        format!("{id}-{slug}")
    }
}

/// Recover the case ID from a path segment.
///
/// The text before the first hyphen is read like a lenient integer parse:
/// leading whitespace and a `+` are allowed and trailing non-digits are
/// ignored. Returns `None` for empty input, a non-numeric or signed-negative
/// lead, zero, or a value that does not fit in a `u64`. Real case IDs
/// start at 1.
pub fn extract_id_from_slug(segment: &str) -> Option<u64> {
    if segment.is_empty() {
        return None;
    }
    let lead = segment.split('-').next()?.trim_start();
    let unsigned = lead.strip_prefix('+').unwrap_or(lead);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let id: u64 = unsigned[..digits_end].parse().ok()?;
    (id > 0).then_some(id)
}
