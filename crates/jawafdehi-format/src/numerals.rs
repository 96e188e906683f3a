//! Devanagari digit substitution.

use jawafdehi_types::Language;
use std::fmt::Display;

/// Devanagari digits, indexed by decimal value.
pub const NEPALI_NUMERALS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

fn nepali_digit(c: char) -> char {
    match c.to_digit(10) {
        Some(d) => NEPALI_NUMERALS[d as usize],
        None => c,
    }
}

/// Render a number with Nepali digits, keeping digit order and any
/// non-digit characters (sign, separators) as they are.
pub fn to_nepali_numerals(value: impl Display) -> String {
    value.to_string().chars().map(nepali_digit).collect()
}

/// Swap ASCII digits for the display language's glyphs.
pub fn localize_digits(text: &str, lang: Language) -> String {
    match lang {
        Language::En => text.to_string(),
        Language::Ne => text.chars().map(nepali_digit).collect(),
    }
}
