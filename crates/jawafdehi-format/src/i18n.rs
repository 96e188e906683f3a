//! Translation lookup for static UI strings and for free-form text that
//! arrives from the API.

use jawafdehi_types::Language;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

// ── Catalog ─────────────────────────────────────────────────────────

/// Translation strings keyed by dotted path (`feedback.error.title`).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<Language, HashMap<String, String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, lang: Language, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(lang)
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Load a nested resource object, flattening it to dotted keys.
    /// Non-string leaves are ignored.
    pub fn load_json(&mut self, lang: Language, resources: &Value) {
        let mut flat = Vec::new();
        flatten("", resources, &mut flat);
        for (key, value) in flat {
            self.insert(lang, key, value);
        }
    }

    pub fn from_json(resources: &[(Language, Value)]) -> Self {
        let mut catalog = Self::new();
        for (lang, value) in resources {
            catalog.load_json(*lang, value);
        }
        catalog
    }

    /// Look up `key` in `lang`, then in English. Empty strings count as missing.
    pub fn lookup(&self, key: &str, lang: Language) -> Option<&str> {
        let find = |l: Language| {
            self.entries
                .get(&l)
                .and_then(|m| m.get(key))
                .map(String::as_str)
                .filter(|v| !v.is_empty())
        };
        find(lang).or_else(|| find(Language::En))
    }

    /// Translated string, or the key itself when no language has it.
    pub fn t<'a>(&'a self, key: &'a str, lang: Language) -> &'a str {
        self.lookup(key, lang).unwrap_or(key)
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::String(s) => out.push((prefix.to_string(), s.clone())),
        Value::Object(map) => {
            for (key, nested) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, nested, out);
            }
        }
        _ => {}
    }
}

// ── Dynamic text ────────────────────────────────────────────────────

/// Bilingual terms that show up in API payloads (positions, parties,
/// statuses, places) but are not part of the static catalog.
const COMMON_TERMS: &[(&str, &str, &str)] = &[
    // election types
    ("federal", "Federal", "संघीय"),
    ("provincial", "Provincial", "प्रदेश"),
    ("local", "Local", "स्थानीय"),
    ("ward", "Ward", "वडा"),
    // positions
    ("federal_parliament", "Federal Parliament", "संघीय संसद"),
    ("member", "Member", "सदस्य"),
    ("candidate", "Candidate", "उम्मेदवार"),
    ("representative", "Representative", "प्रतिनिधि"),
    ("minister", "Minister", "मन्त्री"),
    ("secretary", "Secretary", "सचिव"),
    ("director", "Director", "निर्देशक"),
    ("chief", "Chief", "प्रमुख"),
    ("president", "President", "अध्यक्ष"),
    ("vice_president", "Vice President", "उपाध्यक्ष"),
    ("chairperson", "Chairperson", "अध्यक्ष"),
    // election symbols
    ("sun", "Sun", "सूर्य"),
    ("bell", "Bell", "घण्टा"),
    ("tree", "Tree", "रुख"),
    ("plow", "Plow", "हलो"),
    ("umbrella", "Umbrella", "छाता"),
    ("star", "Star", "तारा"),
    ("moon", "Moon", "चन्द्रमा"),
    ("lotus", "Lotus", "कमल"),
    ("hand", "Hand", "हात"),
    ("flag", "Flag", "झण्डा"),
    // organizations
    ("parliament", "Parliament", "संसद"),
    ("assembly", "Assembly", "सभा"),
    ("council", "Council", "परिषद"),
    ("committee", "Committee", "समिति"),
    ("commission", "Commission", "आयोग"),
    ("ministry", "Ministry", "मन्त्रालय"),
    ("department", "Department", "विभाग"),
    ("office", "Office", "कार्यालय"),
    // entity types
    ("person", "Person", "व्यक्ति"),
    ("organization", "Organization", "संस्था"),
    ("location", "Location", "स्थान"),
    ("political_party", "Political Party", "राजनीतिक दल"),
    ("government_body", "Government Body", "सरकारी निकाय"),
    ("company", "Company", "कम्पनी"),
    ("ngo", "NGO", "गैरसरकारी संस्था"),
    ("ingo", "INGO", "अन्तर्राष्ट्रिय गैरसरकारी संस्था"),
    // political parties
    ("nepali_congress", "Nepali Congress", "नेपाली कांग्रेस"),
    ("cpn_uml", "CPN-UML", "नेकपा एमाले"),
    ("cpn_maoist_centre", "CPN (Maoist Centre)", "नेकपा (माओवादी केन्द्र)"),
    ("rastriya_swatantra_party", "Rastriya Swatantra Party", "राष्ट्रिय स्वतन्त्र पार्टी"),
    ("rastriya_prajatantra_party", "Rastriya Prajatantra Party", "राष्ट्रिय प्रजातन्त्र पार्टी"),
    ("janata_samajwadi_party", "Janata Samajwadi Party", "जनता समाजवादी पार्टी"),
    ("loktantrik_samajwadi_party", "Loktantrik Samajwadi Party", "लोकतान्त्रिक समाजवादी पार्टी"),
    // election words
    ("election", "Election", "निर्वाचन"),
    ("elected", "Elected", "निर्वाचित"),
    ("not_elected", "Not Elected", "निर्वाचित भएन"),
    ("votes", "Votes", "मत"),
    ("symbol", "Symbol", "चिन्ह"),
    // case statuses
    ("active", "Active", "सक्रिय"),
    ("closed", "Closed", "बन्द"),
    ("pending", "Pending", "विचाराधीन"),
    ("under_review", "Under Review", "समीक्षाधीन"),
    ("ongoing", "Ongoing", "चलिरहेको"),
    ("resolved", "Resolved", "समाधान भएको"),
    ("under_investigation", "Under Investigation", "अनुसन्धानमा"),
    // case types
    ("corruption", "Corruption", "भ्रष्टाचार"),
    ("misconduct", "Misconduct", "दुर्व्यवहार"),
    ("breach_of_trust", "Breach of Trust", "विश्वासको उल्लङ्घन"),
    ("broken_promise", "Broken Promise", "भाँचिएको वाचा"),
    ("promises", "Promises", "वाचा"),
    ("media_trial", "Media Trial", "मिडिया ट्रायल"),
    ("abuse_of_power", "Abuse of Power", "शक्तिको दुरुपयोग"),
    ("embezzlement", "Embezzlement", "गबन"),
    ("bribery", "Bribery", "रिश्वत"),
    ("nepotism", "Nepotism", "भाईभतिजावाद"),
    ("favoritism", "Favoritism", "पक्षपात"),
    ("conflict_of_interest", "Conflict of Interest", "हितको द्वन्द्व"),
    ("misappropriation", "Misappropriation", "दुरुपयोग"),
    // placeholders
    ("unknown", "Unknown", "अज्ञात"),
    ("unknown_entity", "Unknown Entity", "अज्ञात संस्था"),
    ("unknown_location", "Unknown Location", "अज्ञात स्थान"),
    ("view_source", "View Source", "स्रोत हेर्नुहोस्"),
    ("source", "Source", "स्रोत"),
    // provinces
    ("province_1", "Province 1", "प्रदेश १"),
    ("province_2", "Province 2", "प्रदेश २"),
    ("bagmati", "Bagmati", "बागमती"),
    ("gandaki", "Gandaki", "गण्डकी"),
    ("lumbini", "Lumbini", "लुम्बिनी"),
    ("karnali", "Karnali", "कर्णाली"),
    ("sudurpashchim", "Sudurpashchim", "सुदूरपश्चिम"),
    // cities
    ("kathmandu", "Kathmandu", "काठमाडौं"),
    ("pokhara", "Pokhara", "पोखरा"),
    ("lalitpur", "Lalitpur", "ललितपुर"),
    ("bhaktapur", "Bhaktapur", "भक्तपुर"),
    ("biratnagar", "Biratnagar", "विराटनगर"),
    ("birgunj", "Birgunj", "वीरगंज"),
    ("dharan", "Dharan", "धरान"),
    ("butwal", "Butwal", "बुटवल"),
    ("hetauda", "Hetauda", "हेटौंडा"),
    ("janakpur", "Janakpur", "जनकपुर"),
    ("nepalgunj", "Nepalgunj", "नेपालगंज"),
    ("dhangadhi", "Dhangadhi", "धनगढी"),
];

fn is_term_separator(c: char) -> bool {
    c.is_whitespace() || c == '_' || c == '-'
}

/// Lookup key for a term: lowercase, separator runs become one `_`.
pub fn normalize_key(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut key = String::with_capacity(lowered.len());
    let mut in_separator = false;
    for c in lowered.chars() {
        if is_term_separator(c) {
            if !in_separator {
                key.push('_');
            }
            in_separator = true;
        } else {
            key.push(c);
            in_separator = false;
        }
    }
    key
}

#[derive(Debug, Clone, PartialEq)]
struct Term {
    en: String,
    ne: String,
}

impl Term {
    fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Ne => &self.ne,
        }
    }
}

/// Dictionary used to translate free-form API text.
#[derive(Debug, Clone)]
pub struct TermDictionary {
    terms: HashMap<String, Term>,
}

impl Default for TermDictionary {
    fn default() -> Self {
        let terms = COMMON_TERMS
            .iter()
            .map(|(key, en, ne)| {
                (
                    (*key).to_string(),
                    Term {
                        en: (*en).to_string(),
                        ne: (*ne).to_string(),
                    },
                )
            })
            .collect();
        Self { terms }
    }
}

impl TermDictionary {
    /// Dictionary preloaded with the built-in terms.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_term(&mut self, key: &str, en: impl Into<String>, ne: impl Into<String>) {
        self.terms.insert(
            normalize_key(key),
            Term {
                en: en.into(),
                ne: ne.into(),
            },
        );
    }

    pub fn get(&self, text: &str, lang: Language) -> Option<&str> {
        self.terms.get(&normalize_key(text)).map(|t| t.get(lang))
    }

    /// Translate a phrase as a whole, or word by word when the phrase is
    /// unknown but has several words. Unknown text comes back unchanged.
    pub fn translate(&self, text: &str, lang: Language) -> String {
        if text.is_empty() {
            return String::new();
        }
        if let Some(whole) = self.get(text, lang) {
            return whole.to_string();
        }

        let words: Vec<&str> = text.split(is_term_separator).filter(|w| !w.is_empty()).collect();
        if words.len() > 1 {
            return words
                .into_iter()
                .map(|word| self.get(word, lang).unwrap_or(word))
                .collect::<Vec<_>>()
                .join(" ");
        }
        text.to_string()
    }
}

// ── Entity detail helpers ───────────────────────────────────────────

fn catalog_or_dictionary(
    key: &str,
    text: &str,
    catalog: &Catalog,
    terms: &TermDictionary,
    lang: Language,
) -> String {
    match catalog.lookup(key, lang) {
        Some(translated) => translated.to_string(),
        None => terms.translate(text, lang),
    }
}

/// Translate a position or role, e.g. `federal_parliament member`.
pub fn translate_position(
    position: &str,
    catalog: &Catalog,
    terms: &TermDictionary,
    lang: Language,
) -> String {
    let key = format!("entityDetail.{}", normalize_key(position));
    catalog_or_dictionary(&key, position, catalog, terms, lang)
}

/// Translate an election label such as `2079` + `federal`.
///
/// The catalog may hold a dedicated key (`entityDetail.2079Federal`);
/// otherwise the year is kept and the type translated.
pub fn translate_election_year_type(
    year: &str,
    election_type: &str,
    catalog: &Catalog,
    terms: &TermDictionary,
    lang: Language,
) -> String {
    let mut chars = election_type.chars();
    let capitalized = match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase()),
        None => String::new(),
    };
    let key = format!("entityDetail.{year}{capitalized}");
    match catalog.lookup(&key, lang) {
        Some(translated) => translated.to_string(),
        None => format!("{year} {}", terms.translate(election_type, lang)),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LangValue {
    #[serde(default)]
    pub value: Option<String>,
}

/// Election symbol name: either plain text or a per-language record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SymbolName {
    Plain(String),
    Localized {
        #[serde(default)]
        en: Option<LangValue>,
        #[serde(default)]
        ne: Option<LangValue>,
    },
}

/// Translate an election symbol name.
///
/// A localized record in the requested language wins outright. Otherwise
/// the available value is matched against the bell symbols the catalog
/// names explicitly, then against the dictionary.
pub fn translate_symbol_name(
    symbol: Option<&SymbolName>,
    catalog: &Catalog,
    terms: &TermDictionary,
    lang: Language,
) -> String {
    let value = match symbol {
        None => return String::new(),
        Some(SymbolName::Plain(text)) => text.clone(),
        Some(SymbolName::Localized { en, ne }) => {
            let pick = |v: &Option<LangValue>| {
                v.as_ref()
                    .and_then(|lv| lv.value.clone())
                    .filter(|s| !s.is_empty())
            };
            let (en, ne) = (pick(en), pick(ne));
            let requested = match lang {
                Language::En => en.clone(),
                Language::Ne => ne.clone(),
            };
            if let Some(direct) = requested {
                return direct;
            }
            en.or(ne).unwrap_or_default()
        }
    };
    if value.is_empty() {
        return String::new();
    }

    let lowered = value.to_lowercase();
    if lowered.contains("bell") {
        let key = if lowered.contains("circle") {
            "entityDetail.bellInsideCircle"
        } else {
            "entityDetail.bell"
        };
        return catalog.t(key, lang).to_string();
    }
    terms.translate(&value, lang)
}
