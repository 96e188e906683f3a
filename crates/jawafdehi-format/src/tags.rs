use jawafdehi_types::Language;

/// Bilingual descriptions of entity tags: `(tag, en, ne)`.
const TAG_DESCRIPTIONS: &[(&str, &str, &str)] = &[
    ("federal-election-2082-candidate", "A candidate in Federal election, 2082 B.S.", "संघीय निर्वाचन, २०८२ बि.सं. मा उम्मेदवार"),
    ("federal-election-2082-elected", "A winner in Federal election, 2082 B.S.", "संघीय निर्वाचन, २०८२ बि.सं. मा विजयी"),
    ("federal-election-2079-candidate", "A candidate in Federal election, 2079 B.S.", "संघीय निर्वाचन, २०७९ बि.सं. मा उम्मेदवार"),
    ("federal-election-2079-elected", "A winner in Federal election, 2079 B.S.", "संघीय निर्वाचन, २०७९ बि.सं. मा विजयी"),
    ("provincial-election-2079-candidate", "A candidate in Provincial election, 2079 B.S.", "प्रदेश निर्वाचन, २०७९ बि.सं. मा उम्मेदवार"),
    ("provincial-election-2079-elected", "A winner in Provincial election, 2079 B.S.", "प्रदेश निर्वाचन, २०७९ बि.सं. मा विजयी"),
    ("local-election-2079-candidate", "A candidate in Local election, 2079 B.S.", "स्थानीय निर्वाचन, २०७९ बि.सं. मा उम्मेदवार"),
    ("local-election-2079-elected", "A winner in Local election, 2079 B.S.", "स्थानीय निर्वाचन, २०७९ बि.सं. मा विजयी"),
    ("federal-election-2074-candidate", "A candidate in Federal election, 2074 B.S.", "संघीय निर्वाचन, २०७४ बि.सं. मा उम्मेदवार"),
    ("federal-election-2074-elected", "A winner in Federal election, 2074 B.S.", "संघीय निर्वाचन, २०७४ बि.सं. मा विजयी"),
    ("provincial-election-2074-candidate", "A candidate in Provincial election, 2074 B.S.", "प्रदेश निर्वाचन, २०७४ बि.सं. मा उम्मेदवार"),
    ("provincial-election-2074-elected", "A winner in Provincial election, 2074 B.S.", "प्रदेश निर्वाचन, २०७४ बि.सं. मा विजयी"),
    ("local-election-2074-candidate", "A candidate in Local election, 2074 B.S.", "स्थानीय निर्वाचन, २०७४ बि.सं. मा उम्मेदवार"),
    ("local-election-2074-elected", "A winner in Local election, 2074 B.S.", "स्थानीय निर्वाचन, २०७४ बि.सं. मा विजयी"),
    ("political-party-member", "A member of a political party", "राजनीतिक दलको सदस्य"),
    ("political-party-leader", "A leader of a political party", "राजनीतिक दलको नेता"),
    ("government-official", "A government official with administrative responsibilities", "प्रशासनिक जिम्मेवारी भएको सरकारी अधिकारी"),
    ("minister", "A government minister", "सरकारी मन्त्री"),
    ("state-minister", "A state minister", "राज्य मन्त्री"),
    ("secretary", "A government secretary", "सरकारी सचिव"),
    ("member-of-parliament", "A member of the federal parliament", "संघीय संसदको सदस्य"),
    ("provincial-assembly-member", "A member of a provincial assembly", "प्रदेश सभाको सदस्य"),
    ("mayor", "A mayor of a municipality", "नगरपालिकाको मेयर"),
    ("deputy-mayor", "A deputy mayor of a municipality", "नगरपालिकाको उपमेयर"),
    ("ward-chairperson", "A chairperson of a ward", "वडाको अध्यक्ष"),
    ("person", "An individual person", "एक व्यक्तिगत व्यक्ति"),
    ("organization", "An organizational body or institution", "संगठनात्मक निकाय वा संस्था"),
    ("political-party", "A political party", "राजनीतिक दल"),
    ("government-body", "A government body or institution", "सरकारी निकाय वा संस्था"),
];

/// Description of a tag in the given language.
///
/// Unknown tags are shown as words: hyphens become spaces and each word
/// starts with a capital (`land-encroachment` → `Land Encroachment`).
pub fn tag_description(tag: &str, lang: Language) -> String {
    match TAG_DESCRIPTIONS.iter().find(|(key, _, _)| *key == tag) {
        Some((_, en, ne)) => match lang {
            Language::En => (*en).to_string(),
            Language::Ne => (*ne).to_string(),
        },
        None => humanize_tag(tag),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn humanize_tag(tag: &str) -> String {
    let spaced = tag.replace('-', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut prev_is_word = false;
    for c in spaced.chars() {
        let word = is_word_char(c);
        if word && !prev_is_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = word;
    }
    out
}
