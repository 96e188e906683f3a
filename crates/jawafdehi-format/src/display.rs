//! Display values derived from API records, as the case and entity pages
//! render them.

use jawafdehi_types::{Case, CaseStatistics, DocumentSource, Language, SiteConfig};

use crate::date::{format_case_date_range, format_date, format_date_with_bs, MEDIUM_DATE};
use crate::i18n::Catalog;
use crate::numerals::localize_digits;
use crate::slug::generate_case_slug;

pub fn case_slug(case: &Case) -> String {
    generate_case_slug(case.id, &case.title)
}

/// Router path of the case detail page.
pub fn case_path(case: &Case) -> String {
    format!("/case/{}", case_slug(case))
}

/// Case span with the configured "ongoing" label for `lang`.
pub fn case_date_range(case: &Case, lang: Language, config: &SiteConfig) -> String {
    format_case_date_range(
        case.case_start_date.as_deref(),
        case.case_end_date.as_deref(),
        config.ongoing_label(lang),
    )
}

/// A single date, with the BS date appended when the site shows BS dates.
pub fn display_date(value: Option<&str>, config: &SiteConfig) -> String {
    if config.display.show_bs_dates {
        format_date_with_bs(value, MEDIUM_DATE)
    } else {
        format_date(value, MEDIUM_DATE)
    }
}

/// Rendered date of each timeline entry, in timeline order.
pub fn timeline_dates(case: &Case, config: &SiteConfig) -> Vec<String> {
    case.timeline
        .iter()
        .map(|entry| display_date(Some(&entry.date), config))
        .collect()
}

/// Label for a source's category. Known kinds are translated; legacy
/// values are shown as the API sent them.
pub fn source_type_label(source: &DocumentSource, catalog: &Catalog, lang: Language) -> String {
    match source.kind() {
        Some(kind) => {
            let key = kind.translation_key();
            catalog
                .lookup(&key, lang)
                .map(str::to_string)
                .unwrap_or_else(|| source.source_type.clone())
        }
        None => source.source_type.clone(),
    }
}

/// Landing page counter line, e.g. `207 cases · 1,024 entities`, with
/// Nepali digits when `lang` is Nepali.
pub fn statistics_line(stats: &CaseStatistics, catalog: &Catalog, lang: Language) -> String {
    let line = format!(
        "{} {} · {} {} · {} {} · {} {}",
        stats.published_cases,
        catalog.t("stats.publishedCases", lang),
        stats.entities_tracked,
        catalog.t("stats.entitiesTracked", lang),
        stats.cases_under_investigation,
        catalog.t("stats.underInvestigation", lang),
        stats.cases_closed,
        catalog.t("stats.closed", lang),
    );
    localize_digits(&line, lang)
}
