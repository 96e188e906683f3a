//! Date display in Kathmandu time, optionally paired with the
//! Bikram Sambat date.
//!
//! All public functions accept the nullable ISO strings the API returns and
//! always produce something printable: [`NOT_APPLICABLE`] for missing input,
//! [`INVALID_DATE`] for input that could not be parsed or rendered.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use std::fmt::{self, Write};

use crate::bikram_sambat::{BsDate, CalendarError};

/// Shown when there is no date at all.
pub const NOT_APPLICABLE: &str = "N/A";

/// Shown when a date was present but could not be parsed or rendered.
pub const INVALID_DATE: &str = "Invalid Date";

/// Default label for a case that has started but not ended.
pub const DEFAULT_ONGOING_LABEL: &str = "Ongoing";

/// Medium date, e.g. `Jan 20, 2026`.
pub const MEDIUM_DATE: &str = "%b %-d, %Y";

/// Medium date with time of day, e.g. `Jan 20, 2026, 9:35 PM`.
pub const MEDIUM_DATE_TIME: &str = "%b %-d, %Y, %-I:%M %p";

/// Asia/Kathmandu is UTC+05:45 all year round.
const KATHMANDU_OFFSET_SECS: i32 = 5 * 3600 + 45 * 60;

/// Naive date-time layouts accepted when the string carries no offset.
const NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq)]
pub enum DateError {
    /// The input is not a recognizable ISO-8601 date or date-time.
    Parse(String),
    /// The display pattern contains an unknown specifier.
    Pattern(String),
    /// The instant has no counterpart in the calendar.
    Calendar(CalendarError),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::Parse(input) => write!(f, "unrecognized ISO date: {input:?}"),
            DateError::Pattern(pattern) => write!(f, "invalid date pattern: {pattern:?}"),
            DateError::Calendar(e) => write!(f, "calendar conversion failed: {e}"),
        }
    }
}

impl std::error::Error for DateError {}

impl From<CalendarError> for DateError {
    fn from(e: CalendarError) -> Self {
        DateError::Calendar(e)
    }
}

pub fn kathmandu() -> FixedOffset {
    FixedOffset::east_opt(KATHMANDU_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Parse an ISO-8601 string into an instant expressed in Kathmandu time.
///
/// Strings with an offset (`Z`, `+05:45`, `+0545`) are exact instants.
/// Date-times without an offset and bare dates are taken as Kathmandu
/// wall-clock time, a bare date meaning local midnight.
pub fn parse_iso(value: &str) -> Result<DateTime<FixedOffset>, DateError> {
    let tz = kathmandu();
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&tz));
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Ok(dt.with_timezone(&tz));
    }

    let naive = NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(value, layout).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| DateError::Parse(value.to_string()))?;

    tz.from_local_datetime(&naive)
        .single()
        .ok_or_else(|| DateError::Parse(value.to_string()))
}

/// Render with a strftime pattern, rejecting unknown specifiers up front
/// instead of letting the formatter fail mid-write.
fn render(dt: &DateTime<FixedOffset>, pattern: &str) -> Result<String, DateError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(DateError::Pattern(pattern.to_string()));
    }
    let mut out = String::new();
    write!(out, "{}", dt.format_with_items(items.iter()))
        .map_err(|_| DateError::Pattern(pattern.to_string()))?;
    Ok(out)
}

fn try_format(value: &str, pattern: &str) -> Result<String, DateError> {
    let dt = parse_iso(value)?;
    render(&dt, pattern)
}

/// Format an ISO string in Kathmandu time with a strftime `pattern`
/// (usually [`MEDIUM_DATE`]).
pub fn format_date(value: Option<&str>, pattern: &str) -> String {
    let Some(value) = present(value) else {
        return NOT_APPLICABLE.to_string();
    };
    match try_format(value, pattern) {
        Ok(formatted) => formatted,
        Err(e) => {
            tracing::error!(error = %e, input = value, pattern, "Error formatting date");
            INVALID_DATE.to_string()
        }
    }
}

/// Format an ISO string as date and time of day in Kathmandu time.
pub fn format_date_time(value: Option<&str>) -> String {
    format_date(value, MEDIUM_DATE_TIME)
}

fn try_convert_to_bs(value: &str) -> Result<BsDate, DateError> {
    let local = parse_iso(value)?.date_naive();
    Ok(BsDate::from_gregorian(local)?)
}

/// Bikram Sambat date of the Kathmandu calendar day the instant falls on.
///
/// `None` for missing input and for anything that fails to parse or lies
/// outside the conversion table; callers then show the Gregorian date alone.
pub fn convert_to_bs(value: Option<&str>) -> Option<BsDate> {
    let value = present(value)?;
    match try_convert_to_bs(value) {
        Ok(bs) => Some(bs),
        Err(DateError::Calendar(e)) => {
            tracing::debug!(error = %e, input = value, "No BS date for input");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, input = value, "Error converting to BS date");
            None
        }
    }
}

/// Gregorian rendering followed by the BS date in parentheses, e.g.
/// `Jan 1, 2024 (२०८० पौष १६)`.
pub fn format_date_with_bs(value: Option<&str>, pattern: &str) -> String {
    if present(value).is_none() {
        return NOT_APPLICABLE.to_string();
    }
    let gregorian = format_date(value, pattern);
    match convert_to_bs(value) {
        Some(bs) => format!("{gregorian} ({})", bs.formatted),
        None => gregorian,
    }
}

/// Whether two ISO strings fall on the same Kathmandu calendar day.
pub fn same_local_day(a: &str, b: &str) -> Result<bool, DateError> {
    Ok(parse_iso(a)?.date_naive() == parse_iso(b)?.date_naive())
}

/// Human-readable span of a case.
///
/// - neither date: [`NOT_APPLICABLE`]
/// - only the end: the end date
/// - only the start: `"{start} - {ongoing_label}"`
/// - both on the same Kathmandu day: the start date alone
/// - otherwise: `"{start} - {end}"`
///
/// Each date is rendered with [`format_date_with_bs`] and [`MEDIUM_DATE`].
pub fn format_case_date_range(
    start: Option<&str>,
    end: Option<&str>,
    ongoing_label: &str,
) -> String {
    let with_bs = |value: &str| format_date_with_bs(Some(value), MEDIUM_DATE);

    match (present(start), present(end)) {
        (None, None) => NOT_APPLICABLE.to_string(),
        (None, Some(end)) => with_bs(end),
        (Some(start), None) => format!("{} - {ongoing_label}", with_bs(start)),
        (Some(start), Some(end)) => match same_local_day(start, end) {
            Ok(true) => with_bs(start),
            Ok(false) => format!("{} - {}", with_bs(start), with_bs(end)),
            Err(e) => {
                tracing::warn!(error = %e, start, end, "Error comparing dates");
                format!("{} - {}", with_bs(start), with_bs(end))
            }
        },
    }
}
