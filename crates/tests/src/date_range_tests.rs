use chrono::{Days, NaiveDate};
use jawafdehi_format::{
    convert_to_bs, BsDate, format_case_date_range, format_date, format_date_time, format_date_with_bs,
    same_local_day, DEFAULT_ONGOING_LABEL, INVALID_DATE, MEDIUM_DATE, NOT_APPLICABLE,
};
use pretty_assertions::assert_eq;

// ── Kathmandu local day ─────────────────────────────────────────────

#[test]
fn utc_evening_rolls_into_next_kathmandu_day() {
    // 18:30Z is 00:15 the next day at +05:45.
    assert_eq!(format_date(Some("2024-01-15T18:30:00Z"), MEDIUM_DATE), "Jan 16, 2024");
    assert_eq!(format_date(Some("2024-01-15T18:00:00Z"), MEDIUM_DATE), "Jan 15, 2024");
    assert_eq!(format_date_time(Some("2024-01-15T18:30:00Z")), "Jan 16, 2024, 12:15 AM");
}

#[test]
fn same_instant_in_different_offsets_is_same_day() {
    assert_eq!(
        same_local_day("2024-01-15T18:30:00Z", "2024-01-16T10:00:00+05:45"),
        Ok(true)
    );
    assert_eq!(
        same_local_day("2024-01-15T10:00:00Z", "2024-01-15T19:00:00Z"),
        Ok(false)
    );
}

#[test]
fn bs_date_follows_kathmandu_day() {
    let bs = convert_to_bs(Some("2024-04-12T18:15:00Z")).expect("in table range");
    assert_eq!((bs.year, bs.month, bs.date), (2081, 1, 1));
    assert_eq!(bs.formatted, "२०८१ बैशाख १");
}

// ── Case ranges ─────────────────────────────────────────────────────

#[test]
fn no_dates_is_not_applicable() {
    assert_eq!(format_case_date_range(None, None, DEFAULT_ONGOING_LABEL), NOT_APPLICABLE);
    assert_eq!(format_case_date_range(Some(""), Some(""), DEFAULT_ONGOING_LABEL), NOT_APPLICABLE);
}

#[test]
fn open_range_is_ongoing() {
    assert_eq!(
        format_case_date_range(Some("2024-01-01"), None, DEFAULT_ONGOING_LABEL),
        "Jan 1, 2024 (२०८० पौष १६) - Ongoing"
    );
}

#[test]
fn end_only_shows_end() {
    assert_eq!(
        format_case_date_range(None, Some("2024-04-13"), DEFAULT_ONGOING_LABEL),
        "Apr 13, 2024 (२०८१ बैशाख १)"
    );
}

#[test]
fn single_day_range_collapses() {
    let start = "2024-01-15T18:30:00Z";
    let end = "2024-01-16T10:00:00+05:45";
    assert_eq!(
        format_case_date_range(Some(start), Some(end), DEFAULT_ONGOING_LABEL),
        format_date_with_bs(Some(start), MEDIUM_DATE)
    );
}

#[test]
fn same_utc_day_can_span_two_kathmandu_days() {
    let range = format_case_date_range(
        Some("2024-01-15T10:00:00Z"),
        Some("2024-01-15T19:00:00Z"),
        DEFAULT_ONGOING_LABEL,
    );
    assert!(range.starts_with("Jan 15, 2024"), "{range}");
    assert!(range.contains(" - Jan 16, 2024"), "{range}");
}

#[test]
fn invalid_parts_degrade_without_panicking() {
    assert_eq!(
        format_case_date_range(Some("garbage"), None, DEFAULT_ONGOING_LABEL),
        format!("{INVALID_DATE} - Ongoing")
    );
    assert_eq!(
        format_case_date_range(Some("2024-01-01"), Some("garbage"), DEFAULT_ONGOING_LABEL),
        format!("Jan 1, 2024 (२०८० पौष १६) - {INVALID_DATE}")
    );
}

#[test]
fn dates_outside_bs_table_show_gregorian_only() {
    assert_eq!(format_date_with_bs(Some("1900-01-01"), MEDIUM_DATE), "Jan 1, 1900");
    assert_eq!(convert_to_bs(Some("1900-01-01")), None);
}

#[test]
fn bs_days_advance_with_gregorian_days() {
    let start = NaiveDate::from_ymd_opt(2023, 4, 14).unwrap();
    let mut prev = BsDate::from_gregorian(start).unwrap();
    assert_eq!((prev.year, prev.month, prev.date), (2080, 1, 1));
    for offset in 1..=366 {
        let day = start.checked_add_days(Days::new(offset)).unwrap();
        let bs = BsDate::from_gregorian(day).unwrap();
        let next_day = (bs.year, bs.month, bs.date) == (prev.year, prev.month, prev.date + 1);
        let next_month = bs.date == 1 && (bs.month == prev.month + 1 || (prev.month == 12 && bs.month == 1));
        assert!(next_day || next_month, "{day}: {bs:?} after {prev:?}");
        assert_eq!(bs.to_gregorian(), Ok(day));
        prev = bs;
    }
}
