//! Gregorian ⇄ Bikram Sambat conversion.
//!
//! The BS calendar has no closed-form month lengths; they are published
//! year by year. Conversion counts days from a fixed epoch
//! (BS 2000-01-01 = AD 1943-04-14) and walks the month-length table.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::numerals::to_nepali_numerals;

/// First BS year covered by [`BS_MONTH_DAYS`].
pub const BS_START_YEAR: i32 = 2000;

/// Last BS year covered by [`BS_MONTH_DAYS`].
pub const BS_END_YEAR: i32 = BS_START_YEAR + BS_MONTH_DAYS.len() as i32 - 1;

/// Nepali month names, Baishakh first.
pub const NEPALI_MONTHS: [&str; 12] = [
    "बैशाख", "जेष्ठ", "आषाढ", "श्रावण", "भाद्र", "आश्विन",
    "कार्तिक", "मंसिर", "पौष", "माघ", "फाल्गुन", "चैत्र",
];

/// Days in each month, one row per BS year from [`BS_START_YEAR`].
#[rustfmt::skip]
pub const BS_MONTH_DAYS: [[u8; 12]; 91] = [
    /* 2000 */ [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    /* 2001 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2002 */ [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    /* 2003 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    /* 2004 */ [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    /* 2005 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2006 */ [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    /* 2007 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    /* 2008 */ [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31],
    /* 2009 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2010 */ [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    /* 2011 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    /* 2012 */ [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30],
    /* 2013 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2014 */ [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    /* 2015 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    /* 2016 */ [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30],
    /* 2017 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2018 */ [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    /* 2019 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    /* 2020 */ [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2021 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2022 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30],
    /* 2023 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    /* 2024 */ [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2025 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2026 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    /* 2027 */ [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    /* 2028 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2029 */ [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30],
    /* 2030 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    /* 2031 */ [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    /* 2032 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2033 */ [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    /* 2034 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    /* 2035 */ [30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31],
    /* 2036 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2037 */ [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    /* 2038 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    /* 2039 */ [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30],
    /* 2040 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2041 */ [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    /* 2042 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    /* 2043 */ [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30],
    /* 2044 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2045 */ [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    /* 2046 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    /* 2047 */ [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2048 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2049 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30],
    /* 2050 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    /* 2051 */ [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2052 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2053 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30],
    /* 2054 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    /* 2055 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2056 */ [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30],
    /* 2057 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    /* 2058 */ [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    /* 2059 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2060 */ [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    /* 2061 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    /* 2062 */ [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31],
    /* 2063 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2064 */ [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    /* 2065 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    /* 2066 */ [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31],
    /* 2067 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2068 */ [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    /* 2069 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    /* 2070 */ [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30],
    /* 2071 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2072 */ [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30],
    /* 2073 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31],
    /* 2074 */ [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2075 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2076 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30],
    /* 2077 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31],
    /* 2078 */ [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2079 */ [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30],
    /* 2080 */ [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30],
    /* 2081 */ [31, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30],
    /* 2082 */ [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30],
    /* 2083 */ [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30],
    /* 2084 */ [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30],
    /* 2085 */ [31, 32, 31, 32, 30, 31, 30, 30, 29, 30, 30, 30],
    /* 2086 */ [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30],
    /* 2087 */ [31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30],
    /* 2088 */ [30, 31, 32, 32, 30, 31, 30, 30, 29, 30, 30, 30],
    /* 2089 */ [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30],
    /* 2090 */ [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30],
];

/// Gregorian date of BS 2000-01-01.
fn epoch() -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(1943, 4, 14).ok_or(CalendarError::InvalidDate)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The date falls outside the month-length table.
    OutOfRange,
    /// Month or day number does not exist in the calendar.
    InvalidDate,
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::OutOfRange => write!(
                f,
                "date outside supported range (BS {BS_START_YEAR}-{BS_END_YEAR})"
            ),
            CalendarError::InvalidDate => write!(f, "invalid calendar date"),
        }
    }
}

impl std::error::Error for CalendarError {}

fn year_row(year: i32) -> Result<&'static [u8; 12], CalendarError> {
    usize::try_from(year - BS_START_YEAR)
        .ok()
        .and_then(|index| BS_MONTH_DAYS.get(index))
        .ok_or(CalendarError::OutOfRange)
}

fn year_length(row: &[u8; 12]) -> u64 {
    row.iter().map(|&d| u64::from(d)).sum()
}

/// Convert a Gregorian date to BS `(year, month, day)`, month 1-based.
pub fn gregorian_to_bs(date: NaiveDate) -> Result<(i32, u32, u32), CalendarError> {
    let offset = (date - epoch()?).num_days();
    let mut remaining = u64::try_from(offset).map_err(|_| CalendarError::OutOfRange)?;

    for (year, row) in (BS_START_YEAR..).zip(BS_MONTH_DAYS.iter()) {
        let days_in_year = year_length(row);
        if remaining >= days_in_year {
            remaining -= days_in_year;
            continue;
        }
        for (month, &days) in (1u32..).zip(row.iter()) {
            let days = u64::from(days);
            if remaining < days {
                // remaining < 32 here
                return Ok((year, month, remaining as u32 + 1));
            }
            remaining -= days;
        }
    }
    Err(CalendarError::OutOfRange)
}

/// Convert a BS date back to the Gregorian calendar.
pub fn bs_to_gregorian(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    let row = year_row(year)?;
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidDate);
    }
    let month_index = month as usize - 1;
    if day == 0 || day > u32::from(row[month_index]) {
        return Err(CalendarError::InvalidDate);
    }

    let full_years: u64 = BS_MONTH_DAYS
        .iter()
        .take((year - BS_START_YEAR) as usize)
        .map(year_length)
        .sum();
    let full_months: u64 = row[..month_index].iter().map(|&d| u64::from(d)).sum();
    let offset = full_years + full_months + u64::from(day - 1);

    epoch()?
        .checked_add_days(Days::new(offset))
        .ok_or(CalendarError::OutOfRange)
}

/// A Bikram Sambat date with its Nepali rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BsDate {
    pub year: i32,
    /// 1 = Baishakh.
    pub month: u32,
    /// Day of month.
    pub date: u32,
    /// e.g. `२०८० पौष १६`
    pub formatted: String,
}

impl BsDate {
    pub fn new(year: i32, month: u32, date: u32) -> Self {
        let month_name = month
            .checked_sub(1)
            .and_then(|i| NEPALI_MONTHS.get(i as usize))
            .copied()
            .unwrap_or_default();
        let formatted = format!(
            "{} {} {}",
            to_nepali_numerals(year),
            month_name,
            to_nepali_numerals(date)
        );
        Self {
            year,
            month,
            date,
            formatted,
        }
    }

    pub fn from_gregorian(date: NaiveDate) -> Result<Self, CalendarError> {
        let (year, month, day) = gregorian_to_bs(date)?;
        Ok(Self::new(year, month, day))
    }

    pub fn to_gregorian(&self) -> Result<NaiveDate, CalendarError> {
        bs_to_gregorian(self.year, self.month, self.date)
    }

    pub fn month_name(&self) -> &'static str {
        NEPALI_MONTHS[(self.month.clamp(1, 12) - 1) as usize]
    }
}

impl fmt::Display for BsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}
