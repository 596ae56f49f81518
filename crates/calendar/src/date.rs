//! Calendar date with validation and wire-format parsing.

use std::str::FromStr;

use crate::error::CalendarError;
use crate::leap::month_lengths;

/// A Gregorian/Julian calendar date.
///
/// Any integer year is accepted, including negative (proleptic) years.
/// Construction validates the month and the day against that year's month
/// lengths, so the span arithmetic never sees an impossible date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl Date {
    /// Creates a new `Date` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
    /// or [`CalendarError::InvalidDay`] if `day` is not valid for that month
    /// in that year (February 29 is accepted only in leap years).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = month_lengths(year)[month as usize];
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the 1-based ordinal of this date within its year.
    ///
    /// January 1 is day 1; December 31 is day 365 or 366 depending on
    /// leap-ness.
    pub fn day_of_year(self) -> u16 {
        let lengths = month_lengths(self.year);
        let before: u16 = lengths[1..self.month as usize]
            .iter()
            .copied()
            .map(u16::from)
            .sum();
        before + u16::from(self.day)
    }
}

impl FromStr for Date {
    type Err = CalendarError;

    /// Parses the hyphen-separated wire format `"YEAR-MONTH-DAY"` with
    /// non-zero-padded integer components, e.g. `"1776-7-4"`.
    ///
    /// Negative years cannot be expressed in this format (a leading `-`
    /// reads as a separator); use [`Date::new`] for proleptic dates.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidDateFormat {
            input: s.to_string(),
        };

        let mut parts = s.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let day: u8 = day.parse().map_err(|_| invalid())?;
        Date::new(year, month, day)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}
