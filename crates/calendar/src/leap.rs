//! Gregorian leap-year rule and month-length tables.

/// Returns `true` iff `year` is a Gregorian leap year.
///
/// Divisible by 4, except centuries, except centuries divisible by 400.
/// The rule is applied proleptically to all integer years.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in each month of `year`.
///
/// Index 0 is unused; index 1 = January .. index 12 = December. A fresh
/// array is built on every call so a leap-year February can never leak
/// into a lookup for a different year.
pub fn month_lengths(year: i32) -> [u8; 13] {
    let mut lengths = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if is_leap_year(year) {
        lengths[2] = 29;
    }
    lengths
}
