//! Year-to-date weekday counting in closed form.

use crate::weekday::Weekday;

/// Counts the weekdays (Mon-Fri) among the first `n` days of a span
/// that begins on `start`.
///
/// Every complete 7-day window contains exactly 5 weekdays regardless of
/// alignment, so only the `n % 7` remainder days need inspection. `n = 0`
/// yields 0.
pub fn weekdays_in_first_n_days(start: Weekday, n: u32) -> u32 {
    let full_weeks = n / 7;
    let remainder = n % 7;

    let mut count = full_weeks * 5;
    for i in 0..remainder {
        if start.advance(i as u8).is_workday() {
            count += 1;
        }
    }
    count
}
