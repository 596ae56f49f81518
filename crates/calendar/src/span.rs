//! Closed-form weekday counting over a date interval.

use crate::cycle::cycle_table;
use crate::date::Date;
use crate::error::CalendarError;
use crate::weekday::weekday_of;
use crate::ytd::weekdays_in_first_n_days;

/// Counts the weekdays (Mon-Fri) in the closed interval
/// `[start, end]`, both endpoints included.
///
/// Returns 0 when `start > end`; a reversed interval is defined to be
/// empty, not an error. Runs in constant time after the one-time cycle
/// table construction, regardless of how many centuries the interval
/// spans.
pub fn weekday_span(start: Date, end: Date) -> u64 {
    if start > end {
        return 0;
    }

    // Weekday each endpoint year starts on anchors the year-to-date counts.
    let start_jan1 = weekday_of(start.year(), 1, 1);
    let end_jan1 = weekday_of(end.year(), 1, 1);

    // Start-exclusive and end-inclusive, so the interval arithmetic below
    // counts the start date exactly once.
    let ytd_start = weekdays_in_first_n_days(start_jan1, u32::from(start.day_of_year()) - 1);
    let ytd_end = weekdays_in_first_n_days(end_jan1, u32::from(end.day_of_year()));

    let table = cycle_table();

    // Origin year of each endpoint's 400-year block (e.g. 1600, 2000).
    let block_start = i64::from(start.year()).div_euclid(400) * 400;
    let block_end = i64::from(end.year()).div_euclid(400) * 400;
    let block_diff = (block_end - block_start) / 400 * i64::from(table.total());

    // Offset of the year *before* each endpoint year within its block; the
    // first year of a block has no prior accumulation.
    let key_start = i64::from(start.year()) - block_start - 1;
    let key_end = i64::from(end.year()) - block_end - 1;
    let cum_start = if key_start >= 0 {
        i64::from(table.cumulative(key_start as usize))
    } else {
        0
    };
    let cum_end = if key_end >= 0 {
        i64::from(table.cumulative(key_end as usize))
    } else {
        0
    };

    let total = block_diff + (cum_end - cum_start) + (i64::from(ytd_end) - i64::from(ytd_start));
    // The block, cycle-offset, and year-to-date terms telescope to the
    // weekday count of [start, end], which is non-negative for start <= end.
    u64::try_from(total).expect("weekday count is non-negative for start <= end")
}

/// Counts weekdays between two dates in the `"YEAR-MONTH-DAY"` wire format.
///
/// # Errors
///
/// Returns [`CalendarError`] if either string fails to parse or names an
/// impossible calendar date.
pub fn weekdays_between(start: &str, end: &str) -> Result<u64, CalendarError> {
    let start: Date = start.parse()?;
    let end: Date = end.parse()?;
    Ok(weekday_span(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> Date {
        Date::new(year, month, day).unwrap()
    }

    #[test]
    fn reversed_interval_is_empty() {
        assert_eq!(weekday_span(date(2024, 1, 2), date(2024, 1, 1)), 0);
        assert_eq!(weekday_span(date(2024, 1, 1), date(2023, 12, 31)), 0);
        assert_eq!(weekday_span(date(2400, 1, 1), date(1600, 1, 1)), 0);
    }

    #[test]
    fn same_day_weekday() {
        // 2024-01-01 was a Monday.
        assert_eq!(weekday_span(date(2024, 1, 1), date(2024, 1, 1)), 1);
    }

    #[test]
    fn same_day_weekend() {
        // 2024-01-06 was a Saturday, 2024-01-07 a Sunday.
        assert_eq!(weekday_span(date(2024, 1, 6), date(2024, 1, 6)), 0);
        assert_eq!(weekday_span(date(2024, 1, 7), date(2024, 1, 7)), 0);
    }

    #[test]
    fn single_week() {
        // Mon 2024-01-01 through Sun 2024-01-07.
        assert_eq!(weekday_span(date(2024, 1, 1), date(2024, 1, 7)), 5);
        // Mon through Fri only.
        assert_eq!(weekday_span(date(2024, 1, 1), date(2024, 1, 5)), 5);
        // Tue through Mon of the next week.
        assert_eq!(weekday_span(date(2024, 1, 2), date(2024, 1, 8)), 5);
    }

    #[test]
    fn full_year_totals() {
        // 2024 starts Monday and is leap: 262 weekdays.
        assert_eq!(weekday_span(date(2024, 1, 1), date(2024, 12, 31)), 262);
        // 2023 starts Sunday and is not leap: 260 weekdays.
        assert_eq!(weekday_span(date(2023, 1, 1), date(2023, 12, 31)), 260);
    }

    #[test]
    fn year_boundary() {
        // Fri 2023-12-29 through Tue 2024-01-02: Fri, Mon, Tue.
        assert_eq!(weekday_span(date(2023, 12, 29), date(2024, 1, 2)), 3);
    }

    #[test]
    fn block_origin_year_start() {
        // Start at the first year of a 400-year block (key < 0 path).
        // 2000-01-01 was a Saturday, so Jan 2000 has 21 weekdays.
        assert_eq!(weekday_span(date(2000, 1, 1), date(2000, 1, 31)), 21);
    }

    #[test]
    fn full_cycle_total() {
        // A complete 400-year block holds exactly 104 355 weekdays.
        assert_eq!(
            weekday_span(date(2000, 1, 1), date(2399, 12, 31)),
            u64::from(crate::cycle::CYCLE_WEEKDAYS)
        );
    }

    #[test]
    fn wire_format_entry_point() {
        assert_eq!(weekdays_between("2024-1-1", "2024-1-7").unwrap(), 5);
        assert_eq!(
            weekdays_between("2024-1-2", "2024-1-1").unwrap(),
            0,
            "reversed interval through the string API is also empty"
        );
    }

    #[test]
    fn wire_format_errors_propagate() {
        assert_eq!(
            weekdays_between("2024/1/1", "2024-1-7").unwrap_err(),
            CalendarError::InvalidDateFormat {
                input: "2024/1/1".to_string(),
            }
        );
        assert_eq!(
            weekdays_between("2024-1-1", "2024-2-30").unwrap_err(),
            CalendarError::InvalidDay {
                day: 30,
                month: 2,
                max_day: 29,
            }
        );
    }
}
