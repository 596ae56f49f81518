//! Cumulative weekday counts over the 400-year Gregorian cycle.
//!
//! The Gregorian calendar repeats exactly every 400 years (146 097 days,
//! which is 20 871 whole weeks). A single table of cumulative per-year
//! weekday counts over one cycle therefore answers the whole-years part of
//! any span query, no matter how many centuries it covers.

use std::sync::OnceLock;

use tracing::debug;

use crate::weekday::Weekday;

/// Number of years in one Gregorian cycle.
pub const CYCLE_YEARS: usize = 400;

/// Total weekdays in one full cycle: 20 871 weeks x 5.
///
/// Independent of which weekday the cycle starts on, since the cycle is a
/// whole number of weeks.
pub const CYCLE_WEEKDAYS: u32 = 104_355;

/// Weekday of January 1 of any year divisible by 400 (2000-01-01 was a
/// Saturday). Offset 0 of the cycle table corresponds to such a year, so
/// the whole table is anchored here.
const ANCHOR_WEEKDAY: Weekday = Weekday::SATURDAY;

/// Cumulative weekday counts for each year-offset within the 400-year cycle.
///
/// `cumulative(k)` is the number of weekdays from the start of the cycle
/// through the end of offset `k`, inclusive. The sequence is strictly
/// increasing and ends at [`CYCLE_WEEKDAYS`].
#[derive(Debug)]
pub struct CycleTable {
    cumulative: [u32; CYCLE_YEARS],
}

impl CycleTable {
    /// Returns the cumulative weekday count through year-offset `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset >= 400`.
    pub fn cumulative(&self, offset: usize) -> u32 {
        self.cumulative[offset]
    }

    /// Returns the weekday total for the entire cycle.
    pub fn total(&self) -> u32 {
        self.cumulative[CYCLE_YEARS - 1]
    }

    fn build() -> Self {
        let mut cumulative = [0u32; CYCLE_YEARS];
        let mut start = ANCHOR_WEEKDAY;
        let mut running = 0u32;
        for (offset, slot) in cumulative.iter_mut().enumerate() {
            let leap = is_leap_offset(offset);
            running += weekdays_in_year(start, leap);
            *slot = running;
            // 365 = 52*7 + 1 and 366 = 52*7 + 2.
            start = start.advance(if leap { 2 } else { 1 });
        }
        Self { cumulative }
    }
}

/// Returns the process-wide cycle table, building it on first call.
///
/// The table is constructed at most once even under concurrent first calls
/// and every caller receives the same `&'static` reference; reads after
/// construction involve no synchronization.
pub fn cycle_table() -> &'static CycleTable {
    static TABLE: OnceLock<CycleTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let table = CycleTable::build();
        debug!(total = table.total(), "built 400-year cycle table");
        table
    })
}

/// Leap-ness of a year by its offset within the cycle.
///
/// Same shape as the calendar rule, but expressed relative to the cycle
/// start: offsets 100, 200, and 300 are the century years that are not
/// divisible by 400 and so are not leap; offset 0 is.
fn is_leap_offset(offset: usize) -> bool {
    offset % 4 == 0 && (offset % 100 != 0 || offset % 400 == 0)
}

/// Weekday total for a single year that starts on `start`.
///
/// Closed form over the 14 (start weekday, leap-ness) combinations: a
/// non-leap year is 52 weeks plus one extra day, a leap year 52 weeks plus
/// two, and only the extra days depend on alignment.
fn weekdays_in_year(start: Weekday, leap: bool) -> u32 {
    let dow = start.get();
    if leap {
        match dow {
            1..=4 => 262,
            5 | 7 => 261,
            _ => 260,
        }
    } else if dow <= 5 {
        261
    } else {
        260
    }
}
