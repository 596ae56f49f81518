//! Weekday newtype and Zeller's congruence.

use crate::error::CalendarError;

/// Day of the week, 1 = Monday .. 7 = Sunday.
///
/// This convention is fixed throughout the crate; every sub-algorithm
/// normalizes to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weekday(u8);

impl Weekday {
    pub const MONDAY: Weekday = Weekday(1);
    pub const TUESDAY: Weekday = Weekday(2);
    pub const WEDNESDAY: Weekday = Weekday(3);
    pub const THURSDAY: Weekday = Weekday(4);
    pub const FRIDAY: Weekday = Weekday(5);
    pub const SATURDAY: Weekday = Weekday(6);
    pub const SUNDAY: Weekday = Weekday(7);

    /// Creates a new `Weekday` from a 1-based day-of-week value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeekday`] if `dow` is not in 1..=7.
    pub fn new(dow: u8) -> Result<Self, CalendarError> {
        if !(1..=7).contains(&dow) {
            return Err(CalendarError::InvalidWeekday { dow });
        }
        Ok(Self(dow))
    }

    /// Returns the inner day-of-week value (1..=7).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns `true` for Monday through Friday.
    pub fn is_workday(self) -> bool {
        self.0 <= 5
    }

    /// Returns the weekday `days` days later, wrapping Sunday back to Monday.
    pub fn advance(self, days: u8) -> Self {
        Self((self.0 - 1 + days) % 7 + 1)
    }
}

/// Computes the day of the week for a date using Zeller's congruence.
///
/// Accepts any integer year, including negative (proleptic) years; `month`
/// must be in 1..=12 and `day` valid for the month; neither is checked
/// here (construct a [`Date`](crate::Date) for validated input).
///
/// Dates in years after 1582 use the Gregorian form of the congruence,
/// earlier years the Julian form. This year-level cutoff is a deliberate
/// simplification: the historical reform took effect mid-October 1582 and
/// at different dates per country, none of which is modeled here.
pub fn weekday_of(year: i32, month: u8, day: u8) -> Weekday {
    let mut y = i64::from(year);
    let mut m = i64::from(month);
    // January and February count as months 13 and 14 of the previous year.
    if m <= 2 {
        m += 12;
        y -= 1;
    }

    let k = y.rem_euclid(100);
    let j = y.div_euclid(100);
    let z = i64::from(day) + 13 * (m + 1) / 5 + k + k / 4;

    let h = if y > 1582 {
        (z + j.div_euclid(4) - 2 * j).rem_euclid(7)
    } else {
        (z + 5 - j).rem_euclid(7)
    };
    let h = if h == 0 { 7 } else { h };

    // Zeller's native convention is Saturday=0; shift to Monday=1.
    Weekday(((h + 5) % 7 + 1) as u8)
}
