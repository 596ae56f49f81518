//! # chronos-calendar
//!
//! Closed-form weekday counting over arbitrary Gregorian date spans.
//!
//! Counts the Monday-Friday days in a closed interval `[start, end]`
//! without iterating day by day: the Gregorian calendar repeats every 400
//! years, so a memoized cumulative table over one cycle plus per-year
//! boundary arithmetic answers any query in constant time.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Date"] -->|"weekday_of()"| B["Weekday"]
//!     A -->|".day_of_year()"| C["ordinal in year"]
//!     B -->|"weekdays_in_first_n_days()"| D["partial-year count"]
//!     E["cycle_table()"] -->|"cumulative(offset)"| F["whole-years count"]
//!     D --> G["weekday_span()"]
//!     F --> G
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chronos_calendar::{weekday_span, weekdays_between, Date};
//!
//! // Typed entry point
//! let start = Date::new(1776, 7, 4)?;
//! let end = Date::new(1845, 12, 29)?;
//! let count = weekday_span(start, end);
//!
//! // Hyphen-separated wire format
//! let count = weekdays_between("1776-7-4", "1845-12-29")?;
//! ```
//!
//! ## Calendar model
//!
//! Dates in years after 1582 use the Gregorian form of Zeller's congruence,
//! earlier years the Julian form. The cutoff is year-level by design; the
//! historical mid-October 1582 reform (and its later per-country adoption
//! dates) is not modeled. The cycle table always advances year-start
//! weekdays under Gregorian rules, so for pre-1582 intervals the closed
//! form diverges slightly from iterating days with the Julian congruence;
//! the closed form is the defined behavior there.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Validated calendar date, ordering, wire-format parsing |
//! | `weekday` | Weekday newtype and Zeller's congruence |
//! | `leap` | Leap-year rule and month-length tables |
//! | `ytd` | Year-to-date weekday counting |
//! | `cycle` | Memoized 400-year cumulative cycle table |
//! | `span` | Interval weekday counting |
//! | `error` | Error types |

mod cycle;
mod date;
mod error;
mod leap;
mod span;
mod weekday;
mod ytd;

pub use cycle::{cycle_table, CycleTable, CYCLE_WEEKDAYS, CYCLE_YEARS};
pub use date::Date;
pub use error::CalendarError;
pub use leap::{is_leap_year, month_lengths};
pub use span::{weekday_span, weekdays_between};
pub use weekday::{weekday_of, Weekday};
pub use ytd::weekdays_in_first_n_days;
