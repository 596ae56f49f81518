//! Error types for the chronos-calendar crate.

/// Error type for all fallible operations in the chronos-calendar crate.
///
/// This enum covers wire-format parse failures and validation failures for
/// month, day-within-month, and weekday values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a date string is not three hyphen-separated integers.
    #[error("invalid date format: {input:?} (expected \"YEAR-MONTH-DAY\")")]
    InvalidDateFormat {
        /// The input string that failed to parse.
        input: String,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a weekday number is outside the valid range 1..=7.
    #[error("invalid weekday: {dow} (must be 1..=7, Monday=1)")]
    InvalidWeekday {
        /// The invalid weekday number that was provided.
        dow: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_date_format() {
        let err = CalendarError::InvalidDateFormat {
            input: "2024/1/1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date format: \"2024/1/1\" (expected \"YEAR-MONTH-DAY\")"
        );
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 29,
            month: 2,
            max_day: 28,
        };
        assert_eq!(err.to_string(), "invalid day: 29 for month 2 (max 28)");
    }

    #[test]
    fn error_invalid_weekday() {
        let err = CalendarError::InvalidWeekday { dow: 0 };
        assert_eq!(
            err.to_string(),
            "invalid weekday: 0 (must be 1..=7, Monday=1)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_clone_and_partial_eq() {
        let a = CalendarError::InvalidMonth { month: 0 };
        let b = a.clone();
        assert_eq!(a, b);

        let c = CalendarError::InvalidMonth { month: 13 };
        assert_ne!(a, c);
    }
}
