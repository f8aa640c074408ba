//! Error types for argument validation and rendering.

/// Rejected command-line input. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Month must be a number")]
    MonthNotNumber,

    #[error("Month cannot be less than 1")]
    MonthTooSmall,

    #[error("Month cannot be greater than 12")]
    MonthTooLarge,

    #[error("year must be an integer number")]
    YearNotNumber,

    #[error("Day of the week must be minimum two letters.")]
    WeekdayTooShort,

    /// The input is not a prefix of any weekday name.
    #[error(
        "Incorrect day of the week was entered. Must contain full or short name \
         (minimum 2 letters) of the day of the week (e.g. Sunday, Monday, TUESDAY, su, Tue, etc.)."
    )]
    UnknownWeekday {
        /// What the user typed.
        input: String,
    },
}

/// Anything that aborts a single invocation.
#[derive(Debug, thiserror::Error)]
pub enum CalError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Writing to the output sink failed.
    #[error("cannot write calendar: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_messages() {
        assert_eq!(
            ValidationError::MonthNotNumber.to_string(),
            "Month must be a number"
        );
        assert_eq!(
            ValidationError::MonthTooSmall.to_string(),
            "Month cannot be less than 1"
        );
        assert_eq!(
            ValidationError::MonthTooLarge.to_string(),
            "Month cannot be greater than 12"
        );
    }

    #[test]
    fn year_message() {
        assert_eq!(
            ValidationError::YearNotNumber.to_string(),
            "year must be an integer number"
        );
    }

    #[test]
    fn weekday_messages() {
        assert_eq!(
            ValidationError::WeekdayTooShort.to_string(),
            "Day of the week must be minimum two letters."
        );
        let e = ValidationError::UnknownWeekday {
            input: "xy".to_string(),
        };
        assert!(e.to_string().starts_with("Incorrect day of the week was entered."));
        assert!(e.to_string().contains("minimum 2 letters"));
    }

    #[test]
    fn validation_is_transparent_in_cal_error() {
        let e: CalError = ValidationError::MonthTooLarge.into();
        assert_eq!(e.to_string(), "Month cannot be greater than 12");
    }

    #[test]
    fn io_error_is_wrapped() {
        let e: CalError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(e.to_string(), "cannot write calendar: pipe closed");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<ValidationError>();
        assert_impl::<CalError>();
    }
}
