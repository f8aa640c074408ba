//! Command-line argument parsing using clap.
//!
//! Arguments are positional and read left to right: `[month [year [first-day]]]`

use chrono::{Datelike, NaiveDate, Weekday};
use clap::{ArgAction, Parser, ValueHint};
use tracing::{debug, trace};

use crate::error::ValidationError;
use crate::types::{CalendarRequest, DEFAULT_FIRST_DAY, MIN_WEEKDAY_PREFIX, WEEKDAY_NAMES};

/// Environment variable that pins today's date (`YYYY-MM-DD`) for tests.
pub const TEST_TIME_VAR: &str = "MONTHCAL_TEST_TIME";

#[derive(Parser, Debug)]
#[command(name = "monthcal")]
#[command(about = "Displays a calendar for one month", long_about = None)]
#[command(version)]
#[command(allow_negative_numbers = true)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Month (1-12), defaults to the current month.
    #[arg(index = 1, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year, defaults to the current year.
    #[arg(index = 2, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,

    /// First day of the week, full or abbreviated name (default Monday).
    #[arg(index = 3, value_name = "first-day", value_hint = ValueHint::Other)]
    pub first_day_arg: Option<String>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Examples:
  monthcal               Display current month
  monthcal 2             Display February of the current year
  monthcal 2 2024        Display February 2024
  monthcal 2 2024 su     Display February 2024 with weeks starting on Sunday
  monthcal 9 2025 Tue    Display September 2025 with weeks starting on Tuesday";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl CalendarRequest {
    /// Resolve positional arguments, defaulting month and year from `today`.
    pub fn new(args: &Args, today: NaiveDate) -> Result<Self, ValidationError> {
        let month = match args.month_arg.as_deref() {
            Some(s) => parse_month(s)?,
            None => {
                trace!(month = today.month(), "month defaulted to today");
                today.month()
            }
        };

        let year = match args.year_arg.as_deref() {
            Some(s) => parse_year(s)?,
            None => {
                trace!(year = today.year(), "year defaulted to today");
                today.year()
            }
        };

        let first_day_of_week = match args.first_day_arg.as_deref() {
            Some(s) => parse_weekday(s)?,
            None => DEFAULT_FIRST_DAY,
        };

        let request = CalendarRequest {
            month,
            year,
            first_day_of_week,
        };
        debug!(?request, "resolved calendar request");
        Ok(request)
    }
}

/// Get today's date, respecting MONTHCAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var(TEST_TIME_VAR)
        && let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Parse a month number, 1-12.
pub fn parse_month(s: &str) -> Result<u32, ValidationError> {
    let n: i32 = s.parse().map_err(|_| ValidationError::MonthNotNumber)?;
    if n < 1 {
        return Err(ValidationError::MonthTooSmall);
    }
    if n > 12 {
        return Err(ValidationError::MonthTooLarge);
    }
    Ok(n as u32)
}

pub fn parse_year(s: &str) -> Result<i32, ValidationError> {
    s.parse().map_err(|_| ValidationError::YearNotNumber)
}

/// Match a case-insensitive prefix (at least two letters) of a weekday name.
///
/// Weekdays are tried in canonical order, so the first match wins.
pub fn parse_weekday(s: &str) -> Result<Weekday, ValidationError> {
    if s.chars().count() < MIN_WEEKDAY_PREFIX {
        return Err(ValidationError::WeekdayTooShort);
    }

    let s_lower = s.to_lowercase();
    WEEKDAY_NAMES
        .iter()
        .find(|(_, name)| name.to_lowercase().starts_with(&s_lower))
        .map(|(day, _)| *day)
        .ok_or_else(|| ValidationError::UnknownWeekday {
            input: s.to_string(),
        })
}
