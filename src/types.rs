//! Type definitions and constants for calendar formatting.

use chrono::Weekday;

/// Validated input for rendering one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarRequest {
    /// Month number, 1-12.
    pub month: u32,
    pub year: i32,
    /// Weekday shown in the leftmost column.
    pub first_day_of_week: Weekday,
}

/// Weekdays in canonical (Monday-first) order with their English names.
pub const WEEKDAY_NAMES: [(Weekday, &str); 7] = [
    (Weekday::Mon, "Monday"),
    (Weekday::Tue, "Tuesday"),
    (Weekday::Wed, "Wednesday"),
    (Weekday::Thu, "Thursday"),
    (Weekday::Fri, "Friday"),
    (Weekday::Sat, "Saturday"),
    (Weekday::Sun, "Sunday"),
];

pub const DAYS_PER_WEEK: usize = 7;

// Constants for calendar formatting
pub const COLUMN_WIDTH: usize = 4;
pub const TITLE_OFFSET: usize = 5;
pub const HEADER_OFFSET: usize = 1;

// Shortest accepted weekday abbreviation ("Mo", "tu", ...)
pub const MIN_WEEKDAY_PREFIX: usize = 2;

pub const DEFAULT_FIRST_DAY: Weekday = Weekday::Mon;
