//! Calendar formatting and display.

use std::io::Write;

use chrono::{Locale, NaiveDate, Weekday};
use tracing::trace;

use crate::calendar::MonthGeometry;
use crate::types::{
    COLUMN_WIDTH, CalendarRequest, DAYS_PER_WEEK, HEADER_OFFSET, TITLE_OFFSET,
};

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn get_system_locale() -> Locale {
    resolve_locale(|key| std::env::var(key).ok())
}

/// Pick the first non-empty locale variable; empty values count as unset.
pub fn resolve_locale<F>(lookup: F) -> Locale
where
    F: Fn(&str) -> Option<String>,
{
    let var = ["LC_ALL", "LC_TIME", "LANG"]
        .into_iter()
        .find_map(|key| lookup(key).filter(|v| !v.is_empty()))
        .unwrap_or_default();
    parse_locale(&var)
}

/// Parse a POSIX locale string such as `de_DE.UTF-8@euro`, defaulting to `en_US`.
pub fn parse_locale(s: &str) -> Locale {
    s.split(['.', '@'])
        .next()
        .and_then(|name| name.parse().ok())
        .unwrap_or(Locale::en_US)
}

/// Get the full month name in the given locale.
pub fn get_month_name(month: u32, locale: Locale) -> String {
    match NaiveDate::from_ymd_opt(2000, month, 1) {
        Some(date) => date.format_localized("%B", locale).to_string(),
        None => month.to_string(),
    }
}

/// Rotate the canonical Monday-first week so it starts on `first_day`.
pub fn get_weekday_order(first_day: Weekday) -> [Weekday; 7] {
    let mut day = first_day;
    std::array::from_fn(|_| {
        let current = day;
        day = day.succ();
        current
    })
}

/// Three-letter English abbreviation ("Mon", "Tue", ...).
pub fn get_weekday_short_name(weekday: Weekday) -> String {
    weekday.to_string()
}

/// Month name and year behind the fixed title margin.
pub fn format_title(month: u32, year: i32, locale: Locale) -> String {
    format!(
        "{}{} {}",
        " ".repeat(TITLE_OFFSET),
        get_month_name(month, locale),
        year
    )
}

/// Weekday abbreviations, each right-justified in one column.
pub fn format_weekday_headers(order: &[Weekday; 7]) -> String {
    let mut result = " ".repeat(HEADER_OFFSET);
    for &weekday in order {
        result.push_str(&format!(
            "{:>width$}",
            get_weekday_short_name(weekday),
            width = COLUMN_WIDTH
        ));
    }
    result
}

/// Day numbers laid out in week rows, the first row indented to day 1's column.
///
/// A partially filled last week still becomes its own row, so printed output
/// always ends with a line break.
pub fn format_day_rows(geometry: &MonthGeometry) -> Vec<String> {
    let mut lines = Vec::with_capacity(6);
    let mut line = " ".repeat(geometry.start_column * COLUMN_WIDTH);
    let mut column = geometry.start_column;

    for day in 1..=geometry.days_in_month {
        line.push_str(&format!("{:>width$}", day, width = COLUMN_WIDTH));
        column += 1;
        if column == DAYS_PER_WEEK {
            column = 0;
            lines.push(std::mem::take(&mut line));
        }
    }

    // Last week ended mid-row
    if column != 0 {
        lines.push(line);
    }

    lines
}

/// Format a month as lines: title, weekday header, then the day rows.
pub fn format_month_grid(request: &CalendarRequest, locale: Locale) -> Vec<String> {
    let order = get_weekday_order(request.first_day_of_week);
    trace!(?order, "weekday order");
    let geometry = MonthGeometry::new(request, &order);

    let mut lines = Vec::with_capacity(8);
    lines.push(format_title(request.month, request.year, locale));
    lines.push(format_weekday_headers(&order));
    lines.extend(format_day_rows(&geometry));
    lines
}

/// Write a single month to `out`.
pub fn print_month<W: Write>(
    out: &mut W,
    request: &CalendarRequest,
    locale: Locale,
) -> std::io::Result<()> {
    for line in format_month_grid(request, locale) {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
