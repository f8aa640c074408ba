//! Calendar calculation logic using Zeller's congruence on the proleptic Gregorian calendar.

use chrono::Weekday;
use tracing::debug;

use crate::types::CalendarRequest;

/// Gregorian rule: divisible by 4, except centuries unless divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// `month` must be in 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Calculate the weekday of the 1st using Zeller's congruence.
///
/// Floor division keeps the formula valid for year zero and negative years.
/// `month` must be in 1..=12.
pub fn first_day_of_month(year: i32, month: u32) -> Weekday {
    let m = (if month < 3 { month + 12 } else { month }) as i64;
    let q: i64 = 1;
    // i64 so that January of i32::MIN can borrow from the previous year
    let year_i = if month < 3 { year as i64 - 1 } else { year as i64 };
    let k = year_i.rem_euclid(100);
    let j = year_i.div_euclid(100);

    let h = (q + (13 * (m + 1)) / 5 + k + k / 4 + j.div_euclid(4) - 2 * j).rem_euclid(7);
    // h: 0=Sat, 1=Sun, 2=Mon, 3=Tue, 4=Wed, 5=Thu, 6=Fri
    match h {
        0 => Weekday::Sat,
        1 => Weekday::Sun,
        2 => Weekday::Mon,
        3 => Weekday::Tue,
        4 => Weekday::Wed,
        5 => Weekday::Thu,
        6 => Weekday::Fri,
        _ => unreachable!(),
    }
}

/// Position of `weekday` in a rotated week.
pub fn start_column(order: &[Weekday; 7], weekday: Weekday) -> usize {
    order.iter().position(|&d| d == weekday).unwrap_or_default()
}

/// Layout geometry of one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGeometry {
    pub days_in_month: u32,
    pub first_weekday: Weekday,
    /// Column of day 1 in the rotated header.
    pub start_column: usize,
}

impl MonthGeometry {
    pub fn new(request: &CalendarRequest, order: &[Weekday; 7]) -> Self {
        let days_in_month = days_in_month(request.year, request.month);
        let first_weekday = first_day_of_month(request.year, request.month);
        let start_column = start_column(order, first_weekday);
        debug!(
            year = request.year,
            month = request.month,
            days_in_month,
            ?first_weekday,
            start_column,
            "computed month geometry"
        );

        MonthGeometry {
            days_in_month,
            first_weekday,
            start_column,
        }
    }
}
