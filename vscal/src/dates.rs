//! Date arithmetic used to lay out months and to find moving holidays.
use std::ops::RangeInclusive;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use vscal_syntax::MonthKey;

/// Check if given year has a 29th of February.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in given month.
///
/// ```
/// use vscal::dates::days_in_month;
///
/// assert_eq!(days_in_month(2023, 2), 28);
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(1900, 2), 28);
/// assert_eq!(days_in_month(2000, 2), 29);
/// assert_eq!(days_in_month(2024, 4), 30);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn first_day_of_month(key: MonthKey) -> NaiveDate {
    key.first_day()
}

pub fn last_day_of_month(key: MonthKey) -> NaiveDate {
    key.first_day()
        .with_day(days_in_month(key.year(), key.month()))
        .expect("last of the month should always exist")
}

/// Day of the week, from 1 for Monday to 7 for Sunday.
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

/// ISO 8601 week number: the week containing the first Thursday of the year
/// is the first week.
///
/// ```
/// use chrono::NaiveDate;
/// use vscal::dates::iso_week_number;
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// assert_eq!(iso_week_number(date(2021, 1, 1)), 53);
/// assert_eq!(iso_week_number(date(2024, 12, 30)), 1);
/// ```
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Monday of the week containing given date.
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday().into())
}

pub fn add_months(key: MonthKey, n: i32) -> Option<MonthKey> {
    key.add_months(n)
}

/// Find the first day within `days` of a month that falls on given weekday.
///
/// Days that don't exist in the month are ignored, so this returns `None`
/// only if the range doesn't cover the weekday.
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use vscal::dates::nth_weekday_of_month;
///
/// // Second Sunday of May 2024
/// assert_eq!(
///     nth_weekday_of_month(2024, 5, Weekday::Sun, 8..=14),
///     NaiveDate::from_ymd_opt(2024, 5, 12),
/// );
/// ```
pub fn nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    days: RangeInclusive<u32>,
) -> Option<NaiveDate> {
    days.filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .find(|date| date.weekday() == weekday)
}

/// Find the last day of a month that falls on given weekday.
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let last_day = days_in_month(year, month);

    (1..=last_day)
        .rev()
        .take(7)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .find(|date| date.weekday() == weekday)
}

/// Western Easter Sunday of a year, computed with the anonymous Gregorian
/// algorithm. Returns `None` if the date can't be represented.
pub fn easter(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month.try_into().ok()?, day.try_into().ok()?)
}
