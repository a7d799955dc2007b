//! Holidays and personal highlight dates of a year.
//!
//! The built-in dates follow the Finnish calendar.
use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::config::HighlightConfig;
use crate::dates::{easter, last_weekday_of_month, nth_weekday_of_month};
use crate::day_set::DaySet;

/// Holidays falling on the same date every year, as `(day, month)`.
pub const FIXED_HOLIDAYS: [(u32, u32); 7] = [
    (1, 1),   // New Year
    (6, 1),   // Epiphany
    (1, 5),   // Labour Day
    (6, 12),  // Independence Day
    (24, 12), // Christmas Eve
    (25, 12), // Christmas Day
    (26, 12), // Boxing Day
];

/// Offsets in days from Easter Sunday of the holidays depending on it.
pub const EASTER_HOLIDAYS: [i64; 5] = [
    -2, // Good Friday
    -1, // Easter Saturday
    0,  // Easter Sunday
    1,  // Easter Monday
    39, // Ascension Day
];

/// Personal highlights falling on the same date every year, as
/// `(day, month)`.
pub const FIXED_HIGHLIGHTS: [(u32, u32); 5] = [(12, 2), (14, 4), (2, 8), (8, 8), (24, 10)];

/// How a day is displayed, by order of precedence.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum DayKind {
    Today,
    Holiday,
    Highlight,
    Plain,
}

/// The holidays and personal highlights of a single year.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct SpecialDates {
    holidays: DaySet,
    highlights: DaySet,
}

impl SpecialDates {
    /// Special dates of given year, without reading any configuration.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use vscal::SpecialDates;
    ///
    /// let dates = SpecialDates::new(2024);
    /// let good_friday = NaiveDate::from_ymd_opt(2024, 3, 29).unwrap();
    /// let mothers_day = NaiveDate::from_ymd_opt(2024, 5, 12).unwrap();
    ///
    /// assert!(dates.is_holiday(good_friday));
    /// assert!(dates.is_personal_highlight(mothers_day));
    /// ```
    pub fn new(year: i32) -> Self {
        Self::with_highlights(year, &HighlightConfig::default())
    }

    /// Special dates of given year, including the highlights of a
    /// configuration that apply to this year.
    pub fn with_highlights(year: i32, config: &HighlightConfig) -> Self {
        let mut holidays = DaySet::new(year);
        holidays.extend(fixed_dates(year, &FIXED_HOLIDAYS));

        if let Some(easter) = easter(year) {
            holidays.extend(
                EASTER_HOLIDAYS
                    .iter()
                    .filter_map(|&offset| easter.checked_add_signed(Duration::days(offset))),
            );
        }

        if let Some(eve) = midsummer_eve(year) {
            holidays.insert(eve);
            holidays.extend(eve.succ_opt());
        }

        holidays.extend(all_hallows_day(year));

        let mut highlights = DaySet::new(year);
        highlights.extend(fixed_dates(year, &FIXED_HIGHLIGHTS));
        highlights.extend(mothers_day(year));
        highlights.extend(fathers_day(year));
        highlights.extend(daylight_saving_start(year));
        highlights.extend(daylight_saving_end(year));
        highlights.extend(config.dates_in(year));

        #[cfg(feature = "log")]
        log::debug!(
            "Found {} holidays and {} highlights in {year}",
            holidays.count(),
            highlights.count(),
        );

        Self { holidays, highlights }
    }

    pub fn year(&self) -> i32 {
        self.holidays.year()
    }

    pub fn holidays(&self) -> &DaySet {
        &self.holidays
    }

    pub fn highlights(&self) -> &DaySet {
        &self.highlights
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(date)
    }

    pub fn is_personal_highlight(&self, date: NaiveDate) -> bool {
        self.highlights.contains(date)
    }

    /// Get how given day must be displayed: current day comes first, then
    /// holidays and finally personal highlights.
    pub fn classify(&self, date: NaiveDate, today: NaiveDate) -> DayKind {
        if date == today {
            DayKind::Today
        } else if self.is_holiday(date) {
            DayKind::Holiday
        } else if self.is_personal_highlight(date) {
            DayKind::Highlight
        } else {
            DayKind::Plain
        }
    }
}

fn fixed_dates(year: i32, days: &[(u32, u32)]) -> impl Iterator<Item = NaiveDate> + '_ {
    days.iter()
        .filter_map(move |&(day, month)| NaiveDate::from_ymd_opt(year, month, day))
}

/// The Friday between 19 and 25 June.
pub fn midsummer_eve(year: i32) -> Option<NaiveDate> {
    nth_weekday_of_month(year, 6, Weekday::Fri, 19..=25)
}

/// The Saturday between 31 October and 6 November.
pub fn all_hallows_day(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 10, 31)
        .filter(|date| date.weekday() == Weekday::Sat)
        .or_else(|| nth_weekday_of_month(year, 11, Weekday::Sat, 1..=6))
}

/// Second Sunday of May.
pub fn mothers_day(year: i32) -> Option<NaiveDate> {
    nth_weekday_of_month(year, 5, Weekday::Sun, 8..=14)
}

/// Second Sunday of November.
pub fn fathers_day(year: i32) -> Option<NaiveDate> {
    nth_weekday_of_month(year, 11, Weekday::Sun, 8..=14)
}

/// Last Sunday of March.
pub fn daylight_saving_start(year: i32) -> Option<NaiveDate> {
    last_weekday_of_month(year, 3, Weekday::Sun)
}

/// Last Sunday of October.
pub fn daylight_saving_end(year: i32) -> Option<NaiveDate> {
    last_weekday_of_month(year, 10, Weekday::Sun)
}
