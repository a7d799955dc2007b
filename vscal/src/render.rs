use std::fmt::Display;

use chrono::{Datelike, Duration, NaiveDate};

use vscal_syntax::MonthKey;

use crate::dates::{iso_week_number, monday_of_week};
use crate::paint::{Paint, Tint};
use crate::special_dates::SpecialDates;

/// Visible width of every line of a month grid.
pub const WEEK_ROW_WIDTH: usize = 25;

/// Second line of a month grid.
pub const WEEKDAY_HEADER: &str = "Wk  Mo Tu We Th Fr Sa Su ";

/// Cell of a day that belongs to another month.
const EMPTY_DAY: &str = "   ";

/// The printed lines of a month: a title, weekday names and a line for each
/// week overlapping the month.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct MonthGrid {
    lines: Vec<String>,
}

impl MonthGrid {
    /// Render a month, highlighting days using the special dates of its year.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use vscal::paint::NoPaint;
    /// use vscal::{MonthGrid, MonthKey, SpecialDates};
    ///
    /// let today = NaiveDate::from_ymd_opt(2011, 3, 14).unwrap();
    /// let key = MonthKey::new(2011, 3).unwrap();
    /// let grid = MonthGrid::render(key, &SpecialDates::new(2011), today, &NoPaint);
    ///
    /// assert_eq!(grid.lines()[0], "       March 2011        ");
    /// assert_eq!(grid.lines()[2], "09     01 02 03 04 05 06 ");
    /// assert_eq!(grid.len(), 7);
    /// ```
    pub fn render(
        key: MonthKey,
        dates: &SpecialDates,
        today: NaiveDate,
        paint: &impl Paint,
    ) -> Self {
        debug_assert_eq!(dates.year(), key.year(), "special dates from another year");
        let mut lines = vec![title(key), WEEKDAY_HEADER.to_string()];
        let mut day = key.first_day();

        while MonthKey::from_date(day) == key {
            lines.push(week_line(key, day, dates, today, paint));
            day = monday_of_week(day) + Duration::days(7);
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Number of lines, including the two header lines.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Number of week lines.
    pub fn week_count(&self) -> usize {
        self.lines.len() - 2
    }
}

impl Display for MonthGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}

fn title(key: MonthKey) -> String {
    let title = format!("{} {}", key.first_day().format("%B"), key.year());
    format!("{title:^width$}", width = WEEK_ROW_WIDTH)
}

/// Render the week containing `start`, which is either the first day of the
/// month or a Monday.
fn week_line(
    key: MonthKey,
    start: NaiveDate,
    dates: &SpecialDates,
    today: NaiveDate,
    paint: &impl Paint,
) -> String {
    let mut line = String::with_capacity(WEEK_ROW_WIDTH);
    let week_num = format!("{:02}", iso_week_number(start));
    line.push_str(&paint.paint(&week_num, Tint::WeekNumber));
    line.push_str("  ");

    for date in monday_of_week(start).iter_days().take(7) {
        if MonthKey::from_date(date) != key {
            line.push_str(EMPTY_DAY);
            continue;
        }

        let day = format!("{:02}", date.day());

        match Tint::for_day(dates.classify(date, today)) {
            Some(tint) => line.push_str(&paint.paint(&day, tint)),
            None => line.push_str(&day),
        }

        line.push(' ');
    }

    line
}
