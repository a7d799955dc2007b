use std::fmt::Display;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};

// MonthKey

/// A month of a given year.
///
/// Keys are ordered chronologically. The year is restricted to values for
/// which every day of the month and of its surrounding weeks can be
/// represented.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthKey {
    // Field order matters for the derived ordering.
    pub(crate) year: i32,
    pub(crate) month: u32,
}

impl MonthKey {
    /// Build a key from a year and a month number in `1..=12`.
    ///
    /// ```
    /// use vscal_syntax::MonthKey;
    ///
    /// assert!(MonthKey::new(2024, 12).is_ok());
    /// assert!(MonthKey::new(2024, 13).is_err());
    /// assert!(MonthKey::new(i32::MAX, 1).is_err());
    /// ```
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth { value: month });
        }

        if !Self::supported_years().contains(&year) {
            return Err(Error::Overflow {
                value: year.to_string(),
                expected: format!(
                    "a year between {} and {}",
                    Self::supported_years().start(),
                    Self::supported_years().end(),
                ),
            });
        }

        Ok(Self { year, month })
    }

    /// The range of years a key can be built for.
    pub fn supported_years() -> RangeInclusive<i32> {
        (NaiveDate::MIN.year() + 1)..=(NaiveDate::MAX.year() - 1)
    }

    /// The month containing given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// First day of this month.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("first of the month should always exist")
    }

    /// Move forward, or backward for negative values, by `n` months.
    ///
    /// ```
    /// use vscal_syntax::MonthKey;
    ///
    /// let nov = MonthKey::new(2024, 11).unwrap();
    /// assert_eq!(nov.add_months(3), MonthKey::new(2025, 2).ok());
    /// assert_eq!(nov.add_months(-11), MonthKey::new(2023, 12).ok());
    /// ```
    pub fn add_months(self, n: i32) -> Option<Self> {
        let index = i64::from(self.year) * 12 + i64::from(self.month - 1) + i64::from(n);
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
        Self::new(year, month).ok()
    }

    /// The following month, if it is still supported.
    pub fn succ(self) -> Option<Self> {
        self.add_months(1)
    }
}

impl Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

// MonthRange

/// An inclusive, non-empty range of months.
///
/// Ranges can only be built through [`MonthRange::new`] or
/// [`MonthRange::single`], so `start` never comes after `end`.
///
/// ```compile_fail
/// use vscal_syntax::{MonthKey, MonthRange};
///
/// let may = MonthKey::new(2014, 5).unwrap();
/// let oct = MonthKey::new(2013, 10).unwrap();
/// let range = MonthRange { start: may, end: oct };
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct MonthRange {
    pub(crate) start: MonthKey,
    pub(crate) end: MonthKey,
}

impl MonthRange {
    /// Build a range, failing if `start` comes after `end`.
    ///
    /// ```
    /// use vscal_syntax::{MonthKey, MonthRange};
    ///
    /// let oct = MonthKey::new(2013, 10).unwrap();
    /// let may = MonthKey::new(2014, 5).unwrap();
    ///
    /// assert_eq!(MonthRange::new(oct, may).unwrap().len(), 8);
    /// assert!(MonthRange::new(may, oct).is_err());
    /// ```
    pub fn new(start: MonthKey, end: MonthKey) -> Result<Self> {
        if start > end {
            return Err(Error::DecreasingRange { start, end });
        }

        Ok(Self { start, end })
    }

    /// First month of the range.
    pub fn start(&self) -> MonthKey {
        self.start
    }

    /// Last month of the range, included.
    pub fn end(&self) -> MonthKey {
        self.end
    }

    /// A range covering a single month.
    pub fn single(key: MonthKey) -> Self {
        Self { start: key, end: key }
    }

    /// Iterate over all months of the range, in order.
    pub fn iter(&self) -> impl Iterator<Item = MonthKey> {
        let end = self.end;
        std::iter::successors(Some(self.start), |key| key.succ()).take_while(move |key| *key <= end)
    }

    /// Number of months in the range.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        let months = i64::from(self.end.year - self.start.year) * 12
            + i64::from(self.end.month)
            - i64::from(self.start.month)
            + 1;

        usize::try_from(months).unwrap_or(0)
    }

    /// Distinct years touched by the range, in increasing order.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start.year..=self.end.year
    }
}

impl Display for MonthRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.start)?;

        if self.start != self.end {
            write!(f, "..{}", self.end)?;
        }

        Ok(())
    }
}
