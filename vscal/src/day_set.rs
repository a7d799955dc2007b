use std::fmt;

use chrono::{Datelike, NaiveDate};

/// A set of days of a single year, stored as one bitmap per month.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct DaySet {
    year: i32,
    months: [u32; 12],
}

impl DaySet {
    /// Create an empty set of days for given year.
    ///
    /// ```
    /// use vscal::DaySet;
    ///
    /// let set = DaySet::new(2024);
    /// assert_eq!(set.year(), 2024);
    /// assert_eq!(set.count(), 0);
    /// ```
    pub const fn new(year: i32) -> Self {
        Self { year, months: [0; 12] }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Include a day in this set. Return false if the day was not inserted
    /// because it belongs to another year.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use vscal::DaySet;
    ///
    /// let mut set = DaySet::new(2024);
    /// assert!(set.insert(NaiveDate::from_ymd_opt(2024, 12, 6).unwrap()));
    /// assert!(set.insert(NaiveDate::from_ymd_opt(2024, 12, 6).unwrap()));
    /// assert!(!set.insert(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
    /// assert_eq!(set.count(), 1);
    /// ```
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        if date.year() != self.year {
            return false;
        }

        self.months[date.month0() as usize] |= 1 << date.day0();
        true
    }

    /// Check if this set includes given day.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && self.months[date.month0() as usize] & (1 << date.day0()) != 0
    }

    /// Iterate over the days included in this set, in chronological order.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use vscal::DaySet;
    ///
    /// let day1 = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
    /// let day2 = NaiveDate::from_ymd_opt(2024, 12, 24).unwrap();
    ///
    /// let mut set = DaySet::new(2024);
    /// set.insert(day2);
    /// set.insert(day1);
    ///
    /// let days: Vec<_> = set.iter().collect();
    /// assert_eq!(days, [day1, day2]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (1..=12).zip(self.months).flat_map(move |(month, mut bits)| {
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }

                let day0 = bits.trailing_zeros();
                bits ^= 1 << day0;
                Some(day0 + 1)
            })
            .map(move |day| {
                NaiveDate::from_ymd_opt(self.year, month, day).expect("invalid date stored in set")
            })
        })
    }

    /// Count number of days included in this set.
    pub fn count(&self) -> u32 {
        self.months.iter().copied().map(u32::count_ones).sum()
    }
}

impl Extend<NaiveDate> for DaySet {
    fn extend<T: IntoIterator<Item = NaiveDate>>(&mut self, iter: T) {
        for date in iter {
            self.insert(date);
        }
    }
}

impl fmt::Debug for DaySet {
    /// ```
    /// use chrono::NaiveDate;
    /// use vscal::DaySet;
    ///
    /// let mut set = DaySet::new(2024);
    /// set.insert(NaiveDate::from_ymd_opt(2024, 12, 6).unwrap());
    /// set.insert(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    /// assert_eq!(format!("{set:?}"), "DaySet { year: 2024, days: {05-01, 12-06} }");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugDays<'a>(&'a DaySet);

        impl fmt::Debug for DebugDays<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_set()
                    .entries(self.0.iter().map(|date| DebugMonthDay(date.month(), date.day())))
                    .finish()
            }
        }

        struct DebugMonthDay(u32, u32);

        impl fmt::Debug for DebugMonthDay {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:02}-{:02}", self.0, self.1)
            }
        }

        f.debug_struct("DaySet")
            .field("year", &self.year)
            .field("days", &DebugDays(self))
            .finish()
    }
}
