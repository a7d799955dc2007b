use std::collections::BTreeMap;
use std::fmt::Display;

use chrono::NaiveDate;

use vscal_syntax::{MonthKey, MonthRange};

use crate::context::Context;
use crate::paint::{NoPaint, Paint};
use crate::render::MonthGrid;
use crate::special_dates::SpecialDates;
use crate::ParserError;

// Calendar

/// A range of months and the context it is printed with.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Calendar<P: Paint = NoPaint> {
    range: MonthRange,
    ctx: Context<P>,
}

impl Calendar<NoPaint> {
    /// Print given range of months with default context.
    pub fn new(range: MonthRange) -> Self {
        Self { range, ctx: Context::default() }
    }

    /// Parse command arguments, resolving relative months from `today`,
    /// which will also be highlighted as current date.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use vscal::Calendar;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
    /// assert!(Calendar::parse(&["10-5"], today).is_ok());
    /// assert!(Calendar::parse(&["not a range"], today).is_err());
    /// ```
    pub fn parse<S: AsRef<str>>(args: &[S], today: NaiveDate) -> Result<Self, ParserError> {
        let range = vscal_syntax::parse(args, today)?;
        Ok(Self { range, ctx: Context::default().with_today(today) })
    }
}

impl<P: Paint> Calendar<P> {
    /// Set a new context for this calendar.
    pub fn with_context<P2: Paint>(self, ctx: Context<P2>) -> Calendar<P2> {
        Calendar { range: self.range, ctx }
    }

    pub fn range(&self) -> MonthRange {
        self.range
    }

    pub fn context(&self) -> &Context<P> {
        &self.ctx
    }

    /// Iterate over the months to print, in order.
    pub fn months(&self) -> impl Iterator<Item = MonthKey> {
        self.range.iter()
    }

    /// Compute special dates once for each year covered by this calendar.
    pub fn special_dates(&self) -> BTreeMap<i32, SpecialDates> {
        self.range
            .years()
            .map(|year| (year, SpecialDates::with_highlights(year, &self.ctx.highlights)))
            .collect()
    }

    /// Render each month of the calendar.
    pub fn grids(&self) -> Vec<MonthGrid> {
        let special_dates = self.special_dates();

        self.months()
            .map(|key| {
                MonthGrid::render(
                    key,
                    &special_dates[&key.year()],
                    self.ctx.today,
                    &self.ctx.paint,
                )
            })
            .collect()
    }

    /// Render the whole calendar.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use vscal::Calendar;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
    /// let calendar = Calendar::parse(&["2024"], today).unwrap();
    /// let text = calendar.render();
    ///
    /// assert!(text.contains("January 2024"));
    /// assert!(text.contains("December 2024"));
    /// assert_eq!(text, calendar.to_string());
    /// ```
    pub fn render(&self) -> String {
        self.ctx.layout.join(&self.grids())
    }
}

impl<P: Paint> Display for Calendar<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.ctx.layout.write(f, &self.grids())
    }
}
