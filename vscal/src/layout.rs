use std::fmt::{self, Write};
use std::num::NonZeroUsize;

use crate::render::MonthGrid;

/// Number of months printed side by side by default.
pub const DEFAULT_COLUMNS: NonZeroUsize = NonZeroUsize::new(3).unwrap();

/// Space between two months printed side by side.
pub const MONTH_GUTTER: &str = "  ";

/// Fills the bottom of months having less weeks than their neighbours.
pub(crate) const EMPTY_WEEK_ROW: &str = "                         ";

/// Arrangement of month grids in rows of a fixed number of columns.
///
/// Each row of months is followed by a blank line, including the last one.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Layout {
    columns: NonZeroUsize,
}

impl Default for Layout {
    fn default() -> Self {
        Self { columns: DEFAULT_COLUMNS }
    }
}

impl Layout {
    pub fn new(columns: NonZeroUsize) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> usize {
        self.columns.get()
    }

    /// Write the grids in order, grouped by rows of at most `columns` months.
    pub fn write(&self, out: &mut impl Write, grids: &[MonthGrid]) -> fmt::Result {
        for group in grids.chunks(self.columns.get()) {
            write_group(out, group)?;
        }

        Ok(())
    }

    /// Join the grids into a single text, see [`Layout::write`].
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    ///
    /// use chrono::NaiveDate;
    /// use vscal::paint::NoPaint;
    /// use vscal::{Layout, MonthGrid, MonthKey, SpecialDates};
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let dates = SpecialDates::new(2024);
    ///
    /// let grids: Vec<_> = (1..=5)
    ///     .map(|month| MonthKey::new(2024, month).unwrap())
    ///     .map(|key| MonthGrid::render(key, &dates, today, &NoPaint))
    ///     .collect();
    ///
    /// let text = Layout::new(NonZeroUsize::new(2).unwrap()).join(&grids);
    /// assert!(text.starts_with("      January 2024               February 2024      \n"));
    /// ```
    pub fn join(&self, grids: &[MonthGrid]) -> String {
        let mut res = String::new();

        self.write(&mut res, grids)
            .expect("writing into a string should not fail");

        res
    }
}

/// Write months side by side, padding the shortest ones with empty lines.
fn write_group(out: &mut impl Write, group: &[MonthGrid]) -> fmt::Result {
    let max_lines = group.iter().map(MonthGrid::len).max().unwrap_or(0);

    for row in 0..max_lines {
        for (i, grid) in group.iter().enumerate() {
            if i > 0 {
                out.write_str(MONTH_GUTTER)?;
            }

            let line = grid.lines().get(row).map_or(EMPTY_WEEK_ROW, String::as_str);
            out.write_str(line)?;
        }

        out.write_char('\n')?;
    }

    out.write_char('\n')
}
