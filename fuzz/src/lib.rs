//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.
#[cfg(test)]
mod tests;

use std::num::NonZeroUsize;

use arbitrary::Arbitrary;
use chrono::{Days, NaiveDate};

use vscal::config::HighlightConfig;
use vscal::render::WEEK_ROW_WIDTH;
use vscal::{Calendar, Context, Layout};

/// Larger ranges are valid but too slow to render while fuzzing.
const MAX_MONTHS: usize = 12 * 30;

/// A fuzzing example
#[derive(Arbitrary, Clone, Debug)]
pub struct Data {
    pub args: Vec<String>,
    /// Current date, as a number of days after 1900-01-01
    pub today: u32,
    pub columns: u8,
    pub highlights: String,
}

impl Data {
    fn today(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(1900, 1, 1)?.checked_add_days(Days::new((self.today % 73_000).into()))
    }
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_vscal(data: Data) -> bool {
    let Some(today) = data.today() else {
        return false;
    };

    let Ok(calendar) = Calendar::parse(data.args.as_slice(), today) else {
        return false;
    };

    let range = calendar.range();
    assert!(range.start() <= range.end());

    if range.len() > MAX_MONTHS {
        return false;
    }

    let columns = NonZeroUsize::new(data.columns.into()).unwrap_or(NonZeroUsize::MIN);

    let ctx = Context::default()
        .with_today(today)
        .with_highlights(HighlightConfig::parse(&data.highlights))
        .with_layout(Layout::new(columns));

    let calendar = calendar.with_context(ctx);
    let text = calendar.render();
    assert_eq!(text, calendar.render());

    let grids = calendar.grids();
    assert_eq!(grids.len(), range.len());

    for grid in &grids {
        assert!((6..=8).contains(&grid.len()));
        assert!(grid.lines().iter().all(|line| line.len() == WEEK_ROW_WIDTH));
    }

    for line in text.lines().filter(|line| !line.is_empty()) {
        assert_eq!((line.len() + 2) % (WEEK_ROW_WIDTH + 2), 0, "{line:?}");
    }

    true
}
