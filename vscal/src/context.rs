use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::config::HighlightConfig;
use crate::layout::Layout;
use crate::paint::{NoPaint, Paint};

/// Everything that alters how a range of months is printed.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Context<P = NoPaint> {
    /// The day displayed as current date.
    pub today: NaiveDate,
    /// Personal highlights, in addition to the built-in ones.
    pub highlights: Arc<HighlightConfig>,
    pub paint: P,
    pub layout: Layout,
}

impl<P> Context<P> {
    /// Display another day as current date.
    pub fn with_today(self, today: NaiveDate) -> Self {
        Self { today, ..self }
    }

    /// Attach a new set of personal highlights to this context.
    pub fn with_highlights(self, highlights: impl Into<Arc<HighlightConfig>>) -> Self {
        Self { highlights: highlights.into(), ..self }
    }

    /// Attach a new painter to this context.
    pub fn with_paint<P2: Paint>(self, paint: P2) -> Context<P2> {
        Context {
            today: self.today,
            highlights: self.highlights,
            paint,
            layout: self.layout,
        }
    }

    pub fn with_layout(self, layout: Layout) -> Self {
        Self { layout, ..self }
    }
}

impl Default for Context<NoPaint> {
    /// A context for local current date, without colors or highlights file.
    fn default() -> Self {
        Self {
            today: Local::now().date_naive(),
            highlights: Default::default(),
            paint: NoPaint,
            layout: Layout::default(),
        }
    }
}
