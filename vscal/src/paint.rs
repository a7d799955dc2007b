use std::borrow::Cow;

use crate::special_dates::DayKind;

/// What is being painted in a month grid.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Tint {
    Today,
    Holiday,
    Highlight,
    WeekNumber,
}

impl Tint {
    /// The tint of a day, or `None` if it is displayed plainly.
    pub fn for_day(kind: DayKind) -> Option<Self> {
        match kind {
            DayKind::Today => Some(Self::Today),
            DayKind::Holiday => Some(Self::Holiday),
            DayKind::Highlight => Some(Self::Highlight),
            DayKind::Plain => None,
        }
    }
}

/// Decorates some text of a month grid. The decoration must not take any
/// visible space.
pub trait Paint: Clone {
    fn paint<'a>(&self, text: &'a str, tint: Tint) -> Cow<'a, str>;
}

/// Text is left unchanged.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct NoPaint;

impl Paint for NoPaint {
    fn paint<'a>(&self, text: &'a str, _tint: Tint) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

/// Text is coloured with ANSI escape sequences.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct AnsiPaint;

impl AnsiPaint {
    const RESET: &'static str = "\x1b[0m";

    /// SGR foreground colour code of a tint.
    pub fn color_code(tint: Tint) -> u8 {
        match tint {
            Tint::Holiday => 31,    // red
            Tint::WeekNumber => 32, // green
            Tint::Highlight => 33,  // yellow
            Tint::Today => 34,      // blue
        }
    }
}

impl Paint for AnsiPaint {
    /// ```
    /// use vscal::paint::{AnsiPaint, Paint, Tint};
    ///
    /// assert_eq!(AnsiPaint.paint("24", Tint::Holiday), "\x1b[31m24\x1b[0m");
    /// ```
    fn paint<'a>(&self, text: &'a str, tint: Tint) -> Cow<'a, str> {
        Cow::Owned(format!("\x1b[{}m{text}{}", Self::color_code(tint), Self::RESET))
    }
}
