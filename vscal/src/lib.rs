#![doc = include_str!("../../README.md")]

pub mod calendar;
pub mod config;
pub mod context;
pub mod dates;
pub mod day_set;
pub mod layout;
pub mod paint;
pub mod render;
pub mod special_dates;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::calendar::Calendar;
pub use crate::context::Context;
pub use crate::day_set::DaySet;
pub use crate::layout::Layout;
pub use crate::render::MonthGrid;
pub use crate::special_dates::{DayKind, SpecialDates};
pub use vscal_syntax::{MonthKey, MonthRange, USAGE};

pub use vscal_syntax::Error as ParserError;
