#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod month;

mod parser;

#[cfg(test)]
mod tests;

pub use error::{Error, Result, USAGE};
pub use month::{MonthKey, MonthRange};
pub use parser::{parse, parse_str};
