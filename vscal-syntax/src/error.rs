use std::fmt;

use crate::month::MonthKey;

pub type Result<T> = std::result::Result<T, Error>;

/// Usage text listing every accepted range expression.
pub const USAGE: &str = "\
Usage:
  vscal                  # current month
  vscal +N               # current month and N next months
  vscal 2015             # full year, Jan-Dec 2015
  vscal 7-10             # July-October for current year
  vscal 10-05            # Oct this year - May next year
  vscal 05 2014          # May 2014
  vscal 03/2015          # March 2015
  vscal 10-12 2013       # Oct-Dec 2013
  vscal 03-04/2016       # Mar-Apr 2016
  vscal 10 2013 05 2014  # Oct 2013 - May 2014
  vscal 11/2014 10/2015  # Nov 2014 - Oct 2015
  vscal 09/2014-02/2015  # Sep 2014 - Feb 2015";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Usage text was explicitly requested.
    Help,
    /// The input does not match any known range expression.
    Syntax { input: String },
    InvalidMonth { value: u32 },
    Overflow { value: String, expected: String },
    DecreasingRange { start: MonthKey, end: MonthKey },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => write!(f, "help requested"),
            Self::Syntax { input } => write!(f, "unrecognized month range `{input}`"),
            Self::InvalidMonth { value } => {
                write!(f, "{value} is not a valid month: expected a number between 1 and 12")
            }
            Self::Overflow { value, expected } => {
                write!(f, "{value} is too large: expected {expected}")
            }
            Self::DecreasingRange { start, end } => {
                write!(f, "range starts at {start} which is after its end {end}")
            }
        }
    }
}

impl std::error::Error for Error {}
