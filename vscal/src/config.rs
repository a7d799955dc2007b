//! Personal highlight dates loaded from a plain text file.
//!
//! Each line of the file holds `day month [year]` as whitespace-separated
//! numbers. A missing or zero year means that the date recurs every year.
//! Blank lines and lines starting with `#` are ignored, as well as lines that
//! can't be understood.
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;

/// Name of the highlights file in the user's home directory.
pub const CONFIG_FILE_NAME: &str = ".vscal";

/// Environment variable overriding the path of the highlights file.
pub const CONFIG_PATH_ENV: &str = "VSCAL_CONFIG";

/// A single date listed in the highlights file.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct HighlightEntry {
    pub day: u32,
    pub month: u32,
    /// `None` for a date that recurs every year.
    pub year: Option<i32>,
}

impl HighlightEntry {
    /// Check if this entry applies to given year.
    pub fn applies_to(&self, year: i32) -> bool {
        match self.year {
            None => true,
            Some(entry_year) => entry_year == year,
        }
    }

    /// The date of this entry in given year, if it exists.
    ///
    /// ```
    /// use vscal::config::HighlightEntry;
    ///
    /// let leap_day = HighlightEntry { day: 29, month: 2, year: None };
    /// assert!(leap_day.date_in(2024).is_some());
    /// assert!(leap_day.date_in(2023).is_none());
    /// ```
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        if !self.applies_to(year) {
            return None;
        }

        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl FromStr for HighlightEntry {
    type Err = ();

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.split_whitespace();
        let day = number(fields.next().ok_or(())?)?;
        let month = number(fields.next().ok_or(())?)?;

        let year = match fields.next() {
            None => None,
            Some(raw) => match number(raw)? {
                0 => None,
                year => Some(year),
            },
        };

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(());
        }

        Ok(Self { day, month, year })
    }
}

/// Parse a field made of ASCII digits only, signs are not accepted.
fn number<T: FromStr>(field: &str) -> Result<T, ()> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(());
    }

    field.parse().map_err(|_| ())
}

/// The content of a highlights file.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct HighlightConfig {
    entries: Vec<HighlightEntry>,
}

impl HighlightConfig {
    /// A configuration from a list of entries.
    pub fn new(entries: Vec<HighlightEntry>) -> Self {
        Self { entries }
    }

    /// Parse the content of a highlights file, skipping invalid lines.
    ///
    /// ```
    /// use vscal::config::HighlightConfig;
    ///
    /// let config = HighlightConfig::parse("# birthdays\n24 10\n\n12 2 2015\nnot a date\n");
    /// assert_eq!(config.entries().len(), 2);
    /// ```
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .enumerate()
            .filter(|(_, line)| {
                let line = line.trim();
                !line.is_empty() && !line.starts_with('#')
            })
            .filter_map(|(_index, line)| {
                let Ok(entry) = line.parse() else {
                    #[cfg(feature = "log")]
                    log::debug!("Skipping invalid highlight at line {}: {line:?}", _index + 1);
                    return None;
                };

                Some(entry)
            })
            .collect();

        Self { entries }
    }

    /// Load a highlights file. A missing file results in an empty
    /// configuration.
    pub fn load(path: &Path) -> io::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Self::parse(&content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                #[cfg(feature = "log")]
                log::debug!("No highlights file found at {}", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err),
        }
    }

    /// Load the highlights file from its default location, any failure to
    /// read it results in an empty configuration.
    pub fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            #[cfg(feature = "log")]
            log::warn!("Could not find home directory, ignoring highlights file");
            return Self::default();
        };

        Self::load(&path).unwrap_or_else(|_err| {
            #[cfg(feature = "log")]
            log::warn!("Could not read highlights file {}: {_err}", path.display());
            Self::default()
        })
    }

    /// Path of the highlights file: `$VSCAL_CONFIG` if it is set, or
    /// `~/.vscal`.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Some(path.into());
        }

        Some(dirs::home_dir()?.join(CONFIG_FILE_NAME))
    }

    pub fn entries(&self) -> &[HighlightEntry] {
        &self.entries
    }

    /// Dates highlighted during given year. Entries that don't match an
    /// existing date of that year are ignored.
    pub fn dates_in(&self, year: i32) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries.iter().filter_map(move |entry| entry.date_in(year))
    }
}
