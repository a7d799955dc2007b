use std::path::Path;

use crate::config::{HighlightConfig, HighlightEntry};
use crate::date;

#[test]
fn parse_entries() {
    let config = HighlightConfig::parse(
        "# Birthdays\n\
         24 10\n\
         \n\
         \t  \n\
         12 2 2015\n\
         1 1 0\n\
         05 07 2024 trailing words\n",
    );

    assert_eq!(
        config.entries(),
        [
            HighlightEntry { day: 24, month: 10, year: None },
            HighlightEntry { day: 12, month: 2, year: Some(2015) },
            HighlightEntry { day: 1, month: 1, year: None },
            HighlightEntry { day: 5, month: 7, year: Some(2024) },
        ],
    );
}

#[test]
fn skip_malformed_lines() {
    let config = HighlightConfig::parse(
        "24\n\
         day month\n\
         12 x\n\
         12 2 year\n\
         0 5\n\
         32 1\n\
         12 13\n\
         -1 3\n\
         +5 +3 +2024\n\
         5 3 +2024\n\
         7 7\n",
    );

    assert_eq!(config.entries(), [HighlightEntry { day: 7, month: 7, year: None }]);
}

#[test]
fn entry_dates() {
    let every_year = HighlightEntry { day: 24, month: 10, year: None };
    assert_eq!(every_year.date_in(2015), Some(date!("2015-10-24")));
    assert_eq!(every_year.date_in(2024), Some(date!("2024-10-24")));

    let once = HighlightEntry { day: 12, month: 2, year: Some(2015) };
    assert!(once.applies_to(2015));
    assert!(!once.applies_to(2016));
    assert_eq!(once.date_in(2015), Some(date!("2015-02-12")));
    assert_eq!(once.date_in(2016), None);

    let impossible = HighlightEntry { day: 31, month: 11, year: None };
    assert_eq!(impossible.date_in(2024), None);
}

#[test]
fn dates_in_year() {
    let config = HighlightConfig::parse("24 10\n12 2 2015\n30 2\n");
    assert_eq!(config.dates_in(2015).collect::<Vec<_>>(), [date!("2015-10-24"), date!("2015-02-12")]);
    assert_eq!(config.dates_in(2016).collect::<Vec<_>>(), [date!("2016-10-24")]);
}

#[test]
fn load_missing_file() {
    let config = HighlightConfig::load(Path::new("/this/path/should/not/exist/.vscal"))
        .expect("missing file should not be an error");

    assert!(config.entries().is_empty());
}

#[test]
fn load_file() -> std::io::Result<()> {
    let path = std::env::temp_dir().join(format!("vscal-highlights-{}", std::process::id()));
    std::fs::write(&path, "# test\n14 7\n")?;
    let config = HighlightConfig::load(&path);
    std::fs::remove_file(&path)?;

    assert_eq!(config?.entries(), [HighlightEntry { day: 14, month: 7, year: None }]);
    Ok(())
}
