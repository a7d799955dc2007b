use chrono::Datelike;

use crate::config::HighlightConfig;
use crate::paint::{AnsiPaint, NoPaint};
use crate::render::{MonthGrid, WEEKDAY_HEADER, WEEK_ROW_WIDTH};
use crate::{date, grid, month, SpecialDates};

#[test]
fn single_month() {
    assert_eq!(
        grid!(2011, 3).lines(),
        [
            "       March 2011        ",
            "Wk  Mo Tu We Th Fr Sa Su ",
            "09     01 02 03 04 05 06 ",
            "10  07 08 09 10 11 12 13 ",
            "11  14 15 16 17 18 19 20 ",
            "12  21 22 23 24 25 26 27 ",
            "13  28 29 30 31          ",
        ],
    );
}

#[test]
fn week_count() {
    // Starts on a Monday and lasts exactly 4 weeks
    assert_eq!(grid!(2021, 2).week_count(), 4);
    assert_eq!(grid!(2011, 3).week_count(), 5);
    // Starts on a Saturday with 31 days
    assert_eq!(grid!(2021, 5).week_count(), 6);
}

#[test]
fn week_count_matches_iso_weeks() {
    for year in [1900, 2000, 2020, 2021, 2024, 2027] {
        for month in 1..=12 {
            let key = month!(year, month);
            let first = key.first_day();
            let last = crate::dates::last_day_of_month(key);

            let mut weeks: Vec<_> = first
                .iter_days()
                .take_while(|date| *date <= last)
                .map(|date| date.iso_week())
                .collect();

            weeks.dedup();
            let grid = grid!(year, month);
            assert_eq!(grid.week_count(), weeks.len(), "in {key}");
            assert!((4..=6).contains(&grid.week_count()), "in {key}");
        }
    }
}

#[test]
fn lines_shape() {
    for (year, month) in [(2011, 3), (2021, 2), (2021, 5), (1995, 10), (2024, 12)] {
        let grid = grid!(year, month);
        assert_eq!(grid.lines()[1], WEEKDAY_HEADER);

        for line in grid.lines() {
            assert_eq!(line.len(), WEEK_ROW_WIDTH, "{line:?}");
        }

        for line in &grid.lines()[2..] {
            let week_num: u32 = line[..2].parse().expect("invalid week number");
            assert!((1..=53).contains(&week_num));
            assert_eq!(&line[2..4], "  ");

            for cell in line.as_bytes()[4..].chunks(3) {
                let cell = std::str::from_utf8(cell).expect("invalid cell");
                assert!(cell == "   " || (cell[..2].parse::<u32>().is_ok() && cell.ends_with(' ')));
            }
        }
    }
}

#[test]
fn all_days_displayed_once() {
    let grid = grid!(2024, 2);

    let days: Vec<u32> = grid.lines()[2..]
        .iter()
        .flat_map(|line| line[4..].split_whitespace())
        .map(|day| day.parse().expect("invalid day"))
        .collect();

    assert_eq!(days, (1..=29).collect::<Vec<_>>());
}

#[test]
fn year_boundaries() {
    // The last week of 2024 is the first week of 2025
    assert_eq!(grid!(2024, 12).lines()[7], "01  30 31                ");
    assert_eq!(grid!(2025, 1).lines()[2], "01        01 02 03 04 05 ");

    // The first days of 2021 belong to the last week of 2020
    assert_eq!(grid!(2021, 1).lines()[2], "53              01 02 03 ");
}

#[test]
fn five_digit_year_title() {
    assert_eq!(grid!(10000, 1).lines()[0], "      January 10000      ");
    assert_eq!(grid!(2024, 9).lines()[0], "     September 2024      ");
}

#[test]
fn idempotent() {
    let dates = SpecialDates::new(2024);
    let today = date!("2024-12-06");
    let first = MonthGrid::render(month!(2024, 12), &dates, today, &AnsiPaint);
    let second = MonthGrid::render(month!(2024, 12), &dates, today, &AnsiPaint);
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn colors() {
    let grid = MonthGrid::render(
        month!(2024, 12),
        &SpecialDates::new(2024),
        date!("2024-12-06"),
        &AnsiPaint,
    );

    assert_eq!(
        grid.lines(),
        [
            "      December 2024      ",
            "Wk  Mo Tu We Th Fr Sa Su ",
            "\x1b[32m48\x1b[0m                    01 ",
            "\x1b[32m49\x1b[0m  02 03 04 05 \x1b[34m06\x1b[0m 07 08 ",
            "\x1b[32m50\x1b[0m  09 10 11 12 13 14 15 ",
            "\x1b[32m51\x1b[0m  16 17 18 19 20 21 22 ",
            "\x1b[32m52\x1b[0m  23 \x1b[31m24\x1b[0m \x1b[31m25\x1b[0m \x1b[31m26\x1b[0m 27 28 29 ",
            "\x1b[32m01\x1b[0m  30 31                ",
        ],
    );
}

#[test]
fn holiday_over_highlight() {
    // Easter Sunday 2024 is also the start of daylight saving time
    let grid = MonthGrid::render(
        month!(2024, 3),
        &SpecialDates::new(2024),
        date!("2024-01-01"),
        &AnsiPaint,
    );

    let last_week = grid.lines().last().expect("empty grid");
    assert!(last_week.contains("\x1b[31m31\x1b[0m"));
    assert!(!last_week.contains("\x1b[33m31\x1b[0m"));
}

#[test]
fn configured_highlight_color() {
    let config = HighlightConfig::parse("15 3\n");
    let dates = SpecialDates::with_highlights(2024, &config);
    let grid = MonthGrid::render(month!(2024, 3), &dates, date!("2024-01-01"), &AnsiPaint);
    assert!(grid.lines().iter().any(|line| line.contains("\x1b[33m15\x1b[0m")));

    let plain = MonthGrid::render(month!(2024, 3), &dates, date!("2024-01-01"), &NoPaint);
    assert!(plain.lines().iter().all(|line| !line.contains('\x1b')));
}

#[test]
fn today_outside_month() {
    let today = date!("2024-12-01");
    let grid = MonthGrid::render(month!(2024, 11), &SpecialDates::new(2024), today, &AnsiPaint);
    assert!(grid.lines().iter().all(|line| !line.contains("\x1b[34m")));

    // Next month's days of the last week are left blank
    assert_eq!(
        grid.lines().last().map(String::as_str),
        Some("\x1b[32m48\x1b[0m  25 26 27 28 29 30    "),
    );
}
