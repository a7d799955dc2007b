use chrono::{Datelike, NaiveDate};

use pest::iterators::Pair;
use pest::Parser;

use crate::error::{Error, Result};
use crate::month::{MonthKey, MonthRange};

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub(crate) struct RangeParser;

/// Turns a matched expression into a range, relatively to current date.
type Handler = fn(Pair<Rule>, NaiveDate) -> Result<MonthRange>;

/// Supported expressions, in the order they are tried.
pub(crate) const RULES: &[(Rule, Handler)] = &[
    (Rule::current_month, build_current_month),
    (Rule::plus_months, build_plus_months),
    (Rule::full_year, build_full_year),
    (Rule::month_span, build_month_span),
    (Rule::month_of_year, build_month_of_year),
    (Rule::month_span_of_year, build_month_span_of_year),
    (Rule::two_months_of_years, build_two_months_of_years),
];

/// Parse command arguments into a range of months.
///
/// Arguments are joined with single spaces before being matched, so
/// `["05", "2014"]` and `["05 2014"]` are equivalent. Expressions that don't
/// mention a year are resolved relatively to `today`.
///
/// ```
/// use chrono::NaiveDate;
/// use vscal_syntax::{parse, Error, MonthKey};
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
///
/// let range = parse(&["10", "2013", "05", "2014"], today).unwrap();
/// assert_eq!(range.start(), MonthKey::new(2013, 10).unwrap());
/// assert_eq!(range.end(), MonthKey::new(2014, 5).unwrap());
///
/// assert_eq!(parse(&["--help"], today), Err(Error::Help));
/// ```
pub fn parse<S: AsRef<str>>(args: &[S], today: NaiveDate) -> Result<MonthRange> {
    if let Some(first) = args.first() {
        if matches!(first.as_ref(), "-h" | "--help") {
            return Err(Error::Help);
        }
    }

    let input = args.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
    parse_str(&input, today)
}

/// Parse a single range expression, see [`parse`].
pub fn parse_str(input: &str, today: NaiveDate) -> Result<MonthRange> {
    for &(rule, handler) in RULES {
        let Ok(mut pairs) = RangeParser::parse(rule, input) else {
            continue;
        };

        #[cfg(feature = "log")]
        log::debug!("Parsing `{input}` as {rule:?}");

        let pair = pairs.next().expect("grammar error: no expression found");
        return handler(pair, today);
    }

    Err(Error::Syntax { input: input.trim().to_string() })
}

// ---
// --- Expressions
// ---

fn unexpected_token<T>(token: Rule, parent: Rule) -> T {
    unreachable!("Grammar error: found `{token:?}` inside of `{parent:?}`")
}

/// Inner tokens of an expression, without the end of input marker.
fn tokens(pair: Pair<Rule>) -> impl Iterator<Item = Pair<Rule>> {
    pair.into_inner().filter(|pair| pair.as_rule() != Rule::EOI)
}

fn build_current_month(pair: Pair<Rule>, today: NaiveDate) -> Result<MonthRange> {
    assert_eq!(pair.as_rule(), Rule::current_month);
    Ok(MonthRange::single(MonthKey::from_date(today)))
}

fn build_plus_months(pair: Pair<Rule>, today: NaiveDate) -> Result<MonthRange> {
    assert_eq!(pair.as_rule(), Rule::plus_months);
    let count_pair = tokens(pair).next().expect("missing month count");
    let raw_count = count_pair.as_str().to_string();
    let count = build_count(count_pair)?;
    let start = MonthKey::from_date(today);

    let end = start.add_months(count).ok_or_else(|| Error::Overflow {
        value: raw_count,
        expected: "a number of months ending in a supported year".to_string(),
    })?;

    MonthRange::new(start, end)
}

fn build_full_year(pair: Pair<Rule>, _today: NaiveDate) -> Result<MonthRange> {
    assert_eq!(pair.as_rule(), Rule::full_year);
    let year = build_year(tokens(pair).next().expect("missing year"))?;
    MonthRange::new(MonthKey::new(year, 1)?, MonthKey::new(year, 12)?)
}

fn build_month_span(pair: Pair<Rule>, today: NaiveDate) -> Result<MonthRange> {
    assert_eq!(pair.as_rule(), Rule::month_span);
    let mut pairs = tokens(pair);
    let first = build_month(pairs.next().expect("missing first month"))?;
    let second = build_month(pairs.next().expect("missing second month"))?;
    let start = MonthKey::new(today.year(), first)?;

    // A decreasing span continues into next year, so the result is always
    // increasing.
    let end = {
        if first <= second {
            MonthKey::new(today.year(), second)?
        } else {
            MonthKey::new(today.year() + 1, second)?
        }
    };

    Ok(MonthRange { start, end })
}

fn build_month_of_year(pair: Pair<Rule>, _today: NaiveDate) -> Result<MonthRange> {
    assert_eq!(pair.as_rule(), Rule::month_of_year);
    let key = build_month_year(tokens(pair).next().expect("missing month"))?;
    Ok(MonthRange::single(key))
}

fn build_month_span_of_year(pair: Pair<Rule>, _today: NaiveDate) -> Result<MonthRange> {
    assert_eq!(pair.as_rule(), Rule::month_span_of_year);
    let mut pairs = tokens(pair);
    let first = build_month(pairs.next().expect("missing first month"))?;
    let second = build_month(pairs.next().expect("missing second month"))?;
    let year = build_year(pairs.next().expect("missing year"))?;
    MonthRange::new(MonthKey::new(year, first)?, MonthKey::new(year, second)?)
}

fn build_two_months_of_years(pair: Pair<Rule>, _today: NaiveDate) -> Result<MonthRange> {
    assert_eq!(pair.as_rule(), Rule::two_months_of_years);
    let mut pairs = tokens(pair);
    let start = build_month_year(pairs.next().expect("missing first month"))?;
    let end = build_month_year(pairs.next().expect("missing second month"))?;
    MonthRange::new(start, end)
}

// ---
// --- Tokens
// ---

fn build_month_year(pair: Pair<Rule>) -> Result<MonthKey> {
    assert_eq!(pair.as_rule(), Rule::month_year);
    let mut month = None;
    let mut year = None;

    for pair in pair.into_inner() {
        match pair.as_rule() {
            Rule::month => month = Some(build_month(pair)?),
            Rule::year => year = Some(build_year(pair)?),
            other => unexpected_token(other, Rule::month_year),
        }
    }

    MonthKey::new(year.expect("missing year"), month.expect("missing month"))
}

fn build_month(pair: Pair<Rule>) -> Result<u32> {
    assert_eq!(pair.as_rule(), Rule::month);

    // Always decimal, even for zero-prefixed forms like "05".
    let month: u32 = pair.as_str().parse().expect("invalid month format");

    if !(1..=12).contains(&month) {
        return Err(Error::InvalidMonth { value: month });
    }

    Ok(month)
}

fn build_year(pair: Pair<Rule>) -> Result<i32> {
    assert_eq!(pair.as_rule(), Rule::year);

    pair.as_str().parse().map_err(|_| Error::Overflow {
        value: pair.as_str().to_string(),
        expected: "a year between 0 and 2**31".to_string(),
    })
}

fn build_count(pair: Pair<Rule>) -> Result<i32> {
    assert_eq!(pair.as_rule(), Rule::count);

    pair.as_str().parse().map_err(|_| Error::Overflow {
        value: pair.as_str().to_string(),
        expected: "a number of months between 0 and 2**31".to_string(),
    })
}
