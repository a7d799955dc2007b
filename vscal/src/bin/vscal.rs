use std::env;
use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::process::ExitCode;

use chrono::Local;

use vscal::config::HighlightConfig;
use vscal::paint::AnsiPaint;
use vscal::{Calendar, Context, Layout, ParserError, USAGE};

/// Number of months printed side by side.
const COLUMNS_ENV: &str = "VSCAL_COLUMNS";

/// Disables colors when set, whatever its value.
const NO_COLOR_ENV: &str = "NO_COLOR";

/// Parse the raw value of `VSCAL_COLUMNS`, invalid or zero values are
/// ignored.
fn columns(raw: Option<String>) -> Option<NonZeroUsize> {
    let raw = raw?;

    match raw.trim().parse() {
        Ok(columns) => Some(columns),
        Err(_err) => {
            #[cfg(feature = "log")]
            log::warn!("Ignoring invalid {COLUMNS_ENV}={raw:?}: {_err}");
            None
        }
    }
}

fn colors_enabled(no_color: Option<OsString>) -> bool {
    no_color.is_none()
}

/// Text printed on stderr when arguments can't be parsed.
fn error_message(err: &ParserError) -> String {
    match err {
        ParserError::Help => USAGE.to_string(),
        _ => format!("vscal: {err}\n{USAGE}"),
    }
}

fn main() -> ExitCode {
    #[cfg(feature = "log")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let today = Local::now().date_naive();

    let calendar = match Calendar::parse(&args, today) {
        Ok(calendar) => calendar,
        Err(err) => {
            eprintln!("{}", error_message(&err));
            return ExitCode::FAILURE;
        }
    };

    let mut ctx = Context::default()
        .with_today(today)
        .with_highlights(HighlightConfig::load_default());

    if let Some(columns) = columns(env::var(COLUMNS_ENV).ok()) {
        ctx = ctx.with_layout(Layout::new(columns));
    }

    if colors_enabled(env::var_os(NO_COLOR_ENV)) {
        print!("{}", calendar.with_context(ctx.with_paint(AnsiPaint)));
    } else {
        print!("{}", calendar.with_context(ctx));
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn columns_from_env() {
        assert_eq!(columns(None), None);
        assert_eq!(columns(raw("4")), NonZeroUsize::new(4));
        assert_eq!(columns(raw(" 2\n")), NonZeroUsize::new(2));
        assert_eq!(columns(raw("0")), None);
        assert_eq!(columns(raw("abc")), None);
        assert_eq!(columns(raw("-3")), None);
        assert_eq!(columns(raw("")), None);
    }

    #[test]
    fn no_color() {
        assert!(colors_enabled(None));
        assert!(!colors_enabled(Some(OsString::new())));
        assert!(!colors_enabled(Some(OsString::from("1"))));
    }

    #[test]
    fn help_prints_usage_only() {
        let today = Local::now().date_naive();

        for arg in ["-h", "--help"] {
            let err = Calendar::parse(&[arg], today).unwrap_err();
            assert_eq!(err, ParserError::Help);
            assert_eq!(error_message(&err), USAGE);
        }
    }

    #[test]
    fn syntax_error_prints_usage() {
        let today = Local::now().date_naive();
        let err = Calendar::parse(&["foo"], today).unwrap_err();
        let message = error_message(&err);

        assert!(message.starts_with(&format!("vscal: {err}\n")));
        assert!(message.ends_with(USAGE));
    }
}
