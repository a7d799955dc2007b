mod config;
mod render;

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! month {
    ( $year: expr, $month: expr ) => {{
        $crate::MonthKey::new($year, $month).expect("invalid month literal")
    }};
}

/// Render a month without colors nor configured highlights.
#[macro_export]
macro_rules! grid {
    ( $year: expr, $month: expr $( , today = $today: expr )? $( , )? ) => {{
        use $crate::paint::NoPaint;
        use $crate::{date, month, MonthGrid, SpecialDates};

        #[allow(unused_variables)]
        let today = date!("1970-01-01");
        $( let today = date!($today); )?

        MonthGrid::render(month!($year, $month), &SpecialDates::new($year), today, &NoPaint)
    }};
}
