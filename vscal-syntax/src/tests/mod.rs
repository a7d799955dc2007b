
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
