use crate::{run_fuzz_vscal, Data};

fn data(args: &[&str]) -> Data {
    Data {
        args: args.iter().map(|arg| arg.to_string()).collect(),
        today: 45_000,
        columns: 3,
        highlights: "24 10\n".to_string(),
    }
}

#[test]
fn no_fuzz_before_1900() {
    assert!(run_fuzz_vscal(data(&["1800"])));
}

#[test]
fn no_fuzz_invalid_args() {
    assert!(!run_fuzz_vscal(data(&["13-15"])));
    assert!(!run_fuzz_vscal(data(&["--help"])));
}

#[test]
fn no_fuzz_zero_columns() {
    let mut data = data(&["1", "2015", "8", "2016"]);
    data.columns = 0;
    assert!(run_fuzz_vscal(data));
}

#[test]
fn no_fuzz_large_range() {
    assert!(!run_fuzz_vscal(data(&["1", "1000", "1", "2000"])));
}
