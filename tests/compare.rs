//! Tests for case-insensitive range comparison.

use url_canon::{eq_ignore_ascii_case_in_range, OutOfRangeError};

#[test]
fn matches_ignoring_case() {
    assert_eq!(
        eq_ignore_ascii_case_in_range("Hello World", 6, 5, "WORLD"),
        Ok(true)
    );
}

#[test]
fn mismatch() {
    assert_eq!(
        eq_ignore_ascii_case_in_range("Hello World", 6, 5, "WORLDS"),
        Ok(false)
    );
    assert_eq!(
        eq_ignore_ascii_case_in_range("Hello World", 5, 5, "WORLD"),
        Ok(false)
    );
}

#[test]
fn out_of_range() {
    let err: OutOfRangeError = eq_ignore_ascii_case_in_range("Hello World", 6, 10, "WORLD")
        .expect_err("range exceeds the string");
    assert_eq!(
        err.to_string(),
        "range end 16 exceeds the string of 11 code points"
    );
}

#[test]
fn scheme_prefix() {
    let url = "HTTPS://example.com/";
    assert_eq!(eq_ignore_ascii_case_in_range(url, 0, 5, "https"), Ok(true));
    assert_eq!(eq_ignore_ascii_case_in_range(url, 0, 4, "http"), Ok(true));
    assert_eq!(eq_ignore_ascii_case_in_range(url, 0, 4, "https"), Ok(false));
}
