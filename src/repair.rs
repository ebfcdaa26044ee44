//! Repair of malformed percent-encoded triplets.
//!
//! A `%` which is not followed by two hexadecimal digits is treated as data,
//! and is itself encoded as `%25`. Every other character, well-formed
//! triplets included, is kept as is.

use core::fmt;

use alloc::string::{String, ToString};

use crate::format::eq_str_display;
use crate::parser::str::find_split_hole;
use crate::percent_encode::starts_with_triplet;

/// Writable as a string with malformed percent-encodings repaired.
///
/// # Examples
///
/// ```
/// use url_canon::repair::PercentRepaired;
///
/// assert_eq!(PercentRepaired::new("100% done").to_string(), "100%25 done");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PercentRepaired<'a> {
    /// Source string.
    source: &'a str,
}

impl<'a> PercentRepaired<'a> {
    /// Creates a new `PercentRepaired` value.
    #[inline]
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }
}

impl fmt::Display for PercentRepaired<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.source;

        while !rest.is_empty() {
            let (prefix, after_percent) = match find_split_hole(rest, b'%') {
                Some(v) => v,
                None => return f.write_str(rest),
            };
            f.write_str(prefix)?;
            // `prefix.len()` is the position of the `%`.
            let triplet_candidate = &rest[prefix.len()..];
            if starts_with_triplet(triplet_candidate) {
                f.write_str(&triplet_candidate[..3])?;
                rest = &triplet_candidate[3..];
            } else {
                // Rescan from the next character, which may be another `%`.
                f.write_str("%25")?;
                rest = after_percent;
            }
        }

        Ok(())
    }
}

/// Repairs malformed percent-encodings.
///
/// # Examples
///
/// ```
/// use url_canon::repair_percents;
///
/// assert_eq!(repair_percents("100% done"), "100%25 done");
/// assert_eq!(repair_percents("a%2sample"), "a%252sample");
/// assert_eq!(repair_percents("ok%41"), "ok%41");
/// ```
#[must_use]
pub fn repair_percents(input: &str) -> String {
    PercentRepaired::new(input).to_string()
}

/// Returns true if the string contains a `%` not starting a well-formed triplet.
///
/// In other words, returns true if [`repair_percents`] would change the string.
///
/// ```
/// use url_canon::repair::has_invalid_percent;
///
/// assert!(has_invalid_percent("50%"));
/// assert!(!has_invalid_percent("50%25"));
/// ```
#[must_use]
pub fn has_invalid_percent(input: &str) -> bool {
    !eq_str_display(input, &PercentRepaired::new(input))
}
