//! Utilities for formatting.

use core::fmt::{self, Write as _};

/// Returns true if the value formats to exactly the given string.
///
/// Nothing is allocated: the formatted output is compared chunk by chunk,
/// and formatting stops at the first difference.
pub(crate) fn eq_str_display<T>(expected: &str, value: &T) -> bool
where
    T: ?Sized + fmt::Display,
{
    /// Writer which consumes the expected string as the output arrives.
    struct Matcher<'a> {
        /// Expected output not yet matched.
        rest: &'a str,
    }
    impl fmt::Write for Matcher<'_> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            match self.rest.strip_prefix(s) {
                Some(rest) => {
                    self.rest = rest;
                    Ok(())
                }
                None => Err(fmt::Error),
            }
        }
    }

    let mut matcher = Matcher { rest: expected };
    write!(matcher, "{}", value).is_ok() && matcher.rest.is_empty()
}
