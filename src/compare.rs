//! Case-insensitive comparison of a code point range.

use core::fmt;

#[cfg(feature = "std")]
use std::error;

/// Error for a range which exceeds the source string.
///
/// This is a caller error: the requested range must lie within the string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfRangeError {
    /// Requested end of the range (exclusive), in code points.
    ///
    /// `None` if `offset + len` overflowed.
    requested_end: Option<usize>,
    /// Number of code points in the source string.
    len: usize,
}

impl OutOfRangeError {
    /// Returns the requested end of the range in code points.
    ///
    /// Returns `None` if the end could not be represented as `usize`.
    #[inline]
    #[must_use]
    pub fn requested_end(&self) -> Option<usize> {
        self.requested_end
    }

    /// Returns the number of code points in the source string.
    #[inline]
    #[must_use]
    pub fn source_len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.requested_end {
            Some(end) => write!(
                f,
                "range end {} exceeds the string of {} code points",
                end, self.len
            ),
            None => f.write_str("range end overflows `usize`"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for OutOfRangeError {}

/// Compares `len` code points of `s` starting at the code point `offset`
/// against `other`, ignoring ASCII case.
///
/// Non-ASCII characters are compared exactly, without Unicode case folding.
/// The range is validated before anything is compared, and no substring is
/// allocated.
///
/// # Errors
///
/// Returns [`OutOfRangeError`] if `offset + len` exceeds the number of code
/// points in `s`.
///
/// # Examples
///
/// ```
/// use url_canon::eq_ignore_ascii_case_in_range;
///
/// assert_eq!(eq_ignore_ascii_case_in_range("Hello World", 6, 5, "WORLD"), Ok(true));
/// assert_eq!(eq_ignore_ascii_case_in_range("Hello World", 0, 5, "help!"), Ok(false));
/// assert!(eq_ignore_ascii_case_in_range("Hello World", 6, 10, "WORLD").is_err());
/// ```
pub fn eq_ignore_ascii_case_in_range(
    s: &str,
    offset: usize,
    len: usize,
    other: &str,
) -> Result<bool, OutOfRangeError> {
    let range = code_point_range(s, offset, len)?;
    let mut target = s[range.0..range.1].chars();
    let mut other = other.chars();
    loop {
        match (target.next(), other.next()) {
            (Some(a), Some(b)) => {
                if !a.eq_ignore_ascii_case(&b) {
                    return Ok(false);
                }
            }
            (None, None) => return Ok(true),
            _ => return Ok(false),
        }
    }
}

/// Converts a code point range into a byte range of the string.
fn code_point_range(
    s: &str,
    offset: usize,
    len: usize,
) -> Result<(usize, usize), OutOfRangeError> {
    let out_of_range = |requested_end| OutOfRangeError {
        requested_end,
        len: s.chars().count(),
    };
    let end = offset
        .checked_add(len)
        .ok_or_else(|| out_of_range(None))?;

    let mut boundaries = s
        .char_indices()
        .map(|(pos, _)| pos)
        .chain(core::iter::once(s.len()));
    let start_byte = boundaries
        .nth(offset)
        .ok_or_else(|| out_of_range(Some(end)))?;
    let end_byte = match len {
        0 => start_byte,
        // The `offset`-th boundary is already consumed.
        len => boundaries
            .nth(len - 1)
            .ok_or_else(|| out_of_range(Some(end)))?,
    };
    Ok((start_byte, end_byte))
}
