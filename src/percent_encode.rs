//! Percent encoding.
//!
//! Characters are escaped per code point: one uppercase `%XX` triplet for
//! each UTF-8 byte. Well-formed triplets already present in the source are
//! kept as is, so encoding an encoded string again changes nothing.

use core::fmt::{self, Write as _};

use alloc::string::{String, ToString};

use crate::classify::{classify, CharClass, Component};
use crate::parser::char::{hexdigit_to_u8, starts_with_xdigits2};

/// A percent-encoded triplet, i.e. `%` followed by two hexadecimal digits.
///
/// A triplet always decodes to exactly one byte, which may be a part of a
/// multi-byte UTF-8 sequence.
///
/// # Examples
///
/// ```
/// use url_canon::percent_encode::PercentEscape;
///
/// let (escape, rest) = PercentEscape::parse_prefix("%cE%B1").expect("valid triplet");
/// assert_eq!(escape.byte(), 0xCE);
/// assert_eq!(rest, "%B1");
/// assert_eq!(escape.to_string(), "%CE");
///
/// assert!(PercentEscape::parse_prefix("%4").is_none());
/// assert!(PercentEscape::parse_prefix("%zz").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PercentEscape {
    /// Decoded byte.
    byte: u8,
}

impl PercentEscape {
    /// Creates a triplet encoding the given byte.
    #[inline]
    #[must_use]
    pub fn from_byte(byte: u8) -> Self {
        Self { byte }
    }

    /// Parses a triplet at the head of the string, and returns it with the rest.
    ///
    /// Hexadecimal digits are case-insensitive.
    #[must_use]
    pub fn parse_prefix(s: &str) -> Option<(Self, &str)> {
        let after_percent = s.strip_prefix('%')?;
        if !starts_with_xdigits2(after_percent) {
            return None;
        }
        let bytes = after_percent.as_bytes();
        let byte = (hexdigit_to_u8(bytes[0]) << 4) | hexdigit_to_u8(bytes[1]);
        Some((Self { byte }, &after_percent[2..]))
    }

    /// Returns the decoded byte.
    #[inline]
    #[must_use]
    pub fn byte(self) -> u8 {
        self.byte
    }
}

impl fmt::Display for PercentEscape {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{:02X}", self.byte)
    }
}

/// Returns true if the string starts with a well-formed percent-encoded triplet.
#[inline]
#[must_use]
pub(crate) fn starts_with_triplet(s: &str) -> bool {
    match s.strip_prefix('%') {
        Some(rest) => starts_with_xdigits2(rest),
        None => false,
    }
}

/// A proxy to percent-encode a string as a part of a URL.
///
/// The encoding is done lazily when the value is formatted.
///
/// # Examples
///
/// ```
/// use url_canon::percent_encode::PercentEncoded;
///
/// let raw = "alpha/\u{03B1}?#";
/// // Note that `/` is NOT percent encoded.
/// assert_eq!(PercentEncoded::from_path(raw).to_string(), "alpha/%CE%B1%3F%23");
/// // Note that `/` is encoded to `%2F`.
/// assert_eq!(
///     PercentEncoded::from_path_segment(raw).to_string(),
///     "alpha%2F%CE%B1%3F%23"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PercentEncoded<'a> {
    /// Source string context.
    component: Component,
    /// Raw string before being encoded.
    raw: &'a str,
}

impl<'a> PercentEncoded<'a> {
    /// Creates an encoded string from a raw host.
    ///
    /// `[`, `]` and `:` are kept for IP literals.
    #[inline]
    #[must_use]
    pub fn from_host(raw: &'a str) -> Self {
        Self {
            component: Component::Host,
            raw,
        }
    }

    /// Creates an encoded string from a raw path segment.
    ///
    /// A slash (`/`) is encoded to `%2F`.
    #[inline]
    #[must_use]
    pub fn from_path_segment(raw: &'a str) -> Self {
        Self {
            component: Component::PathSegment,
            raw,
        }
    }

    /// Creates an encoded string from a raw path.
    #[inline]
    #[must_use]
    pub fn from_path(raw: &'a str) -> Self {
        Self {
            component: Component::Path,
            raw,
        }
    }

    /// Creates an encoded string from a raw query (without the `?` prefix).
    ///
    /// ```
    /// use url_canon::percent_encode::PercentEncoded;
    ///
    /// assert_eq!(
    ///     PercentEncoded::from_query("k=\u{03B1} b?#").to_string(),
    ///     "k=%CE%B1%20b?%23"
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn from_query(raw: &'a str) -> Self {
        Self {
            component: Component::Query,
            raw,
        }
    }

    /// Creates an encoded string from a raw fragment (without the `#` prefix).
    #[inline]
    #[must_use]
    pub fn from_fragment(raw: &'a str) -> Self {
        Self {
            component: Component::Fragment,
            raw,
        }
    }
}

impl fmt::Display for PercentEncoded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.raw;
        while let Some(c) = rest.chars().next() {
            match classify(c, self.component) {
                CharClass::Unreserved | CharClass::SubDelim | CharClass::GenDelim => {
                    f.write_char(c)?;
                    rest = &rest[c.len_utf8()..];
                }
                CharClass::PercentSign => {
                    if starts_with_triplet(rest) {
                        f.write_str(&rest[..3])?;
                        rest = &rest[3..];
                    } else {
                        f.write_str("%25")?;
                        rest = &rest[1..];
                    }
                }
                CharClass::Other => {
                    write_pct_encoded_char(f, c)?;
                    rest = &rest[c.len_utf8()..];
                }
            }
        }
        Ok(())
    }
}

/// Percent-encodes the given character and writes it.
#[inline]
fn write_pct_encoded_char<W: fmt::Write>(writer: &mut W, c: char) -> fmt::Result {
    let mut buf = [0_u8; 4];
    let buf = c.encode_utf8(&mut buf);
    buf.bytes()
        .try_for_each(|b| write!(writer, "{}", PercentEscape::from_byte(b)))
}

/// Percent-encodes the given path.
///
/// Slashes are kept, and so are well-formed percent-encoded triplets.
/// Any other character not allowed raw in a path is escaped per UTF-8 byte.
///
/// # Examples
///
/// ```
/// use url_canon::encode_path;
///
/// assert_eq!(encode_path("/a b/\u{00E9}"), "/a%20b/%C3%A9");
/// assert_eq!(encode_path("/a%20b"), "/a%20b");
/// assert_eq!(encode_path("/100%"), "/100%25");
/// ```
#[must_use]
pub fn encode_path(input: &str) -> String {
    PercentEncoded::from_path(input).to_string()
}
