//! Helpers for characters.

/// Checks if the given character matches `unreserved` rule.
#[inline]
#[must_use]
pub(crate) fn is_ascii_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

/// Checks if the given character matches `gen-delim` rule.
#[inline]
#[must_use]
pub(crate) fn is_gen_delim(c: char) -> bool {
    matches!(c, ':' | '/' | '?' | '#' | '[' | ']' | '@')
}

/// Checks if the given character matches `sub-delim` rule.
#[inline]
#[must_use]
pub(crate) fn is_sub_delim(c: char) -> bool {
    matches!(
        c,
        '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
    )
}

/// Checks if the given string matches `scheme` rule.
///
/// ```text
/// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
/// ```
#[must_use]
pub(crate) fn is_scheme(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

/// Returns true if the string starts with two hexadecimal digits.
#[inline]
#[must_use]
pub(crate) fn starts_with_xdigits2(s: &str) -> bool {
    matches!(
        s.as_bytes(),
        [upper, lower, ..] if upper.is_ascii_hexdigit() && lower.is_ascii_hexdigit()
    )
}

/// Decodes a hexadecimal digit.
///
/// # Precondition
///
/// The given byte must be an ASCII hexadecimal digit.
#[inline]
#[must_use]
pub(crate) fn hexdigit_to_u8(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => unreachable!("[precondition] the byte must be a hexadecimal digit"),
    }
}
