//! Functions for common string operations.

/// Returns the index of the first occurrence of the given byte.
#[inline]
#[must_use]
fn find(haystack: &[u8], needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr(needle, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().position(|&b| b == needle)
    }
}

/// Returns the index of the last occurrence of the given byte.
#[inline]
#[must_use]
pub(crate) fn rfind(haystack: &[u8], needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memrchr(needle, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().rposition(|&b| b == needle)
    }
}

/// Returns the index of the first occurrence of any of the three bytes.
#[inline]
#[must_use]
fn find3(haystack: &[u8], needle1: u8, needle2: u8, needle3: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr3(needle1, needle2, needle3, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack
            .iter()
            .position(|&b| b == needle1 || b == needle2 || b == needle3)
    }
}

/// Finds the first occurrence of the given ASCII byte, and splits the string
/// into the prefix and the rest. The needle stays at the head of the rest.
///
/// # Precondition
///
/// `needle` must be an ASCII byte.
#[inline]
#[must_use]
pub(crate) fn find_split(s: &str, needle: u8) -> Option<(&str, &str)> {
    debug_assert!(needle.is_ascii(), "[precondition] `needle` must be ASCII");
    find(s.as_bytes(), needle).map(|pos| s.split_at(pos))
}

/// Finds the first occurrence of the given ASCII byte, and splits the string
/// into the prefix and the suffix. The needle itself is dropped.
///
/// # Precondition
///
/// `needle` must be an ASCII byte.
#[inline]
#[must_use]
pub(crate) fn find_split_hole(s: &str, needle: u8) -> Option<(&str, &str)> {
    debug_assert!(needle.is_ascii(), "[precondition] `needle` must be ASCII");
    find(s.as_bytes(), needle).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Finds the last occurrence of the given ASCII byte, and splits the string
/// into the prefix and the suffix. The needle itself is dropped.
#[inline]
#[must_use]
pub(crate) fn rfind_split_hole(s: &str, needle: u8) -> Option<(&str, &str)> {
    debug_assert!(needle.is_ascii(), "[precondition] `needle` must be ASCII");
    rfind(s.as_bytes(), needle).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Finds the first occurrence of any of the given ASCII bytes, and splits the
/// string there. The found byte stays at the head of the rest.
#[inline]
#[must_use]
pub(crate) fn find_split3(s: &str, needle1: u8, needle2: u8, needle3: u8) -> Option<(&str, &str)> {
    find3(s.as_bytes(), needle1, needle2, needle3).map(|pos| s.split_at(pos))
}

/// Finds the first occurrence of any of the four ASCII bytes, and returns the
/// prefix, the found byte, and the rest after the byte.
#[must_use]
pub(crate) fn find_split4_hole(
    s: &str,
    needle1: u8,
    needle2: u8,
    needle3: u8,
    needle4: u8,
) -> Option<(&str, u8, &str)> {
    let bytes = s.as_bytes();
    // `memchr` searches at most three needles at once.
    let limit = find(bytes, needle4).unwrap_or(bytes.len());
    let pos = match find3(&bytes[..limit], needle1, needle2, needle3) {
        Some(pos) => pos,
        None if limit < bytes.len() => limit,
        None => return None,
    };
    let found = bytes[pos];
    Some((&s[..pos], found, &s[(pos + 1)..]))
}
