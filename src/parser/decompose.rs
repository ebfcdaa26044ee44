//! Lenient decomposition of URL strings.
//!
//! Any string can be decomposed. Text which does not form a valid scheme is
//! treated as a part of the path, and an authority exists only after `//`.

mod authority;

use crate::components::UrlComponents;
use crate::parser::char::is_scheme;
use crate::parser::str::{find_split3, find_split4_hole, find_split_hole};

pub(crate) use self::authority::decompose_authority;

/// Eats a `scheme` and a following colon if available, and returns the rest and the scheme.
///
/// The scheme is recognized only when the colon appears before any of `/`,
/// `?`, and `#`, and the preceding text matches the `scheme` rule.
#[must_use]
fn scheme_colon_opt(i: &str) -> (&str, Option<&str>) {
    match find_split4_hole(i, b':', b'/', b'?', b'#') {
        Some((scheme, b':', rest)) if is_scheme(scheme) => (rest, Some(scheme)),
        _ => (i, None),
    }
}

/// Eats double slash and the following authority if available, and returns the authority.
#[must_use]
fn slash_slash_authority_opt(i: &str) -> (&str, Option<&str>) {
    let s = match i.strip_prefix("//") {
        Some(rest) => rest,
        None => return (i, None),
    };
    // A slash, question mark, and hash character terminate `authority`.
    match find_split3(s, b'/', b'?', b'#') {
        Some((authority, rest)) => (rest, Some(authority)),
        None => ("", Some(s)),
    }
}

/// Eats a string until the query, and returns that part (excluding `?` for the query).
#[must_use]
fn until_query(i: &str) -> (&str, &str) {
    match i.find(|c| c == '?' || c == '#') {
        Some(pos) => (&i[pos..], &i[..pos]),
        None => ("", i),
    }
}

/// Decomposes query and fragment, if available.
///
/// The string must starts with `?`, or `#`, or be empty.
#[must_use]
fn decompose_query_and_fragment(i: &str) -> (Option<&str>, Option<&str>) {
    match i.as_bytes().first().copied() {
        None => (None, None),
        Some(b'?') => {
            let rest = &i[1..];
            match find_split_hole(rest, b'#') {
                Some((query, fragment)) => (Some(query), Some(fragment)),
                None => (Some(rest), None),
            }
        }
        Some(c) => {
            debug_assert_eq!(c, b'#');
            (None, Some(&i[1..]))
        }
    }
}

/// Decomposes the given string into URL components.
#[must_use]
pub(crate) fn decompose_url(i: &str) -> UrlComponents<'_> {
    let (i, scheme) = scheme_colon_opt(i);
    let (i, authority) = slash_slash_authority_opt(i);
    let (i, path) = until_query(i);
    let (query, fragment) = decompose_query_and_fragment(i);
    UrlComponents {
        scheme,
        authority,
        path,
        query,
        fragment,
    }
}
