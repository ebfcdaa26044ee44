//! Normalization.
//!
//! A URL string is normalized by the steps below, in order:
//!
//! 1. Malformed percent-encodings are repaired (see [`crate::repair`]).
//! 2. The string is split into scheme, authority, path, query, and fragment.
//! 3. The scheme and the host are converted to lowercase.
//!    Userinfo and port are left as is.
//! 4. A port equal to the default port of the scheme is removed, and so is
//!    an empty port.
//! 5. Dot segments in the path are removed lexically.
//! 6. The path (and only the path) is percent-encoded.
//! 7. The components are joined again. Empty userinfo, port, query, and
//!    fragment are omitted together with their delimiters.
//!
//! Known default ports are `http` 80, `https` 443, `ws` 80, `wss` 443, and
//! `ftp` 21. For these schemes an empty path with an authority becomes `/`.
//!
//! # Normalized string is stable
//!
//! The path is adjusted when the joined string would be decomposed
//! differently:
//!
//! * Without authority, a path starting with `//` is prefixed with `/.`,
//!   since `//` would start an authority.
//! * Without scheme and authority, a path whose first segment looks like
//!   `scheme:` is prefixed with `./`.
//!
//! Thus normalizing a normalized string again gives the same string.
//!
//! # Examples
//!
//! ```
//! use url_canon::normalize;
//!
//! assert_eq!(normalize("HTTP://Example.COM/Path"), "http://example.com/Path");
//! assert_eq!(normalize("http://example.com:80/x"), "http://example.com/x");
//! assert_eq!(normalize("http://example.com/a/./b/../c"), "http://example.com/a/c");
//! assert_eq!(normalize("http://example.com/100% \u{03B1}"), "http://example.com/100%25%20%CE%B1");
//! ```

mod error;
mod path;

use core::fmt;
use core::ops::Range;
use core::str::FromStr;

use alloc::string::{String, ToString};

use crate::compare::eq_ignore_ascii_case_in_range;
use crate::components::{AuthorityComponents, UrlComponents};
use crate::parser::char::is_scheme;
use crate::parser::str::{find_split, find_split_hole};
use crate::percent_encode::PercentEncoded;
use crate::repair::repair_percents;

pub use self::error::{Error, ErrorKind};
use self::path::remove_dot_segments;

/// Schemes with well-known default ports.
const DEFAULT_PORTS: &[(&str, u16)] = &[
    ("http", 80),
    ("https", 443),
    ("ws", 80),
    ("wss", 443),
    ("ftp", 21),
];

/// Returns the default port of the scheme, if known.
///
/// The scheme is compared case-insensitively.
#[must_use]
fn default_port(scheme: &str) -> Option<u16> {
    // A valid scheme is ASCII-only, so the byte length is the code point count.
    DEFAULT_PORTS
        .iter()
        .find(|(name, _)| {
            matches!(
                eq_ignore_ascii_case_in_range(scheme, 0, scheme.len(), name),
                Ok(true)
            )
        })
        .map(|&(_, port)| port)
}

/// Returns true if the port can be omitted.
///
/// Ports are compared numerically, so `0080` is the same as `80`.
#[must_use]
fn is_redundant_port(port: &str, default: Option<u16>) -> bool {
    if port.is_empty() {
        return true;
    }
    match default {
        Some(default) if port.bytes().all(|b| b.is_ascii_digit()) => {
            port.parse::<u16>() == Ok(default)
        }
        _ => false,
    }
}

/// Returns true if the first segment of a relative path would be decomposed as a scheme.
#[must_use]
fn first_segment_looks_like_scheme(path: &str) -> bool {
    let first_segment = match find_split(path, b'/') {
        Some((segment, _)) => segment,
        None => path,
    };
    match find_split_hole(first_segment, b':') {
        Some((prefix, _)) => is_scheme(prefix),
        None => false,
    }
}

/// Appends the string, and returns its range in the buffer.
fn push_str(buf: &mut String, s: &str) -> Range<usize> {
    let start = buf.len();
    buf.push_str(s);
    start..buf.len()
}

/// Appends the string converted to ASCII lowercase, and returns its range in the buffer.
///
/// Percent-encoded triplets are copied as is.
fn push_lowercase(buf: &mut String, s: &str) -> Range<usize> {
    let start = buf.len();
    let mut rest = s;
    loop {
        let (prefix, after_percent) = match find_split_hole(rest, b'%') {
            Some(v) => v,
            None => {
                buf.extend(rest.chars().map(|c| c.to_ascii_lowercase()));
                break;
            }
        };
        buf.extend(prefix.chars().map(|c| c.to_ascii_lowercase()));
        buf.push('%');
        // Percent-encodings are already repaired, but never split a character.
        let triplet_len: usize = after_percent.chars().take(2).map(char::len_utf8).sum();
        buf.push_str(&after_percent[..triplet_len]);
        rest = &after_percent[triplet_len..];
    }
    start..buf.len()
}

/// Ranges of the authority components in the normalized string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct AuthorityRanges {
    /// Whole authority.
    whole: Range<usize>,
    /// Userinfo.
    userinfo: Option<Range<usize>>,
    /// Host.
    host: Range<usize>,
    /// Port.
    port: Option<Range<usize>>,
}

/// Normalized URL.
///
/// Holds the normalized string, together with the position of each component
/// in it. Components are available through accessors, or at once through
/// [`NormalizedUrl::components`].
///
/// # Examples
///
/// ```
/// use url_canon::parse;
///
/// let url = parse("HTTPS://User@Example.COM:443/a/../b?q#f")?;
/// assert_eq!(url.as_str(), "https://User@example.com/b?q#f");
/// assert_eq!(url.scheme(), Some("https"));
/// assert_eq!(url.userinfo(), Some("User"));
/// assert_eq!(url.host(), Some("example.com"));
/// assert_eq!(url.port(), None);
/// assert_eq!(url.path(), "/b");
/// assert_eq!(url.query(), Some("q"));
/// assert_eq!(url.fragment(), Some("f"));
/// # Ok::<_, url_canon::normalize::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedUrl {
    /// Normalized string.
    serialized: String,
    /// Scheme.
    scheme: Option<Range<usize>>,
    /// Authority.
    authority: Option<AuthorityRanges>,
    /// Path.
    path: Range<usize>,
    /// Query.
    query: Option<Range<usize>>,
    /// Fragment.
    fragment: Option<Range<usize>>,
}

impl NormalizedUrl {
    /// Builds the normalized URL from the components of a repaired string.
    fn from_components(components: &UrlComponents<'_>) -> Self {
        let mut buf = String::new();
        let default_port = components.scheme.and_then(default_port);

        let scheme = components.scheme.map(|scheme| {
            let range = push_lowercase(&mut buf, scheme);
            buf.push(':');
            range
        });

        let authority = components.authority.map(|authority| {
            buf.push_str("//");
            write_authority(&mut buf, AuthorityComponents::from(authority), default_port)
        });

        let path = write_path(
            &mut buf,
            components.path,
            scheme.is_some(),
            authority.is_some(),
            default_port.is_some(),
        );

        let query = components.query.filter(|s| !s.is_empty()).map(|query| {
            buf.push('?');
            push_str(&mut buf, query)
        });

        let fragment = components.fragment.filter(|s| !s.is_empty()).map(|fragment| {
            buf.push('#');
            push_str(&mut buf, fragment)
        });

        Self {
            serialized: buf,
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }

    /// Returns the normalized string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.serialized
    }

    /// Returns the normalized string.
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.serialized
    }

    /// Returns the scheme, in lowercase.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.clone().map(|range| &self.serialized[range])
    }

    /// Returns the authority, without the leading `//`.
    ///
    /// Note that this can be `Some("")`, as in `file:///etc/hosts`.
    #[inline]
    #[must_use]
    pub fn authority(&self) -> Option<&str> {
        self.authority
            .as_ref()
            .map(|authority| &self.serialized[authority.whole.clone()])
    }

    /// Returns the userinfo, without the trailing `@`.
    #[inline]
    #[must_use]
    pub fn userinfo(&self) -> Option<&str> {
        self.authority
            .as_ref()
            .and_then(|authority| authority.userinfo.clone())
            .map(|range| &self.serialized[range])
    }

    /// Returns the host, in lowercase.
    #[inline]
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.authority
            .as_ref()
            .map(|authority| &self.serialized[authority.host.clone()])
    }

    /// Returns the port, without the leading `:`.
    ///
    /// Default ports are already removed, so this returns `None` for them.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.authority
            .as_ref()
            .and_then(|authority| authority.port.clone())
            .map(|range| &self.serialized[range])
    }

    /// Returns the path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.serialized[self.path.clone()]
    }

    /// Returns the query, without the leading `?`.
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.clone().map(|range| &self.serialized[range])
    }

    /// Returns the fragment, without the leading `#`.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.clone().map(|range| &self.serialized[range])
    }

    /// Returns all components at once.
    ///
    /// ```
    /// use url_canon::parse;
    /// use url_canon::normalize::Authority;
    ///
    /// let url = parse("http://example.com:8080/")?;
    /// let parsed = url.components();
    /// assert_eq!(parsed.scheme, Some("http"));
    /// assert_eq!(
    ///     parsed.authority,
    ///     Some(Authority { userinfo: None, host: "example.com", port: Some("8080") })
    /// );
    /// assert_eq!(parsed.path, "/");
    /// # Ok::<_, url_canon::normalize::Error>(())
    /// ```
    #[must_use]
    pub fn components(&self) -> ParsedUrl<'_> {
        ParsedUrl {
            scheme: self.scheme(),
            authority: self.host().map(|host| Authority {
                userinfo: self.userinfo(),
                host,
                port: self.port(),
            }),
            path: self.path(),
            query: self.query(),
            fragment: self.fragment(),
        }
    }
}

/// Writes the normalized authority, and returns the ranges of its components.
fn write_authority(
    buf: &mut String,
    authority: AuthorityComponents<'_>,
    default_port: Option<u16>,
) -> AuthorityRanges {
    let start = buf.len();

    let userinfo = authority
        .userinfo
        .filter(|s| !s.is_empty())
        .map(|userinfo| {
            let range = push_str(buf, userinfo);
            buf.push('@');
            range
        });

    let host = push_lowercase(buf, authority.host);

    let port = authority
        .port
        .filter(|port| !is_redundant_port(port, default_port))
        .map(|port| {
            buf.push(':');
            push_str(buf, port)
        });

    AuthorityRanges {
        whole: start..buf.len(),
        userinfo,
        host,
        port,
    }
}

/// Writes the normalized path, and returns its range.
fn write_path(
    buf: &mut String,
    path: &str,
    has_scheme: bool,
    has_authority: bool,
    has_default_port: bool,
) -> Range<usize> {
    // Encoding keeps `.` and `/`, so it does not change which segments are dot segments.
    let encoded = PercentEncoded::from_path(path).to_string();

    let start = buf.len();
    remove_dot_segments(&encoded, buf);
    let resolved = &buf[start..];
    if has_authority {
        if resolved.is_empty() && has_default_port {
            buf.push('/');
        }
    } else if resolved.starts_with("//") {
        buf.insert_str(start, "/.");
    } else if !has_scheme && first_segment_looks_like_scheme(resolved) {
        buf.insert_str(start, "./");
    }
    start..buf.len()
}

impl fmt::Display for NormalizedUrl {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for NormalizedUrl {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<NormalizedUrl> for String {
    #[inline]
    fn from(url: NormalizedUrl) -> Self {
        url.into_string()
    }
}

impl FromStr for NormalizedUrl {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl PartialEq<str> for NormalizedUrl {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for NormalizedUrl {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Components of a [`NormalizedUrl`], borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParsedUrl<'a> {
    /// Scheme, without the trailing `:`.
    pub scheme: Option<&'a str>,
    /// Authority.
    pub authority: Option<Authority<'a>>,
    /// Path.
    pub path: &'a str,
    /// Query, without the leading `?`.
    pub query: Option<&'a str>,
    /// Fragment, without the leading `#`.
    pub fragment: Option<&'a str>,
}

/// Authority components of a [`NormalizedUrl`], borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Authority<'a> {
    /// Userinfo, without the trailing `@`.
    pub userinfo: Option<&'a str>,
    /// Host.
    pub host: &'a str,
    /// Port, without the leading `:`.
    pub port: Option<&'a str>,
}

/// Normalizes the given URL string.
///
/// This never fails: any string, including an empty one, has a normalized form.
///
/// # Examples
///
/// ```
/// use url_canon::normalize;
///
/// assert_eq!(normalize("https://example.com:443/"), "https://example.com/");
/// assert_eq!(normalize("http://example.com:8080/"), "http://example.com:8080/");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    let repaired = repair_percents(input);
    NormalizedUrl::from_components(&UrlComponents::from(repaired.as_str())).into_string()
}

/// Parses and normalizes the given URL string.
///
/// # Errors
///
/// Returns an error if the string is empty, or has none of scheme,
/// authority, and path (e.g. `?query` or `#fragment`).
///
/// # Examples
///
/// ```
/// use url_canon::normalize::ErrorKind;
/// use url_canon::parse;
///
/// let url = parse("http://example.com:80/x")?;
/// assert_eq!(url, "http://example.com/x");
///
/// assert_eq!(parse("").map_err(|e| e.kind()), Err(ErrorKind::Empty));
/// assert_eq!(parse("#top").map_err(|e| e.kind()), Err(ErrorKind::NoStructure));
/// # Ok::<_, url_canon::normalize::Error>(())
/// ```
pub fn parse(input: &str) -> Result<NormalizedUrl, Error> {
    if input.is_empty() {
        return Err(Error::new(ErrorKind::Empty));
    }
    let repaired = repair_percents(input);
    let components = UrlComponents::from(repaired.as_str());
    if components.scheme.is_none() && components.authority.is_none() && components.path.is_empty()
    {
        return Err(Error::new(ErrorKind::NoStructure));
    }
    Ok(NormalizedUrl::from_components(&components))
}

/// Returns true if the string is already normalized.
///
/// ```
/// use url_canon::normalize::is_normalized;
///
/// assert!(is_normalized("http://example.com/a"));
/// assert!(!is_normalized("HTTP://example.com/a"));
/// ```
#[must_use]
pub fn is_normalized(input: &str) -> bool {
    normalize(input) == input
}

/// Serde support.
#[cfg(feature = "serde")]
mod __serde {
    use super::{parse, NormalizedUrl};

    use core::fmt;

    use serde::{
        de::{self, Visitor},
        Deserialize, Deserializer, Serialize, Serializer,
    };

    impl Serialize for NormalizedUrl {
        #[inline]
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    /// Visitor which parses and normalizes a URL string.
    #[derive(Debug, Clone, Copy)]
    struct NormalizedUrlVisitor;

    impl<'de> Visitor<'de> for NormalizedUrlVisitor {
        type Value = NormalizedUrl;

        #[inline]
        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("URL string")
        }

        #[inline]
        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            parse(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for NormalizedUrl {
        #[inline]
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_str(NormalizedUrlVisitor)
        }
    }
}
