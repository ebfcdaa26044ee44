//! Components of URLs.

use crate::parser::decompose;

/// Components of a URL string, as slices of the source.
///
/// See <https://tools.ietf.org/html/rfc3986#section-5.2.2>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UrlComponents<'a> {
    /// Scheme.
    pub(crate) scheme: Option<&'a str>,
    /// Authority.
    ///
    /// Note that this can be `Some("")`.
    pub(crate) authority: Option<&'a str>,
    /// Path.
    pub(crate) path: &'a str,
    /// Query.
    pub(crate) query: Option<&'a str>,
    /// Fragment.
    pub(crate) fragment: Option<&'a str>,
}

impl<'a> From<&'a str> for UrlComponents<'a> {
    #[inline]
    fn from(s: &'a str) -> Self {
        decompose::decompose_url(s)
    }
}

/// Components of an authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AuthorityComponents<'a> {
    /// Userinfo, without the trailing `@`.
    pub(crate) userinfo: Option<&'a str>,
    /// Host.
    pub(crate) host: &'a str,
    /// Port, without the leading `:`.
    ///
    /// Note that this can be `Some("")`.
    pub(crate) port: Option<&'a str>,
}

impl<'a> From<&'a str> for AuthorityComponents<'a> {
    #[inline]
    fn from(authority: &'a str) -> Self {
        decompose::decompose_authority(authority)
    }
}
