//! Character classification.
//!
//! Every code point belongs to exactly one [`CharClass`] within a given URL
//! [`Component`]. The class decides whether the character may appear raw in
//! that component, or must be percent-encoded.
//!
//! # Examples
//!
//! ```
//! use url_canon::classify::{classify, CharClass, Component};
//!
//! assert_eq!(classify('a', Component::Path), CharClass::Unreserved);
//! assert_eq!(classify('/', Component::Path), CharClass::GenDelim);
//! // A slash is data inside a single path segment.
//! assert_eq!(classify('/', Component::PathSegment), CharClass::Other);
//! assert_eq!(classify('\u{03B1}', Component::Path), CharClass::Other);
//! ```

use crate::parser::char::{is_ascii_unreserved, is_gen_delim, is_sub_delim};

/// URL component a character is classified in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Component {
    /// Scheme, without the trailing `:`.
    Scheme,
    /// Host (reg-name or IP literal).
    Host,
    /// A single path segment.
    ///
    /// A slash (`/`) is data here.
    PathSegment,
    /// Path segments joined with `/`.
    Path,
    /// Query, without the leading `?`.
    Query,
    /// Fragment, without the leading `#`.
    Fragment,
}

impl Component {
    /// Returns true if the given sub-delimiter may appear raw in the component.
    #[must_use]
    fn permits_sub_delim(self, c: char) -> bool {
        match self {
            Self::Scheme => c == '+',
            Self::Host | Self::PathSegment | Self::Path | Self::Query | Self::Fragment => true,
        }
    }

    /// Returns true if the given generic delimiter may appear raw in the component.
    #[must_use]
    fn permits_gen_delim(self, c: char) -> bool {
        match self {
            Self::Scheme => false,
            Self::Host => matches!(c, '[' | ']' | ':'),
            Self::PathSegment => matches!(c, ':' | '@'),
            Self::Path => matches!(c, '/' | ':' | '@'),
            Self::Query | Self::Fragment => matches!(c, '/' | '?' | ':' | '@'),
        }
    }
}

/// Class of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `ALPHA / DIGIT / "-" / "." / "_" / "~"`. Never escaped.
    Unreserved,
    /// A sub-delimiter with syntactic meaning in the component.
    SubDelim,
    /// A generic delimiter with syntactic meaning in the component.
    GenDelim,
    /// `%`, which starts a percent-encoded triplet.
    PercentSign,
    /// Anything that should always be percent-encoded in the component.
    Other,
}

impl CharClass {
    /// Returns true if characters of the class are written as is.
    ///
    /// [`CharClass::PercentSign`] is not verbatim: whether it is kept depends
    /// on the following characters.
    #[inline]
    #[must_use]
    pub fn is_verbatim(self) -> bool {
        matches!(self, Self::Unreserved | Self::SubDelim | Self::GenDelim)
    }
}

/// Classifies the given character as a part of the given component.
///
/// Non-ASCII characters and ASCII controls are always [`CharClass::Other`].
#[must_use]
pub fn classify(c: char, component: Component) -> CharClass {
    if is_ascii_unreserved(c) {
        CharClass::Unreserved
    } else if c == '%' {
        CharClass::PercentSign
    } else if is_sub_delim(c) && component.permits_sub_delim(c) {
        CharClass::SubDelim
    } else if is_gen_delim(c) && component.permits_gen_delim(c) {
        CharClass::GenDelim
    } else {
        CharClass::Other
    }
}
