//! URL parse error.

use core::fmt;

#[cfg(feature = "std")]
use std::error;

/// Error on parsing a string as a URL.
///
/// Returned when the string has no recognizable scheme, authority, or path.
// Note that this type should implement `Copy` trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Error {
    /// Error kind.
    kind: ErrorKind,
}

impl Error {
    /// Creates a new `Error`.
    #[inline]
    #[must_use]
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the error kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Empty => f.write_str("unparseable URL: empty string"),
            ErrorKind::NoStructure => {
                f.write_str("unparseable URL: no scheme, authority, or path")
            }
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

/// Parse error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The source string is empty.
    Empty,
    /// Neither scheme, authority, nor path is present (e.g. `?query`).
    NoStructure,
}
