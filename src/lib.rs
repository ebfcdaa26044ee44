//! Canonicalization and percent-encoding utilities for URL strings.
//!
//! This crate provides:
//!
//! * [`normalize`]: a normalized, comparable form of a URL string.
//! * [`parse`]: the same normalization, keeping the position of each
//!   component ([`normalize::NormalizedUrl`]).
//! * [`encode_path`]: percent-encoding of a path.
//! * [`repair_percents`]: escaping of `%` characters which do not start a
//!   valid percent-encoded triplet.
//! * [`eq_ignore_ascii_case_in_range`]: case-insensitive comparison of a code
//!   point range, without allocation.
//!
//! Every operation takes an immutable `&str`, and returns a newly allocated
//! value. No state is shared between calls.
//!
//! Note that this crate does not resolve relative references, parse query
//! strings, or convert internationalized domain names.
//!
//! # Examples
//!
//! ```
//! use url_canon::{encode_path, normalize, repair_percents};
//!
//! assert_eq!(normalize("HTTP://Example.COM:80/a/./b/../c"), "http://example.com/a/c");
//! assert_eq!(encode_path("/caf\u{00E9} menu"), "/caf%C3%A9%20menu");
//! assert_eq!(repair_percents("100% done"), "100%25 done");
//! ```
//!
//! # Features
//!
//! * `std` feature (**enabled by default**):
//!     + The feature let the crate implement `std::error::Error` for error types.
//!     + Without this feature, the crate is `no_std` and requires `alloc`.
//! * `memchr` feature:
//!     + Delimiters are searched with the `memchr` crate.
//! * `serde` feature:
//!     + `NormalizedUrl` is serialized as a string, and normalized on deserialization.
//!     + `ParsedUrl` can be serialized.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod classify;
pub mod compare;
pub(crate) mod components;
pub(crate) mod format;
pub mod normalize;
pub(crate) mod parser;
pub mod percent_encode;
pub mod repair;

pub use self::compare::{eq_ignore_ascii_case_in_range, OutOfRangeError};
pub use self::normalize::{normalize, parse, NormalizedUrl, ParsedUrl};
pub use self::percent_encode::encode_path;
pub use self::repair::repair_percents;
