//! Parser.

pub(crate) mod char;
pub(crate) mod decompose;
pub(crate) mod str;
