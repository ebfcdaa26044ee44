//! Decomposition of `authority` strings.

use crate::components::AuthorityComponents;
use crate::parser::str::{find_split_hole, rfind_split_hole};

/// Decomposes the authority into `(userinfo, host, port)`.
///
/// The trailing `@` of the userinfo and the leading `:` of the port are truncated.
/// A colon inside an IP literal (`[...]`) never starts a port.
#[must_use]
pub(crate) fn decompose_authority(authority: &str) -> AuthorityComponents<'_> {
    // `@` is not allowed in `host` nor `port`, so the last one ends `userinfo`.
    let (userinfo, host_port) = match rfind_split_hole(authority, b'@') {
        Some((userinfo, rest)) => (Some(userinfo), rest),
        None => (None, authority),
    };

    let (host, port) = if host_port.starts_with('[') {
        match find_split_hole(host_port, b']') {
            Some((_, "")) => (host_port, None),
            Some((literal, after)) => match after.strip_prefix(':') {
                // Keep the closing bracket in the host.
                Some(port) => (&host_port[..=literal.len()], Some(port)),
                None => (host_port, None),
            },
            None => (host_port, None),
        }
    } else {
        match rfind_split_hole(host_port, b':') {
            Some((host, port)) => (host, Some(port)),
            None => (host_port, None),
        }
    };

    AuthorityComponents {
        userinfo,
        host,
        port,
    }
}
