//! `remove_dot_segments` algorithm described in [RFC 3986 5.2.4].
//!
//! [RFC 3986 5.2.4]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4

use alloc::string::String;

use crate::parser::str::{find_split, rfind};

/// A path segment with an optional leading slash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PathSegment<'a> {
    /// Whether the segment has a leading slash.
    leading_slash: bool,
    /// Segment name, without slashes.
    segment: &'a str,
}

impl PathSegment<'_> {
    /// Returns true if the segment is `.` or `..`.
    #[inline]
    #[must_use]
    fn is_dot(&self) -> bool {
        matches!(self.segment, "." | "..")
    }

    /// Writes the segment to the buffer.
    fn write_to(&self, buf: &mut String) {
        if self.leading_slash {
            buf.push('/');
        }
        buf.push_str(self.segment);
    }
}

/// Path to process, consumed segment by segment from the head.
#[derive(Debug, Clone, Copy)]
struct PathInput<'a> {
    /// Rest of the input.
    rest: &'a str,
}

impl<'a> PathInput<'a> {
    /// Returns true if the rest starts with a slash.
    #[inline]
    #[must_use]
    fn starts_with_slash(&self) -> bool {
        self.rest.starts_with('/')
    }

    /// Trims a leading slash if available, and returns whether it was present.
    fn trim_leading_slash(&mut self) -> bool {
        match self.rest.strip_prefix('/') {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    /// Pops the first segment.
    fn pop_first_segment(&mut self) -> Option<PathSegment<'a>> {
        if self.rest.is_empty() {
            return None;
        }
        let leading_slash = self.trim_leading_slash();
        let segment = match find_split(self.rest, b'/') {
            Some((segment, rest)) => {
                self.rest = rest;
                segment
            }
            None => core::mem::take(&mut self.rest),
        };
        Some(PathSegment {
            leading_slash,
            segment,
        })
    }
}

/// Removes `.` and `..` segments from the path, and appends the result to the buffer.
///
/// This is purely lexical: a `..` segment removes the preceding output
/// segment if any, and never climbs above the root.
///
/// A rootless path stays rootless. It is resolved as if it were placed
/// under the root, and the root is taken off again afterwards.
pub(crate) fn remove_dot_segments(path: &str, buf: &mut String) {
    if path.is_empty() || path.starts_with('/') {
        remove_dot_segments_rooted(path, buf);
        return;
    }

    let mut rooted = String::with_capacity(path.len() + 1);
    rooted.push('/');
    rooted.push_str(path);

    let path_start = buf.len();
    remove_dot_segments_rooted(&rooted, buf);
    debug_assert!(
        buf[path_start..].starts_with('/'),
        "[consistency] resolved absolute path starts with a slash"
    );
    if buf[path_start..].starts_with("//") {
        // The first segment is empty. `./` keeps it, where a bare `/` would make the path absolute.
        buf.insert(path_start, '.');
    } else {
        buf.remove(path_start);
    }
}

/// Removes dot segments from an empty path or a path starting with a slash.
fn remove_dot_segments_rooted(path: &str, buf: &mut String) {
    let path_start = buf.len();
    let mut input = PathInput { rest: path };

    while let Some(seg) = input.pop_first_segment() {
        if !seg.is_dot() {
            seg.write_to(buf);
            continue;
        }
        let is_parent = seg.segment == "..";
        match (seg.leading_slash, input.starts_with_slash()) {
            // 2.D: `.` or `..` as the whole rest of the input.
            (false, false) => debug_assert!(input.rest.is_empty()),
            // 2.A: `./` or `../` prefix.
            (false, true) => {
                input.trim_leading_slash();
            }
            // 2.B and 2.C: `/.`, `/./`, `/..`, or `/../`.
            (true, not_last) => {
                if !not_last {
                    // Terminal dot segment leaves a trailing slash.
                    input.rest = "/";
                }
                if is_parent {
                    pop_last_segment(buf, path_start);
                }
            }
        }
    }
}

/// Pops the last path segment and the preceding slash (if any) from the output.
fn pop_last_segment(buf: &mut String, path_start: usize) {
    match rfind(&buf.as_bytes()[path_start..], b'/') {
        Some(slash_pos) => buf.truncate(path_start + slash_pos),
        None => buf.truncate(path_start),
    }
}
