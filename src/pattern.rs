//! Route pattern compilation
//!
//! A pattern string is split on `/` into segments, once, and each segment is
//! tagged with its kind. Matching only ever looks at the tags.
//!
//! - `users` -> [`Segment::Literal`]
//! - `:id` -> [`Segment::Param`]
//! - `*` in last position -> [`Segment::Wildcard`]
//!
//! A `*` anywhere else is kept as literal text. Compilation never fails.

use crate::{trace_log, warn_log};
use std::fmt;

/// Prefix marking a named capture (`:id`)
pub const PARAM_MARKER: char = ':';

/// Segment that slurps the rest of the path when it is last
pub const WILDCARD: &str = "*";

/// Key under which a trailing wildcard stores its capture
pub const REST_PARAM: &str = "*";

/// Split a pattern or path into its non-empty `/`-separated segments.
///
/// Leading, trailing and repeated slashes produce no segments.
pub fn split_segments(input: &str) -> impl Iterator<Item = &str> {
    input.split('/').filter(|s| !s.is_empty())
}

/// One compiled segment of a route pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Text that must equal the path segment exactly (case-sensitive)
    Literal(String),
    /// Captures one path segment under the given name
    Param(String),
    /// Captures every remaining path segment as one value
    Wildcard,
}

impl Segment {
    fn parse(raw: &str, is_last: bool) -> Self {
        if raw == WILDCARD {
            if is_last {
                return Segment::Wildcard;
            }
            warn_log!("Wildcard in non-terminal position, matching it as literal text");
            return Segment::Literal(raw.to_string());
        }

        match raw.strip_prefix(PARAM_MARKER) {
            Some(name) => Segment::Param(name.to_string()),
            None => Segment::Literal(raw.to_string()),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Param(name) => write!(f, "{}{}", PARAM_MARKER, name),
            Segment::Wildcard => f.write_str(WILDCARD),
        }
    }
}

/// Ordered segment specs for one pattern string.
///
/// Immutable once built. At most one [`Segment::Wildcard`] exists and it is
/// always the last segment.
///
/// # Example
///
/// ```
/// use hash_router::{CompiledPattern, Segment};
///
/// let pattern = CompiledPattern::compile("/files/:owner/*");
/// assert_eq!(
///     pattern.segments(),
///     &[
///         Segment::Literal("files".to_string()),
///         Segment::Param("owner".to_string()),
///         Segment::Wildcard,
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompiledPattern {
    segments: Vec<Segment>,
}

impl CompiledPattern {
    /// Compile a pattern string.
    pub fn compile(pattern: &str) -> Self {
        let raw: Vec<&str> = split_segments(pattern).collect();
        let last = raw.len().saturating_sub(1);

        let segments: Vec<Segment> = raw
            .iter()
            .enumerate()
            .map(|(i, s)| Segment::parse(s, i == last))
            .collect();

        trace_log!("Compiled pattern '{}' into {:?}", pattern, segments);
        Self { segments }
    }

    /// Compiled segments, in pattern order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the pattern ends in a wildcard
    pub fn has_wildcard(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Wildcard))
    }

    /// Names of the single-segment captures, in order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the pattern is the root (no segments)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}
