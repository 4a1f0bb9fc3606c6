//! Segment-wise route matching
//!
//! A compiled pattern is walked pairwise against the segments of a location:
//!
//! - without a wildcard, both must have the same number of segments
//! - literals compare by exact, case-sensitive equality
//! - params capture one segment verbatim
//! - a trailing wildcard captures the rest of the path under [`REST_PARAM`]
//!
//! Every outcome is a [`MatchResult`]; nothing here fails.

#[cfg(feature = "cache")]
use crate::cache::{CacheStats, PatternCache};
use crate::location::Location;
use crate::params::RouteParams;
use crate::pattern::{split_segments, CompiledPattern, Segment, REST_PARAM};
use std::rc::Rc;

#[cfg(feature = "cache")]
use std::cell::RefCell;

// ============================================================================
// MatchResult
// ============================================================================

/// Verdict of matching a pattern against a location.
///
/// Parameters exist only for a match; a non-match carries nothing, so a
/// partially filled parameter set can never leak out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Matched(RouteParams),
    Unmatched,
}

impl MatchResult {
    /// A match with no captures
    pub fn matched() -> Self {
        MatchResult::Matched(RouteParams::new())
    }

    /// Whether the pattern matched
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched(_))
    }

    /// Captured parameters, present only on a match
    pub fn params(&self) -> Option<&RouteParams> {
        match self {
            MatchResult::Matched(params) => Some(params),
            MatchResult::Unmatched => None,
        }
    }

    /// Captures of a match, `None` when unmatched
    pub fn into_params(self) -> Option<RouteParams> {
        match self {
            MatchResult::Matched(params) => Some(params),
            MatchResult::Unmatched => None,
        }
    }

    /// Shorthand for `params().and_then(|p| p.get(key))`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params()?.get(key)
    }
}

impl From<Option<RouteParams>> for MatchResult {
    fn from(params: Option<RouteParams>) -> Self {
        params.map_or(MatchResult::Unmatched, MatchResult::Matched)
    }
}

// ============================================================================
// Matching
// ============================================================================

/// Match an already compiled pattern against `path`.
///
/// `None` stands for "no pattern" and matches every path with no captures.
///
/// ```
/// use hash_router::{match_compiled, CompiledPattern, Location};
///
/// let pattern = CompiledPattern::compile("/users/:id");
/// let result = match_compiled(Some(&pattern), &Location::new("/users/42"));
/// assert_eq!(result.get("id"), Some("42"));
/// ```
pub fn match_compiled(pattern: Option<&CompiledPattern>, path: &Location) -> MatchResult {
    let Some(pattern) = pattern else {
        return MatchResult::matched();
    };

    let path_segments: Vec<&str> = split_segments(path.as_str()).collect();

    if !pattern.has_wildcard() && path_segments.len() != pattern.len() {
        return MatchResult::Unmatched;
    }

    let mut params = RouteParams::new();

    for (i, segment) in pattern.segments().iter().enumerate() {
        match segment {
            Segment::Literal(text) => match path_segments.get(i) {
                Some(actual) if *actual == text.as_str() => {}
                _ => return MatchResult::Unmatched,
            },
            Segment::Param(name) => match path_segments.get(i) {
                Some(actual) => params.insert(name.as_str(), *actual),
                None => return MatchResult::Unmatched,
            },
            Segment::Wildcard => {
                let rest = path_segments.get(i..).unwrap_or_default().join("/");
                params.insert(REST_PARAM, rest);
                return MatchResult::Matched(params);
            }
        }
    }

    MatchResult::Matched(params)
}

// ============================================================================
// Matcher
// ============================================================================

/// Anything that can decide whether a pattern matches a location.
///
/// Implemented by [`SegmentMatcher`] and by plain closures, so a router can
/// be given a custom matching strategy.
pub trait Matcher {
    fn match_route(&self, pattern: Option<&str>, path: &Location) -> MatchResult;
}

impl<F> Matcher for F
where
    F: Fn(Option<&str>, &Location) -> MatchResult,
{
    fn match_route(&self, pattern: Option<&str>, path: &Location) -> MatchResult {
        self(pattern, path)
    }
}

/// Default matcher: compiles patterns on demand and matches segment-wise.
///
/// With the `cache` feature, compiled patterns are kept in an LRU keyed by
/// the pattern string, so each distinct pattern is compiled once.
///
/// ```
/// use hash_router::{Location, Matcher, SegmentMatcher};
///
/// let matcher = SegmentMatcher::new();
/// let result = matcher.match_route(Some("/files/*"), &Location::new("/files/a/b/c"));
/// assert_eq!(result.params().and_then(|p| p.rest()), Some("a/b/c"));
/// ```
#[derive(Debug, Default)]
pub struct SegmentMatcher {
    #[cfg(feature = "cache")]
    cache: RefCell<PatternCache>,
}

impl SegmentMatcher {
    /// Matcher with a default-sized pattern cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Matcher whose pattern cache holds at most `capacity` patterns.
    #[cfg(feature = "cache")]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: RefCell::new(PatternCache::with_capacity(capacity)),
        }
    }

    /// Compile `pattern`, reusing an earlier compilation when cached.
    pub fn compile(&self, pattern: &str) -> Rc<CompiledPattern> {
        #[cfg(feature = "cache")]
        {
            self.cache.borrow_mut().get_or_compile(pattern)
        }
        #[cfg(not(feature = "cache"))]
        {
            Rc::new(CompiledPattern::compile(pattern))
        }
    }

    /// Snapshot of the pattern cache counters
    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.borrow().stats().clone()
    }
}

impl Matcher for SegmentMatcher {
    fn match_route(&self, pattern: Option<&str>, path: &Location) -> MatchResult {
        match pattern {
            Some(pattern) => match_compiled(Some(&self.compile(pattern)), path),
            None => MatchResult::matched(),
        }
    }
}
