//! Router: a location source, a base prefix and a matcher, bundled
//!
//! The router is a cheap handle; clones share the same source and matcher.

use crate::location::{HashLocation, Location, LocationSource, Subscription};
use crate::matcher::{MatchResult, Matcher, SegmentMatcher};
use crate::{debug_log, trace_log};
use std::fmt;
use std::rc::{Rc, Weak};

type SourceFactory = Box<dyn FnOnce() -> Rc<dyn LocationSource>>;
type MatcherFactory = Box<dyn FnOnce() -> Box<dyn Matcher>>;

// ============================================================================
// RouterOptions
// ============================================================================

/// Construction options for a [`Router`].
///
/// Source and matcher are given as factories and only run when the router
/// is built, so an unused scope never pays for them.
///
/// Defaults: a [`HashLocation`], an empty base and a [`SegmentMatcher`].
///
/// ```
/// use hash_router::{MemoryLocation, RouterOptions};
///
/// let router = RouterOptions::new()
///     .source(|| MemoryLocation::new("/inbox"))
///     .base("/app")
///     .build();
///
/// assert_eq!(router.current(), "/inbox");
/// assert_eq!(router.href("/settings"), "/app/settings");
/// ```
#[derive(Default)]
pub struct RouterOptions {
    source: Option<SourceFactory>,
    base: String,
    matcher: Option<MatcherFactory>,
}

impl RouterOptions {
    /// Options with a hash source, no base and the segment matcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Location source factory
    pub fn source<S, F>(mut self, factory: F) -> Self
    where
        S: LocationSource + 'static,
        F: FnOnce() -> S + 'static,
    {
        self.source = Some(Box::new(move || Rc::new(factory()) as Rc<dyn LocationSource>));
        self
    }

    /// Use an already shared source instance
    pub fn shared_source<S>(mut self, source: Rc<S>) -> Self
    where
        S: LocationSource + 'static,
    {
        self.source = Some(Box::new(move || source as Rc<dyn LocationSource>));
        self
    }

    /// Prefix prepended to every generated href
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Matcher factory
    pub fn matcher<M, F>(mut self, factory: F) -> Self
    where
        M: Matcher + 'static,
        F: FnOnce() -> M + 'static,
    {
        self.matcher = Some(Box::new(move || Box::new(factory()) as Box<dyn Matcher>));
        self
    }

    /// Build the router, running each factory once
    pub fn build(self) -> Router {
        let source = match self.source {
            Some(factory) => factory(),
            None => Rc::new(HashLocation::new()),
        };
        let matcher = match self.matcher {
            Some(factory) => factory(),
            None => Box::new(SegmentMatcher::new()),
        };

        debug_log!("Router built (base='{}')", self.base);

        Router {
            inner: Rc::new(RouterInner {
                source,
                base: self.base,
                matcher,
            }),
        }
    }
}

impl fmt::Debug for RouterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterOptions")
            .field("base", &self.base)
            .field("custom_source", &self.source.is_some())
            .field("custom_matcher", &self.matcher.is_some())
            .finish()
    }
}

// ============================================================================
// Router
// ============================================================================

struct RouterInner {
    source: Rc<dyn LocationSource>,
    base: String,
    matcher: Box<dyn Matcher>,
}

impl RouterInner {
    fn route(&self, pattern: Option<&str>) -> MatchResult {
        let path = self.source.current();
        let result = self.matcher.match_route(pattern, &path);
        trace_log!(
            "route {:?} at '{}': matched={}",
            pattern,
            path,
            result.is_match()
        );
        result
    }
}

/// Router state consumers query.
///
/// The base prefix is only used for generated hrefs. The matcher always sees
/// the location exactly as the source reports it.
#[derive(Clone)]
pub struct Router {
    inner: Rc<RouterInner>,
}

impl Router {
    /// Router over `source` with an empty base and the default matcher
    pub fn new<S: LocationSource + 'static>(source: S) -> Self {
        RouterOptions::new().source(move || source).build()
    }

    /// Start from default options
    pub fn builder() -> RouterOptions {
        RouterOptions::new()
    }

    /// Location source this router tracks
    pub fn source(&self) -> &Rc<dyn LocationSource> {
        &self.inner.source
    }

    /// Prefix added by `href`
    pub fn base(&self) -> &str {
        &self.inner.base
    }

    /// Current location paired with a handle that navigates
    pub fn location(&self) -> (Location, Navigator) {
        (self.current(), self.navigator())
    }

    /// Current location of the source
    pub fn current(&self) -> Location {
        self.inner.source.current()
    }

    /// Handle that navigates this router's source
    pub fn navigator(&self) -> Navigator {
        Navigator {
            source: Rc::clone(&self.inner.source),
        }
    }

    /// Ask the source to move to `to`. Never validated against any pattern.
    pub fn navigate(&self, to: impl Into<Location>) {
        self.navigator().navigate(to);
    }

    /// Match `pattern` against the current location.
    ///
    /// `None` matches everything.
    ///
    /// ```
    /// use hash_router::{MemoryLocation, Router};
    ///
    /// let router = Router::new(MemoryLocation::new("/users/42"));
    /// assert_eq!(router.route("/users/:id").get("id"), Some("42"));
    /// assert!(router.route(None).is_match());
    /// ```
    pub fn route<'p>(&self, pattern: impl Into<Option<&'p str>>) -> MatchResult {
        self.inner.route(pattern.into())
    }

    /// Match `pattern` against an arbitrary location with this router's matcher
    pub fn match_path<'p>(
        &self,
        pattern: impl Into<Option<&'p str>>,
        path: &Location,
    ) -> MatchResult {
        self.inner.matcher.match_route(pattern.into(), path)
    }

    /// Href for a navigation target: base followed by target
    pub fn href(&self, to: &str) -> String {
        format!("{}{}", self.inner.base, to)
    }

    /// Call `on_change` with the fresh location after every change.
    pub fn watch<F>(&self, on_change: F) -> Subscription
    where
        F: Fn(&Location) + 'static,
    {
        let source: Weak<dyn LocationSource> = Rc::downgrade(&self.inner.source);
        self.inner.source.subscribe(Rc::new(move || {
            if let Some(source) = source.upgrade() {
                on_change(&source.current());
            }
        }))
    }

    /// Call `on_change` with the result of matching `pattern` after every
    /// location change.
    pub fn watch_route<F>(&self, pattern: Option<&str>, on_change: F) -> Subscription
    where
        F: Fn(&MatchResult) + 'static,
    {
        let pattern = pattern.map(str::to_string);
        let inner: Weak<RouterInner> = Rc::downgrade(&self.inner);
        self.inner.source.subscribe(Rc::new(move || {
            if let Some(inner) = inner.upgrade() {
                on_change(&inner.route(pattern.as_deref()));
            }
        }))
    }

    /// Whether both handles refer to the same router instance
    pub fn ptr_eq(&self, other: &Router) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("base", &self.inner.base)
            .field("location", &self.current())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Navigator
// ============================================================================

/// Handle that requests navigation on a router's source.
#[derive(Clone)]
pub struct Navigator {
    source: Rc<dyn LocationSource>,
}

impl Navigator {
    /// Request navigation to `to`
    pub fn navigate(&self, to: impl Into<Location>) {
        let target = to.into();
        debug_log!("Navigation requested: {}", target);
        self.source.navigate(&target);
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator").finish_non_exhaustive()
    }
}
