//! Declarative routes and first-match switching
//!
//! A [`Route`] pairs a pattern with a builder that turns captured parameters
//! into a value of the caller's choosing (a view, a message, a page id).
//! A [`Switch`] picks the first route matching the current location.

use crate::location::Location;
use crate::matcher::MatchResult;
use crate::params::RouteParams;
use crate::router::Router;
use crate::trace_log;
use std::fmt;
use std::rc::Rc;

/// Builder invoked with the captures of a matched route
pub type RouteBuilder<T> = Rc<dyn Fn(&RouteParams) -> T>;

// ============================================================================
// Route
// ============================================================================

/// A pattern and what to produce when it matches.
///
/// ```
/// use hash_router::{MemoryLocation, Route, Router};
///
/// let router = Router::new(MemoryLocation::new("/users/7"));
/// let user = Route::new("/users/:id", |params| format!("user {}", params.get("id").unwrap_or("?")));
///
/// assert_eq!(user.resolve(&router), Some("user 7".to_string()));
/// ```
pub struct Route<T> {
    pattern: Option<String>,
    builder: RouteBuilder<T>,
}

impl<T> Route<T> {
    /// Route rendered by `builder` when `pattern` matches
    pub fn new<F>(pattern: impl Into<String>, builder: F) -> Self
    where
        F: Fn(&RouteParams) -> T + 'static,
    {
        Self {
            pattern: Some(pattern.into()),
            builder: Rc::new(builder),
        }
    }

    /// Route without a pattern; matches every location.
    pub fn fallback<F>(builder: F) -> Self
    where
        F: Fn(&RouteParams) -> T + 'static,
    {
        Self {
            pattern: None,
            builder: Rc::new(builder),
        }
    }

    /// Pattern, `None` for a fallback
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Match against the router's current location
    pub fn matches(&self, router: &Router) -> MatchResult {
        router.route(self.pattern())
    }

    /// Build the value if the route matches the current location
    pub fn resolve(&self, router: &Router) -> Option<T> {
        self.render(&self.matches(router))
    }

    /// Build the value from a match computed elsewhere (e.g. by a [`Switch`]).
    pub fn render(&self, result: &MatchResult) -> Option<T> {
        result.params().map(|params| (self.builder)(params))
    }
}

impl<T> Clone for Route<T> {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            builder: Rc::clone(&self.builder),
        }
    }
}

impl<T> fmt::Debug for Route<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Switch
// ============================================================================

/// Ordered routes; only the first match is rendered.
///
/// ```
/// use hash_router::{MemoryLocation, Route, Router, Switch};
///
/// let router = Router::new(MemoryLocation::new("/about"));
/// let pages = Switch::new()
///     .route(Route::new("/", |_| "home"))
///     .route(Route::new("/about", |_| "about"))
///     .route(Route::fallback(|_| "not found"));
///
/// assert_eq!(pages.resolve(&router), Some("about"));
/// ```
pub struct Switch<T> {
    routes: Vec<Route<T>>,
}

impl<T> Switch<T> {
    /// Empty switch
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Append a route (builder style)
    pub fn route(mut self, route: Route<T>) -> Self {
        self.routes.push(route);
        self
    }

    /// Append a route after the existing ones
    pub fn push(&mut self, route: Route<T>) {
        self.routes.push(route);
    }

    /// Render the first route matching the router's current location
    pub fn resolve(&self, router: &Router) -> Option<T> {
        self.resolve_at(router, &router.current())
    }

    /// Render the first route matching `path`, using the router's matcher
    pub fn resolve_at(&self, router: &Router, path: &Location) -> Option<T> {
        self.routes.iter().enumerate().find_map(|(index, route)| {
            let result = router.match_path(route.pattern(), path);
            if result.is_match() {
                trace_log!("Switch picked route #{} ({:?}) for '{}'", index, route.pattern(), path);
            }
            route.render(&result)
        })
    }

    /// Routes in match order
    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    /// Number of routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the switch has no routes
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<T> Default for Switch<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Switch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Switch")
            .field("routes", &self.routes)
            .finish()
    }
}
