//! Lazily built, per-scope routers
//!
//! A router is built on first demand within a scope and reused for the
//! scope's lifetime; it goes away with the scope. There is no process-wide
//! router. Pass a [`Router`] (or the scope that owns it) down explicitly, and
//! reach for [`ScopeRegistry`] only at the outermost composition boundary.

use crate::debug_log;
use crate::router::{Router, RouterOptions};
use std::cell::{Cell, OnceCell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

// ============================================================================
// RouterScope
// ============================================================================

/// Owner of at most one [`Router`].
///
/// ```
/// use hash_router::{MemoryLocation, RouterOptions, RouterScope};
///
/// let scope = RouterScope::with_options(
///     RouterOptions::new().source(|| MemoryLocation::new("/")),
/// );
/// assert!(!scope.is_built());
///
/// let first = scope.router().clone();
/// let second = scope.router();
/// assert!(first.ptr_eq(second));
/// ```
#[derive(Default)]
pub struct RouterScope {
    options: Cell<Option<RouterOptions>>,
    router: OnceCell<Router>,
}

impl RouterScope {
    /// Scope whose router uses the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope whose router is built from `options` on first use.
    pub fn with_options(options: RouterOptions) -> Self {
        Self {
            options: Cell::new(Some(options)),
            router: OnceCell::new(),
        }
    }

    /// The scope's router, built now if this is the first request.
    pub fn router(&self) -> &Router {
        self.router.get_or_init(|| {
            debug_log!("Building router for scope");
            self.options.take().unwrap_or_default().build()
        })
    }

    /// Whether the router was built already
    pub fn is_built(&self) -> bool {
        self.router.get().is_some()
    }

    /// Take the router out of the scope, if it was ever built.
    pub fn into_router(self) -> Option<Router> {
        self.router.into_inner()
    }
}

impl fmt::Debug for RouterScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterScope")
            .field("router", &self.router.get())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// ScopeRegistry
// ============================================================================

type OptionsFactory<K> = Box<dyn Fn(&K) -> RouterOptions>;

/// Routers keyed by scope.
///
/// The first request for a key builds a router from the registry's options
/// factory; later requests for the same key get the same instance until the
/// key is released.
pub struct ScopeRegistry<K> {
    scopes: RefCell<HashMap<K, Router>>,
    options: OptionsFactory<K>,
}

impl<K: Eq + Hash + Clone> ScopeRegistry<K> {
    /// Registry that builds every router with default options.
    pub fn new() -> Self {
        Self::with_options(|_| RouterOptions::new())
    }

    /// Registry that asks `options` how to build the router for a key.
    pub fn with_options<F>(options: F) -> Self
    where
        F: Fn(&K) -> RouterOptions + 'static,
    {
        Self {
            scopes: RefCell::new(HashMap::new()),
            options: Box::new(options),
        }
    }

    /// Router for `key`, built on first request.
    pub fn router(&self, key: &K) -> Router {
        if let Some(router) = self.scopes.borrow().get(key) {
            return router.clone();
        }

        debug_log!("Building router for new scope");
        let router = (self.options)(key).build();
        self.scopes
            .borrow_mut()
            .entry(key.clone())
            .or_insert(router)
            .clone()
    }

    /// Discard the router for `key`. Returns whether one existed.
    pub fn release(&self, key: &K) -> bool {
        self.scopes.borrow_mut().remove(key).is_some()
    }

    /// Whether `key` has a live router
    pub fn contains(&self, key: &K) -> bool {
        self.scopes.borrow().contains_key(key)
    }

    /// Number of live routers
    pub fn len(&self) -> usize {
        self.scopes.borrow().len()
    }

    /// Whether no router is live
    pub fn is_empty(&self) -> bool {
        self.scopes.borrow().is_empty()
    }
}

impl<K: Eq + Hash + Clone> Default for ScopeRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for ScopeRegistry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeRegistry")
            .field("scopes", &self.scopes.borrow().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::MemoryLocation;
    use std::rc::Rc;

    fn counting_options(builds: &Rc<Cell<usize>>) -> RouterOptions {
        let builds = Rc::clone(builds);
        RouterOptions::new().source(move || {
            builds.set(builds.get() + 1);
            MemoryLocation::new("/")
        })
    }

    #[test]
    fn test_scope_builds_lazily_and_once() {
        let builds = Rc::new(Cell::new(0));
        let scope = RouterScope::with_options(counting_options(&builds));

        assert_eq!(builds.get(), 0);
        assert!(!scope.is_built());

        let first = scope.router().clone();
        for _ in 0..10 {
            assert!(scope.router().ptr_eq(&first));
            scope.router().route("/users/:id");
        }
        assert_eq!(builds.get(), 1);
        assert!(scope.is_built());
    }

    #[test]
    fn test_scopes_are_independent() {
        let a = RouterScope::new();
        let b = RouterScope::new();
        assert!(!a.router().ptr_eq(b.router()));
    }

    #[test]
    fn test_into_router() {
        let scope = RouterScope::new();
        assert!(scope.into_router().is_none());

        let scope = RouterScope::new();
        let router = scope.router().clone();
        let taken = scope.into_router().unwrap();
        assert!(taken.ptr_eq(&router));
    }

    #[test]
    fn test_registry_memoizes_per_key() {
        let builds = Rc::new(Cell::new(0));
        let b = Rc::clone(&builds);
        let registry: ScopeRegistry<&str> =
            ScopeRegistry::with_options(move |_: &&str| counting_options(&b));

        let main = registry.router(&"main");
        assert!(registry.router(&"main").ptr_eq(&main));
        let side = registry.router(&"side");
        assert!(!side.ptr_eq(&main));

        assert_eq!(builds.get(), 2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_registry_release_discards_router() {
        let registry: ScopeRegistry<u32> = ScopeRegistry::new();
        let first = registry.router(&1);

        assert!(registry.release(&1));
        assert!(!registry.release(&1));
        assert!(!registry.contains(&1));

        let rebuilt = registry.router(&1);
        assert!(!rebuilt.ptr_eq(&first));
    }
}
