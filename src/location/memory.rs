//! In-memory location source

use super::{Listener, ListenerSet, Location, LocationSource, Subscription};
use crate::debug_log;
use std::cell::{Cell, RefCell};

/// Deterministic location source.
///
/// `navigate` updates the location and then calls every listener before
/// returning, in registration order. Navigating to the location already
/// current is not a change and notifies nobody.
///
/// ```
/// use hash_router::{Location, LocationSource, MemoryLocation};
///
/// let source = MemoryLocation::new("/");
/// source.navigate(&Location::new("/x"));
/// assert_eq!(source.current(), "/x");
/// ```
#[derive(Debug, Default)]
pub struct MemoryLocation {
    current: RefCell<Location>,
    listeners: ListenerSet,
    navigations: Cell<usize>,
}

impl MemoryLocation {
    /// Source positioned at `initial`
    pub fn new(initial: impl Into<Location>) -> Self {
        Self {
            current: RefCell::new(initial.into()),
            listeners: ListenerSet::new(),
            navigations: Cell::new(0),
        }
    }

    /// Number of navigations that changed the location
    pub fn navigations(&self) -> usize {
        self.navigations.get()
    }

    /// Number of live subscriptions
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl LocationSource for MemoryLocation {
    fn current(&self) -> Location {
        self.current.borrow().clone()
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        self.listeners.subscribe(listener)
    }

    fn navigate(&self, target: &Location) {
        let from = self.current.replace(target.clone());
        if from == *target {
            return;
        }
        debug_log!("navigate: {} -> {}", from, target);
        self.navigations.set(self.navigations.get() + 1);
        self.listeners.notify();
    }
}
