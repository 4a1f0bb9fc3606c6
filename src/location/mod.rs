//! Location sources
//!
//! A [`LocationSource`] supplies the current [`Location`], notifies
//! subscribers when it changes and accepts navigation requests. The router
//! only ever talks to this trait.
//!
//! Two sources ship with the crate:
//!
//! - [`MemoryLocation`] - deterministic, notifies synchronously; meant for tests
//! - [`HashLocation`] - keeps the path in the fragment of an address and
//!   delivers `hashchange` events through a posted queue, like a browser

mod hash;
mod memory;

pub use hash::{hash_for, location_from_hash, HashLocation};
pub use memory::MemoryLocation;

use crate::trace_log;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

// ============================================================================
// Location
// ============================================================================

/// A normalized path.
///
/// Always starts with `/`. Trailing slashes are collapsed, except for the
/// root itself. Empty input is the root.
///
/// ```
/// use hash_router::Location;
///
/// assert_eq!(Location::new("").as_str(), "/");
/// assert_eq!(Location::new("users/42/").as_str(), "/users/42");
/// assert_eq!(Location::new("///").as_str(), "/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location(String);

impl Location {
    /// Normalized location: one leading slash, no trailing slash
    pub fn new(path: impl AsRef<str>) -> Self {
        let trimmed = path.as_ref().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::root();
        }
        if trimmed.starts_with('/') {
            Self(trimmed.to_string())
        } else {
            Self(format!("/{}", trimmed))
        }
    }

    /// The root location `/`
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Normalized path text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is `/`
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Normalized path text, by value
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Location {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Location {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl PartialEq<str> for Location {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Location {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ============================================================================
// LocationSource
// ============================================================================

/// Callback invoked when a source's location changes.
pub type Listener = Rc<dyn Fn()>;

/// Provider of the current location.
///
/// Contract for implementors:
///
/// - after `navigate(target)`, `current()` returns `target` no later than the
///   next time the host event loop runs
/// - every distinct change invokes each live listener at least once
/// - once a [`Subscription`] is released, its listener is never called again
pub trait LocationSource {
    /// The location as of now
    fn current(&self) -> Location;

    /// Register `listener` for change notifications
    fn subscribe(&self, listener: Listener) -> Subscription;

    /// Request navigation. Fire-and-forget; targets are never validated.
    fn navigate(&self, target: &Location);
}

impl<S: LocationSource + ?Sized> LocationSource for Rc<S> {
    fn current(&self) -> Location {
        (**self).current()
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        (**self).subscribe(listener)
    }

    fn navigate(&self, target: &Location) {
        (**self).navigate(target);
    }
}

// ============================================================================
// ListenerSet
// ============================================================================

#[derive(Default)]
struct ListenerSlots {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Registry of change listeners shared by the bundled sources.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct ListenerSet {
    slots: Rc<RefCell<ListenerSlots>>,
}

impl ListenerSet {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener; it stays registered until the returned guard is released.
    pub fn subscribe(&self, listener: Listener) -> Subscription {
        let id = {
            let mut slots = self.slots.borrow_mut();
            let id = slots.next_id;
            slots.next_id += 1;
            slots.entries.push((id, listener));
            id
        };
        trace_log!("Listener {} subscribed", id);

        let weak: Weak<RefCell<ListenerSlots>> = Rc::downgrade(&self.slots);
        Subscription::new(move || {
            if let Some(slots) = weak.upgrade() {
                slots.borrow_mut().entries.retain(|(entry, _)| *entry != id);
                trace_log!("Listener {} unsubscribed", id);
            }
        })
    }

    /// Invoke every listener registered at the time of the call, in
    /// registration order.
    ///
    /// Listeners removed by an earlier listener during the same pass are
    /// skipped. Listeners may subscribe, unsubscribe or navigate reentrantly.
    pub fn notify(&self) {
        let snapshot: Vec<(u64, Listener)> = self.slots.borrow().entries.clone();

        for (id, listener) in snapshot {
            let live = self
                .slots
                .borrow()
                .entries
                .iter()
                .any(|(entry, _)| *entry == id);
            if live {
                listener();
            }
        }
    }

    /// Number of live listeners
    pub fn len(&self) -> usize {
        self.slots.borrow().entries.len()
    }

    /// Whether no listener is live
    pub fn is_empty(&self) -> bool {
        self.slots.borrow().entries.is_empty()
    }
}

impl fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Subscription
// ============================================================================

/// Guard for a registered listener.
///
/// Dropping the guard unsubscribes, so a listener never outlives the context
/// that owns it, however that context ends.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: RefCell<Option<Box<dyn FnOnce()>>>,
    active: Cell<bool>,
}

impl Subscription {
    /// Wrap a release callback. It runs at most once.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: RefCell::new(Some(Box::new(release))),
            active: Cell::new(true),
        }
    }

    /// Stop receiving notifications. Calling it again does nothing.
    pub fn unsubscribe(&self) {
        self.active.set(false);
        let release = self.release.borrow_mut().take();
        if let Some(release) = release {
            release();
        }
    }

    /// Whether the listener is still registered
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Keep the listener registered for as long as the source lives.
    pub fn detach(self) {
        self.release.borrow_mut().take();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> (Rc<Cell<usize>>, Listener) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        (count, Rc::new(move || c.set(c.get() + 1)))
    }

    #[test]
    fn test_location_normalization() {
        assert_eq!(Location::new(""), "/");
        assert_eq!(Location::new("/"), "/");
        assert_eq!(Location::new("//"), "/");
        assert_eq!(Location::new("users"), "/users");
        assert_eq!(Location::new("/users/"), "/users");
        assert_eq!(Location::new("/users///"), "/users");
        assert_eq!(Location::new("/a//b"), "/a//b");
        assert!(Location::default().is_root());
    }

    #[test]
    fn test_notify_reaches_every_listener() {
        let set = ListenerSet::new();
        let (a, la) = counter();
        let (b, lb) = counter();
        let _sa = set.subscribe(la);
        let _sb = set.subscribe(lb);

        set.notify();
        set.notify();

        assert_eq!(a.get(), 2);
        assert_eq!(b.get(), 2);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let set = ListenerSet::new();
        let (count, listener) = counter();
        let sub = set.subscribe(listener);

        sub.unsubscribe();
        sub.unsubscribe();
        set.notify();

        assert_eq!(count.get(), 0);
        assert!(!sub.is_active());
        assert!(set.is_empty());
    }

    #[test]
    fn test_drop_releases_subscription() {
        let set = ListenerSet::new();
        let (count, listener) = counter();
        {
            let _sub = set.subscribe(listener);
            set.notify();
        }
        set.notify();

        assert_eq!(count.get(), 1);
        assert!(set.is_empty());
    }

    #[test]
    fn test_detach_keeps_listener() {
        let set = ListenerSet::new();
        let (count, listener) = counter();
        set.subscribe(listener).detach();

        set.notify();
        assert_eq!(count.get(), 1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_listener_removed_mid_notify_is_skipped() {
        let set = ListenerSet::new();
        let (count, listener) = counter();

        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let v = Rc::clone(&victim);
        let _killer = set.subscribe(Rc::new(move || {
            if let Some(sub) = v.borrow_mut().take() {
                sub.unsubscribe();
            }
        }));
        *victim.borrow_mut() = Some(set.subscribe(listener));

        set.notify();
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_subscription_outliving_set_is_harmless() {
        let (_, listener) = counter();
        let sub = {
            let set = ListenerSet::new();
            set.subscribe(listener)
        };
        sub.unsubscribe();
        assert!(!sub.is_active());
    }
}
