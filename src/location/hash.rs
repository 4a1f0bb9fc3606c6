//! Hash-based location source
//!
//! The path travels in the fragment of the address: `https://host/app#/users/42`
//! is the location `/users/42`. An empty fragment is the root.

use super::{Listener, ListenerSet, Location, LocationSource, Subscription};
use crate::{debug_log, trace_log};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Location encoded by a fragment, with or without its leading `#`.
pub fn location_from_hash(hash: &str) -> Location {
    Location::new(hash.strip_prefix('#').unwrap_or(hash))
}

/// Fragment that encodes `location`.
pub fn hash_for(location: &Location) -> String {
    format!("#{}", location)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HashChange {
    old_hash: String,
    new_hash: String,
}

/// Location source backed by the fragment of an emulated host address.
///
/// Writing the fragment is immediate, so `current()` reflects a navigation
/// as soon as `navigate` returns. Change events, however, are posted to a
/// queue and only reach listeners when the host loop runs
/// [`dispatch_pending`](Self::dispatch_pending), in the order they were posted.
///
/// ```
/// use hash_router::{HashLocation, Location, LocationSource};
///
/// let source = HashLocation::with_address("https://example.com/app#/inbox");
/// assert_eq!(source.current(), "/inbox");
///
/// source.navigate(&Location::new("/settings"));
/// assert_eq!(source.address(), "https://example.com/app#/settings");
/// assert_eq!(source.pending_events(), 1);
/// ```
#[derive(Debug, Default)]
pub struct HashLocation {
    document: String,
    hash: RefCell<String>,
    queue: RefCell<VecDeque<HashChange>>,
    listeners: ListenerSet,
}

impl HashLocation {
    /// Source with an empty fragment, i.e. at the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Source seeded from a full address. Everything after the first `#` is
    /// the fragment.
    pub fn with_address(address: &str) -> Self {
        let (document, hash) = match address.find('#') {
            Some(pos) => (&address[..pos], &address[pos..]),
            None => (address, ""),
        };
        Self {
            document: document.to_string(),
            hash: RefCell::new(hash.to_string()),
            ..Self::default()
        }
    }

    /// Current fragment, including the `#` when one is set
    pub fn hash(&self) -> String {
        self.hash.borrow().clone()
    }

    /// Full emulated address
    pub fn address(&self) -> String {
        format!("{}{}", self.document, self.hash.borrow())
    }

    /// Overwrite the fragment with raw text, as the user editing the address
    /// bar would. Posts a change event when the fragment differs.
    pub fn set_hash(&self, raw: &str) {
        let new_hash = if raw.is_empty() || raw.starts_with('#') {
            raw.to_string()
        } else {
            format!("#{}", raw)
        };

        let old_hash = self.hash.replace(new_hash.clone());
        if old_hash != new_hash {
            trace_log!("hashchange posted: '{}' -> '{}'", old_hash, new_hash);
            self.queue
                .borrow_mut()
                .push_back(HashChange { old_hash, new_hash });
        }
    }

    /// Number of change events posted but not yet delivered
    pub fn pending_events(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Deliver queued change events in post order. Events posted while
    /// delivering are delivered in the same call.
    ///
    /// Returns how many events were delivered.
    pub fn dispatch_pending(&self) -> usize {
        let mut delivered = 0;
        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(change) = next else {
                break;
            };
            trace_log!(
                "hashchange delivered: '{}' -> '{}'",
                change.old_hash,
                change.new_hash
            );
            self.listeners.notify();
            delivered += 1;
        }
        delivered
    }

    /// Number of live subscriptions
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl LocationSource for HashLocation {
    fn current(&self) -> Location {
        location_from_hash(&self.hash.borrow())
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        self.listeners.subscribe(listener)
    }

    fn navigate(&self, target: &Location) {
        let from = self.current();
        if from == *target {
            trace_log!("navigate: already at {}", target);
            return;
        }
        debug_log!("navigate: {} -> {}", from, target);
        self.set_hash(&hash_for(target));
    }
}
