//! Keyed in-flight guards for network-backed toggles.
//!
//! A toggle spanning an awaited network call is not atomic with respect
//! to other tab events; re-entrant triggers for the same key are
//! rejected (control-disabled semantics) rather than queued.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};

/// Shared set of keys with an operation in flight.
#[derive(Debug, Default, Clone)]
pub struct PendingSet {
    inner: Rc<RefCell<HashSet<String>>>,
}

impl PendingSet {
    /// Construct an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as in flight. Returns `None` when an operation for the
    /// same key is already pending; the guard releases the key on drop.
    #[must_use]
    pub fn begin(&self, key: impl Into<String>) -> Option<PendingGuard> {
        let key = key.into();
        if !self.inner.borrow_mut().insert(key.clone()) {
            return None;
        }
        Some(PendingGuard {
            set: Rc::downgrade(&self.inner),
            key,
        })
    }

    /// Whether an operation for `key` is in flight.
    #[must_use]
    pub fn is_pending(&self, key: &str) -> bool {
        self.inner.borrow().contains(key)
    }
}

/// Releases its key when dropped.
#[derive(Debug)]
pub struct PendingGuard {
    set: Weak<RefCell<HashSet<String>>>,
    key: String,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if let Some(set) = self.set.upgrade() {
            set.borrow_mut().remove(&self.key);
        }
    }
}

/// Guard key for a (user, video) pair.
#[must_use]
pub fn pair_key(user_id: &str, video_id: &str) -> String {
    format!("{user_id}:{video_id}")
}
