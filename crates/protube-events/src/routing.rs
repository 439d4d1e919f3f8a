//! Synchronous fan-out with topic-scoped subscriptions.
//!
//! The bus lives inside a single tab, so delivery happens on the one
//! logical thread: `publish` invokes every handler for the event's topic
//! before it returns. Subscriptions are scoped guards; dropping the guard
//! removes the handler, which keeps torn-down components from being
//! called back.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::payloads::AppEvent;
use crate::topics::Topic;

type Handler = Rc<RefCell<dyn FnMut(&AppEvent)>>;

#[derive(Default)]
struct Registry {
    subscribers: HashMap<Topic, Vec<(u64, Handler)>>,
    next_token: u64,
}

/// Same-tab event bus. Cheap to clone; clones share the subscriber set.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Rc<RefCell<Registry>>,
}

impl EventBus {
    /// Construct an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every handler currently subscribed to its
    /// topic, in subscription order, before returning.
    ///
    /// Handlers subscribed while the event is being delivered do not
    /// receive it; handlers unsubscribed beforehand are never invoked.
    pub fn publish(&self, event: &AppEvent) {
        // Snapshot so handlers may subscribe/unsubscribe during delivery.
        let snapshot: Vec<Handler> = self
            .registry
            .borrow()
            .subscribers
            .get(&event.topic())
            .map(|entries| entries.iter().map(|(_, h)| Rc::clone(h)).collect())
            .unwrap_or_default();
        for handler in snapshot {
            (&mut *handler.borrow_mut())(event);
        }
    }

    /// Register `handler` for `topic`. The handler runs on every publish
    /// to that topic until the returned [`Subscription`] is dropped.
    #[must_use]
    pub fn subscribe(
        &self,
        topic: Topic,
        handler: impl FnMut(&AppEvent) + 'static,
    ) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let token = registry.next_token;
        registry.next_token += 1;
        registry
            .subscribers
            .entry(topic)
            .or_default()
            .push((token, Rc::new(RefCell::new(handler))));
        Subscription {
            registry: Rc::downgrade(&self.registry),
            topic,
            token,
        }
    }

    /// Number of live subscriptions for `topic`.
    #[must_use]
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.registry
            .borrow()
            .subscribers
            .get(&topic)
            .map_or(0, Vec::len)
    }
}

/// Scoped subscription guard; dropping it unsubscribes the handler.
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    topic: Topic,
    token: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Some(entries) = registry.borrow_mut().subscribers.get_mut(&self.topic) {
                entries.retain(|(token, _)| *token != self.token);
            }
        }
    }
}
