//! Single-active toast queue.
//!
//! At most one toast is visible; a newer one replaces the current
//! immediately. Dismissal is generation-guarded so a stale timer firing
//! after a replacement cannot clear the newer toast.

/// Auto-dismiss delay.
pub const TOAST_DISMISS_MS: u32 = 2_500;

/// Visible toast snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message.
    pub message: String,
}

/// Replace-on-show toast state.
#[derive(Debug, Default)]
pub struct ToastQueue {
    current: Option<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Construct an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, replacing any current toast. Returns the new
    /// toast's identifier for a matching [`Self::dismiss`].
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Toast {
            id,
            message: message.into(),
        });
        id
    }

    /// Dismiss the toast with `id`; ignored when a newer toast replaced it.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|toast| toast.id == id) {
            self.current = None;
        }
    }

    /// Currently visible toast, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

/// Bus-driven toast host: shows each `toast` event and auto-dismisses it
/// after [`TOAST_DISMISS_MS`], invoking `on_change` on every transition
/// so the view layer can re-render.
#[cfg(target_arch = "wasm32")]
pub struct ToastHost {
    queue: std::rc::Rc<std::cell::RefCell<ToastQueue>>,
    _subscription: protube_events::Subscription,
}

#[cfg(target_arch = "wasm32")]
impl ToastHost {
    /// Subscribe to `bus` and start serving toast events.
    #[must_use]
    pub fn attach(bus: &protube_events::EventBus, on_change: impl Fn() + 'static) -> Self {
        use gloo::timers::callback::Timeout;
        use protube_events::{AppEvent, Topic};
        use std::cell::RefCell;
        use std::rc::Rc;

        let queue = Rc::new(RefCell::new(ToastQueue::new()));
        let timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let on_change = Rc::new(on_change);
        let subscription = {
            let queue = Rc::clone(&queue);
            bus.subscribe(Topic::Toast, move |event| {
                let AppEvent::Toast { message } = event else {
                    return;
                };
                let id = queue.borrow_mut().show(message.clone());
                on_change();
                let handle = Timeout::new(TOAST_DISMISS_MS, {
                    let queue = Rc::clone(&queue);
                    let on_change = Rc::clone(&on_change);
                    move || {
                        queue.borrow_mut().dismiss(id);
                        on_change();
                    }
                });
                // Replacing the handle cancels the previous toast's timer.
                *timer.borrow_mut() = Some(handle);
            })
        };
        Self {
            queue,
            _subscription: subscription,
        }
    }

    /// Message of the currently visible toast, if any.
    #[must_use]
    pub fn current_message(&self) -> Option<String> {
        self.queue
            .borrow()
            .current()
            .map(|toast| toast.message.clone())
    }
}
