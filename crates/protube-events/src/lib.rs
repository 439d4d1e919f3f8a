//! Same-tab notification bus for the Protube client.
//!
//! Sibling components in one browser tab cannot rely on the native
//! cross-tab storage notification (it never fires in the tab that wrote),
//! so state changes are fanned out through this bus instead. Delivery is
//! synchronous: every handler subscribed to the event's topic runs, in
//! subscription order, before [`routing::EventBus::publish`] returns.

pub mod payloads;
pub mod routing;
pub mod topics;

pub use payloads::{AppEvent, StateKind};
pub use routing::{EventBus, Subscription};
pub use topics::Topic;
