//! Server-owned playlists.
//!
//! # Design
//! - Duplicate membership is rejected before any network call with a
//!   user-visible notice; this is a product rule, not a dedupe.
//! - Name uniqueness is delegated to the backend; a rejection status
//!   surfaces as the legacy duplicate-name notice.
//! - Deletion is confirmed at the call site (blocking dialog).

pub mod api;
pub mod logic;
pub mod state;
