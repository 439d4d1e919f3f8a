#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Protube client state-synchronization core.
//!
//! This crate keeps the browser client's state consistent across
//! components and tabs without a central store: persisted and
//! session-scoped storage accessors, the identity record, the local
//! watch-history cache, the single-active toast queue, and the
//! reconciliation helpers that overwrite optimistic local state with
//! authoritative backend responses. The view layer consumes these
//! modules; it does not live here.
//!
//! Browser-facing edges (storage, HTTP, timers) are gated behind
//! `wasm32`; every state transition and reconciliation rule is expressed
//! over trait seams so it compiles and tests natively.

pub mod core;
pub mod features;
pub mod models;
pub mod services;
