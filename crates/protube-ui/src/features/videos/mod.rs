//! Video listing, media conventions and identifier resolution.
//!
//! # Design
//! - Normalization is pure so listing quirks are covered natively.
//! - The transport is a trait seam; the HTTP binding lives behind wasm.

pub mod api;
pub mod logic;
