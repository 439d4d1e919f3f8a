//! Comments, always server-backed.
//!
//! # Design
//! - Never cached persistently; listings are re-fetched on demand.
//! - A submission without a resolved backend video id fails loudly
//!   before any request; a file name must never stand in for the id.

pub mod api;
pub mod logic;
