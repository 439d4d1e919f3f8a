//! Watch history: local cache plus the server-backed list.
//!
//! # Design
//! - The local cache is always written on playback; the server list is
//!   additionally written when a user is logged in.
//! - Loading prefers the server list and falls back to the local cache;
//!   the two sources are never merged.

pub mod api;
pub mod logic;
