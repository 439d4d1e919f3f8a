//! Batch upload submission and the channel uploads cache.
//!
//! # Design
//! - One multipart request per file, issued concurrently and awaited to
//!   settlement; the batch result is the conjunction.
//! - Listings refresh regardless of partial failure: the succeeded
//!   uploads exist and must show up.

pub mod api;
pub mod logic;
