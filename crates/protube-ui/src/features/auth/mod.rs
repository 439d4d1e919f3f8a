//! Login, registration and logout flows.
//!
//! # Design
//! - Success persists the identity record and publishes the `auth`
//!   state update; failure maps the backend's status conventions onto
//!   caller-facing errors.

pub mod api;
pub mod logic;
