//! HTTP transport for the Protube REST API.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod error;
