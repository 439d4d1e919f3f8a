//! Session-scoped blob-URL mappings for in-progress uploads.
//!
//! The mapping lives in per-tab storage and dies with the tab; the
//! underlying object URLs do not. Revoking them is the caller's
//! obligation, normally via [`revoke_on_unload`] so a long-lived tab
//! with several uploads does not leak browser resources.

use crate::core::store::{KeyValueStore, blob_key};

/// Associate an upload's preview blob URL with its source file name.
pub fn register_blob(store: &dyn KeyValueStore, file_name: &str, blob_url: &str) {
    store.set(&blob_key(file_name), blob_url);
}

/// Look up the preview URL registered for `file_name`.
#[must_use]
pub fn lookup_blob(store: &dyn KeyValueStore, file_name: &str) -> Option<String> {
    store.get(&blob_key(file_name))
}

/// Drop the mapping for `file_name`. Does not revoke the URL.
pub fn remove_blob(store: &dyn KeyValueStore, file_name: &str) {
    store.remove(&blob_key(file_name));
}

/// Revoke `urls` when the page unloads. Keep the returned listener alive
/// for as long as the URLs are; dropping it cancels the hook.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn revoke_on_unload(urls: Vec<String>) -> gloo::events::EventListener {
    use gloo::utils::window;
    gloo::events::EventListener::new(&window(), "beforeunload", move |_| {
        for url in &urls {
            let _ = web_sys::Url::revoke_object_url(url);
        }
    })
}
