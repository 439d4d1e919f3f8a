//! Persisted and session key-value store accessors.
//!
//! # Design
//! - Storage failures (private browsing, quota) degrade to no-ops or
//!   fallbacks; they are logged on the wasm edge and never panic.
//! - JSON handling lives in free helpers so the trait stays object-safe
//!   and features can hold a `&dyn KeyValueStore`.
//! - An in-memory implementation doubles as the test fake.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;

/// Authentication flag. Present (non-empty) when a user is logged in.
pub const USER_KEY: &str = "protube_user";
/// Display name of the logged-in user.
pub const USERNAME_KEY: &str = "protube_username";
/// Identifier of the logged-in user.
pub const USER_ID_KEY: &str = "protube_user_id";
/// Local watch-history cache (JSON list, newest first).
pub const HISTORY_KEY: &str = "protube_history";
/// Legacy client-only liked list (JSON list). Read-only compatibility.
pub const LIKED_KEY: &str = "protube_liked";
/// Legacy client-only watch-later list (JSON list). Read-only compatibility.
pub const WATCH_LATER_KEY: &str = "protube_watch_later";
/// Legacy client-only playlists map (JSON object). Read-only compatibility.
pub const PLAYLISTS_KEY: &str = "protube_playlists";
/// Channel uploads cache (JSON list, newest first).
pub const CHANNEL_VIDEOS_KEY: &str = "protube_channel_videos";
/// Channel posts cache (JSON list).
pub const CHANNEL_POSTS_KEY: &str = "protube_channel_posts";
/// Channel profile object (JSON).
pub const CHANNEL_PROFILE_KEY: &str = "protube_channel_profile";

const COMMENTS_PREFIX: &str = "protube_comments_";
const BLOB_PREFIX: &str = "protube_blob_";

/// Legacy per-video comment cache key.
#[must_use]
pub fn comments_key(video_key: &str) -> String {
    format!("{COMMENTS_PREFIX}{video_key}")
}

/// Session key mapping an upload's file name to its preview blob URL.
#[must_use]
pub fn blob_key(file_name: &str) -> String {
    format!("{BLOB_PREFIX}{file_name}")
}

/// String-keyed store with the never-throws contract of browser storage
/// wrappers: reads return `None` on any failure, writes are silently
/// dropped on failure.
pub trait KeyValueStore {
    /// Read a value; `None` on absence or any storage failure.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value; failures are swallowed.
    fn set(&self, key: &str, value: &str);
    /// Remove a value; failures are swallowed.
    fn remove(&self, key: &str);
}

/// Read and parse a JSON value, falling back on absence or parse failure.
pub fn get_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str, fallback: T) -> T {
    store
        .get(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or(fallback)
}

/// Serialize and write a JSON value; serialization failures are swallowed
/// like storage failures.
pub fn set_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        store.set(key, &raw);
    }
}

/// In-memory store used natively and as the test fake.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Construct an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Store that refuses every operation, modelling unavailable browser
/// storage (private browsing, disabled cookies).
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledStore;

impl KeyValueStore for DisabledStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

/// Persisted per-origin store shared across tabs.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

/// Per-tab store cleared when the tab closes.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SessionStore;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::{KeyValueStore, LocalStore, SessionStore};
    use gloo::console;
    use gloo::utils::window;

    fn local_storage() -> Option<web_sys::Storage> {
        window().local_storage().ok().flatten()
    }

    fn session_storage() -> Option<web_sys::Storage> {
        window().session_storage().ok().flatten()
    }

    fn read(storage: Option<web_sys::Storage>, key: &str) -> Option<String> {
        storage.and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn write(storage: Option<web_sys::Storage>, key: &str, value: &str) {
        let Some(storage) = storage else {
            console::error!("storage unavailable, dropping write", key);
            return;
        };
        if storage.set_item(key, value).is_err() {
            console::error!("storage write failed", key);
        }
    }

    fn erase(storage: Option<web_sys::Storage>, key: &str) {
        if let Some(storage) = storage {
            let _ = storage.remove_item(key);
        }
    }

    impl KeyValueStore for LocalStore {
        fn get(&self, key: &str) -> Option<String> {
            read(local_storage(), key)
        }

        fn set(&self, key: &str, value: &str) {
            write(local_storage(), key, value);
        }

        fn remove(&self, key: &str) {
            erase(local_storage(), key);
        }
    }

    impl KeyValueStore for SessionStore {
        fn get(&self, key: &str) -> Option<String> {
            read(session_storage(), key)
        }

        fn set(&self, key: &str, value: &str) {
            write(session_storage(), key, value);
        }

        fn remove(&self, key: &str) {
            erase(session_storage(), key);
        }
    }
}
