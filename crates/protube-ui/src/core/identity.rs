//! Identity record persisted across the legacy auth keys.
//!
//! # Design
//! - The auth flag and username key must agree; either missing reads as
//!   logged out rather than erroring.
//! - Persisting and clearing are plain data operations; publishing the
//!   `auth` notification is explicit so callers control ordering.

use crate::core::store::{
    CHANNEL_PROFILE_KEY, KeyValueStore, USER_ID_KEY, USER_KEY, USERNAME_KEY, get_json, set_json,
};
use protube_events::{AppEvent, EventBus, StateKind};
use serde::{Deserialize, Serialize};

/// Logged-in user snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Stable user identifier used in API paths.
    pub user_id: String,
    /// Display name.
    pub username: String,
    /// Avatar URL when the user set one.
    pub avatar_url: Option<String>,
}

/// Channel profile object stored alongside the identity keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChannelProfile {
    /// Display name override for the channel page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Load the identity, requiring the auth flag and username to agree.
#[must_use]
pub fn load(store: &dyn KeyValueStore) -> Option<Identity> {
    let flag = store.get(USER_KEY)?;
    if flag.is_empty() {
        return None;
    }
    let username = store.get(USERNAME_KEY)?;
    if username.is_empty() {
        return None;
    }
    let user_id = store
        .get(USER_ID_KEY)
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| username.clone());
    let profile: ChannelProfile = get_json(store, CHANNEL_PROFILE_KEY, ChannelProfile::default());
    Some(Identity {
        user_id,
        username,
        avatar_url: profile.avatar_url,
    })
}

/// Whether a user is currently logged in.
#[must_use]
pub fn is_authenticated(store: &dyn KeyValueStore) -> bool {
    load(store).is_some()
}

/// Persist the identity across its keys.
pub fn persist(store: &dyn KeyValueStore, identity: &Identity) {
    store.set(USER_KEY, &identity.user_id);
    store.set(USERNAME_KEY, &identity.username);
    store.set(USER_ID_KEY, &identity.user_id);
    if identity.avatar_url.is_some() {
        let mut profile: ChannelProfile =
            get_json(store, CHANNEL_PROFILE_KEY, ChannelProfile::default());
        profile.username = Some(identity.username.clone());
        profile.avatar_url.clone_from(&identity.avatar_url);
        set_json(store, CHANNEL_PROFILE_KEY, &profile);
    }
}

/// Clear every identity key.
pub fn clear(store: &dyn KeyValueStore) {
    store.remove(USER_KEY);
    store.remove(USERNAME_KEY);
    store.remove(USER_ID_KEY);
    store.remove(CHANNEL_PROFILE_KEY);
}

/// Persist the identity and notify same-tab listeners.
pub fn login(store: &dyn KeyValueStore, bus: &EventBus, identity: &Identity) {
    persist(store, identity);
    bus.publish(&AppEvent::state(StateKind::Auth));
}

/// Clear the identity and notify same-tab listeners.
pub fn logout(store: &dyn KeyValueStore, bus: &EventBus) {
    clear(store);
    bus.publish(&AppEvent::state(StateKind::Auth));
}

/// Update the avatar in the channel profile and broadcast a refresh.
pub fn update_avatar(store: &dyn KeyValueStore, bus: &EventBus, avatar_url: &str) {
    let mut profile: ChannelProfile =
        get_json(store, CHANNEL_PROFILE_KEY, ChannelProfile::default());
    profile.avatar_url = Some(avatar_url.to_string());
    set_json(store, CHANNEL_PROFILE_KEY, &profile);
    bus.publish(&AppEvent::ProfileUpdated);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::{DisabledStore, MemoryStore};
    use protube_events::Topic;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn identity() -> Identity {
        Identity {
            user_id: "ona@example.com".into(),
            username: "ona".into(),
            avatar_url: None,
        }
    }

    #[test]
    fn login_round_trips_the_identity() {
        let store = MemoryStore::new();
        let bus = EventBus::new();
        login(&store, &bus, &identity());
        assert_eq!(load(&store), Some(identity()));
        assert!(is_authenticated(&store));
    }

    #[test]
    fn missing_username_reads_as_logged_out() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "ona@example.com");
        assert_eq!(load(&store), None);
        assert!(!is_authenticated(&store));
    }

    #[test]
    fn empty_flag_reads_as_logged_out() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "");
        store.set(USERNAME_KEY, "ona");
        assert_eq!(load(&store), None);
    }

    #[test]
    fn logout_clears_and_notifies() {
        let store = MemoryStore::new();
        let bus = EventBus::new();
        let updates = Rc::new(RefCell::new(0));
        let _sub = {
            let updates = Rc::clone(&updates);
            bus.subscribe(Topic::StateUpdated, move |event| {
                if matches!(
                    event,
                    AppEvent::StateUpdated {
                        kind: StateKind::Auth,
                        ..
                    }
                ) {
                    *updates.borrow_mut() += 1;
                }
            })
        };
        login(&store, &bus, &identity());
        logout(&store, &bus);
        assert_eq!(load(&store), None);
        assert_eq!(*updates.borrow(), 2);
    }

    #[test]
    fn missing_user_id_falls_back_to_username() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "1");
        store.set(USERNAME_KEY, "ona");
        let loaded = load(&store).expect("identity");
        assert_eq!(loaded.user_id, "ona");
    }

    #[test]
    fn avatar_update_broadcasts_profile_refresh() {
        let store = MemoryStore::new();
        let bus = EventBus::new();
        let refreshed = Rc::new(RefCell::new(false));
        let _sub = {
            let refreshed = Rc::clone(&refreshed);
            bus.subscribe(Topic::ProfileUpdated, move |_| {
                *refreshed.borrow_mut() = true;
            })
        };
        login(&store, &bus, &identity());
        update_avatar(&store, &bus, "https://cdn/avatar.png");
        assert!(*refreshed.borrow());
        let loaded = load(&store).expect("identity");
        assert_eq!(loaded.avatar_url.as_deref(), Some("https://cdn/avatar.png"));
    }

    #[test]
    fn unavailable_storage_never_panics() {
        let bus = EventBus::new();
        login(&DisabledStore, &bus, &identity());
        assert_eq!(load(&DisabledStore), None);
        logout(&DisabledStore, &bus);
    }
}
