//! Watch-later membership reconciliation.

use crate::features::pending::{PendingSet, pair_key};
use crate::features::watch_later::api::WatchLaterApi;
use protube_api_models::PlaylistDto;
use protube_events::{AppEvent, EventBus, StateKind};

const MSG_LOGIN_REQUIRED: &str = "Inicia sessió per desar vídeos";
const MSG_FETCH_FAILED: &str = "No s'ha pogut carregar Visualitza més tard";
const MSG_ADDED: &str = "Afegit a Visualitza més tard";
const MSG_REMOVED: &str = "Eliminat de Visualitza més tard";
const MSG_ALREADY: &str = "Aquest vídeo ja és a Visualitza més tard";
const MSG_FAILED: &str = "No s'ha pogut actualitzar Visualitza més tard";

/// Fetch the distinguished playlist, surfacing an error notice and
/// returning `None` on failure so callers abort instead of proceeding
/// with a missing playlist.
pub async fn fetch_watch_later(
    api: &dyn WatchLaterApi,
    bus: &EventBus,
    user_id: &str,
) -> Option<PlaylistDto> {
    match api.watch_later(user_id).await {
        Ok(playlist) => Some(playlist),
        Err(_) => {
            bus.publish(&AppEvent::toast(MSG_FETCH_FAILED));
            None
        }
    }
}

/// Server truth for a toggle's initial display state; conservative
/// `false` on any failure.
pub async fn check_saved(api: &dyn WatchLaterApi, user_id: &str, video_id: &str) -> bool {
    api.watch_later(user_id)
        .await
        .map(|playlist| playlist.contains(video_id))
        .unwrap_or(false)
}

/// Toggle watch-later membership and return the state the UI should
/// display.
///
/// Mirrors the like toggle contract: login gate before any request,
/// in-flight rejection, await-then-notify, rollback on failure. When the
/// server already holds the video the add is skipped with a notice and
/// the display state reconciles to the server truth.
pub async fn toggle_watch_later(
    api: &dyn WatchLaterApi,
    bus: &EventBus,
    pending: &PendingSet,
    user_id: Option<&str>,
    video_id: &str,
    current: bool,
) -> bool {
    let Some(user_id) = user_id else {
        bus.publish(&AppEvent::toast(MSG_LOGIN_REQUIRED));
        return current;
    };
    let Some(_guard) = pending.begin(pair_key(user_id, video_id)) else {
        return current;
    };
    let Some(playlist) = fetch_watch_later(api, bus, user_id).await else {
        return current;
    };
    if current {
        match api.remove_video(&playlist.id, video_id).await {
            Ok(()) => {
                bus.publish(&AppEvent::toast(MSG_REMOVED));
                publish_update(bus, video_id);
                false
            }
            Err(_) => {
                bus.publish(&AppEvent::toast(MSG_FAILED));
                true
            }
        }
    } else if playlist.contains(video_id) {
        // Optimistic state lagged behind another tab; reconcile.
        bus.publish(&AppEvent::toast(MSG_ALREADY));
        true
    } else {
        match api.add_video(&playlist.id, video_id).await {
            Ok(()) => {
                bus.publish(&AppEvent::toast(MSG_ADDED));
                publish_update(bus, video_id);
                true
            }
            Err(_) => {
                bus.publish(&AppEvent::toast(MSG_FAILED));
                false
            }
        }
    }
}

fn publish_update(bus: &EventBus, video_id: &str) {
    bus.publish(&AppEvent::StateUpdated {
        kind: StateKind::WatchLater,
        context: Some(video_id.to_string()),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::error::ApiError;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use protube_events::Topic;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeWatchLaterApi {
        members: RefCell<Vec<String>>,
        fetch_fails: bool,
        mutations_fail: bool,
        calls: RefCell<Vec<String>>,
    }

    impl FakeWatchLaterApi {
        fn with_members(members: &[&str]) -> Self {
            Self {
                members: RefCell::new(members.iter().map(ToString::to_string).collect()),
                fetch_fails: false,
                mutations_fail: false,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl WatchLaterApi for FakeWatchLaterApi {
        async fn watch_later(&self, user_id: &str) -> Result<PlaylistDto, ApiError> {
            self.calls.borrow_mut().push("fetch".into());
            if self.fetch_fails {
                return Err(ApiError::Network("offline".into()));
            }
            Ok(PlaylistDto {
                id: "wl-1".into(),
                name: "Watch Later".into(),
                user_id: user_id.to_string(),
                video_ids: self.members.borrow().clone(),
            })
        }

        async fn add_video(&self, playlist_id: &str, video_id: &str) -> Result<(), ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("add {playlist_id}/{video_id}"));
            if self.mutations_fail {
                return Err(ApiError::Network("offline".into()));
            }
            self.members.borrow_mut().push(video_id.to_string());
            Ok(())
        }

        async fn remove_video(&self, playlist_id: &str, video_id: &str) -> Result<(), ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("remove {playlist_id}/{video_id}"));
            if self.mutations_fail {
                return Err(ApiError::Network("offline".into()));
            }
            self.members.borrow_mut().retain(|id| id != video_id);
            Ok(())
        }
    }

    fn toasts(bus: &EventBus) -> (Rc<RefCell<Vec<String>>>, protube_events::Subscription) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sub = {
            let log = Rc::clone(&log);
            bus.subscribe(Topic::Toast, move |event| {
                if let AppEvent::Toast { message } = event {
                    log.borrow_mut().push(message.clone());
                }
            })
        };
        (log, sub)
    }

    #[test]
    fn toggle_adds_then_removes() {
        let api = FakeWatchLaterApi::with_members(&[]);
        let bus = EventBus::new();
        let pending = PendingSet::new();
        let saved = block_on(toggle_watch_later(&api, &bus, &pending, Some("u"), "v", false));
        assert!(saved);
        let saved = block_on(toggle_watch_later(&api, &bus, &pending, Some("u"), "v", saved));
        assert!(!saved);
        assert!(api.members.borrow().is_empty());
    }

    #[test]
    fn fetch_failure_aborts_without_membership_calls() {
        let api = FakeWatchLaterApi {
            fetch_fails: true,
            ..FakeWatchLaterApi::with_members(&[])
        };
        let bus = EventBus::new();
        let (log, _sub) = toasts(&bus);
        let pending = PendingSet::new();
        let saved = block_on(toggle_watch_later(&api, &bus, &pending, Some("u"), "v", false));
        assert!(!saved);
        assert_eq!(api.calls.borrow().as_slice(), ["fetch"]);
        assert_eq!(log.borrow().as_slice(), [MSG_FETCH_FAILED]);
    }

    #[test]
    fn add_failure_rolls_back() {
        let api = FakeWatchLaterApi {
            mutations_fail: true,
            ..FakeWatchLaterApi::with_members(&[])
        };
        let bus = EventBus::new();
        let (log, _sub) = toasts(&bus);
        let pending = PendingSet::new();
        let saved = block_on(toggle_watch_later(&api, &bus, &pending, Some("u"), "v", false));
        assert!(!saved);
        assert!(log.borrow().iter().any(|m| m == MSG_FAILED));
    }

    #[test]
    fn stale_add_reconciles_to_server_truth_with_a_notice() {
        let api = FakeWatchLaterApi::with_members(&["v"]);
        let bus = EventBus::new();
        let (log, _sub) = toasts(&bus);
        let pending = PendingSet::new();
        let saved = block_on(toggle_watch_later(&api, &bus, &pending, Some("u"), "v", false));
        assert!(saved);
        // Fetch only; the duplicate add never went out.
        assert_eq!(api.calls.borrow().as_slice(), ["fetch"]);
        assert_eq!(log.borrow().as_slice(), [MSG_ALREADY]);
    }

    #[test]
    fn missing_user_raises_the_login_notice() {
        let api = FakeWatchLaterApi::with_members(&[]);
        let bus = EventBus::new();
        let (log, _sub) = toasts(&bus);
        let pending = PendingSet::new();
        let saved = block_on(toggle_watch_later(&api, &bus, &pending, None, "v", false));
        assert!(!saved);
        assert!(api.calls.borrow().is_empty());
        assert_eq!(log.borrow().as_slice(), [MSG_LOGIN_REQUIRED]);
    }

    #[test]
    fn check_saved_is_conservative_on_failure() {
        let api = FakeWatchLaterApi {
            fetch_fails: true,
            ..FakeWatchLaterApi::with_members(&["v"])
        };
        assert!(!block_on(check_saved(&api, "u", "v")));
        let api = FakeWatchLaterApi::with_members(&["v"]);
        assert!(block_on(check_saved(&api, "u", "v")));
    }
}
