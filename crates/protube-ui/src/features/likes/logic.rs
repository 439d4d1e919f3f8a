//! Like toggle reconciliation.

use crate::features::likes::api::LikesApi;
use crate::features::pending::{PendingSet, pair_key};
use protube_events::{AppEvent, EventBus, StateKind};

const MSG_LOGIN_REQUIRED: &str = "Inicia sessió per marcar m'agrada";
const MSG_LIKED: &str = "Afegit a vídeos que t'agraden";
const MSG_UNLIKED: &str = "Eliminat de vídeos que t'agraden";
const MSG_FAILED: &str = "No s'ha pogut actualitzar el m'agrada";

/// Server truth for a toggle's initial display state. Network failure
/// defaults to the conservative "not liked".
pub async fn check_liked(api: &dyn LikesApi, user_id: &str, video_id: &str) -> bool {
    api.is_liked(user_id, video_id).await.unwrap_or(false)
}

/// All liked video identifiers for a user; empty on failure.
pub async fn liked_videos(api: &dyn LikesApi, user_id: &str) -> Vec<String> {
    api.liked_by_user(user_id).await.unwrap_or_default()
}

/// Toggle the like relation and return the state the UI should display.
///
/// Without a user the call raises a login-required notice and performs
/// no request. While a toggle for the same pair is in flight, further
/// toggles are rejected unchanged. The server response is awaited before
/// any confirmatory notification; failure rolls back to `current`.
pub async fn toggle_like(
    api: &dyn LikesApi,
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
    let result = if current {
        api.unlike(user_id, video_id).await
    } else {
        api.like(user_id, video_id).await
    };
    match result {
        Ok(()) => {
            let next = !current;
            bus.publish(&AppEvent::toast(if next { MSG_LIKED } else { MSG_UNLIKED }));
            bus.publish(&AppEvent::StateUpdated {
                kind: StateKind::Liked,
                context: Some(video_id.to_string()),
            });
            next
        }
        Err(_) => {
            bus.publish(&AppEvent::toast(MSG_FAILED));
            current
        }
    }
}
