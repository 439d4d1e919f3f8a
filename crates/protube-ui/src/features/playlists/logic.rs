//! Playlist reconciliation flows.

use crate::features::playlists::api::PlaylistsApi;
use protube_api_models::PlaylistDto;
use protube_events::{AppEvent, EventBus, StateKind};

const MSG_DUPLICATE_VIDEO: &str = "Aquest vídeo ja és a la llista";
const MSG_NAME_TAKEN: &str = "Ja existeix una llista amb aquest nom. Tria un altre nom.";
const MSG_EMPTY_NAME: &str = "El nom de la llista no pot estar buit";
const MSG_CREATED: &str = "Llista creada";
const MSG_DELETED: &str = "Llista eliminada";
const MSG_VIDEO_ADDED: &str = "Vídeo afegit a la llista";
const MSG_VIDEO_REMOVED: &str = "Vídeo eliminat de la llista";
const MSG_FAILED: &str = "No s'ha pogut actualitzar la llista";

/// Why an add-video request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddVideoRejection {
    /// The video is already a member; no request was made.
    AlreadyMember,
    /// The server refused or the request failed.
    Backend,
}

/// Playlists owned by a user; empty on failure.
pub async fn list(api: &dyn PlaylistsApi, user_id: &str) -> Vec<PlaylistDto> {
    api.list(user_id).await.unwrap_or_default()
}

/// Create a playlist, delegating name uniqueness to the backend. A
/// rejection status surfaces the legacy duplicate-name notice.
pub async fn create(
    api: &dyn PlaylistsApi,
    bus: &EventBus,
    user_id: &str,
    name: &str,
) -> Option<PlaylistDto> {
    let name = name.trim();
    if name.is_empty() {
        bus.publish(&AppEvent::toast(MSG_EMPTY_NAME));
        return None;
    }
    match api.create(user_id, name).await {
        Ok(playlist) => {
            bus.publish(&AppEvent::toast(MSG_CREATED));
            bus.publish(&AppEvent::state(StateKind::Playlists));
            Some(playlist)
        }
        Err(err) => {
            bus.publish(&AppEvent::toast(if err.is_rejection() {
                MSG_NAME_TAKEN
            } else {
                MSG_FAILED
            }));
            None
        }
    }
}

/// Delete a playlist. Callers run the blocking confirmation first.
pub async fn delete(api: &dyn PlaylistsApi, bus: &EventBus, playlist_id: &str) -> bool {
    match api.delete(playlist_id).await {
        Ok(()) => {
            bus.publish(&AppEvent::toast(MSG_DELETED));
            bus.publish(&AppEvent::state(StateKind::Playlists));
            true
        }
        Err(_) => {
            bus.publish(&AppEvent::toast(MSG_FAILED));
            false
        }
    }
}

/// Add a video to a playlist.
///
/// Adding a video already present is rejected with a user-visible notice
/// before any network call; the list is left untouched.
pub async fn add_video(
    api: &dyn PlaylistsApi,
    bus: &EventBus,
    playlist: &PlaylistDto,
    video_id: &str,
) -> Result<(), AddVideoRejection> {
    if playlist.contains(video_id) {
        bus.publish(&AppEvent::toast(MSG_DUPLICATE_VIDEO));
        return Err(AddVideoRejection::AlreadyMember);
    }
    match api.add_video(&playlist.id, video_id).await {
        Ok(()) => {
            bus.publish(&AppEvent::toast(MSG_VIDEO_ADDED));
            bus.publish(&AppEvent::StateUpdated {
                kind: StateKind::Playlists,
                context: Some(video_id.to_string()),
            });
            Ok(())
        }
        Err(_) => {
            bus.publish(&AppEvent::toast(MSG_FAILED));
            Err(AddVideoRejection::Backend)
        }
    }
}

/// Remove a video from a playlist. Callers confirm first.
pub async fn remove_video(
    api: &dyn PlaylistsApi,
    bus: &EventBus,
    playlist_id: &str,
    video_id: &str,
) -> bool {
    match api.remove_video(playlist_id, video_id).await {
        Ok(()) => {
            bus.publish(&AppEvent::toast(MSG_VIDEO_REMOVED));
            bus.publish(&AppEvent::StateUpdated {
                kind: StateKind::Playlists,
                context: Some(video_id.to_string()),
            });
            true
        }
        Err(_) => {
            bus.publish(&AppEvent::toast(MSG_FAILED));
            false
        }
    }
}
