//! Playlist endpoints.

use crate::services::error::ApiError;
use async_trait::async_trait;
use protube_api_models::PlaylistDto;

/// Transport seam for playlist management.
#[async_trait(?Send)]
pub trait PlaylistsApi {
    /// All playlists owned by `user_id`.
    async fn list(&self, user_id: &str) -> Result<Vec<PlaylistDto>, ApiError>;
    /// Create a playlist; the server enforces name uniqueness.
    async fn create(&self, user_id: &str, name: &str) -> Result<PlaylistDto, ApiError>;
    /// Delete a playlist.
    async fn delete(&self, playlist_id: &str) -> Result<(), ApiError>;
    /// Add a video to a playlist.
    async fn add_video(&self, playlist_id: &str, video_id: &str) -> Result<(), ApiError>;
    /// Remove a video from a playlist.
    async fn remove_video(&self, playlist_id: &str, video_id: &str) -> Result<(), ApiError>;
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl PlaylistsApi for crate::services::api::ApiClient {
    async fn list(&self, user_id: &str) -> Result<Vec<PlaylistDto>, ApiError> {
        self.get_json(&format!(
            "/playlists/user/{}",
            urlencoding::encode(user_id)
        ))
        .await
    }

    async fn create(&self, user_id: &str, name: &str) -> Result<PlaylistDto, ApiError> {
        self.post_text(
            &format!("/playlists/user/{}", urlencoding::encode(user_id)),
            name,
        )
        .await
    }

    async fn delete(&self, playlist_id: &str) -> Result<(), ApiError> {
        self.delete_empty(&format!("/playlists/{}", urlencoding::encode(playlist_id)))
            .await
    }

    async fn add_video(&self, playlist_id: &str, video_id: &str) -> Result<(), ApiError> {
        self.post_empty(&video_path(playlist_id, video_id)).await
    }

    async fn remove_video(&self, playlist_id: &str, video_id: &str) -> Result<(), ApiError> {
        self.delete_empty(&video_path(playlist_id, video_id)).await
    }
}

#[cfg(target_arch = "wasm32")]
fn video_path(playlist_id: &str, video_id: &str) -> String {
    format!(
        "/playlists/{}/videos/{}",
        urlencoding::encode(playlist_id),
        urlencoding::encode(video_id)
    )
}

/// Blocking confirmation shown before deleting a playlist.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn confirm_delete_playlist() -> bool {
    gloo::dialogs::confirm("Eliminar la playlist?")
}

/// Blocking confirmation shown before removing a video from a playlist.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn confirm_remove_video() -> bool {
    gloo::dialogs::confirm("Eliminar aquest vídeo de la playlist?")
}
