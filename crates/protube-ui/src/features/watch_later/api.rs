//! Watch-later endpoints.

use crate::services::error::ApiError;
use async_trait::async_trait;
use protube_api_models::PlaylistDto;

/// Transport seam for the distinguished watch-later playlist.
#[async_trait(?Send)]
pub trait WatchLaterApi {
    /// Fetch (implicitly creating) the user's watch-later playlist.
    async fn watch_later(&self, user_id: &str) -> Result<PlaylistDto, ApiError>;
    /// Add a video to the playlist.
    async fn add_video(&self, playlist_id: &str, video_id: &str) -> Result<(), ApiError>;
    /// Remove a video from the playlist.
    async fn remove_video(&self, playlist_id: &str, video_id: &str) -> Result<(), ApiError>;
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl WatchLaterApi for crate::services::api::ApiClient {
    async fn watch_later(&self, user_id: &str) -> Result<PlaylistDto, ApiError> {
        self.get_json(&format!(
            "/playlists/user/{}/watch-later",
            urlencoding::encode(user_id)
        ))
        .await
    }

    async fn add_video(&self, playlist_id: &str, video_id: &str) -> Result<(), ApiError> {
        self.post_empty(&format!(
            "/playlists/{}/videos/{}",
            urlencoding::encode(playlist_id),
            urlencoding::encode(video_id)
        ))
        .await
    }

    async fn remove_video(&self, playlist_id: &str, video_id: &str) -> Result<(), ApiError> {
        self.delete_empty(&format!(
            "/playlists/{}/videos/{}",
            urlencoding::encode(playlist_id),
            urlencoding::encode(video_id)
        ))
        .await
    }
}
