//! Listing transport and orchestration.

use crate::features::videos::logic::{
    apply_sidecar, needs_sidecar, normalize_entry, resolve_video_id, sidecar_candidates,
};
use crate::models::VideoItem;
use crate::services::error::ApiError;
use async_trait::async_trait;

/// Transport seam for the video endpoints.
#[async_trait(?Send)]
pub trait VideosApi {
    /// Raw listing entries (strings or objects, backend dependent).
    async fn fetch_all(&self) -> Result<Vec<serde_json::Value>, ApiError>;
    /// Fetch one sidecar candidate; `None` on any failure.
    async fn fetch_sidecar(&self, url: &str) -> Option<serde_json::Value>;
    /// Delete a video by backend identifier.
    async fn delete_video(&self, video_id: &str) -> Result<(), ApiError>;
}

/// Fetch and normalize the listing, probing sidecars for entries the
/// backend left incomplete. Sidecar failures are tolerated per entry.
pub async fn load_videos(
    api: &dyn VideosApi,
    media_base: &str,
) -> Result<Vec<VideoItem>, ApiError> {
    let entries = api.fetch_all().await?;
    let mut items: Vec<VideoItem> = entries
        .iter()
        .map(|entry| normalize_entry(entry, media_base))
        .collect();
    for item in &mut items {
        if !needs_sidecar(item) {
            continue;
        }
        for url in sidecar_candidates(media_base, &item.file_name, item.video_id.as_deref()) {
            if let Some(data) = api.fetch_sidecar(&url).await {
                apply_sidecar(item, &data);
                break;
            }
        }
    }
    Ok(items)
}

/// Resolve a video key against the live listing when no identifier is
/// known from navigation context. `None` on any failure or miss.
pub async fn resolve_remote(
    api: &dyn VideosApi,
    media_base: &str,
    context: Option<&str>,
    key: &str,
) -> Option<String> {
    if let Some(id) = context.filter(|id| !id.is_empty()) {
        return Some(id.to_string());
    }
    let entries = api.fetch_all().await.ok()?;
    let listing: Vec<VideoItem> = entries
        .iter()
        .map(|entry| normalize_entry(entry, media_base))
        .collect();
    resolve_video_id(None, &listing, key)
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl VideosApi for crate::services::api::ApiClient {
    async fn fetch_all(&self) -> Result<Vec<serde_json::Value>, ApiError> {
        self.get_json("/videos/all").await
    }

    async fn fetch_sidecar(&self, url: &str) -> Option<serde_json::Value> {
        self.get_absolute_json(url).await.ok()
    }

    async fn delete_video(&self, video_id: &str) -> Result<(), ApiError> {
        self.delete_empty(&format!("/videos/{}", urlencoding::encode(video_id)))
            .await
    }
}

/// Blocking confirmation shown before deleting a video.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn confirm_delete_video() -> bool {
    gloo::dialogs::confirm("Eliminar aquest vídeo?")
}
