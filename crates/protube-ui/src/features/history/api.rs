//! History endpoints.

use crate::services::error::ApiError;
use async_trait::async_trait;
use protube_api_models::HistoryViewDto;
#[cfg(target_arch = "wasm32")]
use protube_api_models::ViewRequest;

/// Transport seam for server-side watch history.
#[async_trait(?Send)]
pub trait HistoryApi {
    /// Record a view for `user_id`.
    async fn record(&self, user_id: &str, video_file_name: &str)
    -> Result<HistoryViewDto, ApiError>;
    /// Server-side history for `user_id`, newest first.
    async fn list(&self, user_id: &str) -> Result<Vec<HistoryViewDto>, ApiError>;
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl HistoryApi for crate::services::api::ApiClient {
    async fn record(
        &self,
        user_id: &str,
        video_file_name: &str,
    ) -> Result<HistoryViewDto, ApiError> {
        self.post_json(
            "/history/view",
            &ViewRequest {
                user_id: user_id.to_string(),
                video_file_name: video_file_name.to_string(),
            },
        )
        .await
    }

    async fn list(&self, user_id: &str) -> Result<Vec<HistoryViewDto>, ApiError> {
        self.get_json(&format!("/history/{}", urlencoding::encode(user_id)))
            .await
    }
}

/// Blocking confirmation shown before clearing the local history.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn confirm_clear_history() -> bool {
    gloo::dialogs::confirm("Borrar historial?")
}
