//! Like endpoints.

use crate::services::error::ApiError;
use async_trait::async_trait;

/// Transport seam for the like relation.
#[async_trait(?Send)]
pub trait LikesApi {
    /// Whether `user_id` likes `video_id` according to the server.
    async fn is_liked(&self, user_id: &str, video_id: &str) -> Result<bool, ApiError>;
    /// Create the like relation.
    async fn like(&self, user_id: &str, video_id: &str) -> Result<(), ApiError>;
    /// Remove the like relation.
    async fn unlike(&self, user_id: &str, video_id: &str) -> Result<(), ApiError>;
    /// Video identifiers liked by `user_id`.
    async fn liked_by_user(&self, user_id: &str) -> Result<Vec<String>, ApiError>;
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl LikesApi for crate::services::api::ApiClient {
    async fn is_liked(&self, user_id: &str, video_id: &str) -> Result<bool, ApiError> {
        self.get_json(&like_path(user_id, video_id)).await
    }

    async fn like(&self, user_id: &str, video_id: &str) -> Result<(), ApiError> {
        self.post_empty(&like_path(user_id, video_id)).await
    }

    async fn unlike(&self, user_id: &str, video_id: &str) -> Result<(), ApiError> {
        self.delete_empty(&like_path(user_id, video_id)).await
    }

    async fn liked_by_user(&self, user_id: &str) -> Result<Vec<String>, ApiError> {
        self.get_json(&format!("/likes/user/{}", urlencoding::encode(user_id)))
            .await
    }
}

#[cfg(target_arch = "wasm32")]
fn like_path(user_id: &str, video_id: &str) -> String {
    format!(
        "/likes/{}/{}",
        urlencoding::encode(user_id),
        urlencoding::encode(video_id)
    )
}
