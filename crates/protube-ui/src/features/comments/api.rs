//! Comment endpoints.

use crate::services::error::ApiError;
use async_trait::async_trait;
use protube_api_models::CommentDto;

/// Transport seam for comments.
#[async_trait(?Send)]
pub trait CommentsApi {
    /// Comments for a video, by backend identifier.
    async fn by_video(&self, video_id: &str) -> Result<Vec<CommentDto>, ApiError>;
    /// Comments authored by a user.
    async fn by_user(&self, user_id: &str) -> Result<Vec<CommentDto>, ApiError>;
    /// Persist a new comment.
    async fn save(&self, comment: &CommentDto) -> Result<(), ApiError>;
    /// Delete a comment.
    async fn delete(&self, comment_id: &str) -> Result<(), ApiError>;
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl CommentsApi for crate::services::api::ApiClient {
    async fn by_video(&self, video_id: &str) -> Result<Vec<CommentDto>, ApiError> {
        self.get_json(&format!(
            "/comentaris/video/{}",
            urlencoding::encode(video_id)
        ))
        .await
    }

    async fn by_user(&self, user_id: &str) -> Result<Vec<CommentDto>, ApiError> {
        self.get_json(&format!(
            "/comentaris/user/{}",
            urlencoding::encode(user_id)
        ))
        .await
    }

    async fn save(&self, comment: &CommentDto) -> Result<(), ApiError> {
        self.post_json_empty("/comentaris/save", comment).await
    }

    async fn delete(&self, comment_id: &str) -> Result<(), ApiError> {
        self.delete_empty(&format!("/comentaris/{}", urlencoding::encode(comment_id)))
            .await
    }
}

/// Blocking confirmation shown before deleting a comment.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn confirm_delete_comment() -> bool {
    gloo::dialogs::confirm("Eliminar aquest comentari?")
}
