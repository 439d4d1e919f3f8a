//! Upload transport.

use crate::models::UploadItem;
use crate::services::error::ApiError;
use async_trait::async_trait;

/// Transport seam for the multipart upload endpoint.
#[async_trait(?Send)]
pub trait UploadApi {
    /// Upload one item; `publish` controls the visibility flag.
    async fn upload(&self, item: &UploadItem, publish: bool) -> Result<(), ApiError>;
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl UploadApi for crate::services::api::ApiClient {
    async fn upload(&self, item: &UploadItem, publish: bool) -> Result<(), ApiError> {
        use protube_api_models::VideoSaveDto;

        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("form-data failed".to_string()))?;
        form.append_with_blob_and_filename("file", &item.file, &item.file_name)
            .map_err(|_| ApiError::Network("attach file failed".to_string()))?;
        if let Some(thumbnail) = &item.thumbnail {
            let _ = form.append_with_blob_and_filename("thumbnail", thumbnail, &thumbnail.name());
        }
        let meta = VideoSaveDto {
            user_id: item.user_id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            file_name: item.file_name.clone(),
        };
        if let Ok(meta_json) = serde_json::to_string(&meta) {
            let _ = form.append_with_str("meta", &meta_json);
        }
        self.post_form(&format!("/videos/upload?published={publish}"), form)
            .await
    }
}
