//! HTTP client helpers (REST).
//!
//! # Design
//! - Keep raw verbs here; per-entity calls live in each feature's `api`
//!   module so endpoints stay close to the logic that needs them.
//! - Every response is status-checked before decoding so callers can
//!   distinguish server rejections from transport failures.

use crate::core::config;
use crate::services::error::ApiError;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Client bound to the Protube API and media bases.
#[derive(Clone, Debug)]
pub struct ApiClient {
    api_base: String,
    media_base: String,
}

impl ApiClient {
    /// Client over explicit bases (trailing slashes tolerated).
    #[must_use]
    pub fn new(api_base: impl Into<String>, media_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            media_base: media_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client resolved from the window origin.
    #[must_use]
    pub fn from_window() -> Self {
        Self::new(config::api_base_url(), config::media_base_url())
    }

    /// Media base used for poster and sidecar URLs.
    #[must_use]
    pub fn media_base(&self) -> &str {
        &self.media_base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(transport)?;
        decode(ensure_ok(response)?).await
    }

    /// Fetch an absolute URL (media sidecars) as loose JSON.
    pub(crate) async fn get_absolute_json(&self, url: &str) -> Result<serde_json::Value, ApiError> {
        let response = Request::get(url).send().await.map_err(transport)?;
        decode(ensure_ok(response)?).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = Request::post(&self.url(path))
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(response).map(drop)
    }

    pub(crate) async fn delete_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(path))
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(response).map(drop)
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(ensure_ok(response)?).await
    }

    pub(crate) async fn post_json_empty<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(response).map(drop)
    }

    /// POST a raw text body (the playlist-create endpoint takes the bare
    /// name, not a JSON document).
    pub(crate) async fn post_text<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &str,
    ) -> Result<T, ApiError> {
        let response = Request::post(&self.url(path))
            .header("Content-Type", "text/plain")
            .body(body.to_string())
            .send()
            .await
            .map_err(transport)?;
        decode(ensure_ok(response)?).await
    }

    pub(crate) async fn post_form(
        &self,
        path: &str,
        form: web_sys::FormData,
    ) -> Result<(), ApiError> {
        let response = Request::post(&self.url(path))
            .body(form)
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(response).map(drop)
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status(),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}
