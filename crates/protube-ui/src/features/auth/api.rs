//! User endpoints.
//!
//! The backend takes credentials as query parameters on POST, a legacy
//! it never migrated off.

use crate::services::error::ApiError;
use async_trait::async_trait;

/// Transport seam for login and registration.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Verify credentials.
    async fn login(&self, email: &str, password: &str) -> Result<(), ApiError>;
    /// Create an account.
    async fn register(&self, username: &str, email: &str, password: &str)
    -> Result<(), ApiError>;
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl AuthApi for crate::services::api::ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        self.post_empty(&format!(
            "/users/login?email={}&password={}",
            urlencoding::encode(email),
            urlencoding::encode(password)
        ))
        .await
    }

    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.post_empty(&format!(
            "/users/register?username={}&email={}&password={}",
            urlencoding::encode(username),
            urlencoding::encode(email),
            urlencoding::encode(password)
        ))
        .await
    }
}
