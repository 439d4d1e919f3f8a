//! Login/register orchestration over the identity record.

use crate::core::identity::{self, Identity};
use crate::core::store::KeyValueStore;
use crate::features::auth::api::AuthApi;
use crate::services::error::ApiError;
use protube_events::EventBus;

/// Why an auth flow failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The password did not match.
    #[error("incorrect credentials")]
    InvalidCredentials,
    /// The email is not registered.
    #[error("email not registered")]
    NotRegistered,
    /// The username or email is already taken.
    #[error("account already exists")]
    AlreadyExists,
    /// The request failed for transport or server reasons.
    #[error("auth request failed: {0}")]
    Other(ApiError),
}

fn map_login_error(err: ApiError) -> AuthError {
    match err.status() {
        Some(401) => AuthError::InvalidCredentials,
        Some(404) => AuthError::NotRegistered,
        _ => AuthError::Other(err),
    }
}

fn map_register_error(err: ApiError) -> AuthError {
    match err.status() {
        Some(409) => AuthError::AlreadyExists,
        _ => AuthError::Other(err),
    }
}

fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Verify credentials, persist the identity and publish `auth`.
///
/// The backend keys accounts by email, so the email doubles as the user
/// id and the display name derives from its local part.
pub async fn login(
    api: &dyn AuthApi,
    store: &dyn KeyValueStore,
    bus: &EventBus,
    email: &str,
    password: &str,
) -> Result<Identity, AuthError> {
    api.login(email, password).await.map_err(map_login_error)?;
    let record = Identity {
        user_id: email.to_string(),
        username: local_part(email).to_string(),
        avatar_url: None,
    };
    identity::login(store, bus, &record);
    Ok(record)
}

/// Create an account, persist the identity and publish `auth`.
pub async fn register(
    api: &dyn AuthApi,
    store: &dyn KeyValueStore,
    bus: &EventBus,
    username: &str,
    email: &str,
    password: &str,
) -> Result<Identity, AuthError> {
    api.register(username, email, password)
        .await
        .map_err(map_register_error)?;
    let record = Identity {
        user_id: email.to_string(),
        username: username.to_string(),
        avatar_url: None,
    };
    identity::login(store, bus, &record);
    Ok(record)
}

/// Clear the identity and publish `auth`.
pub fn logout(store: &dyn KeyValueStore, bus: &EventBus) {
    identity::logout(store, bus);
}
