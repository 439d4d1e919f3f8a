//! Comment submission and listing flows.

use crate::features::comments::api::CommentsApi;
use protube_api_models::CommentDto;
use protube_events::{AppEvent, EventBus, StateKind};

const MSG_LOGIN_REQUIRED: &str = "Inicia sessió per comentar";
const MSG_NO_VIDEO: &str = "No s'ha pogut identificar el vídeo";
const MSG_EMPTY: &str = "El comentari no pot estar buit";
const MSG_SAVED: &str = "Comentari publicat";
const MSG_DELETED: &str = "Comentari eliminat";
const MSG_FAILED: &str = "No s'ha pogut desar el comentari";

/// Why a comment submission was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentRejection {
    /// No logged-in user.
    LoginRequired,
    /// The video key could not be resolved to a backend identifier.
    MissingVideoId,
    /// Empty comment body after trimming.
    EmptyText,
    /// The server refused or the request failed.
    Backend,
}

/// Submit a comment after checking every precondition locally.
///
/// Unresolvable preconditions block the submission entirely; the comment
/// is never posted against a file name.
pub async fn submit(
    api: &dyn CommentsApi,
    bus: &EventBus,
    user_id: Option<&str>,
    video_id: Option<&str>,
    title: &str,
    text: &str,
) -> Result<CommentDto, CommentRejection> {
    let Some(user_id) = user_id else {
        bus.publish(&AppEvent::toast(MSG_LOGIN_REQUIRED));
        return Err(CommentRejection::LoginRequired);
    };
    let Some(video_id) = video_id.filter(|id| !id.is_empty()) else {
        bus.publish(&AppEvent::toast(MSG_NO_VIDEO));
        return Err(CommentRejection::MissingVideoId);
    };
    if text.trim().is_empty() {
        bus.publish(&AppEvent::toast(MSG_EMPTY));
        return Err(CommentRejection::EmptyText);
    }
    let comment = CommentDto {
        id: None,
        user_id: user_id.to_string(),
        video_id: video_id.to_string(),
        title: title.trim().to_string(),
        description: text.trim().to_string(),
        created_at: None,
    };
    match api.save(&comment).await {
        Ok(()) => {
            bus.publish(&AppEvent::toast(MSG_SAVED));
            bus.publish(&AppEvent::StateUpdated {
                kind: StateKind::Comentari,
                context: Some(video_id.to_string()),
            });
            Ok(comment)
        }
        Err(_) => {
            bus.publish(&AppEvent::toast(MSG_FAILED));
            Err(CommentRejection::Backend)
        }
    }
}

/// Comments for a video; empty on failure.
pub async fn for_video(api: &dyn CommentsApi, video_id: &str) -> Vec<CommentDto> {
    api.by_video(video_id).await.unwrap_or_default()
}

/// Comments authored by a user; empty on failure.
pub async fn for_user(api: &dyn CommentsApi, user_id: &str) -> Vec<CommentDto> {
    api.by_user(user_id).await.unwrap_or_default()
}

/// Delete a comment. Callers run the blocking confirmation first.
pub async fn delete(api: &dyn CommentsApi, bus: &EventBus, comment_id: &str) -> bool {
    match api.delete(comment_id).await {
        Ok(()) => {
            bus.publish(&AppEvent::toast(MSG_DELETED));
            bus.publish(&AppEvent::state(StateKind::Comentari));
            true
        }
        Err(_) => {
            bus.publish(&AppEvent::toast(MSG_FAILED));
            false
        }
    }
}
