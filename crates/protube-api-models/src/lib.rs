#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Protube REST API.
//!
//! Field names follow the backend's camelCase wire contract; identifiers
//! are opaque strings owned by the server, and timestamps travel as epoch
//! milliseconds. These types carry no transport code so the client core
//! can exercise them natively in tests.

use serde::{Deserialize, Serialize};

/// Full video record as returned by the listing endpoint.
///
/// The listing historically also returned bare path strings; callers that
/// consume the raw response normalize both forms before mapping into this
/// shape, so every field except the file name is optional here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VideoDto {
    /// Server-assigned video identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Identifier of the uploading user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Long-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Stored media file name, e.g. `intro.mp4`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// Metadata blob attached to a multipart upload, echoed back on success.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoSaveDto {
    /// Identifier of the uploading user.
    pub user_id: String,
    /// Display title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Stored media file name.
    pub file_name: String,
}

/// Server-owned playlist with ordered membership.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDto {
    /// Server-assigned playlist identifier.
    pub id: String,
    /// Display name, unique per user on the server side.
    pub name: String,
    /// Owning user identifier.
    pub user_id: String,
    /// Ordered member video identifiers.
    pub video_ids: Vec<String>,
}

impl PlaylistDto {
    /// Whether `video_id` is already a member.
    #[must_use]
    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }
}

/// Comment attached to a video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    /// Server-assigned comment identifier; absent on submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Authoring user identifier.
    pub user_id: String,
    /// Target video identifier (the server id, never a file name).
    pub video_id: String,
    /// Short comment title.
    pub title: String,
    /// Comment body.
    pub description: String,
    /// Creation time in epoch milliseconds, when the server provides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

/// One server-side watch-history entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryViewDto {
    /// Server-assigned entry identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Viewing user identifier.
    pub user_id: String,
    /// Viewed media file name.
    pub video_file_name: String,
    /// Video title, falling back to the file name server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Video description when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Last view time in epoch milliseconds.
    pub viewed_at: i64,
}

/// Body for recording a view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ViewRequest {
    /// Viewing user identifier.
    pub user_id: String,
    /// Viewed media file name.
    pub video_file_name: String,
}

/// Public user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// Server-assigned user identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    pub username: String,
    /// Registration email when exposed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
