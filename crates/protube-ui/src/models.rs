//! Shared client models used across features.

use serde::{Deserialize, Serialize};

/// Normalized video entry derived from the listing endpoint.
///
/// The listing may return bare path strings or full objects; both are
/// folded into this shape, with sidecar metadata filling the gaps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoItem {
    /// Display key: the media file name without its extension.
    pub name: String,
    /// Stored media file name, e.g. `intro.mp4`.
    pub file_name: String,
    /// Playable media URL.
    pub video_url: String,
    /// Poster image URL (`<stem>.webp` under the media base).
    pub poster_url: String,
    /// Display title when known.
    pub title: Option<String>,
    /// Long-form description when known.
    pub description: Option<String>,
    /// Owning channel name when known.
    pub channel: Option<String>,
    /// View counter when known.
    pub view_count: Option<u64>,
    /// Like counter when known.
    pub like_count: Option<u64>,
    /// Duration in seconds when known.
    pub duration_seconds: Option<u64>,
    /// Backend video identifier when resolved.
    pub video_id: Option<String>,
}

/// Channel upload record cached under the legacy persisted key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelVideo {
    /// Media file name, the dedupe key.
    pub name: String,
    /// Display title.
    pub title: String,
    /// Poster URL, possibly empty for fresh uploads.
    #[serde(default)]
    pub poster_url: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Record creation time in epoch milliseconds.
    pub created_at: i64,
    /// Whether the video is published or still private.
    pub published: bool,
}

/// One file queued for upload, plus its metadata.
#[derive(Debug, Clone)]
pub struct UploadItem {
    /// Uploading user identifier.
    pub user_id: String,
    /// Source file name.
    pub file_name: String,
    /// Title entered by the user (defaults to the file name).
    pub title: String,
    /// Description entered by the user.
    pub description: String,
    /// File handle for the multipart request.
    #[cfg(target_arch = "wasm32")]
    pub file: web_sys::File,
    /// Optional thumbnail handle.
    #[cfg(target_arch = "wasm32")]
    pub thumbnail: Option<web_sys::File>,
}
