//! Pure listing normalization and identifier resolution.
//!
//! The listing endpoint has returned bare path strings, partial objects
//! and full objects across backend versions; all forms normalize into
//! [`VideoItem`]. Sidecar metadata fills whatever the listing omitted,
//! accepting the field aliases that accumulated in old sidecar files.

use crate::models::VideoItem;
use serde_json::Value;

/// File name without its final extension.
#[must_use]
pub fn stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 && !file_name[idx..].contains('/') => &file_name[..idx],
        _ => file_name,
    }
}

/// Last path segment of a raw listing value.
#[must_use]
pub fn file_name_of(raw: &str) -> &str {
    raw.rsplit('/').next().unwrap_or(raw)
}

fn is_absolute(raw: &str) -> bool {
    raw.starts_with("http://") || raw.starts_with("https://")
}

/// Poster URL convention: file stem plus `.webp` under the media base.
#[must_use]
pub fn poster_url(media_base: &str, file_name: &str) -> String {
    format!("{media_base}/{}.webp", stem(file_name))
}

/// Candidate sidecar URLs, probed in order until one responds.
#[must_use]
pub fn sidecar_candidates(
    media_base: &str,
    file_name: &str,
    video_id: Option<&str>,
) -> Vec<String> {
    let mut candidates = vec![
        format!("{media_base}/{}.json", stem(file_name)),
        format!("{media_base}/{file_name}.json"),
    ];
    if let Some(id) = video_id {
        candidates.push(format!("{media_base}/{id}.json"));
    }
    candidates
}

fn pick_str(map: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

/// Fold one raw listing entry (string or object) into a [`VideoItem`].
#[must_use]
pub fn normalize_entry(entry: &Value, media_base: &str) -> VideoItem {
    let mut title = None;
    let mut description = None;
    let mut video_id = None;
    let raw = match entry {
        Value::String(path) => path.clone(),
        Value::Object(map) => {
            title = pick_str(map, &["title"]);
            description = pick_str(map, &["description"]);
            video_id = pick_str(map, &["videoId", "id"]);
            pick_str(map, &["fileName", "file", "videoUrl", "path"])
                .unwrap_or_else(|| entry.to_string())
        }
        other => other.to_string(),
    };
    let file_name = file_name_of(&raw).to_string();
    let name = stem(&file_name).to_string();
    let video_url = if is_absolute(&raw) {
        raw
    } else {
        format!("{media_base}/{file_name}")
    };
    VideoItem {
        poster_url: poster_url(media_base, &file_name),
        name,
        file_name,
        video_url,
        title,
        description,
        video_id,
        ..VideoItem::default()
    }
}

/// Whether sidecar metadata should be probed for this item.
#[must_use]
pub const fn needs_sidecar(item: &VideoItem) -> bool {
    item.title.is_none()
        || item.description.is_none()
        || item.view_count.is_none()
        || item.like_count.is_none()
        || item.duration_seconds.is_none()
}

fn alias<'v>(data: &'v Value, meta: &'v Value, keys: &[&str]) -> Option<&'v Value> {
    keys.iter()
        .find_map(|key| data.get(key).or_else(|| meta.get(key)))
}

fn str_alias(data: &Value, meta: &Value, keys: &[&str]) -> Option<String> {
    alias(data, meta, keys)
        .and_then(Value::as_str)
        .map(str::to_string)
}

// Old sidecars carry numbers as JSON numbers or strings; negatives are
// rejected outright.
fn count_alias(data: &Value, meta: &Value, keys: &[&str]) -> Option<u64> {
    let value = alias(data, meta, keys)?;
    if let Some(count) = value.as_u64() {
        return Some(count);
    }
    if let Some(float) = value.as_f64() {
        return (float >= 0.0).then_some(float as u64);
    }
    value
        .as_str()
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|parsed| *parsed >= 0.0)
        .map(|parsed| parsed as u64)
}

/// Fill fields the listing omitted from a sidecar document. Fields
/// already present on the item win over sidecar values.
pub fn apply_sidecar(item: &mut VideoItem, data: &Value) {
    let meta = data.get("meta").cloned().unwrap_or(Value::Null);
    if item.title.is_none() {
        item.title = str_alias(data, &meta, &["title"]);
    }
    if item.description.is_none() {
        item.description = str_alias(data, &meta, &["description"]);
    }
    if item.channel.is_none() {
        item.channel = str_alias(data, &meta, &["channel", "user", "author", "uploader"]);
    }
    if item.view_count.is_none() {
        item.view_count = count_alias(data, &meta, &["view_count", "views", "viewCount"]);
    }
    if item.like_count.is_none() {
        item.like_count = count_alias(data, &meta, &["like_count", "likes", "likeCount"]);
    }
    if item.duration_seconds.is_none() {
        item.duration_seconds = count_alias(
            data,
            &meta,
            &["duration", "length_seconds", "length", "durationSeconds"],
        );
    }
}

/// Resolve a human-facing video key to the backend identifier.
///
/// Prefers an identifier already known from navigation context, then
/// matches the listing by file name or stem. `None` means the dependent
/// action cannot proceed; callers must not fall back to the file name.
#[must_use]
pub fn resolve_video_id(
    context: Option<&str>,
    listing: &[VideoItem],
    key: &str,
) -> Option<String> {
    if let Some(id) = context {
        if !id.is_empty() {
            return Some(id.to_string());
        }
    }
    let key_stem = stem(key);
    listing
        .iter()
        .find(|item| item.file_name == key || item.name == key || item.name == key_stem)
        .and_then(|item| item.video_id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MEDIA: &str = "http://localhost:8080/media";

    #[test]
    fn stem_strips_only_the_final_extension() {
        assert_eq!(stem("intro.mp4"), "intro");
        assert_eq!(stem("archive.tar.gz"), "archive.tar");
        assert_eq!(stem("no_extension"), "no_extension");
        assert_eq!(stem(".hidden"), ".hidden");
    }

    #[test]
    fn string_entry_builds_urls_from_the_media_base() {
        let item = normalize_entry(&json!("/media/intro.mp4"), MEDIA);
        assert_eq!(item.name, "intro");
        assert_eq!(item.file_name, "intro.mp4");
        assert_eq!(item.video_url, format!("{MEDIA}/intro.mp4"));
        assert_eq!(item.poster_url, format!("{MEDIA}/intro.webp"));
        assert_eq!(item.video_id, None);
    }

    #[test]
    fn absolute_urls_are_kept() {
        let item = normalize_entry(&json!("https://cdn.example/v/intro.mp4"), MEDIA);
        assert_eq!(item.video_url, "https://cdn.example/v/intro.mp4");
        assert_eq!(item.poster_url, format!("{MEDIA}/intro.webp"));
    }

    #[test]
    fn object_entry_prefers_backend_fields() {
        let item = normalize_entry(
            &json!({"fileName": "intro.mp4", "title": "Intro", "videoId": "abc-123"}),
            MEDIA,
        );
        assert_eq!(item.title.as_deref(), Some("Intro"));
        assert_eq!(item.video_id.as_deref(), Some("abc-123"));
        assert!(needs_sidecar(&item));
    }

    #[test]
    fn sidecar_fills_missing_fields_without_clobbering() {
        let mut item = normalize_entry(
            &json!({"fileName": "intro.mp4", "title": "Listing title"}),
            MEDIA,
        );
        apply_sidecar(
            &mut item,
            &json!({
                "title": "Sidecar title",
                "meta": {"description": "d", "view_count": 12, "likes": "3", "duration": 90.0}
            }),
        );
        assert_eq!(item.title.as_deref(), Some("Listing title"));
        assert_eq!(item.description.as_deref(), Some("d"));
        assert_eq!(item.view_count, Some(12));
        assert_eq!(item.like_count, Some(3));
        assert_eq!(item.duration_seconds, Some(90));
    }

    #[test]
    fn negative_counts_are_rejected() {
        let mut item = normalize_entry(&json!({"fileName": "intro.mp4"}), MEDIA);
        apply_sidecar(&mut item, &json!({"meta": {"views": -4, "likes": "-1"}}));
        assert_eq!(item.view_count, None);
        assert_eq!(item.like_count, None);
    }

    #[test]
    fn sidecar_candidates_probe_stem_then_file_then_id() {
        assert_eq!(
            sidecar_candidates(MEDIA, "intro.mp4", Some("abc-123")),
            [
                format!("{MEDIA}/intro.json"),
                format!("{MEDIA}/intro.mp4.json"),
                format!("{MEDIA}/abc-123.json"),
            ]
        );
    }

    #[test]
    fn resolve_matches_by_file_name() {
        let listing = vec![VideoItem {
            name: "myvideo".into(),
            file_name: "myvideo.mp4".into(),
            video_id: Some("abc-123".into()),
            ..VideoItem::default()
        }];
        assert_eq!(
            resolve_video_id(None, &listing, "myvideo.mp4").as_deref(),
            Some("abc-123")
        );
        assert_eq!(
            resolve_video_id(None, &listing, "myvideo").as_deref(),
            Some("abc-123")
        );
        assert_eq!(resolve_video_id(None, &listing, "other.mp4"), None);
    }

    #[test]
    fn resolve_prefers_navigation_context() {
        assert_eq!(
            resolve_video_id(Some("ctx-1"), &[], "anything").as_deref(),
            Some("ctx-1")
        );
        assert_eq!(resolve_video_id(Some(""), &[], "anything"), None);
    }

    #[test]
    fn unmatched_listing_entry_resolves_to_none() {
        let listing = vec![VideoItem {
            name: "myvideo".into(),
            file_name: "myvideo.mp4".into(),
            video_id: None,
            ..VideoItem::default()
        }];
        assert_eq!(resolve_video_id(None, &listing, "myvideo.mp4"), None);
    }
}
