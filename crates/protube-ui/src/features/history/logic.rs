//! History recording and loading.

use crate::core::clock::Clock;
use crate::core::history::{self, HistoryEntry};
use crate::core::store::KeyValueStore;
use crate::features::history::api::HistoryApi;
use crate::features::videos::logic::{poster_url, stem};
use crate::models::VideoItem;
use protube_api_models::HistoryViewDto;

/// Record a playback: the local cache is always written; logged-in users
/// also get a server-side entry. A failed server write is tolerated (the
/// local cache already holds the view).
pub async fn record_view(
    api: &dyn HistoryApi,
    store: &dyn KeyValueStore,
    clock: &dyn Clock,
    user_id: Option<&str>,
    item: &VideoItem,
) {
    history::record(
        store,
        clock,
        &item.name,
        item.title.as_deref().unwrap_or(&item.name),
        &item.poster_url,
        &item.video_url,
    );
    if let Some(user_id) = user_id {
        let _ = api.record(user_id, &item.file_name).await;
    }
}

/// Load the history the UI should show: the server list when a user is
/// logged in and the fetch succeeds, otherwise the local cache. The two
/// sources are never merged.
pub async fn load_history(
    api: &dyn HistoryApi,
    store: &dyn KeyValueStore,
    media_base: &str,
    user_id: Option<&str>,
) -> Vec<HistoryEntry> {
    if let Some(user_id) = user_id {
        if let Ok(views) = api.list(user_id).await {
            return views
                .into_iter()
                .map(|view| entry_from_view(view, media_base))
                .collect();
        }
    }
    history::load(store)
}

/// Drop the local cache. Callers run the blocking confirmation first.
pub fn clear_local(store: &dyn KeyValueStore) {
    history::clear(store);
}

/// Display label for a view timestamp.
#[must_use]
pub fn viewed_label(viewed_at_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(viewed_at_ms).map_or_else(
        || "-".to_string(),
        |moment| moment.format("%d/%m/%Y %H:%M").to_string(),
    )
}

fn entry_from_view(view: HistoryViewDto, media_base: &str) -> HistoryEntry {
    let key = stem(&view.video_file_name).to_string();
    HistoryEntry {
        title: view.title.unwrap_or_else(|| key.clone()),
        poster_url: poster_url(media_base, &view.video_file_name),
        video_url: format!("{media_base}/{}", view.video_file_name),
        video_key: key,
        viewed_at: view.viewed_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::store::MemoryStore;
    use crate::services::error::ApiError;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    const MEDIA: &str = "http://localhost:8080/media";

    #[derive(Default)]
    struct FakeHistoryApi {
        records: RefCell<Vec<String>>,
        listing: Option<Vec<HistoryViewDto>>,
        record_fails: bool,
    }

    #[async_trait(?Send)]
    impl HistoryApi for FakeHistoryApi {
        async fn record(
            &self,
            user_id: &str,
            video_file_name: &str,
        ) -> Result<HistoryViewDto, ApiError> {
            self.records
                .borrow_mut()
                .push(format!("{user_id}/{video_file_name}"));
            if self.record_fails {
                return Err(ApiError::Network("offline".into()));
            }
            Ok(HistoryViewDto {
                id: Some("h-1".into()),
                user_id: user_id.to_string(),
                video_file_name: video_file_name.to_string(),
                title: None,
                description: None,
                viewed_at: 1,
            })
        }

        async fn list(&self, _user_id: &str) -> Result<Vec<HistoryViewDto>, ApiError> {
            self.listing
                .clone()
                .ok_or_else(|| ApiError::Network("offline".into()))
        }
    }

    fn item() -> VideoItem {
        VideoItem {
            name: "intro".into(),
            file_name: "intro.mp4".into(),
            video_url: format!("{MEDIA}/intro.mp4"),
            poster_url: format!("{MEDIA}/intro.webp"),
            title: Some("Intro".into()),
            ..VideoItem::default()
        }
    }

    #[test]
    fn record_view_always_writes_the_local_cache() {
        let api = FakeHistoryApi::default();
        let store = MemoryStore::new();
        block_on(record_view(&api, &store, &FixedClock(9), None, &item()));
        let cached = crate::core::history::load(&store);
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].video_key, "intro");
        assert_eq!(cached[0].viewed_at, 9);
        assert!(api.records.borrow().is_empty());
    }

    #[test]
    fn logged_in_views_also_reach_the_server() {
        let api = FakeHistoryApi::default();
        let store = MemoryStore::new();
        block_on(record_view(
            &api,
            &store,
            &FixedClock(9),
            Some("u"),
            &item(),
        ));
        assert_eq!(api.records.borrow().as_slice(), ["u/intro.mp4"]);
    }

    #[test]
    fn failed_server_record_keeps_the_local_entry() {
        let api = FakeHistoryApi {
            record_fails: true,
            ..FakeHistoryApi::default()
        };
        let store = MemoryStore::new();
        block_on(record_view(
            &api,
            &store,
            &FixedClock(9),
            Some("u"),
            &item(),
        ));
        assert_eq!(crate::core::history::load(&store).len(), 1);
    }

    #[test]
    fn load_prefers_the_server_list_when_logged_in() {
        let api = FakeHistoryApi {
            listing: Some(vec![HistoryViewDto {
                id: None,
                user_id: "u".into(),
                video_file_name: "remote.mp4".into(),
                title: Some("Remote".into()),
                description: None,
                viewed_at: 5,
            }]),
            ..FakeHistoryApi::default()
        };
        let store = MemoryStore::new();
        crate::core::history::record(&store, &FixedClock(1), "local", "Local", "", "");
        let entries = block_on(load_history(&api, &store, MEDIA, Some("u")));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].video_key, "remote");
        assert_eq!(entries[0].poster_url, format!("{MEDIA}/remote.webp"));
    }

    #[test]
    fn load_falls_back_to_the_local_cache() {
        let api = FakeHistoryApi::default();
        let store = MemoryStore::new();
        crate::core::history::record(&store, &FixedClock(1), "local", "Local", "", "");
        // Logged out: local cache.
        let entries = block_on(load_history(&api, &store, MEDIA, None));
        assert_eq!(entries[0].video_key, "local");
        // Logged in but the server is unreachable: local cache again.
        let entries = block_on(load_history(&api, &store, MEDIA, Some("u")));
        assert_eq!(entries[0].video_key, "local");
    }

    #[test]
    fn viewed_label_formats_epoch_millis() {
        assert_eq!(viewed_label(0), "01/01/1970 00:00");
        assert_eq!(viewed_label(i64::MAX), "-");
    }
}
