//! Local watch-history cache.
//!
//! One entry per distinct video key, newest first; re-watching moves the
//! entry to the head with a fresh timestamp. The list is bounded, with
//! the oldest entries evicted past the cap. This cache is always written
//! on playback; the server-backed history is a separate, never-merged
//! source handled by the history feature.

use crate::core::clock::Clock;
use crate::core::store::{HISTORY_KEY, KeyValueStore, get_json, set_json};
use serde::{Deserialize, Serialize};

/// Maximum number of cached entries.
pub const HISTORY_CAP: usize = 200;

/// One locally cached view, using the legacy wire field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Video key (file stem), the dedupe key.
    #[serde(rename = "name")]
    pub video_key: String,
    /// Display title at view time.
    pub title: String,
    /// Poster URL at view time.
    #[serde(default)]
    pub poster_url: String,
    /// Media URL at view time.
    #[serde(default)]
    pub video_url: String,
    /// View time in epoch milliseconds.
    pub viewed_at: i64,
}

/// Insert an entry at the head, removing any older entry with the same
/// key and evicting past [`HISTORY_CAP`].
#[must_use]
pub fn push(entries: Vec<HistoryEntry>, entry: HistoryEntry) -> Vec<HistoryEntry> {
    let mut next: Vec<HistoryEntry> = entries
        .into_iter()
        .filter(|existing| existing.video_key != entry.video_key)
        .collect();
    next.insert(0, entry);
    next.truncate(HISTORY_CAP);
    next
}

/// Load the cached history, newest first.
#[must_use]
pub fn load(store: &dyn KeyValueStore) -> Vec<HistoryEntry> {
    get_json(store, HISTORY_KEY, Vec::new())
}

/// Record a view in the local cache and return the stored entry.
pub fn record(
    store: &dyn KeyValueStore,
    clock: &dyn Clock,
    video_key: &str,
    title: &str,
    poster_url: &str,
    video_url: &str,
) -> HistoryEntry {
    let entry = HistoryEntry {
        video_key: video_key.to_string(),
        title: title.to_string(),
        poster_url: poster_url.to_string(),
        video_url: video_url.to_string(),
        viewed_at: clock.now_ms(),
    };
    let next = push(load(store), entry.clone());
    set_json(store, HISTORY_KEY, &next);
    entry
}

/// Drop the whole local cache.
pub fn clear(store: &dyn KeyValueStore) {
    store.remove(HISTORY_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::store::MemoryStore;

    fn entry(key: &str, viewed_at: i64) -> HistoryEntry {
        HistoryEntry {
            video_key: key.to_string(),
            title: key.to_uppercase(),
            poster_url: format!("/media/{key}.webp"),
            video_url: format!("/media/{key}.mp4"),
            viewed_at,
        }
    }

    #[test]
    fn repeat_view_dedupes_to_a_single_head_entry() {
        let entries = push(Vec::new(), entry("intro", 1));
        let entries = push(entries, entry("other", 2));
        let entries = push(entries, entry("intro", 3));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].video_key, "intro");
        assert_eq!(entries[0].viewed_at, 3);
        assert_eq!(entries[1].video_key, "other");
    }

    #[test]
    fn cache_never_exceeds_the_cap() {
        let mut entries = Vec::new();
        for i in 0..(HISTORY_CAP + 25) {
            entries = push(entries, entry(&format!("v{i}"), i as i64));
        }
        assert_eq!(entries.len(), HISTORY_CAP);
        // Newest first, oldest evicted.
        assert_eq!(entries[0].video_key, format!("v{}", HISTORY_CAP + 24));
        assert_eq!(entries[HISTORY_CAP - 1].video_key, "v25");
    }

    #[test]
    fn record_persists_through_the_store() {
        let store = MemoryStore::new();
        let clock = FixedClock(7);
        record(&store, &clock, "intro", "Intro", "/p.webp", "/v.mp4");
        record(&store, &clock, "intro", "Intro", "/p.webp", "/v.mp4");
        let cached = load(&store);
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].viewed_at, 7);
        clear(&store);
        assert!(load(&store).is_empty());
    }

    #[test]
    fn malformed_cache_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(HISTORY_KEY, "{broken");
        assert!(load(&store).is_empty());
    }

    #[test]
    fn entries_use_legacy_wire_names() {
        let json = serde_json::to_value(entry("intro", 5)).expect("serialize");
        assert_eq!(json["name"], "intro");
        assert_eq!(json["posterUrl"], "/media/intro.webp");
        assert_eq!(json["viewedAt"], 5);
    }
}
