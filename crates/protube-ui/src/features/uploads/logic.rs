//! Batch submission and the channel uploads cache.

use crate::core::clock::Clock;
use crate::core::store::{CHANNEL_VIDEOS_KEY, KeyValueStore, get_json, set_json};
use crate::features::uploads::api::UploadApi;
use crate::models::{ChannelVideo, UploadItem};
use futures::future::join_all;
use protube_events::{AppEvent, EventBus, StateKind};

const MSG_PUBLISHED: &str = "Vídeos publicats";
const MSG_SAVED_PRIVATE: &str = "Vídeos desats com a privat";
const MSG_SOME_FAILED: &str = "Alguns vídeos no s'han pogut pujar";

/// Submit every item as its own multipart request, concurrently, and
/// wait for all of them to settle. Returns `true` only when every
/// request succeeded.
///
/// The `channel_upload` notification and a summary toast are raised
/// regardless of partial failure so listings refresh either way.
pub async fn submit_batch(
    api: &dyn UploadApi,
    bus: &EventBus,
    items: &[UploadItem],
    publish: bool,
) -> bool {
    if items.is_empty() {
        return true;
    }
    let results = join_all(items.iter().map(|item| api.upload(item, publish))).await;
    let all_succeeded = results.iter().all(Result::is_ok);
    bus.publish(&AppEvent::state(StateKind::ChannelUpload));
    bus.publish(&AppEvent::toast(if all_succeeded {
        if publish { MSG_PUBLISHED } else { MSG_SAVED_PRIVATE }
    } else {
        MSG_SOME_FAILED
    }));
    all_succeeded
}

/// Insert a record at the head of the channel cache, replacing any older
/// record with the same file name.
#[must_use]
pub fn push_channel(records: Vec<ChannelVideo>, record: ChannelVideo) -> Vec<ChannelVideo> {
    let mut next: Vec<ChannelVideo> = records
        .into_iter()
        .filter(|existing| existing.name != record.name)
        .collect();
    next.insert(0, record);
    next
}

/// Cache the submitted items under the legacy channel-videos key,
/// deduplicated by file name with the newest first.
pub fn record_channel_uploads(
    store: &dyn KeyValueStore,
    clock: &dyn Clock,
    items: &[UploadItem],
    published: bool,
) {
    let mut records: Vec<ChannelVideo> = get_json(store, CHANNEL_VIDEOS_KEY, Vec::new());
    for item in items {
        records = push_channel(
            records,
            ChannelVideo {
                name: item.file_name.clone(),
                title: item.title.clone(),
                poster_url: String::new(),
                description: item.description.clone(),
                created_at: clock.now_ms(),
                published,
            },
        );
    }
    set_json(store, CHANNEL_VIDEOS_KEY, &records);
}
