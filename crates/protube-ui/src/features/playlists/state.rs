//! Pure playlist list-state transformations.

use protube_api_models::PlaylistDto;

/// Loaded playlists for the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistsState {
    /// Playlists in server order.
    pub lists: Vec<PlaylistDto>,
}

impl PlaylistsState {
    /// Replace the whole list with a server snapshot.
    pub fn reset(&mut self, lists: Vec<PlaylistDto>) {
        self.lists = lists;
    }

    /// Playlist by identifier.
    #[must_use]
    pub fn get(&self, playlist_id: &str) -> Option<&PlaylistDto> {
        self.lists.iter().find(|list| list.id == playlist_id)
    }

    /// Append a freshly created playlist.
    pub fn apply_created(&mut self, playlist: PlaylistDto) {
        self.lists.push(playlist);
    }

    /// Drop a deleted playlist.
    pub fn apply_deleted(&mut self, playlist_id: &str) {
        self.lists.retain(|list| list.id != playlist_id);
    }

    /// Reflect a membership change locally after the server confirmed it.
    pub fn apply_membership(&mut self, playlist_id: &str, video_id: &str, member: bool) {
        let Some(list) = self.lists.iter_mut().find(|list| list.id == playlist_id) else {
            return;
        };
        if member {
            if !list.contains(video_id) {
                list.video_ids.push(video_id.to_string());
            }
        } else {
            list.video_ids.retain(|id| id != video_id);
        }
    }
}
