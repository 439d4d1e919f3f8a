//! Topic identifiers for per-topic subscription.

use crate::payloads::AppEvent;

/// Subscription topics, one per event family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Shared-state change notifications.
    StateUpdated,
    /// Upload dialog open requests.
    OpenUploadDialog,
    /// Upload dialog close requests.
    CloseUploadDialog,
    /// Login dialog open requests.
    OpenLoginDialog,
    /// Channel profile refresh notifications.
    ProfileUpdated,
    /// Ephemeral notices.
    Toast,
}

impl Topic {
    /// Stable topic name, matching the legacy DOM event names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::StateUpdated => "state-updated",
            Self::OpenUploadDialog => "open-upload-dialog",
            Self::CloseUploadDialog => "close-upload-dialog",
            Self::OpenLoginDialog => "open-login-dialog",
            Self::ProfileUpdated => "profile-updated",
            Self::Toast => "toast",
        }
    }
}

impl AppEvent {
    /// Topic this event is delivered on.
    #[must_use]
    pub const fn topic(&self) -> Topic {
        match self {
            Self::StateUpdated { .. } => Topic::StateUpdated,
            Self::OpenUploadDialog => Topic::OpenUploadDialog,
            Self::CloseUploadDialog => Topic::CloseUploadDialog,
            Self::OpenLoginDialog => Topic::OpenLoginDialog,
            Self::ProfileUpdated => Topic::ProfileUpdated,
            Self::Toast { .. } => Topic::Toast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payloads::StateKind;

    #[test]
    fn events_map_to_their_topic() {
        assert_eq!(AppEvent::state(StateKind::Auth).topic(), Topic::StateUpdated);
        assert_eq!(AppEvent::toast("hola").topic(), Topic::Toast);
        assert_eq!(AppEvent::OpenUploadDialog.topic(), Topic::OpenUploadDialog);
    }

    #[test]
    fn topic_names_match_legacy_event_names() {
        assert_eq!(Topic::StateUpdated.name(), "state-updated");
        assert_eq!(Topic::OpenLoginDialog.name(), "open-login-dialog");
        assert_eq!(Topic::Toast.name(), "toast");
    }
}
