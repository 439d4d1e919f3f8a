//! Event payload types carried across the client.

/// Discriminator for the `state-updated` topic, naming the slice of
/// client state that changed.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StateKind {
    /// Identity record changed (login, register, logout).
    Auth,
    /// A new upload landed in the channel listing.
    ChannelUpload,
    /// An existing channel video was edited or removed.
    ChannelUpdate,
    /// Like membership changed for some video.
    Liked,
    /// Watch-later membership changed for some video.
    WatchLater,
    /// A playlist was created, deleted, or its membership changed.
    Playlists,
    /// Comments changed for some video.
    Comentari,
}

impl StateKind {
    /// Wire discriminator, matching the legacy `type` payload field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::ChannelUpload => "channel_upload",
            Self::ChannelUpdate => "channel_update",
            Self::Liked => "liked",
            Self::WatchLater => "watch_later",
            Self::Playlists => "playlists",
            Self::Comentari => "comentari",
        }
    }
}

/// Typed events surfaced between sibling components in one tab.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// A slice of shared state changed and listeners should re-derive
    /// their view from the source of truth.
    StateUpdated {
        /// Which slice changed.
        kind: StateKind,
        /// Optional context, e.g. the affected video identifier.
        context: Option<String>,
    },
    /// Request to open the upload dialog.
    OpenUploadDialog,
    /// Request to close the upload dialog.
    CloseUploadDialog,
    /// Request to open the login dialog (e.g. an action needs a user).
    OpenLoginDialog,
    /// The channel profile (avatar, display name) changed.
    ProfileUpdated,
    /// Ephemeral user-facing notice.
    Toast {
        /// Message to display.
        message: String,
    },
}

impl AppEvent {
    /// Convenience constructor for a state update without context.
    #[must_use]
    pub const fn state(kind: StateKind) -> Self {
        Self::StateUpdated {
            kind,
            context: None,
        }
    }

    /// Convenience constructor for a toast notice.
    #[must_use]
    pub fn toast(message: impl Into<String>) -> Self {
        Self::Toast {
            message: message.into(),
        }
    }
}
