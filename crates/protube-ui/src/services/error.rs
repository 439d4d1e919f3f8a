//! Transport error type shared by the reconciliation trait seams.

/// Failure surfaced by the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("unexpected status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
    /// The response body could not be decoded.
    #[error("decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// Status code when the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// Whether the server rejected the request as a conflict or bad
    /// input (duplicate names and similar precondition failures).
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self.status(), Some(400 | 409))
    }
}
