//! Feed client error types.

/// Errors from fetching or decoding the GTFS-Realtime feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("failed to fetch feed: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed endpoint returned a non-success status
    #[error("unexpected status code: {status}")]
    Status { status: u16 },

    /// Payload was not a valid GTFS-Realtime message
    #[error("failed to decode feed: {0}")]
    Decode(#[from] prost::DecodeError),
}
