//! GTFS-Realtime HTTP client.
//!
//! Fetches the binary feed from the MTA endpoint and decodes it into a
//! `FeedMessage`. No retry happens here; in watch mode a failed tick is
//! simply reported and the next tick fetches again.

use gtfs_realtime::{FeedEntity, FeedMessage};
use prost::Message;
use tracing::debug;

use super::error::FeedError;

/// Default feed URL: MTA A Division (1, 2, 3, 4, 5, 6, S).
const DEFAULT_FEED_URL: &str =
    "https://api-endpoint.mta.info/Dataservice/mtagtfsfeeds/nyct%2Fgtfs";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Feed URL (defaults to the MTA A Division endpoint)
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Set a custom feed URL (for testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// GTFS-Realtime feed client.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
}

impl FeedClient {
    /// Create a new feed client with the given configuration.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Fetch and decode one feed snapshot, returning its entity list.
    pub async fn fetch(&self) -> Result<Vec<FeedEntity>, FeedError> {
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let message = FeedMessage::decode(bytes.as_ref())?;

        debug!(entities = message.entity.len(), "decoded feed snapshot");

        Ok(message.entity)
    }
}
