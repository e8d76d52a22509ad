use serde::{Deserialize, Serialize};

/// Endpoint serving the coin list when no config overrides it.
pub const DEFAULT_FEED_URL: &str = "https://37656be98b8f42ae8348e4da3ee3193f.api.mockbin.io/";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub listing: ListingConfig,
}

/// Remote feed settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// URL returning a JSON array of coin records.
    #[serde(default = "default_feed_url")]
    pub url: String,
}

/// Listing store settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Number of view states buffered per subscriber (default: 64).
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_channel_capacity() -> usize {
    64
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
        }
    }
}
