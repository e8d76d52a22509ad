mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, FeedConfig, ListingConfig, DEFAULT_FEED_URL};
