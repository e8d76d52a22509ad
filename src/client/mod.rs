//! Coin feed client.
//!
//! [`CoinFetcher`] is the seam the listing store depends on; the HTTP
//! implementation talks to the configured feed URL.

mod error;
mod http;

use async_trait::async_trait;

use crate::coin::CoinRecord;

pub use error::FetchError;
pub use http::HttpCoinFetcher;

/// Source of coin records.
#[async_trait]
pub trait CoinFetcher: Send + Sync {
    /// Fetch the full coin list. One attempt per call.
    async fn fetch_coins(&self) -> Result<Vec<CoinRecord>, FetchError>;
}
