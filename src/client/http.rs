use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::client::error::FetchError;
use crate::client::CoinFetcher;
use crate::coin::CoinRecord;
use crate::config::FeedConfig;

/// Fallback body text when a server error response is not valid UTF-8.
const UNKNOWN_ERROR_BODY: &str = "Unknown error";

/// Fetches the coin list with a single GET per call.
///
/// No retries and no timeout beyond the client defaults.
pub struct HttpCoinFetcher {
    client: Client,
    url: String,
}

impl HttpCoinFetcher {
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder().build().map_err(|e| {
            tracing::error!(error = %e, "Failed to build feed HTTP client");
            FetchError::RequestFailed
        })?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &FeedConfig) -> Result<Self, FetchError> {
        Self::new(config.url.clone())
    }

    fn request_url(&self) -> Result<Url, FetchError> {
        Url::parse(&self.url).map_err(|e| {
            tracing::warn!(url = %self.url, error = %e, "Invalid feed URL");
            FetchError::InvalidUrl
        })
    }
}

#[async_trait]
impl CoinFetcher for HttpCoinFetcher {
    async fn fetch_coins(&self) -> Result<Vec<CoinRecord>, FetchError> {
        let url = self.request_url()?;

        tracing::debug!(url = %url, "Fetching coin feed");

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!(error = %e, "Coin feed request failed");
            FetchError::NoData
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::warn!(status = %status, error = %e, "Failed to read coin feed body");
            FetchError::NoData
        })?;

        if !status.is_success() {
            let message = String::from_utf8(body.to_vec())
                .unwrap_or_else(|_| UNKNOWN_ERROR_BODY.to_string());
            tracing::warn!(status = %status, error = %message, "Coin feed returned an error");
            return Err(FetchError::ServerError(message));
        }

        let coins: Vec<CoinRecord> = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(error = %e, "Failed to decode coin feed");
            FetchError::DecodingError
        })?;

        tracing::debug!(status = %status, count = coins.len(), "Coin feed decoded");
        Ok(coins)
    }
}
