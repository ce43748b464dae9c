//! # API Client
//!
//! Main HTTP client for aggregator backend communication.

use crate::core::service::ApiService;
use crate::slippage::resolver::ResolutionError;
use reqwest::Client;

/// HTTP client for the aggregator backend (token prices, auto-slippage).
///
/// Maintains a connection pool for efficient multiplexing. The 10 second
/// timeout bounds every request, including auto-slippage resolutions; an
/// expired resolution surfaces as a network error and the previously
/// committed slippage value stays in effect.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against a base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        // Create client with 10 second timeout to prevent freezing
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Base URL for API requests.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn get_auto_slippage(
        &self,
        address: &str,
        blockchain: u64,
        amount_usd: f64,
    ) -> Result<String, ResolutionError> {
        crate::services::api::slippage::get_auto_slippage(self, address, blockchain, amount_usd)
            .await
    }

    async fn get_token_price(&self, blockchain: u64, address: &str) -> Result<f64, String> {
        crate::services::api::market::get_token_price(self, blockchain, address).await
    }
}
