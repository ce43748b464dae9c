//! # Market Data Endpoints
//!
//! Token price lookups feeding the trade context.

use super::client::ApiClient;
use serde::{Deserialize, Serialize};

/// Get the USD price of a token on a chain.
#[tracing::instrument(skip(client), fields(blockchain = blockchain, address = %address))]
pub async fn get_token_price(
    client: &ApiClient,
    blockchain: u64,
    address: &str,
) -> Result<f64, String> {
    let start = std::time::Instant::now();
    let url = format!(
        "{}/token/price?address={}&blockchain={}",
        client.base_url(),
        address,
        blockchain
    );

    tracing::debug!("Fetching token price");

    let response = client
        .client
        .get(&url)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Price fetch network error");
            format!("Network error: {}", e)
        })?;

    let duration = start.elapsed();

    if response.status().is_success() {
        let result = response.json::<TokenPriceResponse>().await.map_err(|e| {
            tracing::error!(error = %e, "Price response parse error");
            format!("Failed to parse response: {}", e)
        });

        if let Ok(ref price) = result {
            tracing::debug!(
                duration_ms = duration.as_millis(),
                price_usd = price.price_usd,
                "Token price fetched"
            );
        }
        result.map(|price| price.price_usd)
    } else {
        let status = response.status();
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Price fetch failed"
        );
        Err(format!("Failed to fetch token price: {}", status))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPriceResponse {
    #[serde(rename = "priceUSD")]
    pub price_usd: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_response_uses_camel_case_field() {
        let body: TokenPriceResponse =
            serde_json::from_str(r#"{"priceUSD":2.0}"#).expect("parse");
        assert_eq!(body.price_usd, 2.0);
    }
}
