//! # Auto-Slippage Endpoint
//!
//! Fetches the suggested slippage tolerance for a trade.

use super::client::ApiClient;
use crate::slippage::resolver::ResolutionError;
use serde::{Deserialize, Serialize};

/// Look up a suggested slippage tolerance.
///
/// `amount` is the USD notional of the trade, not the raw token amount.
#[tracing::instrument(skip(client), fields(
    address = %address,
    blockchain = blockchain,
    amount_usd = amount_usd
))]
pub async fn get_auto_slippage(
    client: &ApiClient,
    address: &str,
    blockchain: u64,
    amount_usd: f64,
) -> Result<String, ResolutionError> {
    let start = std::time::Instant::now();
    let url = format!(
        "{}/token/auto-slippage?address={}&blockchain={}&amount={}",
        client.base_url(),
        address,
        blockchain,
        amount_usd
    );

    let response = client.client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Auto-slippage network error");
        ResolutionError::Network(e.to_string())
    })?;

    let duration = start.elapsed();
    let status = response.status();

    if !status.is_success() {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Auto-slippage lookup failed"
        );
        return Err(ResolutionError::Status(status.as_u16()));
    }

    let body: AutoSlippageResponse = response.json().await.map_err(|e| {
        tracing::error!(error = %e, "Auto-slippage response parse error");
        ResolutionError::MalformedResponse(e.to_string())
    })?;

    let suggestion = body.suggestion()?;
    tracing::debug!(
        duration_ms = duration.as_millis(),
        suggestion = %suggestion,
        "Auto slippage fetched"
    );
    Ok(suggestion)
}

/// Response body of the auto-slippage endpoint.
///
/// The `data` field carries the suggestion either as a JSON number or as a
/// string; both are accepted. A missing or differently shaped field is a
/// malformed response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoSlippageResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl AutoSlippageResponse {
    fn suggestion(&self) -> Result<String, ResolutionError> {
        match &self.data {
            Some(serde_json::Value::String(s)) => Ok(s.clone()),
            Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
            Some(other) => Err(ResolutionError::MalformedResponse(format!(
                "unexpected data payload: {other}"
            ))),
            None => Err(ResolutionError::MalformedResponse(
                "missing data field".to_string(),
            )),
        }
    }
}
