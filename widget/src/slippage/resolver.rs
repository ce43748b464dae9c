//! # Auto-Slippage Resolver
//!
//! Computes a suggested slippage tolerance for the current trade by asking an
//! external service, keyed by token address, chain and the USD notional of the
//! trade. The network step runs on the async runtime; only the commit of the
//! resolved value waits on it.

use crate::core::service::ApiService;
use std::sync::Arc;
use thiserror::Error;

/// Why an auto-slippage resolution failed.
///
/// None of these are fatal: the caller keeps the previously committed
/// slippage value and surfaces the failure as a transient notice.
#[derive(Debug, Clone, Error)]
pub enum ResolutionError {
    /// The origin token has no known USD price yet; the service is not called.
    #[error("token price is unavailable")]
    MissingPrice,

    /// The trade amount does not produce a positive, finite USD notional.
    #[error("trade amount does not produce a usable USD notional")]
    InvalidAmount,

    /// Transport-level failure, including the client-side timeout.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("service returned HTTP {0}")]
    Status(u16),

    /// The response body was missing the suggestion or was not numeric.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Read-only snapshot of the trade inputs the resolver needs.
#[derive(Debug, Clone)]
pub struct TradeContext {
    /// Origin chain id.
    pub blockchain: u64,
    /// Origin token address.
    pub token_address: String,
    /// Origin trade amount, in token units.
    pub amount: f64,
    /// USD price of the origin token, `None` until the price lookup completes.
    pub price_usd: Option<f64>,
}

/// USD notional of a trade amount.
///
/// Returns `None` unless `amount * price_usd` is a positive finite number;
/// the resolver refuses to call the service with anything else.
pub fn usd_notional(amount: f64, price_usd: f64) -> Option<f64> {
    let notional = amount * price_usd;
    (notional.is_finite() && notional > 0.0).then_some(notional)
}

/// Resolves a suggested slippage tolerance through the [`ApiService`] port.
///
/// The resolver itself is stateless; staleness of concurrent resolutions is
/// handled by the controller's request token, and retries only happen when
/// the user explicitly asks again.
pub struct AutoSlippageResolver {
    api: Arc<dyn ApiService>,
}

impl AutoSlippageResolver {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self { api }
    }

    /// Compute the USD notional and ask the service for a suggestion.
    ///
    /// The returned string is validated to parse as a non-negative number but
    /// is otherwise raw; the controller canonicalizes it on commit.
    pub async fn resolve(&self, ctx: &TradeContext) -> Result<String, ResolutionError> {
        let price = ctx.price_usd.ok_or(ResolutionError::MissingPrice)?;
        let notional = usd_notional(ctx.amount, price).ok_or(ResolutionError::InvalidAmount)?;

        let raw = self
            .api
            .get_auto_slippage(&ctx.token_address, ctx.blockchain, notional)
            .await?;

        let suggestion = raw.trim();
        let parsed: f64 = suggestion.parse().map_err(|_| {
            ResolutionError::MalformedResponse(format!("non-numeric suggestion {suggestion:?}"))
        })?;
        if !parsed.is_finite() || parsed < 0.0 {
            return Err(ResolutionError::MalformedResponse(format!(
                "suggestion {suggestion:?} is out of range"
            )));
        }

        Ok(suggestion.to_string())
    }
}
