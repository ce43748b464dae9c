//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! The slippage controller and resolver never talk to concrete stores or HTTP
//! clients directly; they hold `Arc<dyn SettingsPort>` / `Arc<dyn ApiService>`
//! handed to them at construction, so tests can swap in in-memory fakes.

use crate::slippage::resolver::ResolutionError;
use async_trait::async_trait;

/// Settings key under which the committed slippage tolerance is stored.
pub const SLIPPAGE_KEY: &str = "slippage";

/// Port to the external key-value settings store.
///
/// The store holds the committed `slippage` value as a plain decimal string.
/// Writes are synchronous; `revision` increments on every write so that all
/// readers can observe that a newer value has been committed.
///
/// The slippage controller is the only writer of [`SLIPPAGE_KEY`] while
/// mounted; any number of observers may read it.
pub trait SettingsPort: Send + Sync {
    /// Read a setting, `None` if the key was never written.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a setting, replacing any previous value.
    fn set_value(&self, key: &str, value: &str);

    /// Monotonic write counter, bumped on every `set_value`.
    fn revision(&self) -> u64;
}

/// Trait for API service operations.
///
/// This trait allows for dependency injection and mocking in tests.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Look up a suggested slippage tolerance for a trade.
    ///
    /// `amount_usd` is the USD notional of the origin amount, not the raw
    /// token amount. Returns the raw suggestion string from the service;
    /// callers canonicalize it before committing.
    async fn get_auto_slippage(
        &self,
        address: &str,
        blockchain: u64,
        amount_usd: f64,
    ) -> std::result::Result<String, ResolutionError>;

    /// Get the USD price of a token on a chain.
    async fn get_token_price(
        &self,
        blockchain: u64,
        address: &str,
    ) -> std::result::Result<f64, String>;
}
