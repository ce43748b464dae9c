//! # API Services
//!
//! HTTP client modules for the aggregator backend, split by concern:
//!
//! - [`client`]: the shared reqwest client and `ApiService` implementation
//! - [`slippage`]: auto-slippage suggestion lookup
//! - [`market`]: token price lookup

pub mod client;
pub mod market;
pub mod slippage;

pub use client::ApiClient;
pub use market::TokenPriceResponse;
pub use slippage::AutoSlippageResponse;
