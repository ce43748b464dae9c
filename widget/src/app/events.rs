//! # Application Events
//!
//! Event types for async task communication between background tasks and the
//! main thread.

use crate::slippage::ResolutionError;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Auto-slippage resolution completed; `request_id` tags the resolution
    /// so stale results can be discarded (last-requested-wins)
    AutoSlippageResult {
        request_id: u64,
        result: Result<String, ResolutionError>,
    },
    /// Token price lookup completed
    TokenPriceResult {
        chain_id: u64,
        address: String,
        result: Result<f64, String>,
    },
}
