//! # Common Error Types
//!
//! Consolidated error handling for the swap widget.
//!
//! This module provides a centralized error type [`AppError`] that covers all error
//! scenarios in the widget.
//!
//! ## Error Categories
//! Errors are categorized by their source:
//!
//! - **Api**: Service communication errors (network, HTTP, JSON parsing)
//! - **Resolution**: Auto-slippage resolution failures
//! - **Settings**: Settings store and configuration errors
//! - **Validation**: Input validation errors (invalid format, out of range)
//!
//! ## Error Conversion
//!
//! Common error types automatically convert to `AppError`:
//!
//! - `String` → `AppError::Api`
//! - `ResolutionError` → `AppError::Resolution`

use thiserror::Error;

/// Application-wide error type covering all error scenarios in the widget.
///
/// Each variant includes a descriptive `String` message for context. The `#[error]`
/// attribute from `thiserror` provides automatic `Display` and `Error` implementations.
///
/// # Example
///
/// ```rust
/// use swap_widget::core::error::AppError;
///
/// let api_err = AppError::Api("Connection timeout".to_string());
/// let validation_err = AppError::Validation("Slippage must be non-negative".to_string());
///
/// assert_eq!(api_err.to_string(), "API error: Connection timeout");
/// assert_eq!(validation_err.to_string(), "Validation error: Slippage must be non-negative");
/// ```
///
/// Note: This type is exported for public API use and dependency injection.
#[derive(Debug, Error)]
pub enum AppError {
    /// Service communication error.
    ///
    /// Used for errors during HTTP requests to the aggregator backend:
    /// - Network failures (connection refused, timeout, DNS errors)
    /// - HTTP errors (4xx client errors, 5xx server errors)
    /// - JSON parsing errors (malformed responses)
    #[error("API error: {0}")]
    Api(String),

    /// Auto-slippage resolution error.
    ///
    /// The lookup failed or its response was unusable; the previously committed
    /// slippage value stays in effect. See
    /// [`crate::slippage::resolver::ResolutionError`] for the concrete causes.
    #[error("Resolution error: {0}")]
    Resolution(String),

    /// Settings store or configuration error.
    ///
    /// Used for failures loading/saving the widget configuration file and for
    /// unexpected settings store states.
    #[error("Settings error: {0}")]
    Settings(String),

    /// Input validation error.
    ///
    /// Used for user input validation failures:
    /// - Invalid format (amount must be numeric)
    /// - Out of range values (negative slippage)
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
///
/// Use this throughout the widget crate for consistent error handling:
///
/// ```rust
/// use swap_widget::core::error::Result;
///
/// fn operation() -> Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}

impl From<crate::slippage::resolver::ResolutionError> for AppError {
    fn from(err: crate::slippage::resolver::ResolutionError) -> Self {
        AppError::Resolution(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Settings(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Settings(err.to_string())
    }
}
