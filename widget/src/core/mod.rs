//! # Core Abstractions
//!
//! Error types and service traits shared across the widget.

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{ApiService, SettingsPort, SLIPPAGE_KEY};
