//! # Swap Widget - Library Root
//!
//! An embeddable **native desktop** token-swap widget built on egui, centred
//! on a reusable slippage control. This library crate contains all modules
//! used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              swap-widget (this crate)                  │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI                    │
//! │  egui-notify   - Toast notifications                   │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!                          │ HTTP
//!                          ▼
//!               ┌─────────────────────┐
//!               │  Aggregator backend │
//!               │  (prices, auto-     │
//!               │   slippage)         │
//!               └─────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **slippage**: the heart of the widget
//!   - `format`: pure normalization of raw slippage strings
//!   - `resolver`: async auto-slippage suggestion (USD notional + lookup)
//!   - `controller`: the state machine over presets, free text and focus
//! - **app**: orchestrator, state, events, async tasks and action handlers
//! - **core**: error types and the dependency-injection ports
//!   (`SettingsPort`, `ApiService`)
//! - **settings**: in-memory settings store and the derived setting monitor
//! - **services**: reqwest client for the aggregator backend
//! - **ui**: screens, widgets, theme
//! - **config**: JSON widget configuration
//!
//! ## Event-Driven Architecture
//!
//! The main thread handles input and rendering; network lookups run on a
//! shared Tokio runtime and send `AppEvent` results back over an async
//! channel, drained every frame in `App::on_tick`. State lives in
//! `Arc<RwLock<AppState>>` with brief lock scopes.
//!
//! The slippage controller is the single writer of the `slippage` setting;
//! every other view derives what it displays from the committed value. Auto
//! resolutions are tagged with a request token so a stale response can never
//! overwrite a newer user choice.

// Re-export main modules for testing and integration
pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod services;
pub mod settings;
pub mod slippage;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Screen};
pub use config::WidgetConfig;
pub use crate::core::{AppError, Result};
