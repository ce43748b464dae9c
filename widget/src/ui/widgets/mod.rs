//! # UI Widgets
//!
//! Custom reusable components.

pub mod notifications;
pub mod slippage_control;
