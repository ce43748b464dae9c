//! # User Action Handlers
//!
//! Thin handler functions for user actions, each taking the shared state and
//! delegating to the owning component.

pub(crate) mod navigation;
pub(crate) mod slippage;
pub(crate) mod swap;
