//! # External Services
//!
//! HTTP clients for the aggregator backend.

pub mod api;
