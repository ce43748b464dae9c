//! # Slippage Control
//!
//! Everything behind the slippage tolerance setting: string normalization
//! ([`format`]), the asynchronous auto-slippage suggestion ([`resolver`]) and
//! the state machine tying presets, free-text entry and focus together
//! ([`controller`]).

pub mod controller;
pub mod format;
pub mod resolver;

pub use controller::{
    classify, AutoOutcome, FocusState, Selection, SlippageController, SlippageOptions,
};
pub use format::{format_slippage, MAX_SLIPPAGE};
pub use resolver::{usd_notional, AutoSlippageResolver, ResolutionError, TradeContext};
