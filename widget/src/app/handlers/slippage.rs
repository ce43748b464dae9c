//! # Slippage Handlers
//!
//! Handlers for slippage control interactions, all delegating to the
//! controller under a brief write lock.

use crate::app::state::AppState;
use parking_lot::RwLock;
use std::sync::Arc;

/// Select a preset tolerance.
pub(crate) fn handle_preset_click(state: Arc<RwLock<AppState>>, index: usize) {
    let mut state = state.write();
    state.slippage.select_preset(index);
    tracing::debug!(index, slippage = %state.slippage.committed(), "Preset selected");
}

/// Per-keystroke update of the custom slippage field.
pub(crate) fn handle_input_changed(state: Arc<RwLock<AppState>>, text: &str) {
    let mut state = state.write();
    state.slippage.input_changed(text);
}

/// Commit the custom slippage field on blur.
pub(crate) fn handle_input_blurred(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.slippage.input_blurred();
    tracing::debug!(slippage = %state.slippage.committed(), "Custom slippage committed");
}

/// The custom slippage field gained focus.
pub(crate) fn handle_input_focus(state: Arc<RwLock<AppState>>) {
    state.write().slippage.focus_input();
}

/// A preset or auto button gained focus.
pub(crate) fn handle_button_focus(state: Arc<RwLock<AppState>>) {
    state.write().slippage.focus_button();
}

/// A preset or auto button lost focus.
pub(crate) fn handle_button_blur(state: Arc<RwLock<AppState>>) {
    state.write().slippage.clear_button_focus();
}
