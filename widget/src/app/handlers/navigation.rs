//! # Navigation Handlers
//!
//! Handlers for screen navigation.

use crate::app::state::{AppState, Screen};
use parking_lot::RwLock;
use std::sync::Arc;

/// Switch to a screen.
pub(crate) fn handle_screen_change(state: Arc<RwLock<AppState>>, screen: Screen) {
    let mut state = state.write();
    if state.current_screen != screen {
        tracing::debug!(from = ?state.current_screen, to = ?screen, "Screen change");
        state.current_screen = screen;
    }
}

/// Navigate to the next screen in Tab order.
pub(crate) fn next_screen(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let screens = Screen::all();
    let current = screens
        .iter()
        .position(|s| *s == state.current_screen)
        .unwrap_or(0);
    state.current_screen = screens[(current + 1) % screens.len()];
}

/// Navigate to the previous screen in Tab order.
pub(crate) fn previous_screen(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let screens = Screen::all();
    let current = screens
        .iter()
        .position(|s| *s == state.current_screen)
        .unwrap_or(0);
    state.current_screen = screens[(current + screens.len() - 1) % screens.len()];
}
