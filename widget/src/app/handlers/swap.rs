//! # Swap Handlers
//!
//! Handlers for swap form interactions (token selection, amount entry).

use crate::app::state::{AppState, TokenInfo, TokenPickerTarget};
use parking_lot::RwLock;
use std::sync::Arc;

/// Update the origin amount as the user types.
pub(crate) fn handle_amount_changed(state: Arc<RwLock<AppState>>, amount: String) {
    let mut state = state.write();
    state.swap.amount = amount;
}

/// Handle token selection.
///
/// Returns whether the origin token changed, in which case the caller should
/// refresh its price.
pub(crate) fn handle_token_select(
    state: Arc<RwLock<AppState>>,
    token: TokenInfo,
    target: TokenPickerTarget,
) -> bool {
    let mut state = state.write();
    match target {
        TokenPickerTarget::Origin => {
            let changed = state.swap.from_token.address != token.address
                || state.swap.from_token.chain_id != token.chain_id;
            state.swap.from_token = token;
            changed
        }
        TokenPickerTarget::Destination => {
            state.swap.to_token = token;
            false
        }
    }
}
