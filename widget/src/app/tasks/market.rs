//! # Market Tasks
//!
//! Async task for token price lookups.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::utils::runtime::TOKIO_RT;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Fetch the USD price of the current origin token.
pub(crate) fn fetch_token_price(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api, chain_id, address) = {
        let mut state = state.write();
        let Some(api) = state.api_client.clone() else {
            return;
        };
        state.swap.price_loading = true;
        (
            api,
            state.swap.from_token.chain_id,
            state.swap.from_token.address.clone(),
        )
    };

    TOKIO_RT.spawn(async move {
        let result = crate::services::api::market::get_token_price(&api, chain_id, &address).await;
        let _ = event_tx
            .send(AppEvent::TokenPriceResult {
                chain_id,
                address,
                result,
            })
            .await;
    });
}
