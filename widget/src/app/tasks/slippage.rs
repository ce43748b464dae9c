//! # Slippage Tasks
//!
//! Async task for auto-slippage resolution.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::slippage::AutoSlippageResolver;
use crate::utils::runtime::TOKIO_RT;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Trigger an auto-slippage resolution for the current trade context.
///
/// Bumps the controller's request token under the write lock, then resolves
/// on the runtime; the result is sent back tagged with the token so the event
/// handler can discard it if a newer action superseded it. While the
/// resolution is pending the UI stays fully interactive.
pub(crate) fn request_auto_slippage(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (request_id, ctx, api) = {
        let mut state = state.write();
        let Some(api) = state.api_client.clone() else {
            tracing::warn!("Auto-slippage requested without an API client");
            return;
        };
        let Some(request_id) = state.slippage.begin_auto() else {
            return; // Auto-slippage disabled by configuration
        };
        (request_id, state.swap.trade_context(), api)
    }; // Lock released before any await

    TOKIO_RT.spawn(async move {
        let resolver = AutoSlippageResolver::new(api);
        let result = resolver.resolve(&ctx).await;
        let _ = event_tx
            .send(AppEvent::AutoSlippageResult { request_id, result })
            .await;
    });
}
