//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async tasks
//! and application state.
//!
//! ## Architecture
//!
//! The application follows an event-driven pattern:
//!
//! - **Main thread** (egui): handles input and rendering, polls the event
//!   channel every frame via [`App::on_tick`].
//! - **Async tasks** (Tokio): network lookups (token price, auto-slippage)
//!   spawned on the shared runtime, sending [`AppEvent`] results back over an
//!   unbounded `async_channel`.
//! - **State**: `Arc<RwLock<AppState>>`, locked briefly and never across an
//!   `.await`.
//!
//! The slippage controller lives inside the state; user actions reach it
//! through the thin `handle_*` methods here, and the auto-slippage resolution
//! comes back through `handle_event`, where stale results (superseded by a
//! newer user action) are discarded by the controller's request token.

mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::*;

use crate::config::WidgetConfig;
use crate::core::service::SettingsPort;
use crate::services::api::ApiClient;
use crate::settings::{InMemorySettings, SettingMonitor};
use crate::slippage::{AutoOutcome, SlippageController};
use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;

/// Main application orchestrator.
///
/// Owns the shared state and the event channel. All user actions go through
/// `handle_*` methods; all async results come back through [`App::on_tick`].
pub struct App {
    /// Thread-safe shared application state.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender cloned into async tasks.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create a new application instance from a widget configuration.
    ///
    /// Builds the API client, seeds an in-memory settings store, constructs
    /// the slippage controller over it and kicks off the initial origin-token
    /// price fetch.
    pub fn new(config: WidgetConfig) -> Self {
        let settings_store: Arc<dyn SettingsPort> = Arc::new(InMemorySettings::new());
        Self::with_settings(config, settings_store)
    }

    /// Create an application over an injected settings store.
    ///
    /// Lets embedders share one store across several widget instances; every
    /// instance then observes the others' committed slippage.
    pub fn with_settings(config: WidgetConfig, settings_store: Arc<dyn SettingsPort>) -> Self {
        let api_client = Arc::new(ApiClient::new(config.api_base_url.clone()));
        let slippage = SlippageController::new(config.slippage_options(), settings_store.clone());
        let monitor = SettingMonitor::new(
            slippage.default_value().to_string(),
            config.recommended_slippage_min,
            config.recommended_slippage_max,
        );

        let state = AppState {
            current_screen: Screen::Swap,
            swap: SwapFormState::default(),
            slippage,
            settings_store,
            monitor,
            api_client: Some(api_client),
            pending_notifications: Vec::new(),
        };

        let (event_tx, event_rx) = unbounded();

        let app = App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        };

        // Fetch the initial origin token price so auto-slippage has a context
        tasks::market::fetch_token_price(app.state.clone(), app.event_tx.clone());

        tracing::info!("App state initialized - event channel created, price fetch started");

        app
    }

    /// Called every frame to process async events and update state.
    ///
    /// Non-blocking: drains all currently queued events with `try_recv()`.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Handle async event results.
    ///
    /// Acquires the write lock per event for minimal duration.
    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AutoSlippageResult { request_id, result } => {
                let mut state = self.state.write();
                match state.slippage.apply_auto_result(request_id, result) {
                    AutoOutcome::Committed(value) => {
                        tracing::info!(slippage = %value, "Auto slippage committed");
                    }
                    AutoOutcome::Failed(err) => {
                        tracing::warn!(error = %err, "Auto slippage resolution failed");
                        state.pending_notifications.push((
                            "error".to_string(),
                            format!("Auto slippage unavailable: {err}"),
                        ));
                    }
                    AutoOutcome::Stale => {
                        // Superseded by a newer action; nothing to do
                    }
                }
            }
            AppEvent::TokenPriceResult {
                chain_id,
                address,
                result,
            } => {
                let mut state = self.state.write();
                state.swap.price_loading = false;
                match result {
                    Ok(price) => {
                        if state.swap.from_token.chain_id == chain_id
                            && state.swap.from_token.address == address
                        {
                            state.swap.from_token.price_usd = Some(price);
                        }
                        if let Some(entry) = state
                            .swap
                            .token_list
                            .iter_mut()
                            .find(|t| t.chain_id == chain_id && t.address == address)
                        {
                            entry.price_usd = Some(price);
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, chain_id, address = %address, "Token price fetch failed");
                    }
                }
            }
        }
    }

    /// Switch to a screen.
    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), screen);
    }

    /// Navigate to next screen in Tab order.
    pub fn next_screen(&mut self) {
        handlers::navigation::next_screen(self.state.clone());
    }

    /// Navigate to previous screen in Tab order.
    pub fn previous_screen(&mut self) {
        handlers::navigation::previous_screen(self.state.clone());
    }

    /// Select a slippage preset.
    pub fn handle_preset_click(&mut self, index: usize) {
        handlers::slippage::handle_preset_click(self.state.clone(), index);
    }

    /// Per-keystroke update of the custom slippage field.
    pub fn handle_slippage_input_changed(&mut self, text: &str) {
        handlers::slippage::handle_input_changed(self.state.clone(), text);
    }

    /// Commit the custom slippage field on blur.
    pub fn handle_slippage_input_blurred(&mut self) {
        handlers::slippage::handle_input_blurred(self.state.clone());
    }

    /// The custom slippage field gained focus.
    pub fn handle_slippage_input_focus(&mut self) {
        handlers::slippage::handle_input_focus(self.state.clone());
    }

    /// A slippage preset or auto button gained focus.
    pub fn handle_slippage_button_focus(&mut self) {
        handlers::slippage::handle_button_focus(self.state.clone());
    }

    /// A slippage preset or auto button lost focus.
    pub fn handle_slippage_button_blur(&mut self) {
        handlers::slippage::handle_button_blur(self.state.clone());
    }

    /// Request an auto-slippage resolution for the current trade context.
    pub fn handle_auto_slippage_click(&mut self) {
        tasks::slippage::request_auto_slippage(self.state.clone(), self.event_tx.clone());
    }

    /// Update the origin amount.
    pub fn handle_amount_changed(&mut self, amount: String) {
        handlers::swap::handle_amount_changed(self.state.clone(), amount);
    }

    /// Handle token selection; a changed origin token refreshes its price.
    pub fn handle_token_select(&mut self, token: TokenInfo, target: TokenPickerTarget) {
        let origin_changed = handlers::swap::handle_token_select(self.state.clone(), token, target);
        if origin_changed {
            tasks::market::fetch_token_price(self.state.clone(), self.event_tx.clone());
        }
    }

    /// Take the queued notifications for display.
    pub fn take_notifications(&mut self) -> Vec<(String, String)> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }

    /// Get the event sender for tests and embedders.
    pub fn event_tx(&self) -> Sender<AppEvent> {
        self.event_tx.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::SLIPPAGE_KEY;
    use crate::slippage::{ResolutionError, Selection};

    fn app() -> App {
        App::new(WidgetConfig::default())
    }

    // ========== Screen Tests ==========

    #[test]
    fn test_screen_all_returns_correct_order() {
        let screens = Screen::all();

        assert_eq!(screens.len(), 2);
        assert_eq!(screens[0], Screen::Swap);
        assert_eq!(screens[1], Screen::Settings);
    }

    #[test]
    fn test_screen_title() {
        assert_eq!(Screen::Swap.title(), "Swap");
        assert_eq!(Screen::Settings.title(), "Settings");
    }

    #[test]
    fn test_next_screen_cycles() {
        let mut app = app();
        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Swap);
        drop(state);

        app.next_screen();
        assert_eq!(app.state.read().current_screen, Screen::Settings);

        app.next_screen();
        assert_eq!(app.state.read().current_screen, Screen::Swap);

        app.previous_screen();
        assert_eq!(app.state.read().current_screen, Screen::Settings);
    }

    // ========== Initial State Tests ==========

    #[test]
    fn test_initial_state() {
        let app = app();
        let state = app.state.read();

        assert_eq!(state.current_screen, Screen::Swap);
        assert_eq!(state.swap.from_token.symbol, "ETH");
        assert_eq!(state.swap.to_token.symbol, "USDC");
        assert_eq!(state.swap.amount, "");
        assert!(state.pending_notifications.is_empty());
        assert_eq!(state.slippage.committed(), "0.5");
    }

    #[test]
    fn test_shared_store_is_observed_across_instances() {
        let store: Arc<dyn SettingsPort> = Arc::new(crate::settings::InMemorySettings::new());
        let first = App::with_settings(WidgetConfig::default(), store.clone());
        let second = App::with_settings(WidgetConfig::default(), store.clone());

        first.state.write().slippage.select_preset(2);

        let state = second.state.read();
        assert_eq!(state.slippage.committed(), "1");
        assert_eq!(state.slippage.selection(), Selection::Preset(2));
    }

    // ========== Trade Context Tests ==========

    #[test]
    fn test_trade_context_reflects_swap_form() {
        let app = app();
        let mut state = app.state.write();
        state.swap.amount = "100".to_string();
        state.swap.from_token.price_usd = Some(2.0);

        let ctx = state.swap.trade_context();
        assert_eq!(ctx.blockchain, 1);
        assert_eq!(ctx.amount, 100.0);
        assert_eq!(ctx.price_usd, Some(2.0));
        assert_eq!(state.swap.usd_value(), Some(200.0));
    }

    #[test]
    fn test_trade_context_with_invalid_amount() {
        let app = app();
        let mut state = app.state.write();
        state.swap.amount = "not-a-number".to_string();

        assert_eq!(state.swap.trade_context().amount, 0.0);
        assert_eq!(state.swap.usd_value(), None);
    }

    // ========== Event Handling Tests ==========

    #[test]
    fn test_auto_slippage_success_event_commits() {
        let mut app = app();
        let token = app
            .state
            .write()
            .slippage
            .begin_auto()
            .expect("auto enabled");

        app.handle_event(AppEvent::AutoSlippageResult {
            request_id: token,
            result: Ok("0.7".to_string()),
        });

        let state = app.state.read();
        assert_eq!(state.slippage.committed(), "0.7");
        assert!(state.slippage.is_auto());
        assert!(state.pending_notifications.is_empty());
    }

    #[test]
    fn test_auto_slippage_failure_event_notifies_and_keeps_value() {
        let mut app = app();
        let token = app
            .state
            .write()
            .slippage
            .begin_auto()
            .expect("auto enabled");

        app.handle_event(AppEvent::AutoSlippageResult {
            request_id: token,
            result: Err(ResolutionError::Status(500)),
        });

        let state = app.state.read();
        assert_eq!(state.slippage.committed(), "0.5");
        assert!(!state.slippage.is_auto());
        assert_eq!(state.pending_notifications.len(), 1);
        assert_eq!(state.pending_notifications[0].0, "error");
    }

    #[test]
    fn test_stale_auto_slippage_event_is_discarded() {
        let mut app = app();
        let stale = app
            .state
            .write()
            .slippage
            .begin_auto()
            .expect("auto enabled");
        app.state.write().slippage.select_preset(0);

        app.handle_event(AppEvent::AutoSlippageResult {
            request_id: stale,
            result: Ok("0.7".to_string()),
        });

        let state = app.state.read();
        assert_eq!(state.slippage.committed(), "0.3");
        assert!(!state.slippage.is_auto());
        assert!(state.pending_notifications.is_empty());
    }

    #[test]
    fn test_token_price_event_updates_origin_token() {
        let mut app = app();
        let (chain_id, address) = {
            let state = app.state.read();
            (
                state.swap.from_token.chain_id,
                state.swap.from_token.address.clone(),
            )
        };

        app.handle_event(AppEvent::TokenPriceResult {
            chain_id,
            address,
            result: Ok(2.0),
        });

        let state = app.state.read();
        assert_eq!(state.swap.from_token.price_usd, Some(2.0));
        assert!(!state.swap.price_loading);
    }

    #[test]
    fn test_token_price_event_for_other_token_is_ignored() {
        let mut app = app();

        app.handle_event(AppEvent::TokenPriceResult {
            chain_id: 137,
            address: "0xBBB".to_string(),
            result: Ok(9.0),
        });

        let state = app.state.read();
        assert_eq!(state.swap.from_token.price_usd, None);
    }

    // ========== Handler Tests ==========

    #[test]
    fn test_preset_click_through_app() {
        let mut app = app();
        app.handle_preset_click(0);

        let state = app.state.read();
        assert_eq!(state.slippage.committed(), "0.3");
        assert_eq!(state.settings_store.get(SLIPPAGE_KEY).as_deref(), Some("0.3"));
    }

    #[test]
    fn test_custom_entry_through_app() {
        let mut app = app();
        app.handle_slippage_input_focus();
        app.handle_slippage_input_changed("2.5");
        app.handle_slippage_input_blurred();

        let state = app.state.read();
        assert_eq!(state.slippage.committed(), "2.5");
        assert_eq!(state.slippage.selection(), Selection::Custom);
    }

    #[test]
    fn test_take_notifications_drains_queue() {
        let mut app = app();
        app.state
            .write()
            .pending_notifications
            .push(("info".to_string(), "hello".to_string()));

        let drained = app.take_notifications();
        assert_eq!(drained.len(), 1);
        assert!(app.state.read().pending_notifications.is_empty());
    }
}
