//! # Application State Types
//!
//! All state-related types for the widget: screens, the swap form (which is
//! the live source of the trade context) and the slippage controller.

use crate::core::service::SettingsPort;
use crate::services::api::ApiClient;
use crate::settings::SettingMonitor;
use crate::slippage::{usd_notional, SlippageController, TradeContext};
use std::sync::Arc;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Swap form (token selection, amount)
    Swap,
    /// Settings panel (slippage control)
    Settings,
}

impl Screen {
    /// Get all screens in Tab navigation order
    pub fn all() -> &'static [Screen] {
        &[Screen::Swap, Screen::Settings]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Swap => "Swap",
            Screen::Settings => "Settings",
        }
    }
}

/// Target for token selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPickerTarget {
    /// Picking the origin token
    Origin,
    /// Picking the destination token
    Destination,
}

/// Token information for selection
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub symbol: String,
    pub name: String,
    pub address: String,
    pub chain_id: u64,
    /// USD price, `None` until the price lookup completes.
    pub price_usd: Option<f64>,
}

/// Swap form state
#[derive(Debug, Clone)]
pub struct SwapFormState {
    /// Origin token
    pub from_token: TokenInfo,
    /// Destination token
    pub to_token: TokenInfo,
    /// Origin amount (as string for input handling)
    pub amount: String,
    /// Origin token price fetch in flight
    pub price_loading: bool,
    /// Available tokens for selection
    pub token_list: Vec<TokenInfo>,
}

impl SwapFormState {
    /// Snapshot of the trade inputs consumed by the auto-slippage resolver.
    pub fn trade_context(&self) -> TradeContext {
        TradeContext {
            blockchain: self.from_token.chain_id,
            token_address: self.from_token.address.clone(),
            amount: self.amount.parse().unwrap_or(0.0),
            price_usd: self.from_token.price_usd,
        }
    }

    /// USD value of the origin amount, if the price is known.
    pub fn usd_value(&self) -> Option<f64> {
        let amount: f64 = self.amount.parse().ok()?;
        usd_notional(amount, self.from_token.price_usd?)
    }
}

impl Default for SwapFormState {
    fn default() -> Self {
        let token_list = default_token_list();
        Self {
            from_token: token_list[0].clone(),
            to_token: token_list[1].clone(),
            amount: String::new(),
            price_loading: false,
            token_list,
        }
    }
}

fn default_token_list() -> Vec<TokenInfo> {
    vec![
        TokenInfo {
            symbol: "ETH".to_string(),
            name: "Ether".to_string(),
            address: "0x0000000000000000000000000000000000000000".to_string(),
            chain_id: 1,
            price_usd: None,
        },
        TokenInfo {
            symbol: "USDC".to_string(),
            name: "USD Coin".to_string(),
            address: "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string(),
            chain_id: 1,
            price_usd: None,
        },
        TokenInfo {
            symbol: "DAI".to_string(),
            name: "Dai Stablecoin".to_string(),
            address: "0x6B175474E89094C44Da98b954EedeAC495271d0F".to_string(),
            chain_id: 1,
            price_usd: None,
        },
        TokenInfo {
            symbol: "WBTC".to_string(),
            name: "Wrapped BTC".to_string(),
            address: "0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599".to_string(),
            chain_id: 1,
            price_usd: None,
        },
    ]
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Swap form state (trade context source)
    pub swap: SwapFormState,
    /// Slippage controller (the single writer of the slippage setting)
    pub slippage: SlippageController,
    /// Settings store shared with the controller; other views read it
    pub settings_store: Arc<dyn SettingsPort>,
    /// Derived slippage checks for badges and warnings
    pub monitor: SettingMonitor,
    /// API client
    pub api_client: Option<Arc<ApiClient>>,
    /// Pending notifications to display (level, message)
    pub pending_notifications: Vec<(String, String)>,
}
