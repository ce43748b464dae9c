//! # Widget Configuration
//!
//! JSON-file configuration for the widget: slippage defaults and presets, the
//! auto-slippage toggle, the empty-blur policy, recommended bounds for the
//! warning badge, the service base URL and the theme palette.

use crate::core::error::Result;
use crate::slippage::SlippageOptions;
use crate::ui::theme::ThemeConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the config file location.
const CONFIG_PATH_ENV: &str = "SWAP_WIDGET_CONFIG";

/// Serializable widget configuration with sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Fallback and recommended slippage tolerance, percent.
    pub default_slippage: String,
    /// One-click preset tolerances, percent.
    pub slippage_presets: Vec<String>,
    /// Offer the auto-slippage control.
    pub with_auto_slippage: bool,
    /// Blurring an empty custom field commits the default instead of keeping
    /// the prior custom value.
    pub reset_slippage_on_empty_blur: bool,
    /// Lower bound of the recommended slippage range, percent.
    pub recommended_slippage_min: f64,
    /// Upper bound of the recommended slippage range, percent.
    pub recommended_slippage_max: f64,
    /// Base URL of the aggregator backend (price + auto-slippage lookups).
    pub api_base_url: String,
    /// Theme palette.
    pub theme: ThemeConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            default_slippage: "0.5".to_string(),
            slippage_presets: vec!["0.3".to_string(), "0.5".to_string(), "1".to_string()],
            with_auto_slippage: true,
            reset_slippage_on_empty_blur: true,
            recommended_slippage_min: 0.1,
            recommended_slippage_max: 5.0,
            api_base_url: "http://127.0.0.1:3001".to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

impl WidgetConfig {
    /// Default config file path.
    pub fn config_path() -> std::path::PathBuf {
        std::env::var(CONFIG_PATH_ENV)
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|_| std::path::PathBuf::from("./swap-widget-config.json"))
    }

    /// Load configuration from a JSON file, defaults if the file is absent.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: WidgetConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from the default path, falling back to defaults on any failure.
    pub fn load() -> Self {
        let path = Self::config_path();
        match Self::load_from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded widget configuration from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load widget config from {:?}: {}. Using defaults.",
                    path,
                    e
                );
                Self::default()
            }
        }
    }

    /// The slippage controller options described by this configuration.
    pub fn slippage_options(&self) -> SlippageOptions {
        SlippageOptions {
            default_value: self.default_slippage.clone(),
            presets: self.slippage_presets.clone(),
            with_auto_slippage: self.with_auto_slippage,
            reset_on_empty_blur: self.reset_slippage_on_empty_blur,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_json() {
        let config = WidgetConfig::default();
        let json = serde_json::to_string(&config).expect("serialize");
        let back: WidgetConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.default_slippage, config.default_slippage);
        assert_eq!(back.slippage_presets, config.slippage_presets);
        assert_eq!(back.api_base_url, config.api_base_url);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let json = r#"{ "default_slippage": "1" }"#;
        let config: WidgetConfig = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.default_slippage, "1");
        assert!(config.with_auto_slippage);
        assert_eq!(config.recommended_slippage_max, 5.0);
    }

    #[test]
    fn test_slippage_options_mirror_config() {
        let config = WidgetConfig {
            with_auto_slippage: false,
            ..WidgetConfig::default()
        };
        let options = config.slippage_options();
        assert!(!options.with_auto_slippage);
        assert_eq!(options.default_value, "0.5");
        assert_eq!(options.presets.len(), 3);
    }
}
