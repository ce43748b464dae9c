//! # GUI Theme
//!
//! Dark theme for the widget, configurable through the widget config file.

use egui::{Color32, Context, Visuals};
use serde::{Deserialize, Serialize};

/// Serializable theme configuration for persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Panel background
    pub background: [u8; 3],
    /// Primary text
    pub text: [u8; 3],
    /// Accent for the active selection
    pub accent: [u8; 3],
    /// Success green
    pub success: [u8; 3],
    /// Warning yellow/orange
    pub warning: [u8; 3],
    /// Error red
    pub error: [u8; 3],
    /// Info blue
    pub info: [u8; 3],
    /// Inactive elements
    pub inactive: [u8; 3],
    /// Secondary text
    pub secondary: [u8; 3],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            background: [16, 16, 20],
            text: [235, 235, 235],
            accent: [91, 108, 242],
            success: [0, 200, 83],
            warning: [255, 170, 0],
            error: [244, 67, 54],
            info: [100, 150, 255],
            inactive: [32, 32, 38],
            secondary: [150, 150, 150],
        }
    }
}

/// Runtime theme with resolved colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color32,
    pub text: Color32,
    pub accent: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub info: Color32,
    pub inactive: Color32,
    pub secondary: Color32,
}

fn color(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            background: color(config.background),
            text: color(config.text),
            accent: color(config.accent),
            success: color(config.success),
            warning: color(config.warning),
            error: color(config.error),
            info: color(config.info),
            inactive: color(config.inactive),
            secondary: color(config.secondary),
        }
    }

    /// Apply the theme to the egui context.
    pub fn apply(&self, ctx: &Context) {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = self.background;
        visuals.override_text_color = Some(self.text);
        visuals.selection.bg_fill = self.accent;
        visuals.widgets.inactive.bg_fill = self.inactive;
        visuals.widgets.hovered.bg_fill = self.inactive.gamma_multiply(1.6);
        ctx.set_visuals(visuals);
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
