//! # Settings Screen
//!
//! Hosts the slippage control with its badge and the out-of-limits warning.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::slippage_control;
use egui;

/// Render the settings panel.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.heading("Settings");
    ui.add_space(10.0);

    let committed = state.slippage.committed();
    let outside = state
        .monitor
        .is_slippage_outside_recommended_limits(&committed);
    let changed = state.monitor.is_slippage_changed(&committed);

    ui.horizontal(|ui| {
        ui.label("Slippage");
        let badge_color = if outside {
            theme.warning
        } else if changed {
            theme.info
        } else {
            theme.secondary
        };
        ui.colored_label(badge_color, format!("{committed}%"));
    });
    ui.add_space(5.0);

    slippage_control::render(ui, state, app, theme);

    if outside {
        ui.add_space(5.0);
        ui.horizontal(|ui| {
            ui.colored_label(theme.warning, "⚠");
            ui.label("Slippage is outside recommended limits");
        });
    }
}
