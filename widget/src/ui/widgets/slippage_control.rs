//! # Slippage Control Widget
//!
//! Renders the slippage tolerance control: preset buttons, the optional Auto
//! button and the custom free-text field. All selected styling is derived
//! from the controller's `selection()`; this module contains no state of its
//! own.

use crate::app::{App, AppState};
use crate::slippage::{FocusState, Selection};
use crate::ui::theme::Theme;
use egui;

/// Render the slippage control row.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let controller = &state.slippage;
    let selection = controller.selection();

    ui.group(|ui| {
        ui.label("Slippage Tolerance:");
        ui.horizontal(|ui| {
            for (index, preset) in controller.presets().iter().enumerate() {
                let is_selected = selection == Selection::Preset(index);
                let response = ui.selectable_label(is_selected, format!("{preset}%"));
                if response.gained_focus() {
                    app.handle_slippage_button_focus();
                }
                if response.clicked() {
                    app.handle_preset_click(index);
                } else if response.lost_focus() {
                    app.handle_slippage_button_blur();
                }
            }

            if controller.with_auto() {
                let is_selected = selection == Selection::Auto;
                let label = if controller.auto_pending() {
                    "Auto…"
                } else {
                    "Auto"
                };
                let response = ui.selectable_label(is_selected, label);
                if response.gained_focus() {
                    app.handle_slippage_button_focus();
                }
                if response.clicked() {
                    app.handle_auto_slippage_click();
                } else if response.lost_focus() {
                    app.handle_slippage_button_blur();
                }
            }

            let mut text = controller.input_display();
            let hint = if controller.focus() == FocusState::Input {
                ""
            } else {
                "Custom"
            };
            let text_color = if selection == Selection::Custom {
                theme.accent
            } else {
                theme.text
            };
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .hint_text(hint)
                    .text_color(text_color)
                    .desired_width(64.0),
            );
            if response.gained_focus() {
                app.handle_slippage_input_focus();
            }
            if response.changed() {
                app.handle_slippage_input_changed(&text);
            }
            if response.lost_focus() {
                app.handle_slippage_input_blurred();
            }
            ui.label("%");
        });
    });
}
