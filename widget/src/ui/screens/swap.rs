//! # Swap Screen
//!
//! The swap form: origin/destination token selection and the amount input.
//! This screen is the live source of the trade context the auto-slippage
//! resolver reads; it carries no swap-execution logic.

use crate::app::{App, AppState, TokenPickerTarget};
use crate::ui::theme::Theme;
use egui;

/// Render the swap form.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.heading("Swap Tokens");
    ui.add_space(10.0);

    token_selector(ui, state, app, "From", TokenPickerTarget::Origin);
    ui.add_space(5.0);
    token_selector(ui, state, app, "To", TokenPickerTarget::Destination);
    ui.add_space(10.0);

    // Amount input
    ui.label("Amount:");
    let mut amount = state.swap.amount.clone();
    let response = ui.text_edit_singleline(&mut amount);
    if response.changed() {
        app.handle_amount_changed(amount.clone());
    }

    // USD value readout
    if state.swap.price_loading {
        ui.colored_label(theme.secondary, "Fetching price...");
    } else if let Some(usd) = state.swap.usd_value() {
        ui.colored_label(theme.secondary, format!("≈ ${usd:.2}"));
    }
    ui.add_space(10.0);

    // The committed slippage setting, read back from the store like any
    // other observer would
    ui.separator();
    ui.horizontal(|ui| {
        ui.label("Max slippage:");
        ui.colored_label(theme.secondary, format!("{}%", state.slippage.committed()));
        if ui.small_button("Edit").clicked() {
            app.handle_screen_change(crate::app::Screen::Settings);
        }
    });
}

fn token_selector(
    ui: &mut egui::Ui,
    state: &AppState,
    app: &mut App,
    label: &str,
    target: TokenPickerTarget,
) {
    let current = match target {
        TokenPickerTarget::Origin => &state.swap.from_token,
        TokenPickerTarget::Destination => &state.swap.to_token,
    };

    ui.horizontal(|ui| {
        ui.label(format!("{label}:"));
        egui::ComboBox::from_id_salt(label)
            .selected_text(current.symbol.clone())
            .show_ui(ui, |ui| {
                for token in &state.swap.token_list {
                    let selected =
                        token.address == current.address && token.chain_id == current.chain_id;
                    if ui.selectable_label(selected, &token.symbol).clicked() {
                        app.handle_token_select(token.clone(), target);
                    }
                }
            });
    });
}
