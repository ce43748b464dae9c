//! # GUI Rendering Framework
//!
//! Orchestrates the rendering pipeline: screen switching, the per-frame state
//! snapshot and the toast notification overlay.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::notifications::NotificationManager;
use egui;

/// Main render function - called every frame.
pub fn render(
    ctx: &egui::Context,
    app: &mut App,
    notifications: &mut NotificationManager,
    theme: &Theme,
) {
    // Read state for rendering
    let state = {
        match app.state.try_read() {
            Some(state_guard) => state_guard.clone(),
            None => {
                // Lock is held by another task, skip this frame
                return;
            }
        }
    }; // Lock released here - rendering happens without holding the lock

    // Route queued failure notices into toasts
    let pending = app.take_notifications();
    notifications.drain(pending);

    egui::CentralPanel::default().show(ctx, |ui| {
        // Screen tabs
        ui.horizontal(|ui| {
            for screen in Screen::all() {
                let selected = state.current_screen == *screen;
                if ui.selectable_label(selected, screen.title()).clicked() {
                    app.handle_screen_change(*screen);
                }
            }
        });
        ui.separator();
        ui.add_space(5.0);

        match state.current_screen {
            Screen::Swap => screens::swap::render(ui, &state, app, theme),
            Screen::Settings => screens::settings::render(ui, &state, app, theme),
        }
    });

    notifications.show(ctx);
}
