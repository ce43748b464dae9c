//! Native entry point for the swap widget.

use swap_widget::app::App;
use swap_widget::config::WidgetConfig;
use swap_widget::ui;
use swap_widget::ui::theme::Theme;
use swap_widget::ui::widgets::notifications::NotificationManager;

/// eframe wrapper driving the frame loop: drain async events, render, show
/// toasts.
struct WidgetApp {
    app: App,
    notifications: NotificationManager,
    theme: Theme,
}

impl WidgetApp {
    fn new(app: App, theme: Theme) -> Self {
        Self {
            app,
            notifications: NotificationManager::new(),
            theme,
        }
    }
}

impl eframe::App for WidgetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        ui::render(ctx, &mut self.app, &mut self.notifications, &self.theme);

        // Async results arrive outside the input-driven repaint cycle
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

fn main() -> eframe::Result<()> {
    let _log_guard = swap_widget::logging::init();

    let config = WidgetConfig::load();
    let theme = Theme::from_config(&config.theme);
    let app = App::new(config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 640.0])
            .with_title("Swap Widget"),
        ..Default::default()
    };

    eframe::run_native(
        "swap-widget",
        options,
        Box::new(move |cc| {
            theme.apply(&cc.egui_ctx);
            Ok(Box::new(WidgetApp::new(app, theme)))
        }),
    )
}
