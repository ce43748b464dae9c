//! File-based logging initialization

use std::fs;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Sets up logging with:
/// - Daily log rotation for the file log
/// - Structured output with targets
/// - Non-blocking writes to prevent UI lag
/// - A plain stderr layer for interactive runs
///
/// Logs are written to `logs/swap-widget.log` by default; override the
/// directory with `SWAP_WIDGET_LOG_DIR` and the filter with `RUST_LOG`.
///
/// Returns the appender guard; keep it alive for the process lifetime so
/// buffered log lines are flushed.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = std::env::var("SWAP_WIDGET_LOG_DIR").unwrap_or_else(|_| "logs".to_string());

    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "swap-widget.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("swap_widget=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_ansi(false); // No ANSI codes in log files

    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    tracing::info!(log_dir = %log_dir, "Logging initialized");
    Some(guard)
}
