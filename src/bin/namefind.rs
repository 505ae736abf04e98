//! Name Finder - search window entry point.
//!
//! Loads the names file once, then opens the search window:
//! - Enter or the Search button runs the query
//! - Up/Down move the selection
//! - Ctrl+Shift+C copies the selected name
//!
//! Logs are written to `<data dir>/logs/namefind.log`, or stderr if that
//! directory cannot be created. `RUST_LOG` overrides the default filter.

use eframe::egui;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use namefind::service::{config, AppConfig, NameFilterService};
use namefind::ui::NameSearchApp;

const APP_TITLE: &str = "Name Finder";

/// Initialize tracing, to a daily rolling file when possible.
///
/// The returned guard must stay alive for buffered lines to be flushed.
fn init_logging() -> Option<WorkerGuard> {
    let filter = || {
        tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "namefind=info".to_string()),
        )
    };

    let log_dir = config::project_dirs().map(|dirs| dirs.data_local_dir().join("logs"));
    let log_dir = match log_dir {
        Some(dir) => match std::fs::create_dir_all(&dir) {
            Ok(()) => Some(dir),
            Err(e) => {
                eprintln!("Failed to create log directory {:?}: {}", dir, e);
                None
            }
        },
        None => None,
    };

    let Some(log_dir) = log_dir else {
        tracing_subscriber::registry()
            .with(filter())
            .with(tracing_subscriber::fmt::layer())
            .init();
        return None;
    };

    let file_appender = tracing_appender::rolling::daily(&log_dir, "namefind.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false), // No ANSI colors in log files
        )
        .init();

    tracing::info!("Logging initialized to {:?}", log_dir);
    Some(guard)
}

fn main() -> eframe::Result<()> {
    let _log_guard = init_logging();

    tracing::info!("Name Finder v{} starting", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    let (service, error) = NameFilterService::load(&config.names_file);
    if let Some(e) = error {
        tracing::warn!("Starting with an empty name list: {}", e);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([300.0, 200.0]),
        ..Default::default()
    };

    let font_path = config.font_path.clone();
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(NameSearchApp::new(cc, service, font_path)))),
    )
}
