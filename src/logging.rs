//! Rotating log system
//!
//! Logs to both console and rotating files in ./logs/

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system with rotating file logs
pub fn init_logging(log_dir: &str) {
    let log_path = Path::new(log_dir);
    if !log_path.exists() {
        std::fs::create_dir_all(log_path).expect("Failed to create log directory");
    }

    // Rotates daily: growth_explorer.log.YYYY-MM-DD
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "growth_explorer.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The guard must outlive the program for buffered lines to flush
    std::mem::forget(guard);

    // Default to INFO, crate at DEBUG; RUST_LOG overrides
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,growth_explorer=debug"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized. Log directory: {}", log_dir);
}
