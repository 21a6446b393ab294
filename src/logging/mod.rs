/*!
 * Logging Module
 * Centralized logging configuration
 */
pub mod config;

use std::io;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use config::LoggingConfig;

/// Initialize the logging system.
///
/// The returned guards flush the background writers on drop; hold them for the
/// life of the process.
pub fn init(config: &LoggingConfig) -> Vec<WorkerGuard> {
    let mut guards = Vec::new();

    if let Err(e) = std::fs::create_dir_all(&config.directory) {
        eprintln!("Failed to create log directory {}: {}", config.directory, e);
    }

    // File appender for all logs
    let file_appender = rolling::daily(&config.directory, "app.log");
    let (file_writer, file_guard) = non_blocking(file_appender);
    guards.push(file_guard);

    // Console writer
    let (console_writer, console_guard) = non_blocking(io::stdout());
    guards.push(console_guard);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("portfolio_catalog={}", config.level)));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    let result = if config.is_production() {
        // File appender for errors only
        let error_appender = rolling::daily(&config.directory, "error.log");
        let (error_writer, error_guard) = non_blocking(error_appender);
        guards.push(error_guard);

        // JSON format for production
        let file_layer = fmt::layer()
            .json()
            .with_writer(file_writer)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        let error_layer = fmt::layer()
            .json()
            .with_writer(error_writer)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(tracing_subscriber::filter::LevelFilter::ERROR);

        let console_layer = fmt::layer()
            .json()
            .with_writer(console_writer)
            .with_target(false);

        subscriber
            .with(file_layer)
            .with(error_layer)
            .with(console_layer)
            .try_init()
    } else {
        // Pretty format for development
        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);

        let console_layer = fmt::layer()
            .with_writer(console_writer)
            .with_target(true)
            .pretty();

        subscriber.with(file_layer).with(console_layer).try_init()
    };

    match result {
        Ok(()) => tracing::info!(
            environment = %config.environment,
            level = %config.level,
            "logging initialized"
        ),
        Err(e) => eprintln!("Logging already initialized: {}", e),
    }

    guards
}
