// Tenant Console - terminal shell for the Enterprise RAG Platform
//
// A single-screen client shell: a header holding the editable tenant ID
// input, a status panel that branches on whether an ID is set, and a
// tenant context distributing that one string to every component.
//
// Architecture:
// - Context: provider-owned shared slot, handed to components as handles
// - TUI (ratatui): header input, status panel, logs overlay
// - Logging: tracing captured into an in-memory buffer for the TUI,
//   optionally mirrored to rotating JSON files

mod cli;
mod config;
mod context;
mod logging;
mod startup;
mod tui;

use anyhow::Result;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --update)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Load configuration first to determine TUI vs headless mode
    let config = Config::from_env();

    // Create log buffer for TUI mode
    let log_buffer = LogBuffer::new();

    // The guard must be kept alive for the duration of the program so
    // buffered file logs flush on exit
    let _file_guard = init_tracing(&config, &log_buffer);

    // Print startup banner before the TUI takes the screen
    startup::print_startup(&config);
    startup::log_startup(&config);

    if config.enable_tui {
        tracing::info!("Starting TUI");
        tui::run_tui(log_buffer, config).await?;
    } else {
        tracing::info!("TUI disabled, running in headless mode");
        // In headless mode, just wait for Ctrl+C
        tokio::signal::ctrl_c().await?;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Initialize tracing/logging with conditional output
///
/// In TUI mode: capture logs to the buffer (prevents garbling the display).
/// In headless mode: output logs to stdout.
/// File logging: optionally write JSON to rotating log files (in addition).
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(
    config: &Config,
    log_buffer: &LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = format!("tenantui={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Set up the rolling file writer if enabled
    let file_writer = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };
                // Writes happen in a background thread; the guard flushes on drop
                Some(tracing_appender::non_blocking(appender))
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                None
            }
        }
    } else {
        None
    };

    // The file layer uses JSON format for structured log parsing
    match (config.enable_tui, file_writer) {
        (true, Some((non_blocking, guard))) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();
            Some(guard)
        }
        (true, None) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        }
        (false, Some((non_blocking, guard))) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();
            Some(guard)
        }
        (false, None) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
            None
        }
    }
}
