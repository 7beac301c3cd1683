//! Service logging.
//!
//! Request handling, rate limit rejections, storage failures, and mail
//! outcomes are all reported through `tracing`. This module installs the
//! subscriber once at startup.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::Result;

/// Map a `logging.level` value to a level. Unknown values mean `info`.
fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// `RUST_LOG` directives plus the configured floor.
fn filter(level: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(parse_level(level).into())
}

/// Install the subscriber described by `[logging]`.
///
/// Without `logging.file` this is [`init_console_only`]. With a file, every
/// event is written to stdout and appended to the file, which is created
/// along with its parent directory if needed. Errors opening the file are
/// returned so the caller can fall back to the console.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let Some(path) = config.file.as_deref().map(Path::new) else {
        init_console_only(&config.level);
        return Ok(());
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let log_file = Arc::new(OpenOptions::new().create(true).append(true).open(path)?);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout.and(log_file))
                .with_ansi(false),
        )
        .with(filter(&config.level))
        .init();

    Ok(())
}

/// Install a colored stdout-only subscriber.
pub fn init_console_only(level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(filter(level))
        .init();
}
