//! Structured logging: JSONL to a file plus pretty stderr output.
//!
//! `init` must be called once, early; the returned guard has to stay alive
//! for the duration of the program so the non-blocking file writer flushes
//! on shutdown.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Guard that must be kept alive for the duration of the program.
/// Dropping it flushes and closes the log file.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

fn log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("launchdeck")
        .join("logs")
}

/// Initialize the dual-output logging system.
///
/// `default_filter` is the env-filter directive used when RUST_LOG is not
/// set (normally the configured `log_filter`).
pub fn init(default_filter: &str) -> LoggingGuard {
    let dir = log_dir();
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("[logging] failed to create log directory: {}", e);
    }
    let log_path = dir.join("launchdeck.jsonl");

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path);
    let (non_blocking_file, file_guard) = match file {
        Ok(file) => tracing_appender::non_blocking(file),
        Err(e) => {
            eprintln!("[logging] failed to open {}: {}", log_path.display(), e);
            tracing_appender::non_blocking(std::io::sink())
        }
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter.to_string()));

    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true);

    // try_init: embedders may have installed their own subscriber already.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .try_init();

    LoggingGuard {
        _file_guard: file_guard,
    }
}
