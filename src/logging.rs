//! File-only tracing setup. Everything goes to a daily-rolled log under the
//! cache directory; stdout stays untouched because the terminal belongs to
//! the workbench.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "ledgerdesk.log";
const DEFAULT_FILTER: &str = "ledgerdesk=info";

/// Keeps the non-blocking writer alive; dropping it flushes pending lines.
pub struct LoggingGuard {
    log_dir: PathBuf,
    _worker: WorkerGuard,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Cache log dir, with the system temp dir as a fallback when the cache
/// location cannot be created.
fn resolve_log_dir() -> Option<PathBuf> {
    if let Ok(dir) = crate::kernel::services::adapters::ensure_log_dir() {
        return Some(dir);
    }
    let fallback = std::env::temp_dir().join("ledgerdesk").join("logs");
    std::fs::create_dir_all(&fallback).ok()?;
    Some(fallback)
}

/// Installs the global subscriber. Returns `None` when no writable log
/// location exists or a subscriber is already set; the app runs unlogged in
/// that case.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = resolve_log_dir()?;

    let (writer, worker) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&log_dir, LOG_FILE));

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt)
        .try_init()
        .is_err()
    {
        return None;
    }

    // Panics land in the log first, then reach the default hook once the
    // terminal guard has restored the screen.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "panic");
        default_hook(panic_info);
    }));

    tracing::info!(log_dir = %log_dir.display(), "logging ready");

    Some(LoggingGuard {
        log_dir,
        _worker: worker,
    })
}
