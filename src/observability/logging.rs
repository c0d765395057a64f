//! Tracing subscriber setup.
//!
//! Logs go to stderr for the non-interactive commands. While the TUI owns the
//! terminal they go to a log file, or nowhere when no file was requested.

use std::fs::File;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::errors::{Error, Result};

/// Environment variable holding a tracing filter (overrides `-v`)
pub const LOG_ENV_VAR: &str = "ECOSCORE_LOG";

static TUI_ACTIVE: AtomicBool = AtomicBool::new(false);

pub fn set_tui_active(active: bool) {
    TUI_ACTIVE.store(active, Ordering::SeqCst);
}

pub fn is_tui_active() -> bool {
    TUI_ACTIVE.load(Ordering::SeqCst)
}

/// Default filter directive for a `-v` count
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Discard,
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging(verbosity: u8, target: LogTarget<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::create(path)
                .map_err(|e| Error::file_system("Failed to create log file", path, e))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };

    if let Err(e) = installed {
        // Already configured - this is fine, just note it
        tracing::debug!("Tracing subscriber already installed: {}", e);
    }
    Ok(())
}
