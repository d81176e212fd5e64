use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::app_dirs::AppDirs;

pub const LOG_ENV: &str = "TYPEMASTER_LOG";

/// Sends tracing output to the state-dir log file; the terminal belongs to
/// the TUI. Returns false when no subscriber could be installed.
pub fn init() -> bool {
    match AppDirs::log_path() {
        Some(path) => init_with_path(&path),
        None => false,
    }
}

pub fn init_with_path(path: &Path) -> bool {
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok()
}
