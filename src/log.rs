// src/log.rs
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::LOG_ENV_VAR;

static LOG_LOCK: Mutex<Option<PathBuf>> = Mutex::new(None);
static ENV_FILE: OnceLock<Option<PathBuf>> = OnceLock::new();
static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn env_file() -> Option<PathBuf> {
    ENV_FILE
        .get_or_init(|| std::env::var_os(LOG_ENV_VAR).map(PathBuf::from))
        .clone()
}

pub(crate) fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

pub(crate) fn fmt_line(elapsed_ms: u128, level: &str, msg: &str) -> String {
    format!("[{}][{level}] {msg}\n", fmt_elapsed(elapsed_ms))
}

/// Route log lines to `path` (appending). Overrides `EDUS_REPORT_LOG`.
pub fn set_log_file(path: impl Into<PathBuf>) {
    if let Ok(mut guard) = LOG_LOCK.lock() {
        *guard = Some(path.into());
    }
}

/// Internal logging function. Without a configured file, lines are dropped.
pub fn write_log(level: &str, msg: &str) {
    let line = fmt_line(start().elapsed().as_millis(), level, msg);

    if let Ok(guard) = LOG_LOCK.lock() {
        let Some(path) = guard.clone().or_else(env_file) else { return };
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
        {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}
