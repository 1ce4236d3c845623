//! Tracing setup.
//!
//! The TUI owns stdout, so events go to a daily log file instead.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Log file for today inside `dir`, e.g. `logs/smartq_20240131.log`.
pub fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(format!(
        "smartq_{}.log",
        chrono::Local::now().format("%Y%m%d")
    ))
}

/// Install the global subscriber.
///
/// Priority: `RUST_LOG` > `verbose` (debug) > info. Falls back to a sink when
/// the log file cannot be opened.
pub fn init(dir: &Path, verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let writer: Box<dyn Write + Send> = match open_log_file(dir) {
        Ok(file) => Box::new(file),
        Err(_) => Box::new(io::sink()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(writer))
        .init();
}

fn open_log_file(dir: &Path) -> io::Result<File> {
    fs::create_dir_all(dir)?;
    File::options()
        .create(true)
        .append(true)
        .open(log_file_path(dir))
}
