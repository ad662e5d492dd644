//! File logger for the `log` facade.
//!
//! The TUI owns the terminal in raw mode, so records go to a file instead of
//! stderr. Nothing is installed unless the binary is given a log path.

use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogInitError {
    #[error("failed to open log file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("a logger is already installed")]
    AlreadyInstalled,
}

/// Appends one line per record: seconds since start, level, target, message.
#[derive(Debug)]
pub struct FileLogger {
    level: LevelFilter,
    started: Instant,
    file: Mutex<File>,
}

impl FileLogger {
    pub fn open<P: AsRef<Path>>(path: P, level: LevelFilter) -> Result<Self, LogInitError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LogInitError::Io(path.to_path_buf(), e))?;
        Ok(Self { level, started: Instant::now(), file: Mutex::new(file) })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let secs = self.started.elapsed().as_secs_f64();
        if let Ok(mut file) = self.file.lock() {
            // a failed write has nowhere else to go
            let _ = writeln!(
                file,
                "{secs:10.3} {:<5} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

static LOGGER: OnceLock<FileLogger> = OnceLock::new();

/// Install a [`FileLogger`] writing to `path` as the global logger.
pub fn init<P: AsRef<Path>>(path: P, level: LevelFilter) -> Result<(), LogInitError> {
    if LOGGER.get().is_some() {
        return Err(LogInitError::AlreadyInstalled);
    }
    let logger = FileLogger::open(path, level)?;
    let logger = LOGGER.get_or_init(|| logger);
    log::set_logger(logger).map_err(|_| LogInitError::AlreadyInstalled)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn writes_enabled_records_only() {
        let path = std::env::temp_dir().join(format!("addiction-log-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let logger = FileLogger::open(&path, LevelFilter::Info).unwrap();

        logger.log(
            &Record::builder()
                .args(format_args!("new game dealt"))
                .level(Level::Info)
                .target("addiction::game")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("move 5C"))
                .level(Level::Debug)
                .target("addiction::game")
                .build(),
        );
        logger.flush();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("INFO  [addiction::game] new game dealt"));
        assert!(!text.contains("move 5C"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = std::env::temp_dir();
        assert!(matches!(FileLogger::open(&dir, LevelFilter::Info), Err(LogInitError::Io(..))));
    }
}
