//! Process-wide logger with an optional rotating file and stderr echo.
//!
//! File logs are written to `~/.config/winrescue/logs/winrescue.log`.
//! When the file exceeds the configured max size, it is rotated to
//! `winrescue.log.1` (one backup kept). The echo sink mirrors every
//! accepted line to stderr and is what `--verbose` turns on.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "winrescue.log";
const BACKUP_NAME: &str = "winrescue.log.1";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Parses a level name, defaulting to `Info` for anything unknown.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

struct FileSink {
    file: File,
    path: PathBuf,
    max_bytes: u64,
    written: u64,
}

struct Logger {
    file: Option<FileSink>,
    echo: bool,
    min_level: Level,
}

/// Initialises the global logger. Call once at startup.
///
/// With `verbose` set, every line at DEBUG and above is echoed to
/// stderr. The file sink is only opened when `config.enabled` is true.
/// Does nothing when neither sink is wanted.
pub fn init(config: &LogConfig, verbose: bool) {
    let file = if config.enabled {
        crate::config::config_dir()
            .and_then(|dir| FileSink::open(&dir.join("logs"), config.max_file_mb))
    } else {
        None
    };

    if file.is_none() && !verbose {
        return;
    }

    let min_level = if verbose {
        Level::Debug
    } else {
        Level::parse(&config.level)
    };

    let _ = LOGGER.set(Mutex::new(Logger {
        file,
        echo: verbose,
        min_level,
    }));
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    let Ok(mut logger) = mutex.lock() else {
        return;
    };
    if level < logger.min_level {
        return;
    }
    let line = format_line(&timestamp(), level, args);

    if logger.echo {
        eprint!("{line}");
    }
    if let Some(sink) = logger.file.as_mut() {
        sink.append(&line);
    }
}

fn format_line(now: &str, level: Level, args: fmt::Arguments<'_>) -> String {
    format!("{now} [{lvl}] {args}\n", lvl = level.as_str())
}

impl FileSink {
    fn open(log_dir: &Path, max_file_mb: u64) -> Option<Self> {
        fs::create_dir_all(log_dir).ok()?;
        let path = log_dir.join(LOG_FILE_NAME);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .ok()?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);

        Some(Self {
            file,
            path,
            max_bytes: max_file_mb * 1024 * 1024,
            written,
        })
    }

    fn append(&mut self, line: &str) {
        let _ = self.file.write_all(line.as_bytes());
        self.written += line.len() as u64;

        if self.max_bytes > 0 && self.written >= self.max_bytes {
            self.rotate();
        }
    }

    fn rotate(&mut self) {
        let backup = self.path.with_file_name(BACKUP_NAME);
        let _ = fs::rename(&self.path, &backup);
        if let Ok(f) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            self.file = f;
        }
        self.written = 0;
    }
}

fn timestamp() -> String {
    // UTC wall clock, seconds resolution.
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = dur.as_secs();
    let (h, m, s) = (secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}
