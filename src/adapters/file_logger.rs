//! File-backed `log` backend.
//!
//! A thin platform logger: appends one line per record to the daemon log
//! (or stderr in foreground mode). Fire-and-forget by contract — a
//! failed write must never block or abort the control loop, so all I/O
//! errors here are swallowed.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};

use crate::error::{Error, Result};

enum Target {
    File(Mutex<File>),
    Stderr,
}

pub struct FileLogger {
    target: Target,
    level: LevelFilter,
}

impl FileLogger {
    /// Install a logger appending to `path`. Creates the file if absent.
    pub fn init_file(path: &Path, level: LevelFilter) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|_| Error::Init("failed to open log file"))?;
        Self::install(
            Self {
                target: Target::File(Mutex::new(file)),
                level,
            },
            level,
        )
    }

    /// Install a logger writing to stderr (foreground mode).
    pub fn init_stderr(level: LevelFilter) -> Result<()> {
        Self::install(
            Self {
                target: Target::Stderr,
                level,
            },
            level,
        )
    }

    fn install(logger: Self, level: LevelFilter) -> Result<()> {
        log::set_boxed_logger(Box::new(logger))
            .map_err(|_| Error::Init("logger already installed"))?;
        log::set_max_level(level);
        Ok(())
    }

    fn write_line(&self, line: &str) {
        match &self.target {
            Target::File(file) => {
                if let Ok(mut f) = file.lock() {
                    let _ = writeln!(f, "{line}");
                }
            }
            Target::Stderr => {
                let _ = writeln!(std::io::stderr(), "{line}");
            }
        }
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
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.write_line(&format!(
            "{secs} [{:<5}] {}",
            record.level(),
            record.args()
        ));
    }

    fn flush(&self) {
        if let Target::File(file) = &self.target {
            if let Ok(mut f) = file.lock() {
                let _ = f.flush();
            }
        }
    }
}
