//! Append-only log file sink.

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use capreg_core::{
    application::ports::Provider,
    domain::{LogEntry, Logging},
    error::ProviderError,
};

use super::format_line;

/// Appends `<RFC 3339 timestamp> <LEVEL> <message>` lines to a file.
#[derive(Debug)]
pub struct FileLogger {
    path: PathBuf,
    // Serializes appends so concurrent lines never interleave.
    write_lock: Mutex<()>,
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Provider<Logging> for FileLogger {
    fn execute(&self, entry: LogEntry) -> Result<(), ProviderError> {
        // Validate before touching the file.
        let line = format_line(&entry)?;
        let stamped = format!("{} {}\n", chrono::Utc::now().to_rfc3339(), line);

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| ProviderError::internal("log file lock poisoned"))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                ProviderError::io(format!("Failed to create {}", parent.display()), e)
            })?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(stamped.as_bytes()))
            .map_err(|e| ProviderError::io(format!("Failed to append to {}", self.path.display()), e))
    }
}
