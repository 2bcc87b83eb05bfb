use std::sync::{Arc, Mutex};

use capreg_core::{
    application::ports::Provider,
    domain::{LogEntry, Logging},
    error::ProviderError,
};

use super::format_line;

/// Captures formatted lines in memory. Clones share the buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl Provider<Logging> for MemoryLogger {
    fn execute(&self, entry: LogEntry) -> Result<(), ProviderError> {
        let line = format_line(&entry)?;
        self.lines
            .lock()
            .map_err(|_| ProviderError::internal("log buffer lock poisoned"))?
            .push(line);
        Ok(())
    }
}
