use std::io::{self, Write};

use capreg_core::{
    application::ports::Provider,
    domain::{LogEntry, LogLevel, Logging},
    error::ProviderError,
};

use super::format_line;

/// Writes to stdout; `error` entries go to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl Provider<Logging> for ConsoleLogger {
    fn execute(&self, entry: LogEntry) -> Result<(), ProviderError> {
        let line = format_line(&entry)?;

        let written = if entry.level >= LogLevel::Error {
            writeln!(io::stderr().lock(), "{line}")
        } else {
            writeln!(io::stdout().lock(), "{line}")
        };
        written.map_err(|e| ProviderError::io("Failed to write to console", e))
    }
}
