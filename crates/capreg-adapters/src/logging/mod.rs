//! Logging providers.
//!
//! These serve the `logging` capability: messages the application asked to
//! record. They all reject an entry without a message.

mod console;
mod file;
mod memory;

pub use console::ConsoleLogger;
pub use file::FileLogger;
pub use memory::MemoryLogger;

use capreg_core::domain::LogEntry;
use capreg_core::error::ProviderError;

/// `"WARN message"`, the line format shared by every sink.
pub(crate) fn format_line(entry: &LogEntry) -> Result<String, ProviderError> {
    let message = entry.require_message()?;
    Ok(format!(
        "{:<5} {}",
        entry.level.as_str().to_ascii_uppercase(),
        message
    ))
}
