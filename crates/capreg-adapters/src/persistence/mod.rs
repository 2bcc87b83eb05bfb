//! Persistence providers.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use capreg_core::error::ProviderError;

/// Keys become file names, so they must be non-empty and free of path syntax.
pub(crate) fn validate_key(key: &str) -> Result<&str, ProviderError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(ProviderError::invalid_input("record key must not be empty"));
    }
    if key == "." || key == ".." || key.contains(['/', '\\']) {
        return Err(ProviderError::invalid_input(format!(
            "record key '{key}' must not contain path separators"
        )));
    }
    Ok(key)
}
