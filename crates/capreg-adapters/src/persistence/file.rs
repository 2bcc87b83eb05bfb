//! File-backed record store: one pretty-printed JSON file per record.

use std::{
    fs,
    path::{Path, PathBuf},
};

use capreg_core::{
    application::ports::Provider,
    domain::{Persistence, Record},
    error::{Context, ProviderError, ProviderErrorKind},
};
use tracing::debug;

use super::validate_key;

/// Writes `<dir>/<key>.json`, creating `dir` on first use.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a record with `key` is written to.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read a record back.
    pub fn load(&self, key: &str) -> Result<serde_json::Value, ProviderError> {
        let path = self.path_for(validate_key(key)?);
        let content = fs::read_to_string(&path)
            .map_err(|e| ProviderError::io(format!("Failed to read {}", path.display()), e))?;
        serde_json::from_str(&content).context(
            ProviderErrorKind::Internal,
            format!("Corrupt record {}", path.display()),
        )
    }
}

impl Provider<Persistence> for FileStore {
    fn execute(&self, record: Record) -> Result<(), ProviderError> {
        let key = validate_key(&record.key)?;

        fs::create_dir_all(&self.dir).map_err(|e| {
            ProviderError::io(format!("Failed to create {}", self.dir.display()), e)
        })?;

        let path = self.path_for(key);
        let content = serde_json::to_string_pretty(&record.payload)
            .context(ProviderErrorKind::InvalidInput, "Payload is not serializable")?;
        fs::write(&path, content)
            .map_err(|e| ProviderError::io(format!("Failed to write {}", path.display()), e))?;

        debug!(path = %path.display(), "Record written");
        Ok(())
    }
}
