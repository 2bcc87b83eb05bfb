//! In-memory record store.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use capreg_core::{
    application::ports::Provider,
    domain::{Persistence, Record},
    error::ProviderError,
};
use tracing::debug;

use super::validate_key;

/// Thread-safe in-memory record store.
///
/// Clones share storage, so a test can keep a handle after handing one to
/// the registry.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, serde_json::Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.inner.read().ok()?.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self
            .inner
            .read()
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }
}

impl Provider<Persistence> for MemoryStore {
    fn execute(&self, record: Record) -> Result<(), ProviderError> {
        let key = validate_key(&record.key)?.to_string();

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ProviderError::internal("record store lock poisoned"))?;
        inner.insert(key.clone(), record.payload);

        debug!(key = %key, "Record stored in memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn stores_and_overwrites() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.execute(Record::new("a", json!(1))).unwrap();
        store.execute(Record::new("b", json!(2))).unwrap();
        store.execute(Record::new("a", json!(3))).unwrap();

        assert_eq!(handle.len(), 2);
        assert_eq!(handle.get("a"), Some(json!(3)));
        assert_eq!(handle.keys(), ["a", "b"]);
    }

    #[test]
    fn rejects_empty_key() {
        let store = MemoryStore::new();
        assert!(store.execute(Record::new("", json!({}))).is_err());
        assert!(store.is_empty());
    }
}
