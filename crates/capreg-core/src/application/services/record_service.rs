//! Record Service - persist records through the configured backend.

use crate::{
    application::CapabilityRegistry,
    domain::{Persistence, Record},
    error::RegistryResult,
};

/// Service for saving records.
#[derive(Debug, Clone)]
pub struct RecordService {
    registry: CapabilityRegistry,
    backend: String,
}

impl RecordService {
    /// `backend` is the persistence discriminator, usually from configuration.
    pub fn new(registry: CapabilityRegistry, backend: impl Into<String>) -> Self {
        Self {
            registry,
            backend: backend.into(),
        }
    }

    pub fn backend(&self) -> &str {
        &self.backend
    }

    pub fn save(&self, record: Record) -> RegistryResult<()> {
        self.registry.invoke::<Persistence>(&self.backend, record)
    }
}
