//! Print Service - print and scan on the configured device.
//!
//! Printing and scanning are separate capabilities. Asking a device to scan
//! when it only registered for printing is an `UnknownProvider` error from the
//! registry, not a special case here.

use tracing::info;

use crate::{
    application::CapabilityRegistry,
    domain::{Document, PrintJob, Printing, ScanRequest, Scanning},
    error::RegistryResult,
};

#[derive(Debug, Clone)]
pub struct PrintService {
    registry: CapabilityRegistry,
    device: String,
}

impl PrintService {
    pub fn new(registry: CapabilityRegistry, device: impl Into<String>) -> Self {
        Self {
            registry,
            device: device.into(),
        }
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn print(&self, document: Document) -> RegistryResult<PrintJob> {
        let job = self.registry.invoke::<Printing>(&self.device, document)?;
        info!(job = %job.id, pages = job.pages, device = %self.device, "Print job submitted");
        Ok(job)
    }

    pub fn scan(&self, request: ScanRequest) -> RegistryResult<Document> {
        self.registry.invoke::<Scanning>(&self.device, request)
    }
}
