//! Print + scan device. One instance is registered under both capabilities.

use std::sync::Mutex;

use capreg_core::{
    application::ports::Provider,
    domain::{Document, PrintJob, Printing, ScanRequest, Scanning},
    error::ProviderError,
};
use tracing::debug;

use super::require_title;

/// Upper bound on pages per scan.
pub const MAX_SCAN_PAGES: u32 = 500;

#[derive(Debug)]
pub struct MultifunctionDevice {
    name: String,
    history: Mutex<Vec<PrintJob>>,
}

impl MultifunctionDevice {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            history: Mutex::new(Vec::new()),
        }
    }

    /// Jobs printed so far, oldest first.
    pub fn history(&self) -> Vec<PrintJob> {
        self.history.lock().map(|h| h.clone()).unwrap_or_default()
    }
}

impl Default for MultifunctionDevice {
    fn default() -> Self {
        Self::new("multifunction")
    }
}

impl Provider<Printing> for MultifunctionDevice {
    fn execute(&self, document: Document) -> Result<PrintJob, ProviderError> {
        require_title(&document)?;
        let job = PrintJob::new(&self.name, &document);

        self.history
            .lock()
            .map_err(|_| ProviderError::internal("print history lock poisoned"))?
            .push(job.clone());

        debug!(device = %self.name, pages = job.pages, "Document printed");
        Ok(job)
    }
}

impl Provider<Scanning> for MultifunctionDevice {
    fn execute(&self, request: ScanRequest) -> Result<Document, ProviderError> {
        if request.pages == 0 || request.pages > MAX_SCAN_PAGES {
            return Err(ProviderError::invalid_input(format!(
                "scan must be 1..={MAX_SCAN_PAGES} pages, got {}",
                request.pages
            )));
        }

        let body = (1..=request.pages)
            .map(|page| format!("[{} page {page}/{}]", request.label, request.pages))
            .collect::<Vec<_>>()
            .join("\n");

        debug!(device = %self.name, pages = request.pages, "Pages scanned");
        Ok(Document::new(request.label, body))
    }
}
