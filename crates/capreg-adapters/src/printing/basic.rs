use capreg_core::{
    application::ports::Provider,
    domain::{Document, PrintJob, Printing},
    error::ProviderError,
};
use tracing::debug;

use super::require_title;

/// A print-only device.
#[derive(Debug, Clone)]
pub struct BasicPrinter {
    name: String,
}

impl BasicPrinter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for BasicPrinter {
    fn default() -> Self {
        Self::new("basic")
    }
}

impl Provider<Printing> for BasicPrinter {
    fn execute(&self, document: Document) -> Result<PrintJob, ProviderError> {
        require_title(&document)?;
        let job = PrintJob::new(&self.name, &document);
        debug!(device = %self.name, pages = job.pages, "Document printed");
        Ok(job)
    }
}
