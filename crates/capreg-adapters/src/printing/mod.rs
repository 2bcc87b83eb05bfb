//! Printing and scanning devices.
//!
//! [`BasicPrinter`] only implements `Provider<Printing>`. It has no scan
//! method to stub out; the registry simply has no scanning binding for it.

mod basic;
mod multifunction;

pub use basic::BasicPrinter;
pub use multifunction::MultifunctionDevice;

use capreg_core::{domain::Document, error::ProviderError};

pub(crate) fn require_title(document: &Document) -> Result<(), ProviderError> {
    if document.title.trim().is_empty() {
        return Err(ProviderError::invalid_input("document title must not be empty"));
    }
    Ok(())
}
