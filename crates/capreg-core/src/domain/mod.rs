//! Core domain layer for capreg.
//!
//! This module contains pure values and contracts with no I/O.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: All domain objects are Clone + PartialEq
//! - **Compile-time capabilities**: Contracts are types, not strings
//!
// Public API - what the world sees
pub mod capabilities;
pub mod discriminator;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use capabilities::{
    AreaCalculation, BUILTIN_CAPABILITIES, Capability, Logging, Persistence, Printing, Scanning,
};
pub use discriminator::{Discriminator, MAX_DISCRIMINATOR_LEN};
pub use error::DomainError;
pub use value_objects::{
    Dimensions, Document, LINES_PER_PAGE, LogEntry, LogLevel, PrintJob, Record, RegistrationMode,
    ScanRequest, Shape,
};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::error::ProviderErrorKind;

    // ========================================================================
    // Registration Mode Tests
    // ========================================================================

    #[test]
    fn mode_parses_correctly() {
        assert_eq!(
            RegistrationMode::from_str("strict").unwrap(),
            RegistrationMode::Strict
        );
        assert_eq!(
            RegistrationMode::from_str("PERMISSIVE").unwrap(),
            RegistrationMode::Permissive
        );
        assert!(RegistrationMode::from_str("lenient").is_err());
    }

    #[test]
    fn mode_defaults_to_strict() {
        assert_eq!(RegistrationMode::default(), RegistrationMode::Strict);
    }

    #[test]
    fn mode_serde_lowercase() {
        let json = serde_json::to_string(&RegistrationMode::Permissive).unwrap();
        assert_eq!(json, "\"permissive\"");
    }

    // ========================================================================
    // Dimensions Tests
    // ========================================================================

    #[test]
    fn dimensions_builder() {
        let dims = Dimensions::new().with("width", 5.0).with("Height", 10.0);

        assert_eq!(dims.get("width"), Some(5.0));
        assert_eq!(dims.get("height"), Some(10.0)); // names are lowercased
        assert_eq!(dims.len(), 2);
    }

    #[test]
    fn dimensions_reject_negative_and_nan() {
        assert!(Dimensions::new().try_with("radius", -1.0).is_err());
        assert!(Dimensions::new().try_with("radius", f64::NAN).is_err());
        assert!(Dimensions::new().try_with("radius", f64::INFINITY).is_err());
        assert!(Dimensions::new().try_with("", 1.0).is_err());
    }

    #[test]
    fn dimensions_parse_pairs() {
        let dims = Dimensions::parse_pairs(["width=5", "height = 10"]).unwrap();
        assert_eq!(dims.get("width"), Some(5.0));
        assert_eq!(dims.get("height"), Some(10.0));

        assert!(matches!(
            Dimensions::parse_pairs(["width"]),
            Err(DomainError::MalformedDimension { .. })
        ));
        assert!(Dimensions::parse_pairs(["width=abc"]).is_err());
        assert!(Dimensions::parse_pairs(["width=-3"]).is_err());
    }

    #[test]
    fn dimensions_require_reports_missing_name() {
        let err = Dimensions::new().require("radius").unwrap_err();
        assert_eq!(err.kind(), ProviderErrorKind::InvalidInput);
        assert!(err.message().contains("radius"));
    }

    #[test]
    fn dimensions_deserialize_validates() {
        let ok: Dimensions = serde_json::from_str(r#"{"width":5,"height":10}"#).unwrap();
        assert_eq!(ok.get("width"), Some(5.0));

        assert!(serde_json::from_str::<Dimensions>(r#"{"width":-5}"#).is_err());
    }

    // ========================================================================
    // Log Entry Tests
    // ========================================================================

    #[test]
    fn log_level_parses() {
        assert_eq!(LogLevel::from_str("WARNING").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("loud").is_err());
        assert!(LogLevel::Error > LogLevel::Info);
    }

    #[test]
    fn log_entry_without_message_is_invalid_input() {
        let entry = LogEntry::without_message(LogLevel::Info);
        let err = entry.require_message().unwrap_err();
        assert_eq!(err.kind(), ProviderErrorKind::InvalidInput);

        assert_eq!(LogEntry::info("hi").require_message().unwrap(), "hi");
    }

    // ========================================================================
    // Document Tests
    // ========================================================================

    #[test]
    fn document_page_count() {
        assert_eq!(Document::new("t", "").page_count(), 1);
        assert_eq!(Document::new("t", "one line").page_count(), 1);

        let body = vec!["line"; LINES_PER_PAGE + 1].join("\n");
        assert_eq!(Document::new("t", body).page_count(), 2);
    }

    #[test]
    fn print_job_copies_title_and_pages() {
        let doc = Document::new("Report", "a\nb");
        let job = PrintJob::new("basic", &doc);

        assert_eq!(job.title, "Report");
        assert_eq!(job.pages, 1);
        assert_eq!(job.device, "basic");
        assert!(!job.id.is_nil());
    }
}
