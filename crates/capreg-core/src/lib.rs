//! Capreg Core - capability registry in a hexagonal layout.
//!
//! This crate provides the capability contracts, the registry that maps a
//! discriminator to a provider, and the services that dispatch through it.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           capreg-cli (CLI)              │
//! │  (Composition root, reads wiring)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (AreaService, RecordService, LogService,│
//! │  PrintService)                          │
//! └──────────────────┬──────────────────────┘
//!                    │ dispatch through
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         CapabilityRegistry              │
//! │  capability → discriminator → provider  │
//! └──────────────────┬──────────────────────┘
//!                    │ Provider<C> implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    capreg-adapters (Infrastructure)     │
//! │ (rectangle, circle, file, console, ...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use capreg_core::prelude::*;
//!
//! let registry = CapabilityRegistry::builder()
//!     .provider::<AreaCalculation>(
//!         "square",
//!         provider_fn::<AreaCalculation, _>(|d: Dimensions| {
//!             let side = d.require("side")?;
//!             Ok(side * side)
//!         }),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let area = registry
//!     .invoke::<AreaCalculation>("square", Dimensions::new().with("side", 3.0))
//!     .unwrap();
//! assert_eq!(area, 9.0);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AreaService, CapabilityRegistry, LogService, PrintService, RecordService,
        RegistryBuilder,
        ports::{Provider, SharedProvider, provider_fn},
    };
    pub use crate::domain::{
        AreaCalculation, Capability, Dimensions, Discriminator, Document, LogEntry, LogLevel,
        Logging, Persistence, PrintJob, Printing, Record, RegistrationMode, ScanRequest, Scanning,
        Shape,
    };
    pub use crate::error::{ProviderError, ProviderErrorKind, RegistryError, RegistryResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
