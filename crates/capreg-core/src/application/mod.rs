//! Application layer for capreg.
//!
//! This layer contains:
//! - **Ports**: the [`Provider`] contract implemented by adapters
//! - **Registry**: the capability → discriminator → provider table
//! - **Services**: call sites that dispatch through the registry
//!
//! The application layer never names a concrete provider. Which provider
//! runs is decided by whoever built the registry.

pub mod ports;
pub mod registry;
pub mod services;

pub use ports::{FnProvider, Provider, SharedProvider, provider_fn};
pub use registry::{CapabilityRegistry, CapabilitySummary, RegistryBuilder};
pub use services::{AreaService, LogService, PrintService, RecordService};
