//! Built-in providers for capreg.
//!
//! This crate implements `capreg_core::application::ports::Provider` for the
//! built-in capabilities. All I/O lives here; the core never touches a file.
//!
//! [`catalog`] lists every provider and installs them into a registry from a
//! [`WiringPlan`].

pub mod area;
pub mod catalog;
pub mod logging;
pub mod persistence;
pub mod printing;

// Re-export commonly used adapters
pub use area::{Circle, Rectangle, Square, Triangle};
pub use catalog::{AdapterSettings, CATALOG, ProviderDef, WiringError, WiringPlan, wire};
pub use logging::{ConsoleLogger, FileLogger, MemoryLogger};
pub use persistence::{FileStore, MemoryStore};
pub use printing::{BasicPrinter, MultifunctionDevice};
