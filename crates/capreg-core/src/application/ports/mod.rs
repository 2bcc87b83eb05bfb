//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `capreg-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Provider<C>`: one concrete behaviour for capability `C`
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The registry and services are called directly by the CLI)

pub mod output;

pub use output::{FnProvider, Provider, SharedProvider, provider_fn};
