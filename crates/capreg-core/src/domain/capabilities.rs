//! Capability contracts.
//!
//! A capability is a named operation with a fixed input and output type. It is
//! defined once, at compile time, as a zero-sized marker type implementing
//! [`Capability`]. Providers implement
//! [`Provider<C>`](crate::application::ports::Provider) for exactly the
//! capabilities they can fully serve.
//!
//! # Adding a New Capability
//!
//! 1. Declare a marker type and implement [`Capability`] for it
//! 2. Declare it on the registry (`define::<NewCapability>()`)
//! 3. That's it: no existing provider, service, or registry code changes
//!
//! Printing and scanning are two capabilities, not one. A printer that cannot
//! scan simply never implements `Provider<Scanning>`, so there is no
//! "unsupported operation" stub to write.

use crate::domain::value_objects::{
    Dimensions, Document, LogEntry, PrintJob, Record, ScanRequest,
};

/// An abstract operation with a fixed signature.
///
/// Implementors are marker types; they carry no data.
pub trait Capability: Send + Sync + 'static {
    /// Unique, lowercase name used for introspection and configuration.
    const NAME: &'static str;

    type Input;
    type Output;
}

/// Compute the area of a shape from its measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AreaCalculation;

impl Capability for AreaCalculation {
    const NAME: &'static str = "area";
    type Input = Dimensions;
    type Output = f64;
}

/// Persist a keyed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Persistence;

impl Capability for Persistence {
    const NAME: &'static str = "persistence";
    type Input = Record;
    type Output = ();
}

/// Emit a log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Logging;

impl Capability for Logging {
    const NAME: &'static str = "logging";
    type Input = LogEntry;
    type Output = ();
}

/// Print a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Printing;

impl Capability for Printing {
    const NAME: &'static str = "printing";
    type Input = Document;
    type Output = PrintJob;
}

/// Scan paper into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scanning;

impl Capability for Scanning {
    const NAME: &'static str = "scanning";
    type Input = ScanRequest;
    type Output = Document;
}

/// Names of the built-in capabilities, in declaration order.
pub const BUILTIN_CAPABILITIES: &[&str] = &[
    AreaCalculation::NAME,
    Persistence::NAME,
    Logging::NAME,
    Printing::NAME,
    Scanning::NAME,
];
