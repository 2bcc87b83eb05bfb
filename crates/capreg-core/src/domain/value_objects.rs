//! Domain value objects: the inputs and outputs of the built-in capabilities,
//! plus the registry's registration mode.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity (the one
//! exception is [`PrintJob`], which carries a job id). They know nothing about
//! the registry. Capability contracts that consume them live in
//! `capabilities.rs`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Discriminator, error::DomainError};
use crate::error::ProviderError;

// ── RegistrationMode ─────────────────────────────────────────────────────────

/// How the registry treats a second binding for an already-bound discriminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationMode {
    /// Reject with `DuplicateRegistration`; the first binding stays.
    #[default]
    Strict,
    /// Replace the binding and hand back the previous provider.
    Permissive,
}

impl RegistrationMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }
}

impl fmt::Display for RegistrationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistrationMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "permissive" | "replace" => Ok(Self::Permissive),
            other => Err(DomainError::UnknownMode(other.to_string())),
        }
    }
}

// ── Dimensions / Shape ───────────────────────────────────────────────────────

/// Named, finite, non-negative measurements of a shape.
///
/// Which names a provider needs is the provider's business; the value object
/// only guarantees every stored value is usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct Dimensions(BTreeMap<String, f64>);

impl Dimensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a measurement.
    ///
    /// # Panics
    /// Panics if `value` is negative or not finite (use `try_with` for fallible).
    pub fn with(self, name: impl Into<String>, value: f64) -> Self {
        match self.try_with(name, value) {
            Ok(d) => d,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible variant of [`Self::with`].
    pub fn try_with(mut self, name: impl Into<String>, value: f64) -> Result<Self, DomainError> {
        let name = name.into().trim().to_ascii_lowercase();
        if name.is_empty() {
            return Err(DomainError::InvalidDimension {
                name,
                reason: "name must not be empty".into(),
            });
        }
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::InvalidDimension {
                name,
                reason: format!("{value} is not a finite, non-negative number"),
            });
        }
        self.0.insert(name, value);
        Ok(self)
    }

    /// Parse `name=value` pairs, e.g. `["width=5", "height=10"]`.
    pub fn parse_pairs<I, S>(pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        pairs.into_iter().try_fold(Self::new(), |dims, pair| {
            let pair = pair.as_ref();
            let malformed = || DomainError::MalformedDimension {
                input: pair.to_string(),
            };
            let (name, value) = pair.split_once('=').ok_or_else(malformed)?;
            let value: f64 = value.trim().parse().map_err(|_| malformed())?;
            dims.try_with(name, value)
        })
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    /// Look up a measurement a provider cannot work without.
    pub fn require(&self, name: &str) -> Result<f64, ProviderError> {
        self.get(name)
            .ok_or_else(|| ProviderError::invalid_input(format!("missing dimension '{name}'")))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl TryFrom<BTreeMap<String, f64>> for Dimensions {
    type Error = DomainError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        map.into_iter()
            .try_fold(Self::new(), |dims, (name, value)| dims.try_with(name, value))
    }
}

impl From<Dimensions> for BTreeMap<String, f64> {
    fn from(d: Dimensions) -> Self {
        d.0
    }
}

/// A shape to measure: which area provider to use, and its measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: Discriminator,
    pub dimensions: Dimensions,
}

impl Shape {
    pub fn new(kind: Discriminator, dimensions: Dimensions) -> Self {
        Self { kind, dimensions }
    }
}

// ── Record ───────────────────────────────────────────────────────────────────

/// A keyed JSON document handed to a persistence provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub key: String,
    pub payload: serde_json::Value,
}

impl Record {
    pub fn new(key: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            key: key.into(),
            payload,
        }
    }
}

// ── LogEntry ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(DomainError::UnknownLogLevel(other.to_string())),
        }
    }
}

/// One message for a logging provider.
///
/// `message` is optional on purpose: callers bridging from loosely typed
/// sources may hand over nothing, and providers decide whether that is a fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: Some(message.into()),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Warn, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, message)
    }

    /// An entry with no message at all.
    pub fn without_message(level: LogLevel) -> Self {
        Self {
            level,
            message: None,
        }
    }

    /// The message, or an `InvalidInput` provider error when it is absent.
    pub fn require_message(&self) -> Result<&str, ProviderError> {
        self.message
            .as_deref()
            .ok_or_else(|| ProviderError::invalid_input("log message is null"))
    }
}

// ── Documents ────────────────────────────────────────────────────────────────

/// Lines that fit on one printed page.
pub const LINES_PER_PAGE: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub body: String,
}

impl Document {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Pages needed to print the body; an empty body still uses one sheet.
    pub fn page_count(&self) -> u32 {
        let lines = self.body.lines().count().max(1);
        lines.div_ceil(LINES_PER_PAGE) as u32
    }
}

/// Receipt for a submitted print job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintJob {
    pub id: Uuid,
    pub device: String,
    pub title: String,
    pub pages: u32,
}

impl PrintJob {
    pub fn new(device: impl Into<String>, document: &Document) -> Self {
        Self {
            id: Uuid::new_v4(),
            device: device.into(),
            title: document.title.clone(),
            pages: document.page_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub label: String,
    pub pages: u32,
}

impl ScanRequest {
    pub fn new(label: impl Into<String>, pages: u32) -> Self {
        Self {
            label: label.into(),
            pages,
        }
    }
}
