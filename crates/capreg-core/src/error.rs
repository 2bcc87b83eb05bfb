//! Unified error handling for capreg core.
//!
//! Two layers of failure exist and are kept apart:
//!
//! - [`ProviderError`]: raised by a provider while executing. The registry
//!   never interprets it.
//! - [`RegistryError`]: raised by the registry itself (wiring mistakes, lock
//!   failures) or wrapping a [`ProviderError`] with the capability and
//!   discriminator that was being invoked.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::DomainError;

/// Root error type for registry operations.
///
/// All variants are recoverable from the caller's point of view.
#[derive(Debug, Error, Clone)]
pub enum RegistryError {
    /// The capability was never declared on this registry.
    #[error("Unknown capability '{capability}'")]
    UnknownCapability { capability: String },

    /// The capability is declared but nothing is bound to the discriminator.
    #[error("No provider '{discriminator}' registered for capability '{capability}'")]
    UnknownProvider {
        capability: String,
        discriminator: String,
    },

    /// Strict mode rejected a second binding for the same discriminator.
    #[error("Provider '{discriminator}' is already registered for capability '{capability}'")]
    DuplicateRegistration {
        capability: String,
        discriminator: String,
    },

    /// The provider ran and failed.
    #[error("Provider '{discriminator}' for capability '{capability}' failed: {cause}")]
    ProviderFailure {
        capability: String,
        discriminator: String,
        #[source]
        cause: ProviderError,
    },

    /// Two distinct capability types tried to claim the same name.
    #[error("Capability name '{name}' is already declared by a different capability type")]
    CapabilityConflict { name: String },

    /// A value failed domain validation (e.g. malformed discriminator).
    #[error("Invalid registration: {0}")]
    Domain(#[from] DomainError),

    /// A writer panicked while holding the table lock.
    #[error("Registry lock poisoned")]
    LockPoisoned,

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl RegistryError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownCapability { capability } => vec![
                format!("Capability '{}' is not declared on this registry", capability),
                "Declare it with `define` or add it to the wiring configuration".into(),
                "Try: capreg list".into(),
            ],
            Self::UnknownProvider {
                capability,
                discriminator,
            } => vec![
                format!(
                    "Nothing is wired to '{}' for capability '{}'",
                    discriminator, capability
                ),
                format!("Try: capreg list {}", capability),
                "Check the [wiring] section of your configuration".into(),
            ],
            Self::DuplicateRegistration { discriminator, .. } => vec![
                format!("'{}' is wired twice", discriminator),
                "Remove the duplicate entry, or set registry.mode = \"permissive\"".into(),
            ],
            Self::ProviderFailure { cause, .. } => match cause.kind() {
                ProviderErrorKind::InvalidInput => vec![
                    "The provider rejected its input".into(),
                    format!("Details: {}", cause.message()),
                ],
                ProviderErrorKind::Io => vec![
                    "The provider could not reach its backing storage".into(),
                    "Check paths and permissions in the [storage] section".into(),
                ],
                _ => vec!["The provider reported a failure; see details above".into()],
            },
            Self::CapabilityConflict { name } => vec![
                format!("Two capability types are both named '{}'", name),
                "Rename one of them; capability names must be unique".into(),
            ],
            Self::Domain(e) => e.suggestions(),
            Self::LockPoisoned => vec![
                "A previous registry update panicked".into(),
                "This is a bug, please report it".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in capreg".into(),
                "Please report this issue at: https://github.com/cosecruz/capreg/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownCapability { .. } | Self::UnknownProvider { .. } => {
                ErrorCategory::NotFound
            }
            Self::DuplicateRegistration { .. } | Self::CapabilityConflict { .. } => {
                ErrorCategory::Wiring
            }
            Self::ProviderFailure { .. } => ErrorCategory::Provider,
            Self::Domain(_) => ErrorCategory::Validation,
            Self::LockPoisoned | Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` when the registry works but the provider broke.
    pub fn is_provider_failure(&self) -> bool {
        matches!(self, Self::ProviderFailure { .. })
    }

    /// `true` for wiring/configuration mistakes (nothing ran).
    pub fn is_wiring_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownCapability { .. }
                | Self::UnknownProvider { .. }
                | Self::DuplicateRegistration { .. }
                | Self::CapabilityConflict { .. }
        )
    }

    /// The provider's own error, if this is a provider failure.
    pub fn provider_cause(&self) -> Option<&ProviderError> {
        match self {
            Self::ProviderFailure { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Wiring,
    NotFound,
    Provider,
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type RegistryResult<T> = Result<T, RegistryError>;

// ── Provider errors ──────────────────────────────────────────────────────────

/// Coarse classification of a provider fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorKind {
    /// The input did not satisfy the provider's contract.
    InvalidInput,
    /// Backing storage or device I/O failed.
    Io,
    /// The provider is temporarily unable to serve.
    Unavailable,
    /// Anything else.
    Internal,
}

impl fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidInput => "invalid input",
            Self::Io => "I/O failure",
            Self::Unavailable => "unavailable",
            Self::Internal => "internal fault",
        })
    }
}

/// Error returned by [`crate::application::ports::Provider::execute`].
#[derive(Debug, Error, Clone)]
#[error("{kind}: {message}")]
pub struct ProviderError {
    kind: ProviderErrorKind,
    message: String,
    #[source]
    source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::InvalidInput, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Unavailable, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Internal, message)
    }

    /// I/O failure carrying the underlying `io::Error`.
    pub fn io(message: impl Into<String>, err: std::io::Error) -> Self {
        Self::new(ProviderErrorKind::Io, message).with_source(err)
    }

    /// Attach an underlying cause.
    pub fn with_source(mut self, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Arc::new(err));
        self
    }

    pub fn kind(&self) -> ProviderErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Extension trait for turning foreign errors into [`ProviderError`]s.
pub trait Context<T> {
    /// Wrap the error with a kind and a message, keeping it as the source.
    fn context(self, kind: ProviderErrorKind, msg: impl Into<String>) -> Result<T, ProviderError>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, kind: ProviderErrorKind, msg: impl Into<String>) -> Result<T, ProviderError> {
        self.map_err(|e| ProviderError::new(kind, format!("{}: {}", msg.into(), e)).with_source(e))
    }
}
