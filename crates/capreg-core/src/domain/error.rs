// ============================================================================
// domain/error.rs - VALUE VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Domain validation error.
///
/// Raised while constructing value objects, before anything touches the
/// registry. All errors are cloneable and comparable.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid discriminator '{value}': {reason}")]
    InvalidDiscriminator { value: String, reason: &'static str },

    #[error("Unknown registration mode '{0}'")]
    UnknownMode(String),

    #[error("Unknown log level '{0}'")]
    UnknownLogLevel(String),

    #[error("Malformed dimension '{input}', expected name=value")]
    MalformedDimension { input: String },

    #[error("Invalid dimension '{name}': {reason}")]
    InvalidDimension { name: String, reason: String },

    #[error("Total area of {shapes} shape(s) is too large to represent")]
    AreaOverflow { shapes: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDiscriminator { value, reason } => vec![
                format!("'{}' cannot be used as a discriminator ({})", value, reason),
                "Use lowercase letters, digits, '-', '_', '.' or ':'".into(),
                "Examples: rectangle, file, json-v2".into(),
            ],
            Self::UnknownMode(_) => vec!["Valid modes: strict, permissive".into()],
            Self::UnknownLogLevel(_) => vec!["Valid levels: debug, info, warn, error".into()],
            Self::MalformedDimension { .. } => vec![
                "Pass dimensions as name=value pairs".into(),
                "Example: -d width=5 -d height=10".into(),
            ],
            Self::InvalidDimension { name, .. } => vec![
                format!("'{}' must be a finite, non-negative number", name),
            ],
            Self::AreaOverflow { .. } => vec![
                "Use smaller units, or sum fewer shapes at once".into(),
            ],
        }
    }
}
