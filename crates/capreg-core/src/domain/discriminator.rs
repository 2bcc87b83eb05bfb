use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Longest accepted discriminator, in bytes.
pub const MAX_DISCRIMINATOR_LEN: usize = 64;

/// Key that selects one provider within a capability.
///
/// Invariant: trimmed, ASCII lowercase, non-empty, at most
/// [`MAX_DISCRIMINATOR_LEN`] bytes, characters drawn from `[a-z0-9_.:-]`.
/// `"Rectangle"` and `" rectangle "` therefore name the same binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Discriminator(String);

impl Discriminator {
    /// Create a discriminator.
    ///
    /// # Panics
    /// Panics if the value is invalid (use `try_new` for fallible).
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        match Self::try_new(value.as_str()) {
            Ok(d) => d,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible constructor; normalises before validating.
    pub fn try_new(value: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = value.as_ref();
        let normalized = raw.trim().to_ascii_lowercase();

        let reject = |reason| DomainError::InvalidDiscriminator {
            value: raw.to_string(),
            reason,
        };

        if normalized.is_empty() {
            return Err(reject("must not be empty"));
        }
        if normalized.len() > MAX_DISCRIMINATOR_LEN {
            return Err(reject("longer than 64 characters"));
        }
        if !normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "_.:-".contains(c))
        {
            return Err(reject("contains unsupported characters"));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Discriminator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Discriminator {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for Discriminator {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl TryFrom<&str> for Discriminator {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Discriminator> for String {
    fn from(d: Discriminator) -> Self {
        d.0
    }
}
