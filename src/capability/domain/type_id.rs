//! Validated adapter type identifier.

use super::DescriptorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized identifier naming an adapter implementation (e.g. `s3`).
///
/// Identifiers are trimmed and lowercased so configuration values match
/// registrations regardless of case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdapterTypeId(String);

impl AdapterTypeId {
    /// Creates a validated adapter type identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::EmptyTypeId`] when the value is empty after
    /// trimming, or [`DescriptorError::WhitespaceInTypeId`] when it contains
    /// interior whitespace.
    pub fn new(value: impl AsRef<str>) -> Result<Self, DescriptorError> {
        let raw = value.as_ref();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(DescriptorError::EmptyTypeId);
        }

        if normalized.chars().any(char::is_whitespace) {
            return Err(DescriptorError::WhitespaceInTypeId(raw.to_owned()));
        }

        Ok(Self(normalized))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AdapterTypeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AdapterTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
