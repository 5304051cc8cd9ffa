//! Error types for capability domain validation and parsing.

use thiserror::Error;

/// Errors returned while validating a capability descriptor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescriptorError {
    /// The adapter type identifier is empty after trimming.
    #[error("adapter type identifier must not be empty")]
    EmptyTypeId,

    /// The adapter type identifier contains whitespace.
    #[error("adapter type identifier '{0}' must not contain whitespace")]
    WhitespaceInTypeId(String),

    /// A required or optional property name is empty after trimming.
    #[error("descriptor '{0}' declares an empty property name")]
    EmptyPropertyName(String),
}

/// Error returned while parsing a feature tag from configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown feature tag: {0}")]
pub struct ParseFeatureTagError(pub String);

/// Failure returned when a synthetic stand-in is asked to do real work.
///
/// Produced by mutating (and unclassifiable) methods on a synthetic
/// instance. Callers are expected to recover from it: it only means that
/// no adapter is configured for the contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("capability {contract}::{method} is unavailable: no adapter is configured")]
pub struct CapabilityUnavailable {
    contract: &'static str,
    method: String,
}

impl CapabilityUnavailable {
    /// Creates an error naming the contract and the invoked method.
    #[must_use]
    pub fn new(contract: &'static str, method: impl Into<String>) -> Self {
        Self {
            contract,
            method: method.into(),
        }
    }

    /// Returns the contract name.
    #[must_use]
    pub const fn contract(&self) -> &'static str {
        self.contract
    }

    /// Returns the invoked method name.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }
}
