//! Configuration validation against a descriptor.

use super::{AdapterSettings, CapabilityDescriptor};
use serde::Serialize;
use std::collections::BTreeSet;

/// Result of checking supplied settings against a descriptor.
///
/// Produced fresh per call and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    valid: bool,
    missing_properties: BTreeSet<String>,
    warnings: BTreeSet<String>,
}

impl ValidationOutcome {
    /// Returns whether every required property was supplied.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the required properties absent from the supplied settings.
    #[must_use]
    pub const fn missing_properties(&self) -> &BTreeSet<String> {
        &self.missing_properties
    }

    /// Returns informational warnings about unexpected properties.
    #[must_use]
    pub const fn warnings(&self) -> &BTreeSet<String> {
        &self.warnings
    }
}

/// Checks `settings` against the properties `descriptor` declares.
///
/// Missing required properties invalidate the outcome. Supplied
/// properties the descriptor does not declare only produce warnings.
#[must_use]
pub fn validate(descriptor: &CapabilityDescriptor, settings: &AdapterSettings) -> ValidationOutcome {
    let missing_properties: BTreeSet<String> = descriptor
        .required_properties()
        .iter()
        .filter(|name| !settings.contains(name))
        .cloned()
        .collect();

    let warnings = settings
        .keys()
        .filter(|key| !descriptor.declares_property(key))
        .map(|key| format!("unexpected property '{key}' for adapter '{}'", descriptor.type_id()))
        .collect();

    ValidationOutcome {
        valid: missing_properties.is_empty(),
        missing_properties,
        warnings,
    }
}
