//! Adapter capability descriptor.

use super::{AdapterTypeId, DescriptorError, FeatureTag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Immutable metadata describing one adapter implementation.
///
/// The descriptor is supplied by the adapter's initialization code when it
/// registers itself. Malformed descriptors are only rejected at
/// registration time, see [`CapabilityDescriptor::checked_type_id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityDescriptor {
    type_id: String,
    description: String,
    supported_features: BTreeSet<FeatureTag>,
    required_properties: BTreeSet<String>,
    optional_properties: BTreeSet<String>,
    priority: i32,
}

impl CapabilityDescriptor {
    /// Creates a descriptor with no features, no properties, and priority 0.
    #[must_use]
    pub fn new(type_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            description: description.into(),
            supported_features: BTreeSet::new(),
            required_properties: BTreeSet::new(),
            optional_properties: BTreeSet::new(),
            priority: 0,
        }
    }

    /// Sets the supported feature tags.
    #[must_use]
    pub fn with_features(mut self, features: impl IntoIterator<Item = FeatureTag>) -> Self {
        self.supported_features = features.into_iter().collect();
        self
    }

    /// Sets the configuration properties that must be supplied.
    #[must_use]
    pub fn with_required_properties<S: Into<String>>(
        mut self,
        properties: impl IntoIterator<Item = S>,
    ) -> Self {
        self.required_properties = properties.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the configuration properties that may be supplied.
    #[must_use]
    pub fn with_optional_properties<S: Into<String>>(
        mut self,
        properties: impl IntoIterator<Item = S>,
    ) -> Self {
        self.optional_properties = properties.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the selection priority. Higher values win.
    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the raw adapter type identifier.
    #[must_use]
    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the supported feature tags.
    #[must_use]
    pub const fn supported_features(&self) -> &BTreeSet<FeatureTag> {
        &self.supported_features
    }

    /// Returns the required property names.
    #[must_use]
    pub const fn required_properties(&self) -> &BTreeSet<String> {
        &self.required_properties
    }

    /// Returns the optional property names.
    #[must_use]
    pub const fn optional_properties(&self) -> &BTreeSet<String> {
        &self.optional_properties
    }

    /// Returns the selection priority.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns whether the adapter declares the given feature.
    #[must_use]
    pub fn supports(&self, feature: FeatureTag) -> bool {
        self.supported_features.contains(&feature)
    }

    /// Returns whether `name` is declared as a required or optional property.
    #[must_use]
    pub fn declares_property(&self, name: &str) -> bool {
        self.required_properties.contains(name) || self.optional_properties.contains(name)
    }

    /// Validates the descriptor and returns its normalized type identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError`] when the type identifier is empty or
    /// contains whitespace, or when a declared property name is blank.
    pub fn checked_type_id(&self) -> Result<AdapterTypeId, DescriptorError> {
        let type_id = AdapterTypeId::new(&self.type_id)?;

        let has_blank_property = self
            .required_properties
            .iter()
            .chain(&self.optional_properties)
            .any(|name| name.trim().is_empty());

        if has_blank_property {
            return Err(DescriptorError::EmptyPropertyName(type_id.to_string()));
        }

        Ok(type_id)
    }
}
