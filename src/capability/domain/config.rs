//! Already-parsed capability configuration.
//!
//! Loading and parsing configuration files happens elsewhere. These types
//! only give the parsed values a typed shape, typically via
//! `serde_json::from_value`.

use super::AdapterSettings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for one capability contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapabilityConfig {
    /// Configured adapter type identifier, if any.
    pub adapter: Option<String>,
    /// Properties passed to the adapter.
    pub properties: AdapterSettings,
}

impl CapabilityConfig {
    /// Creates a configuration naming an adapter.
    #[must_use]
    pub fn for_adapter(adapter: impl Into<String>) -> Self {
        Self {
            adapter: Some(adapter.into()),
            properties: AdapterSettings::new(),
        }
    }

    /// Replaces the adapter properties.
    #[must_use]
    pub fn with_properties(mut self, properties: AdapterSettings) -> Self {
        self.properties = properties;
        self
    }
}

/// Configuration for every capability contract, keyed by contract name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortsConfig {
    contracts: BTreeMap<String, CapabilityConfig>,
}

impl PortsConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            contracts: BTreeMap::new(),
        }
    }

    /// Adds or replaces the configuration for a contract.
    #[must_use]
    pub fn with_contract(mut self, contract: impl Into<String>, config: CapabilityConfig) -> Self {
        self.contracts.insert(contract.into(), config);
        self
    }

    /// Returns the configuration for a contract, if present.
    #[must_use]
    pub fn contract(&self, contract: &str) -> Option<&CapabilityConfig> {
        self.contracts.get(contract)
    }
}
