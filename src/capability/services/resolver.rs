//! Configuration-driven facade over the adapter selector.

use crate::capability::{
    domain::PortsConfig,
    ports::CapabilityContract,
    services::{AdapterSelector, Selection, SelectionRequest},
};

/// Resolves contracts using their entry in a [`PortsConfig`].
///
/// The configuration is looked up by contract name on every call and
/// selections are never cached, so each call reflects the current
/// registry state.
#[derive(Debug, Clone)]
pub struct CapabilityResolver {
    selector: AdapterSelector,
    config: PortsConfig,
}

impl CapabilityResolver {
    /// Creates a resolver.
    #[must_use]
    pub const fn new(selector: AdapterSelector, config: PortsConfig) -> Self {
        Self { selector, config }
    }

    /// Returns the configuration the resolver reads.
    #[must_use]
    pub const fn config(&self) -> &PortsConfig {
        &self.config
    }

    /// Returns the request built for contract `C` from configuration.
    ///
    /// Contracts without configuration get an empty request, which selects
    /// the best registered adapter requiring no properties.
    #[must_use]
    pub fn request_for<C: CapabilityContract + ?Sized>(&self) -> SelectionRequest {
        self.config
            .contract(C::contract_name())
            .map_or_else(SelectionRequest::new, SelectionRequest::from_config)
    }

    /// Selects an implementation of contract `C`.
    #[must_use]
    pub fn resolve<C: CapabilityContract + ?Sized>(&self) -> Selection<C> {
        self.selector.select_with(&self.request_for::<C>())
    }
}
