//! Observability events emitted by the capability layer.

use super::{AdapterTypeId, FeatureTag, MethodClassification};
use std::collections::BTreeSet;

/// Adapter label used in events that involve no real adapter.
pub const NO_ADAPTER: &str = "none";

/// Structured event describing a registry, selection, or synthetic call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityEvent {
    /// An adapter was registered for a contract.
    Registered {
        /// Contract name.
        contract: &'static str,
        /// Registered adapter.
        adapter: AdapterTypeId,
        /// Descriptor priority.
        priority: i32,
        /// Whether a prior entry for the same adapter was replaced.
        replaced: bool,
    },
    /// A candidate adapter was skipped during selection.
    ValidationFailed {
        /// Contract name.
        contract: &'static str,
        /// Skipped adapter.
        adapter: AdapterTypeId,
        /// Required properties that were not supplied.
        missing_properties: BTreeSet<String>,
        /// Requested features the adapter does not declare.
        missing_features: BTreeSet<FeatureTag>,
    },
    /// No adapter survived selection and a synthetic stand-in was returned.
    SyntheticSelected {
        /// Contract name.
        contract: &'static str,
        /// Adapter identifier requested by configuration, if any.
        configured: Option<String>,
    },
    /// A method was invoked on a synthetic stand-in.
    SyntheticInvoked {
        /// Contract name.
        contract: &'static str,
        /// Invoked method.
        method: String,
        /// Classification that decided the result.
        classification: MethodClassification,
        /// Whether the call failed with `CapabilityUnavailable`.
        unavailable: bool,
    },
}

impl CapabilityEvent {
    /// Returns the contract the event concerns.
    #[must_use]
    pub const fn contract(&self) -> &'static str {
        match self {
            Self::Registered { contract, .. }
            | Self::ValidationFailed { contract, .. }
            | Self::SyntheticSelected { contract, .. }
            | Self::SyntheticInvoked { contract, .. } => *contract,
        }
    }

    /// Returns the operation or method name.
    #[must_use]
    pub fn operation(&self) -> &str {
        match self {
            Self::Registered { .. } => "register",
            Self::ValidationFailed { .. } => "validate",
            Self::SyntheticSelected { .. } => "select",
            Self::SyntheticInvoked { method, .. } => method,
        }
    }

    /// Returns the adapter identifier, or [`NO_ADAPTER`].
    #[must_use]
    pub fn adapter(&self) -> &str {
        match self {
            Self::Registered { adapter, .. } | Self::ValidationFailed { adapter, .. } => {
                adapter.as_str()
            }
            Self::SyntheticSelected { .. } | Self::SyntheticInvoked { .. } => NO_ADAPTER,
        }
    }

    /// Returns a short outcome label.
    #[must_use]
    pub const fn outcome(&self) -> &'static str {
        match self {
            Self::Registered { replaced: false, .. } => "registered",
            Self::Registered { replaced: true, .. } => "replaced",
            Self::ValidationFailed { .. } => "skipped",
            Self::SyntheticSelected { .. } => "synthetic",
            Self::SyntheticInvoked {
                unavailable: true, ..
            } => "unavailable",
            Self::SyntheticInvoked {
                unavailable: false, ..
            } => "fallback",
        }
    }
}
