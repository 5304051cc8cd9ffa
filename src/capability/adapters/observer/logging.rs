//! Observer adapter emitting structured `tracing` events.

use crate::capability::{
    domain::{CapabilityEvent, NO_ADAPTER},
    ports::CapabilityObserver,
};

/// Forwards capability events to the `tracing` dispatcher.
///
/// Registration is logged at `info`. Skipped candidates, synthetic
/// selections, and unavailable synthetic calls are logged at `warn` so
/// unconfigured capabilities in use stand out. Synthetic queries that
/// succeed are logged at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    /// Creates a tracing observer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CapabilityObserver for TracingObserver {
    fn record(&self, event: &CapabilityEvent) {
        let contract = event.contract();
        let operation = event.operation();
        let adapter = event.adapter();
        let outcome = event.outcome();

        match event {
            CapabilityEvent::Registered { priority, .. } => {
                tracing::info!(
                    contract,
                    operation,
                    adapter,
                    outcome,
                    priority = *priority,
                    "capability adapter registered"
                );
            }
            CapabilityEvent::ValidationFailed {
                missing_properties,
                missing_features,
                ..
            } => {
                tracing::warn!(
                    contract,
                    operation,
                    adapter,
                    outcome,
                    missing_properties = ?missing_properties,
                    missing_features = ?missing_features,
                    "capability adapter skipped during selection"
                );
            }
            CapabilityEvent::SyntheticSelected { configured, .. } => {
                tracing::warn!(
                    contract,
                    operation,
                    adapter,
                    outcome,
                    configured = configured.as_deref().unwrap_or(NO_ADAPTER),
                    "no capability adapter available, using synthetic instance"
                );
            }
            CapabilityEvent::SyntheticInvoked {
                classification,
                unavailable: true,
                ..
            } => {
                tracing::warn!(
                    contract,
                    operation,
                    adapter,
                    outcome,
                    classification = classification.as_str(),
                    "unconfigured capability invoked"
                );
            }
            CapabilityEvent::SyntheticInvoked { classification, .. } => {
                tracing::debug!(
                    contract,
                    operation,
                    adapter,
                    outcome,
                    classification = classification.as_str(),
                    "synthetic capability answered with fallback"
                );
            }
        }
    }
}
