//! In-memory observer recording events for tests and diagnostics.

use crate::capability::{domain::CapabilityEvent, ports::CapabilityObserver};
use std::sync::{Arc, PoisonError, RwLock};

/// Thread-safe observer that keeps every recorded event.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<RwLock<Vec<CapabilityEvent>>>,
}

impl RecordingObserver {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every event recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<CapabilityEvent> {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the events concerning `contract`, oldest first.
    #[must_use]
    pub fn events_for(&self, contract: &str) -> Vec<CapabilityEvent> {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|event| event.contract() == contract)
            .cloned()
            .collect()
    }

    /// Discards every recorded event.
    pub fn clear(&self) {
        self.events
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl CapabilityObserver for RecordingObserver {
    fn record(&self, event: &CapabilityEvent) {
        self.events
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
