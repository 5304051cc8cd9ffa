//! Observability port for capability events.

use crate::capability::domain::CapabilityEvent;

/// Sink for registry, selection, and synthetic-invocation events.
///
/// Implementations must not block: events are recorded inline on the
/// calling thread, including from concurrent `select` calls.
#[cfg_attr(test, mockall::automock)]
pub trait CapabilityObserver: Send + Sync {
    /// Records one event.
    fn record(&self, event: &CapabilityEvent);
}
