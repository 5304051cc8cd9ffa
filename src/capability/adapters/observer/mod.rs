//! Observer adapters.

mod logging;
mod memory;

pub use logging::TracingObserver;
pub use memory::RecordingObserver;
