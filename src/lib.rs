//! Switchyard: pluggable capability selection with synthetic fallbacks.
//!
//! Application code depends on capability contracts ("ports"). Adapters
//! implementing those contracts register themselves at startup, a
//! selector picks the best registered adapter for the configured
//! identifier, and when nothing qualifies a synthetic stand-in is returned
//! so callers never have to handle a missing implementation.
//!
//! # Architecture
//!
//! Switchyard follows hexagonal architecture principles:
//!
//! - **Domain**: Descriptors, validation, and method classification
//! - **Ports**: The contract introspection trait and the observer sink
//! - **Adapters**: Synthetic instances and observer implementations
//! - **Services**: Registry, selector, synthesizer, and resolver
//!
//! # Modules
//!
//! - [`capability`]: Adapter registration, selection, and fallback
//! - [`capability_contract!`]: Declares a contract usable by the selector

pub mod capability;
mod macros;

#[doc(hidden)]
pub mod __private {
    //! Re-exports used by macro expansions.
    pub use async_trait::async_trait;
}
