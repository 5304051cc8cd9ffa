//! Port contracts for the capability layer.
//!
//! Ports define the seams the services depend on: the contract
//! introspection every capability exposes, and the observability sink.

pub mod contract;
pub mod observer;

pub use contract::CapabilityContract;
pub use observer::CapabilityObserver;
