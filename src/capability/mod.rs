//! Adapter registration, selection, and synthetic fallback.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! A typical process builds one [`services::AdapterRegistry`] at startup,
//! lets every adapter register itself, and hands a
//! [`services::AdapterSelector`] to the code that needs capabilities.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
