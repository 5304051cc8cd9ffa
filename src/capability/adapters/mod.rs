//! Adapter implementations for capability layer ports.

pub mod observer;
pub mod synthetic;
