//! Step definitions for adapter selection scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
