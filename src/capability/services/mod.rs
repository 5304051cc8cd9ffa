//! Application services for adapter registration, selection, and fallback.

mod registry;
mod resolver;
mod selector;
mod synthesizer;

pub use registry::{
    AdapterRegistry, AdapterReport, ContractReport, RegistryEntry, RegistryError, RegistryReport,
    RegistryResult,
};
pub use resolver::CapabilityResolver;
pub use selector::{AdapterSelector, Selection, SelectionRequest};
pub use synthesizer::FallbackSynthesizer;
