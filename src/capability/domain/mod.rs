//! Domain model for capability descriptors, validation, and classification.
//!
//! Everything here is a pure value: no locks, no I/O, no observers.

mod classification;
mod config;
mod contract;
mod descriptor;
mod error;
mod event;
mod feature;
mod settings;
mod type_id;
mod validation;

pub use classification::{ClassificationTable, FallbackOutcome, MethodClassification, classify};
pub use config::{CapabilityConfig, PortsConfig};
pub use contract::{
    ContractId, FallbackReturn, MethodSignature, ParamRole, ParamSpec, ReturnShape,
};
pub use descriptor::CapabilityDescriptor;
pub use error::{CapabilityUnavailable, DescriptorError, ParseFeatureTagError};
pub use event::{CapabilityEvent, NO_ADAPTER};
pub use feature::FeatureTag;
pub use settings::AdapterSettings;
pub use type_id::AdapterTypeId;
pub use validation::{ValidationOutcome, validate};
