//! Port implemented by every capability contract.

use crate::capability::{
    adapters::synthetic::SyntheticInstance,
    domain::{ContractId, MethodSignature},
};
use std::sync::Arc;

/// A capability contract, implemented for the contract's trait object type.
///
/// Contracts declared with [`capability_contract!`](crate::capability_contract)
/// get this implementation generated. `Self` is the unsized `dyn Trait`,
/// so registry entries and selections hand out `Arc<dyn Trait>`.
pub trait CapabilityContract: Send + Sync + 'static {
    /// Returns the contract's name, used in events and configuration.
    fn contract_name() -> &'static str;

    /// Returns the signature of every method of the contract.
    fn method_signatures() -> Vec<MethodSignature>;

    /// Wraps a synthetic instance as an implementation of the contract.
    fn synthesize(instance: SyntheticInstance<Self>) -> Arc<Self>;

    /// Returns the contract's identity.
    #[must_use]
    fn contract_id() -> ContractId {
        ContractId::of::<Self>(Self::contract_name())
    }
}
