//! Generic fallback synthesis for unconfigured capabilities.

use crate::capability::{
    adapters::synthetic::SyntheticInstance,
    domain::{ClassificationTable, ContractId},
    ports::{CapabilityContract, CapabilityObserver},
};
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;

/// Produces synthetic stand-ins for any capability contract.
///
/// The only state is one classification table per contract, computed on
/// first request and shared by every instance afterwards. Concurrent first
/// requests for the same contract publish a single table.
pub struct FallbackSynthesizer {
    tables: DashMap<ContractId, Arc<ClassificationTable>>,
    observer: Arc<dyn CapabilityObserver>,
}

impl FallbackSynthesizer {
    /// Creates a synthesizer whose instances report to `observer`.
    #[must_use]
    pub fn new(observer: Arc<dyn CapabilityObserver>) -> Self {
        Self {
            tables: DashMap::new(),
            observer,
        }
    }

    /// Returns a synthetic implementation of contract `C`.
    #[must_use]
    pub fn synthesize<C: CapabilityContract + ?Sized>(&self) -> Arc<C> {
        C::synthesize(self.instance::<C>())
    }

    /// Returns an untyped synthetic instance for contract `C`.
    #[must_use]
    pub fn instance<C: CapabilityContract + ?Sized>(&self) -> SyntheticInstance<C> {
        SyntheticInstance::new(self.table::<C>(), Arc::clone(&self.observer))
    }

    /// Returns the memoized classification table for contract `C`.
    #[must_use]
    pub fn table<C: CapabilityContract + ?Sized>(&self) -> Arc<ClassificationTable> {
        let contract = C::contract_id();
        if let Some(table) = self.tables.get(&contract) {
            return Arc::clone(table.value());
        }
        let table = self.tables.entry(contract).or_insert_with(|| {
            Arc::new(ClassificationTable::build(contract, &C::method_signatures()))
        });
        Arc::clone(table.value())
    }

    /// Returns the number of contracts with a memoized table.
    #[must_use]
    pub fn cached_contracts(&self) -> usize {
        self.tables.len()
    }
}

impl fmt::Debug for FallbackSynthesizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackSynthesizer")
            .field("cached_contracts", &self.tables.len())
            .finish_non_exhaustive()
    }
}
