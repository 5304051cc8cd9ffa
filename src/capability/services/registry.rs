//! Process-wide catalog of registered capability adapters.
//!
//! Provides [`AdapterRegistry`], keyed by contract and adapter type
//! identifier. Registration order is preserved per contract because it
//! breaks priority ties during selection.

use crate::capability::{
    adapters::observer::TracingObserver,
    domain::{
        AdapterTypeId, CapabilityDescriptor, CapabilityEvent, ContractId, DescriptorError,
        FeatureTag,
    },
    ports::{CapabilityContract, CapabilityObserver},
};
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use serde::Serialize;
use std::any::Any;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors returned by [`AdapterRegistry::register`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The descriptor failed validation; nothing was registered.
    #[error("invalid descriptor for {contract}: {source}")]
    InvalidDescriptor {
        /// Contract the registration targeted.
        contract: &'static str,
        /// Validation failure.
        source: DescriptorError,
    },
}

/// A registered adapter instance for contract `C`.
pub struct RegistryEntry<C: ?Sized> {
    contract: ContractId,
    type_id: AdapterTypeId,
    descriptor: Arc<CapabilityDescriptor>,
    instance: Arc<C>,
    registered_at: DateTime<Utc>,
}

impl<C: ?Sized> RegistryEntry<C> {
    /// Returns the contract the entry implements.
    #[must_use]
    pub const fn contract(&self) -> ContractId {
        self.contract
    }

    /// Returns the normalized adapter type identifier.
    #[must_use]
    pub const fn type_id(&self) -> &AdapterTypeId {
        &self.type_id
    }

    /// Returns the adapter descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &CapabilityDescriptor {
        &self.descriptor
    }

    /// Returns the adapter instance.
    #[must_use]
    pub const fn instance(&self) -> &Arc<C> {
        &self.instance
    }

    /// Consumes the entry and returns the adapter instance.
    #[must_use]
    pub fn into_instance(self) -> Arc<C> {
        self.instance
    }

    /// Returns when the entry was registered.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

impl<C: ?Sized> Clone for RegistryEntry<C> {
    fn clone(&self) -> Self {
        Self {
            contract: self.contract,
            type_id: self.type_id.clone(),
            descriptor: Arc::clone(&self.descriptor),
            instance: Arc::clone(&self.instance),
            registered_at: self.registered_at,
        }
    }
}

impl<C: ?Sized> fmt::Debug for RegistryEntry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("contract", &self.contract.name())
            .field("type_id", &self.type_id)
            .field("descriptor", &self.descriptor)
            .field("registered_at", &self.registered_at)
            .finish_non_exhaustive()
    }
}

/// Serializable snapshot of the registry for introspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryReport {
    /// Contracts with at least one registered adapter, sorted by name.
    pub contracts: Vec<ContractReport>,
}

/// Registered adapters for one contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractReport {
    /// Contract name.
    pub contract: &'static str,
    /// Adapters in registration order.
    pub adapters: Vec<AdapterReport>,
}

/// Summary of one registered adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdapterReport {
    /// Normalized adapter type identifier.
    pub type_id: AdapterTypeId,
    /// Descriptor priority.
    pub priority: i32,
    /// Declared features.
    pub features: BTreeSet<FeatureTag>,
    /// Registration timestamp.
    pub registered_at: DateTime<Utc>,
}

struct StoredEntry {
    type_id: AdapterTypeId,
    descriptor: Arc<CapabilityDescriptor>,
    // Holds an `Arc<C>` for the slot's contract type.
    instance: Arc<dyn Any + Send + Sync>,
    registered_at: DateTime<Utc>,
}

impl StoredEntry {
    fn typed<C: ?Sized + 'static>(&self, contract: ContractId) -> Option<RegistryEntry<C>> {
        let instance = self.instance.downcast_ref::<Arc<C>>()?;
        Some(RegistryEntry {
            contract,
            type_id: self.type_id.clone(),
            descriptor: Arc::clone(&self.descriptor),
            instance: Arc::clone(instance),
            registered_at: self.registered_at,
        })
    }
}

struct ContractSlot {
    contract: ContractId,
    entries: Vec<StoredEntry>,
    index: HashMap<AdapterTypeId, usize>,
}

impl ContractSlot {
    fn new(contract: ContractId) -> Self {
        Self {
            contract,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Inserts or replaces in place, returning whether an entry was replaced.
    fn upsert(&mut self, entry: StoredEntry) -> bool {
        if let Some(slot) = self
            .index
            .get(&entry.type_id)
            .and_then(|&position| self.entries.get_mut(position))
        {
            *slot = entry;
            return true;
        }
        self.index.insert(entry.type_id.clone(), self.entries.len());
        self.entries.push(entry);
        false
    }
}

#[derive(Default)]
struct RegistryState {
    contracts: HashMap<ContractId, ContractSlot>,
}

/// Catalog of adapter instances registered against capability contracts.
///
/// Created once at process start and shared by handle. Writes take an
/// exclusive lock; lookups share a read lock and never fail.
pub struct AdapterRegistry {
    state: RwLock<RegistryState>,
    observer: Arc<dyn CapabilityObserver>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl AdapterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new(
        observer: Arc<dyn CapabilityObserver>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            observer,
            clock,
        }
    }

    /// Registers `instance` as an implementation of contract `C`.
    ///
    /// A prior entry with the same adapter type identifier is replaced
    /// atomically and keeps its original registration position.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidDescriptor`] when the descriptor has
    /// an empty or malformed type identifier or a blank property name.
    pub fn register<C: CapabilityContract + ?Sized>(
        &self,
        descriptor: CapabilityDescriptor,
        instance: Arc<C>,
    ) -> RegistryResult<RegistryEntry<C>> {
        let contract = C::contract_id();
        let type_id = descriptor
            .checked_type_id()
            .map_err(|source| RegistryError::InvalidDescriptor {
                contract: contract.name(),
                source,
            })?;

        let entry = RegistryEntry {
            contract,
            type_id,
            descriptor: Arc::new(descriptor),
            instance,
            registered_at: self.clock.utc(),
        };
        let stored = StoredEntry {
            type_id: entry.type_id.clone(),
            descriptor: Arc::clone(&entry.descriptor),
            instance: Arc::new(Arc::clone(&entry.instance)),
            registered_at: entry.registered_at,
        };

        let replaced = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state
                .contracts
                .entry(contract)
                .or_insert_with(|| ContractSlot::new(contract))
                .upsert(stored)
        };

        self.observer.record(&CapabilityEvent::Registered {
            contract: contract.name(),
            adapter: entry.type_id.clone(),
            priority: entry.descriptor.priority(),
            replaced,
        });
        Ok(entry)
    }

    /// Finds the entry for contract `C` registered under `type_id`.
    ///
    /// The identifier is normalized the same way descriptors are, so
    /// lookups are case-insensitive. Malformed identifiers find nothing.
    #[must_use]
    pub fn lookup_by_type<C: CapabilityContract + ?Sized>(
        &self,
        type_id: &str,
    ) -> Option<RegistryEntry<C>> {
        let key = AdapterTypeId::new(type_id).ok()?;
        let contract = C::contract_id();
        let state = self.read();
        let slot = state.contracts.get(&contract)?;
        slot.index
            .get(&key)
            .and_then(|&position| slot.entries.get(position))
            .and_then(|entry| entry.typed(contract))
    }

    /// Returns the entries for contract `C` declaring `feature`, in
    /// registration order.
    #[must_use]
    pub fn lookup_by_feature<C: CapabilityContract + ?Sized>(
        &self,
        feature: FeatureTag,
    ) -> Vec<RegistryEntry<C>> {
        self.collect::<C>(|entry| entry.descriptor.supports(feature))
    }

    /// Returns every entry for contract `C`, in registration order.
    #[must_use]
    pub fn all<C: CapabilityContract + ?Sized>(&self) -> Vec<RegistryEntry<C>> {
        self.collect::<C>(|_| true)
    }

    /// Returns every contract with at least one registered adapter, sorted
    /// by name.
    #[must_use]
    pub fn contracts(&self) -> Vec<ContractId> {
        let mut contracts: Vec<ContractId> = self.read().contracts.keys().copied().collect();
        contracts.sort_by_key(|contract| contract.name());
        contracts
    }

    /// Returns a serializable snapshot of every registered adapter.
    #[must_use]
    pub fn report(&self) -> RegistryReport {
        let state = self.read();
        let mut contracts: Vec<ContractReport> = state
            .contracts
            .values()
            .map(|slot| ContractReport {
                contract: slot.contract.name(),
                adapters: slot
                    .entries
                    .iter()
                    .map(|entry| AdapterReport {
                        type_id: entry.type_id.clone(),
                        priority: entry.descriptor.priority(),
                        features: entry.descriptor.supported_features().clone(),
                        registered_at: entry.registered_at,
                    })
                    .collect(),
            })
            .collect();
        contracts.sort_by_key(|report| report.contract);
        RegistryReport { contracts }
    }

    fn collect<C: CapabilityContract + ?Sized>(
        &self,
        keep: impl Fn(&StoredEntry) -> bool,
    ) -> Vec<RegistryEntry<C>> {
        let contract = C::contract_id();
        let state = self.read();
        state.contracts.get(&contract).map_or_else(Vec::new, |slot| {
            slot.entries
                .iter()
                .filter(|entry| keep(entry))
                .filter_map(|entry| entry.typed(contract))
                .collect()
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new(Arc::new(TracingObserver::new()), Arc::new(DefaultClock))
    }
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("AdapterRegistry")
            .field("contracts", &state.contracts.len())
            .finish_non_exhaustive()
    }
}
