//! Synthetic stand-in implementation of a capability contract.

use crate::capability::{
    domain::{
        CapabilityEvent, CapabilityUnavailable, ClassificationTable, ContractId, FallbackOutcome,
        FallbackReturn, MethodClassification,
    },
    ports::CapabilityObserver,
};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Generic stand-in bound to one contract type `C`.
///
/// Every method answer is derived from the contract's classification
/// table. Construction never fails; failures are deferred to individual
/// mutating calls. Each call is reported to the observer exactly once.
pub struct SyntheticInstance<C: ?Sized> {
    table: Arc<ClassificationTable>,
    observer: Arc<dyn CapabilityObserver>,
    contract: PhantomData<fn() -> Box<C>>,
}

impl<C: ?Sized> SyntheticInstance<C> {
    pub(crate) fn new(
        table: Arc<ClassificationTable>,
        observer: Arc<dyn CapabilityObserver>,
    ) -> Self {
        Self {
            table,
            observer,
            contract: PhantomData,
        }
    }

    /// Returns the identity of the contract this instance stands in for.
    #[must_use]
    pub fn contract(&self) -> ContractId {
        self.table.contract()
    }

    /// Returns the classification table driving this instance.
    #[must_use]
    pub fn table(&self) -> &ClassificationTable {
        &self.table
    }

    /// Answers a call to `method` without converting the result.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityUnavailable`] for mutating and unclassified
    /// methods.
    pub fn invoke(&self, method: &str) -> Result<FallbackOutcome, CapabilityUnavailable> {
        self.answer(method, Some)
    }

    /// Answers a call to `method` with the contract's declared result type.
    ///
    /// This is what generated contract implementations call.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityUnavailable`] for mutating and unclassified
    /// methods, and when the classified outcome does not fit `R`.
    pub fn respond<R: FallbackReturn>(&self, method: &str) -> Result<R, CapabilityUnavailable> {
        self.answer(method, R::from_outcome)
    }

    /// Answers a call to a method whose result is a plain value.
    ///
    /// Used for returns marked `#[value]`, which need no [`FallbackReturn`]
    /// impl. The call is observed like any other.
    ///
    /// # Errors
    ///
    /// Always returns [`CapabilityUnavailable`].
    pub fn refuse<R>(&self, method: &str) -> Result<R, CapabilityUnavailable> {
        self.answer(method, |_| None)
    }

    fn answer<R>(
        &self,
        method: &str,
        convert: impl FnOnce(FallbackOutcome) -> Option<R>,
    ) -> Result<R, CapabilityUnavailable> {
        let classification = self.table.classification(method);
        let value = classification.outcome().and_then(convert);
        self.observe(method, classification, value.is_none());
        value.ok_or_else(|| CapabilityUnavailable::new(self.contract().name(), method))
    }

    fn observe(&self, method: &str, classification: MethodClassification, unavailable: bool) {
        self.observer.record(&CapabilityEvent::SyntheticInvoked {
            contract: self.contract().name(),
            method: method.to_owned(),
            classification,
            unavailable,
        });
    }
}

impl<C: ?Sized> Clone for SyntheticInstance<C> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            observer: Arc::clone(&self.observer),
            contract: PhantomData,
        }
    }
}

impl<C: ?Sized> fmt::Debug for SyntheticInstance<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntheticInstance")
            .field("contract", &self.contract().name())
            .field("methods", &self.table.len())
            .finish_non_exhaustive()
    }
}
