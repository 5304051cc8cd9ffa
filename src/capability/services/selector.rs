//! Adapter selection with validation, priority, and synthetic fallback.
//!
//! Provides [`AdapterSelector`], which resolves a contract and a
//! configured adapter identifier to a registered adapter or, when none
//! qualifies, to a synthetic stand-in. Selection never fails.

use crate::capability::{
    domain::{
        AdapterSettings, AdapterTypeId, CapabilityConfig, CapabilityEvent, FeatureTag, validate,
    },
    ports::{CapabilityContract, CapabilityObserver},
    services::{AdapterRegistry, FallbackSynthesizer, RegistryEntry},
};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Inputs for one selection call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionRequest {
    configured: Option<String>,
    settings: AdapterSettings,
    required_features: BTreeSet<FeatureTag>,
}

impl SelectionRequest {
    /// Creates a request with no configured adapter and no settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a request from a contract's parsed configuration.
    #[must_use]
    pub fn from_config(config: &CapabilityConfig) -> Self {
        Self {
            configured: config.adapter.clone(),
            settings: config.properties.clone(),
            required_features: BTreeSet::new(),
        }
    }

    /// Sets the configured adapter type identifier.
    #[must_use]
    pub fn with_configured(mut self, type_id: impl Into<String>) -> Self {
        self.configured = Some(type_id.into());
        self
    }

    /// Sets the supplied adapter settings.
    #[must_use]
    pub fn with_settings(mut self, settings: AdapterSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the features every candidate must declare.
    #[must_use]
    pub fn with_required_features(
        mut self,
        features: impl IntoIterator<Item = FeatureTag>,
    ) -> Self {
        self.required_features = features.into_iter().collect();
        self
    }

    /// Returns the configured adapter type identifier.
    #[must_use]
    pub fn configured(&self) -> Option<&str> {
        self.configured.as_deref()
    }

    /// Returns the supplied adapter settings.
    #[must_use]
    pub const fn settings(&self) -> &AdapterSettings {
        &self.settings
    }

    /// Returns the features every candidate must declare.
    #[must_use]
    pub const fn required_features(&self) -> &BTreeSet<FeatureTag> {
        &self.required_features
    }
}

/// Outcome of a selection: a registered adapter or a synthetic stand-in.
pub enum Selection<C: ?Sized> {
    /// A registered adapter was chosen.
    Adapter(RegistryEntry<C>),
    /// No adapter qualified; the instance is synthetic.
    Synthetic(Arc<C>),
}

impl<C: ?Sized> Selection<C> {
    /// Returns the selected implementation.
    #[must_use]
    pub const fn instance(&self) -> &Arc<C> {
        match self {
            Self::Adapter(entry) => entry.instance(),
            Self::Synthetic(instance) => instance,
        }
    }

    /// Consumes the selection and returns the implementation.
    #[must_use]
    pub fn into_instance(self) -> Arc<C> {
        match self {
            Self::Adapter(entry) => entry.into_instance(),
            Self::Synthetic(instance) => instance,
        }
    }

    /// Returns whether the implementation is a synthetic stand-in.
    #[must_use]
    pub const fn is_synthetic(&self) -> bool {
        matches!(self, Self::Synthetic(_))
    }

    /// Returns the chosen registry entry, if a real adapter was selected.
    #[must_use]
    pub const fn entry(&self) -> Option<&RegistryEntry<C>> {
        match self {
            Self::Adapter(entry) => Some(entry),
            Self::Synthetic(_) => None,
        }
    }

    /// Returns the chosen adapter's type identifier, if any.
    #[must_use]
    pub fn adapter_type_id(&self) -> Option<&AdapterTypeId> {
        self.entry().map(RegistryEntry::type_id)
    }
}

impl<C: ?Sized> Clone for Selection<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Adapter(entry) => Self::Adapter(entry.clone()),
            Self::Synthetic(instance) => Self::Synthetic(Arc::clone(instance)),
        }
    }
}

impl<C: ?Sized> fmt::Debug for Selection<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adapter(entry) => f.debug_tuple("Adapter").field(entry).finish(),
            Self::Synthetic(_) => f.write_str("Synthetic"),
        }
    }
}

/// Resolves capability contracts to implementations.
///
/// Selection order:
///
/// 1. The configured adapter, if registered and valid for the settings,
///    regardless of priority.
/// 2. Otherwise the valid registered adapter with the highest priority,
///    earliest registration first on ties.
/// 3. Otherwise a synthetic instance from the [`FallbackSynthesizer`].
///
/// Candidates that fail validation are skipped and reported to the
/// observer as [`CapabilityEvent::ValidationFailed`].
#[derive(Clone)]
pub struct AdapterSelector {
    registry: Arc<AdapterRegistry>,
    synthesizer: Arc<FallbackSynthesizer>,
    observer: Arc<dyn CapabilityObserver>,
}

impl AdapterSelector {
    /// Creates a selector over a registry and a synthesizer.
    #[must_use]
    pub fn new(
        registry: Arc<AdapterRegistry>,
        synthesizer: Arc<FallbackSynthesizer>,
        observer: Arc<dyn CapabilityObserver>,
    ) -> Self {
        Self {
            registry,
            synthesizer,
            observer,
        }
    }

    /// Returns the registry the selector reads from.
    #[must_use]
    pub const fn registry(&self) -> &Arc<AdapterRegistry> {
        &self.registry
    }

    /// Returns the synthesizer used for fallbacks.
    #[must_use]
    pub const fn synthesizer(&self) -> &Arc<FallbackSynthesizer> {
        &self.synthesizer
    }

    /// Selects an implementation of contract `C`.
    #[must_use]
    pub fn select<C: CapabilityContract + ?Sized>(
        &self,
        configured: Option<&str>,
        settings: &AdapterSettings,
    ) -> Selection<C> {
        let mut request = SelectionRequest::new().with_settings(settings.clone());
        if let Some(type_id) = configured {
            request = request.with_configured(type_id);
        }
        self.select_with(&request)
    }

    /// Selects an implementation of contract `C` for a full request.
    ///
    /// The registry is read once, so the decision always reflects a single
    /// registry state.
    #[must_use]
    pub fn select_with<C: CapabilityContract + ?Sized>(
        &self,
        request: &SelectionRequest,
    ) -> Selection<C> {
        let candidates = self.registry.all::<C>();
        let configured = request
            .configured()
            .and_then(|type_id| AdapterTypeId::new(type_id).ok());
        let exact = configured
            .as_ref()
            .and_then(|type_id| candidates.iter().find(|entry| entry.type_id() == type_id));

        if let Some(entry) = exact
            && self.admits(entry, request)
        {
            return Selection::Adapter(entry.clone());
        }

        let skipped = exact.map(RegistryEntry::type_id);
        let best = candidates
            .iter()
            .filter(|entry| Some(entry.type_id()) != skipped)
            .filter(|entry| self.admits(entry, request))
            .fold(None::<&RegistryEntry<C>>, |best, candidate| match best {
                Some(current)
                    if current.descriptor().priority() >= candidate.descriptor().priority() =>
                {
                    Some(current)
                }
                _ => Some(candidate),
            });

        if let Some(entry) = best {
            return Selection::Adapter(entry.clone());
        }

        self.observer.record(&CapabilityEvent::SyntheticSelected {
            contract: C::contract_name(),
            configured: request.configured().map(str::to_owned),
        });
        Selection::Synthetic(self.synthesizer.synthesize::<C>())
    }

    fn admits<C: ?Sized>(&self, entry: &RegistryEntry<C>, request: &SelectionRequest) -> bool {
        let descriptor = entry.descriptor();
        let outcome = validate(descriptor, request.settings());
        let missing_features: BTreeSet<FeatureTag> = request
            .required_features()
            .iter()
            .copied()
            .filter(|feature| !descriptor.supports(*feature))
            .collect();

        if outcome.is_valid() && missing_features.is_empty() {
            for warning in outcome.warnings() {
                tracing::debug!(
                    contract = entry.contract().name(),
                    adapter = entry.type_id().as_str(),
                    warning = warning.as_str(),
                    "unexpected adapter configuration"
                );
            }
            return true;
        }

        self.observer.record(&CapabilityEvent::ValidationFailed {
            contract: entry.contract().name(),
            adapter: entry.type_id().clone(),
            missing_properties: outcome.missing_properties().clone(),
            missing_features,
        });
        false
    }
}

impl fmt::Debug for AdapterSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterSelector")
            .field("registry", &self.registry)
            .field("synthesizer", &self.synthesizer)
            .finish_non_exhaustive()
    }
}
