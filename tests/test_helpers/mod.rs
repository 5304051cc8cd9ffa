//! Shared contract, adapter, and wiring for integration tests.

use async_trait::async_trait;
use mockable::DefaultClock;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use switchyard::capability::{
    adapters::observer::RecordingObserver,
    domain::{CapabilityDescriptor, CapabilityUnavailable, FallbackReturn, FeatureTag},
    ports::CapabilityObserver,
    services::{AdapterRegistry, AdapterSelector, FallbackSynthesizer},
};
use thiserror::Error;

/// Stored document record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Document identifier.
    pub id: String,
    /// Containing folder.
    pub folder: String,
    /// Display title.
    pub title: String,
}

impl Document {
    /// Creates a document.
    pub fn new(id: &str, folder: &str, title: &str) -> Self {
        Self {
            id: id.to_owned(),
            folder: folder.to_owned(),
            title: title.to_owned(),
        }
    }
}

impl FallbackReturn for Document {}

/// Errors returned by the document port.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// No adapter is configured for the port.
    #[error(transparent)]
    Unavailable(#[from] CapabilityUnavailable),

    /// A document with the same identifier already exists.
    #[error("duplicate document: {0}")]
    Duplicate(String),
}

switchyard::capability_contract! {
    /// Document storage port.
    pub trait DocumentPort {
        error: DocumentError;

        /// Fetches a document by identifier.
        async fn get_document(&self, id: &str) -> Option<Document>;

        /// Lists the documents in a folder.
        async fn list_documents_by_folder(&self, folder: &str) -> Vec<Document>;

        /// Stores a new document with its content.
        async fn create_document(&self, #[payload] document: Document, content: Vec<u8>) -> Document;

        /// Returns whether a document exists.
        async fn exists_document(&self, id: &str) -> bool;

        /// Returns whether `user` may perform `operation` on a document.
        async fn can_access_document(&self, id: &str, user: &str, operation: &str) -> bool;
    }
}

/// Document adapter keeping records in memory.
#[derive(Debug, Default)]
pub struct InMemoryDocumentAdapter {
    documents: RwLock<HashMap<String, Document>>,
}

impl InMemoryDocumentAdapter {
    /// Creates an empty adapter behind the port type.
    pub fn shared() -> Arc<dyn DocumentPort> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl DocumentPort for InMemoryDocumentAdapter {
    async fn get_document(&self, id: &str) -> Result<Option<Document>, DocumentError> {
        let documents = self.documents.read().unwrap_or_else(PoisonError::into_inner);
        Ok(documents.get(id).cloned())
    }

    async fn list_documents_by_folder(&self, folder: &str) -> Result<Vec<Document>, DocumentError> {
        let documents = self.documents.read().unwrap_or_else(PoisonError::into_inner);
        Ok(documents
            .values()
            .filter(|document| document.folder == folder)
            .cloned()
            .collect())
    }

    async fn create_document(
        &self,
        document: Document,
        _content: Vec<u8>,
    ) -> Result<Document, DocumentError> {
        let mut documents = self.documents.write().unwrap_or_else(PoisonError::into_inner);
        if documents.contains_key(&document.id) {
            return Err(DocumentError::Duplicate(document.id));
        }
        documents.insert(document.id.clone(), document.clone());
        Ok(document)
    }

    async fn exists_document(&self, id: &str) -> Result<bool, DocumentError> {
        let documents = self.documents.read().unwrap_or_else(PoisonError::into_inner);
        Ok(documents.contains_key(id))
    }

    async fn can_access_document(
        &self,
        _id: &str,
        _user: &str,
        operation: &str,
    ) -> Result<bool, DocumentError> {
        Ok(operation == "READ")
    }
}

/// Registry and selector wired to one recording observer.
pub struct Stack {
    /// Adapter registry.
    pub registry: Arc<AdapterRegistry>,
    /// Selector over the registry.
    pub selector: AdapterSelector,
    /// Recorder receiving every event.
    pub observer: RecordingObserver,
}

impl Stack {
    /// Builds an empty stack.
    pub fn new() -> Self {
        let observer = RecordingObserver::new();
        let shared: Arc<dyn CapabilityObserver> = Arc::new(observer.clone());
        let registry = Arc::new(AdapterRegistry::new(
            Arc::clone(&shared),
            Arc::new(DefaultClock),
        ));
        let synthesizer = Arc::new(FallbackSynthesizer::new(Arc::clone(&shared)));
        let selector = AdapterSelector::new(Arc::clone(&registry), synthesizer, shared);
        Self {
            registry,
            selector,
            observer,
        }
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

/// Descriptor for an in-memory document adapter.
pub fn document_descriptor(
    type_id: &str,
    priority: i32,
    required: &[&str],
) -> CapabilityDescriptor {
    CapabilityDescriptor::new(type_id, format!("{type_id} document storage"))
        .with_features([FeatureTag::DocumentCrud, FeatureTag::ContentStorage])
        .with_required_properties(required.iter().copied())
        .with_priority(priority)
}
