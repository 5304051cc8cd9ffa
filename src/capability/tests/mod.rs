//! Unit tests for the capability layer.
//!
//! Shared fixtures declare a small document contract with the same shapes
//! real storage ports use.


use crate::capability::{
    adapters::observer::RecordingObserver,
    domain::{CapabilityDescriptor, CapabilityUnavailable, FallbackReturn},
    ports::CapabilityObserver,
    services::{AdapterRegistry, AdapterSelector, FallbackSynthesizer},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::sync::Arc;
use thiserror::Error;

/// Stored document record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub title: String,
}

impl FallbackReturn for Document {}

/// Errors returned by document ports.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error(transparent)]
    Unavailable(#[from] CapabilityUnavailable),
}

crate::capability_contract! {
    /// Document storage contract used across the unit tests.
    pub trait DocumentPort {
        error: StorageError;

        /// Finds a document by identifier.
        async fn get_document(&self, id: String) -> Option<Document>;

        /// Lists documents in a folder.
        async fn list_documents(&self, folder: String) -> Vec<Document>;

        /// Stores a document and its content.
        async fn create_document(&self, #[payload] document: Document, content: Vec<u8>) -> Document;

        /// Removes a document.
        async fn delete_document(&self, id: String) -> ();

        /// Returns whether a document exists.
        async fn exists_document(&self, id: String) -> bool;

        /// Returns whether a user may perform an operation on a document.
        async fn can_access_document(&self, id: String, user: String, operation: String) -> bool;

        /// Counts stored documents.
        async fn count_documents(&self) -> u64;
    }
}

crate::capability_contract! {
    /// Second contract, to check registrations stay separated per contract.
    pub trait AuditPort {
        error: StorageError;

        /// Returns audit entries for a document.
        async fn list_entries(&self, document_id: String) -> Vec<String>;
    }
}

crate::capability_contract! {
    /// Catalog contract returning std collections, scalars, and foreign values.
    pub trait CatalogPort {
        error: StorageError;

        /// Returns metadata attached to a document.
        async fn get_metadata(&self, id: String) -> HashMap<String, String>;

        /// Lists the tags of a document.
        async fn list_tags(&self, id: String) -> BTreeSet<String>;

        /// Returns recently viewed documents, newest first.
        async fn recent_documents(&self, user: String) -> VecDeque<String>;

        /// Counts pages in a document.
        async fn count_pages(&self, id: String) -> i32;

        /// Returns when a document was published.
        async fn published_at(&self, id: String) -> #[value] DateTime<Utc>;

        /// Sets the rating of a document.
        async fn update_rating(&self, id: String, score: f64) -> f64;
    }
}

/// Adapter returning canned data, tagged with its name.
#[derive(Debug, Clone)]
pub struct StubDocumentAdapter {
    pub name: &'static str,
}

impl StubDocumentAdapter {
    pub fn shared(name: &'static str) -> Arc<dyn DocumentPort> {
        Arc::new(Self { name })
    }
}

#[async_trait]
impl DocumentPort for StubDocumentAdapter {
    async fn get_document(&self, id: String) -> Result<Option<Document>, StorageError> {
        Ok(Some(Document {
            id,
            title: self.name.to_owned(),
        }))
    }

    async fn list_documents(&self, _folder: String) -> Result<Vec<Document>, StorageError> {
        Ok(Vec::new())
    }

    async fn create_document(
        &self,
        document: Document,
        _content: Vec<u8>,
    ) -> Result<Document, StorageError> {
        Ok(document)
    }

    async fn delete_document(&self, _id: String) -> Result<(), StorageError> {
        Ok(())
    }

    async fn exists_document(&self, _id: String) -> Result<bool, StorageError> {
        Ok(true)
    }

    async fn can_access_document(
        &self,
        _id: String,
        _user: String,
        _operation: String,
    ) -> Result<bool, StorageError> {
        Ok(false)
    }

    async fn count_documents(&self) -> Result<u64, StorageError> {
        Ok(1)
    }
}

/// Audit adapter with no entries.
#[derive(Debug, Clone, Copy)]
pub struct StubAuditAdapter;

#[async_trait]
impl AuditPort for StubAuditAdapter {
    async fn list_entries(&self, _document_id: String) -> Result<Vec<String>, StorageError> {
        Ok(Vec::new())
    }
}

/// Registry, selector, and the recorder they all report to.
pub struct Harness {
    pub registry: Arc<AdapterRegistry>,
    pub selector: AdapterSelector,
    pub observer: RecordingObserver,
}

impl Harness {
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

    pub fn register(&self, descriptor: CapabilityDescriptor, name: &'static str) {
        self.registry
            .register::<dyn DocumentPort>(descriptor, StubDocumentAdapter::shared(name))
            .expect("registration should succeed");
    }
}

pub fn s3_descriptor() -> CapabilityDescriptor {
    CapabilityDescriptor::new("s3", "Amazon S3 document storage")
        .with_required_properties(["bucket-name"])
        .with_optional_properties(["region"])
        .with_priority(10)
}
