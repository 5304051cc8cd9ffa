//! Capability feature tags.

use super::ParseFeatureTagError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Optional capability an adapter may declare support for.
///
/// Tags are referenced by value from adapter descriptors, so variants are
/// only ever added, never removed or renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum FeatureTag {
    /// Create, read, update and delete document records.
    DocumentCrud,
    /// Binary content storage.
    ContentStorage,
    /// Streaming reads and writes of content.
    Streaming,
    /// Document version history.
    Versioning,
    /// Metadata or full-text search.
    Search,
    /// Hierarchical folder management.
    FolderManagement,
    /// Access control entries and checks.
    Permissions,
    /// Audit trail recording and queries.
    Audit,
    /// Electronic signature envelopes.
    EsignatureEnvelopes,
    /// Validation of existing signatures.
    SignatureValidation,
    /// Text and metadata extraction.
    ContentExtraction,
    /// Optical character recognition.
    Ocr,
}

impl FeatureTag {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::DocumentCrud,
        Self::ContentStorage,
        Self::Streaming,
        Self::Versioning,
        Self::Search,
        Self::FolderManagement,
        Self::Permissions,
        Self::Audit,
        Self::EsignatureEnvelopes,
        Self::SignatureValidation,
        Self::ContentExtraction,
        Self::Ocr,
    ];

    /// Returns the canonical configuration representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DocumentCrud => "DOCUMENT_CRUD",
            Self::ContentStorage => "CONTENT_STORAGE",
            Self::Streaming => "STREAMING",
            Self::Versioning => "VERSIONING",
            Self::Search => "SEARCH",
            Self::FolderManagement => "FOLDER_MANAGEMENT",
            Self::Permissions => "PERMISSIONS",
            Self::Audit => "AUDIT",
            Self::EsignatureEnvelopes => "ESIGNATURE_ENVELOPES",
            Self::SignatureValidation => "SIGNATURE_VALIDATION",
            Self::ContentExtraction => "CONTENT_EXTRACTION",
            Self::Ocr => "OCR",
        }
    }
}

impl fmt::Display for FeatureTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for FeatureTag {
    type Error = ParseFeatureTagError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == normalized)
            .ok_or_else(|| ParseFeatureTagError(value.to_owned()))
    }
}
