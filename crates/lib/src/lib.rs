//!
//! vcityjson: inspect and extract versions of versioned CityJSON documents.
//!
//! ## Core Concepts
//!
//! * **Documents (`document::VersionedDocument`)**: A CityJSON document whose top-level
//!   `versioning` block records a history of city-model snapshots.
//! * **Versions (`version::Version`)**: Immutable snapshot nodes identified by a unique name.
//!   Versions created without a name are named by a hash of their content.
//! * **Versioning (`versioning::Versioning`)**: The store owning every version, together with
//!   the branch and tag labels pointing into it. Parent links between versions form a DAG.
//! * **Refs**: Any version, branch, or tag name. Refs are resolved to a version name before
//!   use; version names shadow branch names, which shadow tag names.
//! * **Checkout**: Extracting one version's objects into a standalone, non-versioned document.

pub mod constants;
pub mod document;
pub mod version;
pub mod versioning;

pub use document::VersionedDocument;
pub use version::{Version, VersionName, VersionRecord};
pub use versioning::{VersionSummary, Versioning};

/// Result type used throughout the vcityjson library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the vcityjson library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured document errors from the document module
    #[error(transparent)]
    Document(document::DocumentError),

    /// Structured versioning errors from the versioning module
    #[error(transparent)]
    Versioning(versioning::VersioningError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Document(_) => "document",
            Error::Versioning(_) => "versioning",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a reference, branch, tag, or file was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Document(doc_err) => doc_err.is_not_found(),
            Error::Versioning(versioning_err) => versioning_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates the input is not a usable versioned document.
    pub fn is_format_error(&self) -> bool {
        match self {
            Error::Document(doc_err) => doc_err.is_format_error(),
            _ => false,
        }
    }

    /// Check if this error indicates an inconsistent versioning block.
    pub fn is_integrity_error(&self) -> bool {
        match self {
            Error::Versioning(versioning_err) => versioning_err.is_integrity_error(),
            _ => false,
        }
    }

    /// Check if this error indicates a name is already taken.
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Versioning(versioning_err) => versioning_err.is_already_exists(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Document(doc_err) => doc_err.is_io_error(),
            _ => false,
        }
    }

    /// Borrow the versioning error, if this is one.
    pub fn as_versioning_error(&self) -> Option<&versioning::VersioningError> {
        match self {
            Error::Versioning(versioning_err) => Some(versioning_err),
            _ => None,
        }
    }
}
