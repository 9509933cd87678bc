//! Document boundary error types.
//!
//! These errors are raised before the versioning core runs: reading the file,
//! parsing it, and checking that it carries a versioning block at all.

use thiserror::Error;

/// Errors that can occur while loading, saving, or extracting documents.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DocumentError {
    /// File I/O error.
    #[error("File I/O error")]
    FileIo {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The input is not a JSON object.
    #[error("Input is not a valid JSON document")]
    MalformedInput {
        /// The underlying parse error, absent when the JSON parsed but is not an object
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The document has no versioning block.
    #[error("Document is not versioned: no '{key}' key")]
    NotVersioned {
        /// The key that was expected
        key: &'static str,
    },

    /// The versioning block exists but does not have the expected shape.
    #[error("Invalid versioning block")]
    InvalidVersioning {
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// Serialization failed.
    #[error("Serialization failed")]
    SerializationFailed {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },
}

impl DocumentError {
    /// Check if this error is related to I/O operations.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            DocumentError::FileIo { .. } | DocumentError::SerializationFailed { .. }
        )
    }

    /// Check if this error means the input could not be used as a versioned document.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            DocumentError::MalformedInput { .. }
                | DocumentError::NotVersioned { .. }
                | DocumentError::InvalidVersioning { .. }
        )
    }

    /// Check if the file was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DocumentError::FileIo { source } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

impl From<DocumentError> for crate::Error {
    fn from(err: DocumentError) -> Self {
        crate::Error::Document(err)
    }
}
