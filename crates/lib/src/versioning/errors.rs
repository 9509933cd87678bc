//! Versioning error types.
//!
//! Errors raised while resolving references, walking history, or mutating the
//! version store.

use std::fmt;

use thiserror::Error;

use crate::version::VersionName;

/// The kind of link that pointed at a missing version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Branch,
    Tag,
    Parent,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LinkKind::Branch => "branch",
            LinkKind::Tag => "tag",
            LinkKind::Parent => "parent of version",
        };
        f.write_str(s)
    }
}

/// Errors that can occur while working with the version graph.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VersioningError {
    /// The reference matches no version, branch, or tag name.
    #[error("Reference '{reference}' does not name a version, branch or tag")]
    UnresolvedReference {
        /// The reference as supplied
        reference: String,
    },

    /// A branch, tag, or parent link names a version that does not exist.
    #[error("{kind} '{name}' points to missing version '{target}'")]
    DanglingReference {
        /// What kind of link is broken
        kind: LinkKind,
        /// The branch/tag name, or the child version for a parent link
        name: String,
        /// The missing version name
        target: VersionName,
    },

    /// The parent links contain a cycle.
    #[error("History is corrupt: version '{version}' is its own ancestor")]
    CorruptHistory {
        /// A version that lies on the cycle
        version: VersionName,
    },

    /// A version with this name is already stored.
    #[error("Version already exists: {name}")]
    VersionAlreadyExists {
        /// The conflicting name
        name: VersionName,
    },

    /// Tags are never reassigned once created.
    #[error("Tag already exists: {name}")]
    TagAlreadyExists {
        /// The conflicting tag name
        name: String,
    },

    /// No branch with this name.
    #[error("Branch not found: {name}")]
    BranchNotFound {
        /// The branch name
        name: String,
    },

    /// No tag with this name.
    #[error("Tag not found: {name}")]
    TagNotFound {
        /// The tag name
        name: String,
    },
}

impl VersioningError {
    /// Check if this error indicates a name could not be found.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            VersioningError::UnresolvedReference { .. }
                | VersioningError::BranchNotFound { .. }
                | VersioningError::TagNotFound { .. }
        )
    }

    /// Check if this error indicates an inconsistent versioning block.
    pub fn is_integrity_error(&self) -> bool {
        matches!(
            self,
            VersioningError::DanglingReference { .. } | VersioningError::CorruptHistory { .. }
        )
    }

    /// Check if this error indicates a name is already taken.
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            VersioningError::VersionAlreadyExists { .. } | VersioningError::TagAlreadyExists { .. }
        )
    }

    /// Get the version name if this error is about a specific version.
    pub fn version_name(&self) -> Option<&VersionName> {
        match self {
            VersioningError::DanglingReference { target, .. } => Some(target),
            VersioningError::CorruptHistory { version } => Some(version),
            VersioningError::VersionAlreadyExists { name } => Some(name),
            _ => None,
        }
    }
}

impl From<VersioningError> for crate::Error {
    fn from(err: VersioningError) -> Self {
        crate::Error::Versioning(err)
    }
}
