//! Identifier type for versions.
//!
//! A `VersionName` is either the key a version is stored under in the
//! versioning block, or, for versions created without an explicit name, a
//! hex-encoded SHA-256 hash of the version's content.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::VersionRecord;
use crate::{Result, constants::NAME_HASH_SCHEME};

/// The canonical name of a version.
///
/// Serialized as a plain string so names work as JSON map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionName(String);

impl VersionName {
    /// Derives a content-addressed name for a version record.
    ///
    /// Hashing scheme `sha256-json-v1`: lowercase hex SHA-256 over the compact
    /// JSON serialization of the whole record, objects included. Record fields
    /// are written in declaration order followed by the unknown fields, and
    /// keys inside JSON objects are sorted, so equal content always yields the
    /// same name.
    pub fn from_content(record: &VersionRecord) -> Result<Self> {
        let json = serde_json::to_vec(record)?;

        let mut hasher = Sha256::new();
        hasher.update(&json);
        let hash = hasher.finalize();
        let name: VersionName = format!("{hash:x}").into();
        tracing::debug!(scheme = NAME_HASH_SCHEME, %name, "derived content-addressed name");
        Ok(name)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for VersionName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VersionName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::borrow::Borrow<str> for VersionName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VersionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::ops::Deref for VersionName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<str> for VersionName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VersionName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
