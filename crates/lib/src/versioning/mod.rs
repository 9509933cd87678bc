//! The version store embedded in a versioned document.
//!
//! `Versioning` owns every [`Version`] by name. Branches, tags, and parent
//! links are stored as version names pointing back into that map; they are
//! never resolved eagerly, so a dangling link only surfaces when an operation
//! actually follows it.
//!
//! The store is built once when a document is loaded and serialized back when
//! the document is written. All mutations (amending a message, moving a
//! branch, adding a version) go through methods on this type, which keeps the
//! owned graph and the saved document in agreement.

mod errors;
mod resolve;
mod traversal;

use std::collections::BTreeMap;

pub use errors::{LinkKind, VersioningError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
pub use traversal::VersionSummary;

use crate::{
    Result,
    version::{Version, VersionName, VersionRecord},
};

/// The DAG container: versions by name plus the branch and tag label maps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Versioning {
    versions: BTreeMap<VersionName, Version>,
    branches: BTreeMap<String, VersionName>,
    tags: BTreeMap<String, VersionName>,
    /// Keys of the versioning block this crate does not interpret.
    extra: Map<String, Value>,
}

/// Serialized form of the versioning block, as read from a document.
#[derive(Deserialize)]
struct SerializableVersioning {
    versions: BTreeMap<VersionName, VersionRecord>,
    #[serde(default)]
    branches: BTreeMap<String, VersionName>,
    #[serde(default)]
    tags: BTreeMap<String, VersionName>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Borrowed counterpart of `SerializableVersioning` used for writing.
#[derive(Serialize)]
struct SerializableVersioningRef<'a> {
    versions: BTreeMap<&'a VersionName, &'a VersionRecord>,
    branches: &'a BTreeMap<String, VersionName>,
    tags: &'a BTreeMap<String, VersionName>,
    #[serde(flatten)]
    extra: &'a Map<String, Value>,
}

impl Serialize for Versioning {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let serializable = SerializableVersioningRef {
            versions: self
                .versions
                .iter()
                .map(|(name, version)| (name, version.record()))
                .collect(),
            branches: &self.branches,
            tags: &self.tags,
            extra: &self.extra,
        };

        serializable.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Versioning {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let serializable = SerializableVersioning::deserialize(deserializer)?;

        let versions = serializable
            .versions
            .into_iter()
            .map(|(name, record)| (name.clone(), Version::new(name, record)))
            .collect();

        Ok(Versioning {
            versions,
            branches: serializable.branches,
            tags: serializable.tags,
            extra: serializable.extra,
        })
    }
}

impl Versioning {
    /// Creates an empty store with no versions, branches, or tags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored versions.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Look up a version by its literal name. No branch/tag resolution.
    pub fn version(&self, name: &str) -> Option<&Version> {
        self.versions.get(name)
    }

    /// All versions, ordered by name.
    pub fn versions(&self) -> impl Iterator<Item = &Version> {
        self.versions.values()
    }

    /// Branch name to target version name.
    pub fn branches(&self) -> &BTreeMap<String, VersionName> {
        &self.branches
    }

    /// Tag name to target version name.
    pub fn tags(&self) -> &BTreeMap<String, VersionName> {
        &self.tags
    }

    /// Resolve the parents of a version, first parent first.
    ///
    /// Parent links are literal version names; branch and tag names are not
    /// consulted here.
    pub fn parents(&self, version: &Version) -> Result<Vec<&Version>> {
        version
            .parent_names()
            .iter()
            .map(|parent| {
                self.versions.get(parent).ok_or_else(|| {
                    VersioningError::DanglingReference {
                        kind: LinkKind::Parent,
                        name: version.name().to_string(),
                        target: parent.clone(),
                    }
                    .into()
                })
            })
            .collect()
    }

    /// Names of every branch currently pointing at `name`, sorted.
    pub fn branches_of(&self, name: &str) -> Vec<&str> {
        labels_pointing_at(&self.branches, name)
    }

    /// Names of every tag currently pointing at `name`, sorted.
    pub fn tags_of(&self, name: &str) -> Vec<&str> {
        labels_pointing_at(&self.tags, name)
    }

    /// Rewrite the message of the version `reference` resolves to.
    ///
    /// The version keeps its name. Returns the name of the amended version.
    pub fn set_message(
        &mut self,
        reference: &str,
        message: impl Into<String>,
    ) -> Result<VersionName> {
        let name = self.resolve_ref(reference)?;
        let version = self
            .versions
            .get_mut(&name)
            .ok_or_else(|| VersioningError::UnresolvedReference {
                reference: reference.to_string(),
            })?;
        version.set_message(message.into());
        tracing::info!(version = %name, "amended version message");
        Ok(name)
    }

    /// Insert a new version.
    ///
    /// Without an explicit `name`, the version is named by the hash of its
    /// content (see [`VersionName::from_content`]). Every parent must already
    /// be stored.
    pub fn add_version(
        &mut self,
        record: VersionRecord,
        name: Option<VersionName>,
    ) -> Result<VersionName> {
        let name = match name {
            Some(name) => name,
            None => VersionName::from_content(&record)?,
        };

        if self.versions.contains_key(&name) {
            return Err(VersioningError::VersionAlreadyExists { name }.into());
        }

        if let Some(parent) = record
            .parents
            .iter()
            .flatten()
            .find(|parent| !self.versions.contains_key(*parent))
        {
            return Err(VersioningError::DanglingReference {
                kind: LinkKind::Parent,
                name: name.to_string(),
                target: parent.clone(),
            }
            .into());
        }

        tracing::info!(version = %name, "added version");
        self.versions
            .insert(name.clone(), Version::new(name.clone(), record));
        Ok(name)
    }

    /// Create or move branch `name` to the version `reference` resolves to.
    pub fn set_branch(&mut self, name: impl Into<String>, reference: &str) -> Result<VersionName> {
        let target = self.resolve_ref(reference)?;
        let name = name.into();
        tracing::info!(branch = %name, version = %target, "set branch");
        self.branches.insert(name, target.clone());
        Ok(target)
    }

    /// Delete a branch. Returns the version it pointed at.
    pub fn delete_branch(&mut self, name: &str) -> Result<VersionName> {
        self.branches.remove(name).ok_or_else(|| {
            VersioningError::BranchNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    /// Create tag `name` at the version `reference` resolves to.
    ///
    /// Tags are never moved: an existing tag of the same name is an error.
    pub fn create_tag(&mut self, name: impl Into<String>, reference: &str) -> Result<VersionName> {
        let name = name.into();
        if self.tags.contains_key(&name) {
            return Err(VersioningError::TagAlreadyExists { name }.into());
        }
        let target = self.resolve_ref(reference)?;
        tracing::info!(tag = %name, version = %target, "created tag");
        self.tags.insert(name, target.clone());
        Ok(target)
    }

    /// Delete a tag. Returns the version it pointed at.
    pub fn delete_tag(&mut self, name: &str) -> Result<VersionName> {
        self.tags.remove(name).ok_or_else(|| {
            VersioningError::TagNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }
}

fn labels_pointing_at<'a>(labels: &'a BTreeMap<String, VersionName>, name: &str) -> Vec<&'a str> {
    labels
        .iter()
        .filter(|(_, target)| target.as_str() == name)
        .map(|(label, _)| label.as_str())
        .collect()
}
