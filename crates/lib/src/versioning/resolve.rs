//! Reference resolution.
//!
//! Turns a user-supplied reference into the name of a stored version. Version
//! names shadow branch names, which in turn shadow tag names of the same spelling.

use super::{LinkKind, Versioning, VersioningError};
use crate::{
    Result,
    version::{Version, VersionName},
};

impl Versioning {
    /// Resolve `reference` to a canonical version name.
    ///
    /// Lookup order, first match wins:
    /// 1. a version name, returned unchanged
    /// 2. a branch name, returning its target
    /// 3. a tag name, returning its target
    ///
    /// A branch or tag whose target is not a stored version fails with
    /// [`VersioningError::DanglingReference`]; a reference found in no
    /// namespace fails with [`VersioningError::UnresolvedReference`].
    pub fn resolve_ref(&self, reference: &str) -> Result<VersionName> {
        self.get_version_from_ref(reference)
            .map(|version| version.name().clone())
    }

    /// Look up the version `reference` resolves to.
    ///
    /// Same lookup order and errors as [`resolve_ref`](Self::resolve_ref).
    pub fn get_version_from_ref(&self, reference: &str) -> Result<&Version> {
        if let Some(version) = self.versions.get(reference) {
            tracing::debug!(reference, "resolved reference as version name");
            return Ok(version);
        }

        let (kind, target) = if let Some(target) = self.branches.get(reference) {
            (LinkKind::Branch, target)
        } else if let Some(target) = self.tags.get(reference) {
            (LinkKind::Tag, target)
        } else {
            return Err(VersioningError::UnresolvedReference {
                reference: reference.to_string(),
            }
            .into());
        };

        let version = self.versions.get(target).ok_or_else(|| {
            VersioningError::DanglingReference {
                kind,
                name: reference.to_string(),
                target: target.clone(),
            }
        })?;

        tracing::debug!(reference, %kind, version = %target, "resolved reference");
        Ok(version)
    }
}
