//!
//! Defines the history node (`Version`) and its serialized form (`VersionRecord`).
//!
//! A `Version` is an immutable snapshot of a city model in the history DAG,
//! identified by a unique `VersionName`. Only its message may be rewritten,
//! and only through the owning [`Versioning`](crate::versioning::Versioning) store.

pub mod name;

pub use name::VersionName;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The stored shape of one version inside `versioning.versions`.
///
/// Unknown keys are kept in `extra` so that a loaded document saves back
/// unchanged.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VersionRecord {
    /// Who created the version.
    ///
    /// `author`, `message` and `date` are optional on load and read through
    /// the [`Version`] accessors, which fall back to an empty string. A
    /// missing key stays missing when the document is saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Free-form description. The only field that may change after creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Creation timestamp, as written in the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Names of the parent versions, first parent first.
    ///
    /// `None` when the document omits the key, which is distinct from an
    /// explicitly empty list for round-tripping purposes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<VersionName>>,
    /// The complete object snapshot. Opaque to the versioning core.
    ///
    /// `Value::Null` when the document omits the key.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub objects: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VersionRecord {
    /// Creates a root record stamped with the current UTC time.
    pub fn new(author: impl Into<String>, message: impl Into<String>, objects: Value) -> Self {
        Self {
            author: Some(author.into()),
            message: Some(message.into()),
            date: Some(chrono::Utc::now().to_rfc3339()),
            parents: None,
            objects,
            extra: Map::new(),
        }
    }

    /// Sets the parent list, first parent first.
    pub fn with_parents(mut self, parents: Vec<VersionName>) -> Self {
        self.parents = Some(parents);
        self
    }

    /// Overrides the creation timestamp.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// A named node of the version DAG.
///
/// Parent links are stored as names; use
/// [`Versioning::parents`](crate::versioning::Versioning::parents) to follow them.
#[derive(Clone, Debug, PartialEq)]
pub struct Version {
    name: VersionName,
    record: VersionRecord,
}

impl Version {
    pub(crate) fn new(name: VersionName, record: VersionRecord) -> Self {
        Self { name, record }
    }

    /// The canonical identifier of this version.
    pub fn name(&self) -> &VersionName {
        &self.name
    }

    pub fn author(&self) -> &str {
        self.record.author.as_deref().unwrap_or_default()
    }

    pub fn message(&self) -> &str {
        self.record.message.as_deref().unwrap_or_default()
    }

    pub fn date(&self) -> &str {
        self.record.date.as_deref().unwrap_or_default()
    }

    /// True iff the stored data declares a non-empty parent list.
    pub fn has_parents(&self) -> bool {
        self.record
            .parents
            .as_ref()
            .is_some_and(|parents| !parents.is_empty())
    }

    /// Parent names in declared order. Empty for a root version.
    pub fn parent_names(&self) -> &[VersionName] {
        self.record.parents.as_deref().unwrap_or(&[])
    }

    /// The object snapshot carried by this version.
    pub fn objects(&self) -> &Value {
        &self.record.objects
    }

    /// The full stored record.
    pub fn record(&self) -> &VersionRecord {
        &self.record
    }

    pub(crate) fn set_message(&mut self, message: String) {
        self.record.message = Some(message);
    }
}
