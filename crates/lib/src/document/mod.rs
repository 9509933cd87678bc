//! Versioned CityJSON documents.
//!
//! A [`VersionedDocument`] is the boundary between raw JSON and the versioning
//! core. It splits a document into its city-model content (every top-level
//! key the core does not interpret) and the parsed [`Versioning`] store, and
//! joins them back together when the document is written.
//!
//! The presence of the versioning block is checked here, once, before any
//! versioning operation can run.

mod checkout;
mod errors;
mod persistence;

pub use errors::DocumentError;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

use crate::{
    Result,
    constants::{CITY_OBJECTS, CITYJSON_TYPE, CITYJSON_VERSION, VERSIONING},
    version::{VersionName, VersionRecord},
    versioning::{VersionSummary, Versioning},
};

/// A city-model document carrying a versioning block.
#[derive(Clone, Debug, PartialEq)]
pub struct VersionedDocument {
    /// Every top-level key except the versioning block.
    content: Map<String, Value>,
    versioning: Versioning,
}

/// Borrowed serializable view that puts the versioning block back in place.
#[derive(Serialize)]
struct SerializableDocument<'a> {
    #[serde(flatten)]
    content: &'a Map<String, Value>,
    versioning: &'a Versioning,
}

impl Serialize for VersionedDocument {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SerializableDocument {
            content: &self.content,
            versioning: &self.versioning,
        }
        .serialize(serializer)
    }
}

impl Default for VersionedDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionedDocument {
    /// Creates an empty versioned CityJSON document with no versions.
    pub fn new() -> Self {
        let mut content = Map::new();
        content.insert("type".to_string(), json!(CITYJSON_TYPE));
        content.insert("version".to_string(), json!(CITYJSON_VERSION));
        content.insert(CITY_OBJECTS.to_string(), json!({}));
        content.insert("vertices".to_string(), json!([]));

        Self {
            content,
            versioning: Versioning::new(),
        }
    }

    /// Build a document from parsed JSON.
    ///
    /// Fails with `MalformedInput` if the value is not a JSON object,
    /// `NotVersioned` if it has no versioning block, and `InvalidVersioning`
    /// if the block does not have the expected shape.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut content) = value else {
            return Err(DocumentError::MalformedInput { source: None }.into());
        };

        let raw = content
            .remove(VERSIONING)
            .ok_or(DocumentError::NotVersioned { key: VERSIONING })?;
        let versioning: Versioning = serde_json::from_value(raw)
            .map_err(|e| DocumentError::InvalidVersioning { source: e })?;

        tracing::debug!(
            versions = versioning.len(),
            branches = versioning.branches().len(),
            tags = versioning.tags().len(),
            "parsed versioned document"
        );

        Ok(Self {
            content,
            versioning,
        })
    }

    /// Parse a document from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| DocumentError::MalformedInput { source: Some(e) })?;
        Self::from_value(value)
    }

    /// The whole document as JSON, versioning block included.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self)
            .map_err(|e| DocumentError::SerializationFailed { source: e }.into())
    }

    /// The city-model content outside the versioning block.
    pub fn content(&self) -> &Map<String, Value> {
        &self.content
    }

    pub fn versioning(&self) -> &Versioning {
        &self.versioning
    }

    /// Mutable access to the version store. All mutations go through it.
    pub fn versioning_mut(&mut self) -> &mut Versioning {
        &mut self.versioning
    }

    /// History report for `reference`, or for the default branch when `None`.
    pub fn log(&self, reference: Option<&str>) -> Result<Vec<VersionSummary>> {
        self.versioning.log(reference)
    }

    /// Record the city objects of a plain document as a new version.
    ///
    /// With a `branch`, the new version's parent is the branch's current
    /// version (if the branch exists) and the branch is moved to the new
    /// version afterwards. The version is named by its content. A snapshot
    /// without `CityObjects` becomes a version without objects, mirroring
    /// [`checkout_value`](Self::checkout_value).
    pub fn commit_snapshot(
        &mut self,
        snapshot: &Value,
        author: &str,
        message: &str,
        branch: Option<&str>,
    ) -> Result<VersionName> {
        let Value::Object(snapshot) = snapshot else {
            return Err(DocumentError::MalformedInput { source: None }.into());
        };
        let objects = snapshot.get(CITY_OBJECTS).cloned().unwrap_or(Value::Null);

        let mut record = VersionRecord::new(author, message, objects);
        if let Some(branch) = branch {
            if self.versioning.branches().contains_key(branch) {
                let parent = self.versioning.resolve_ref(branch)?;
                record = record.with_parents(vec![parent]);
            }
        }

        let name = self.versioning.add_version(record, None)?;
        if let Some(branch) = branch {
            self.versioning.set_branch(branch, &name)?;
        }
        Ok(name)
    }
}
