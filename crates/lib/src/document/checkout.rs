//! Checkout extraction.
//!
//! Materializes one version as a plain, non-versioned CityJSON document: the
//! document-level content (metadata, transform, reference system, ...) with
//! `CityObjects` replaced by the version's object snapshot, or removed when
//! the version carries none. The versioning block is never part of the
//! output, and the source document is not modified.

use std::{io::Write, path::Path};

use serde_json::Value;

use super::{
    VersionedDocument,
    persistence::{write_json, write_json_file},
};
use crate::{Result, constants::CITY_OBJECTS};

impl VersionedDocument {
    /// Build the plain document for the version `reference` resolves to.
    pub fn checkout_value(&self, reference: &str) -> Result<Value> {
        let version = self.versioning.get_version_from_ref(reference)?;

        let mut extracted = self.content.clone();
        match version.objects() {
            // A version without objects checks out without a CityObjects key
            Value::Null => {
                extracted.remove(CITY_OBJECTS);
            }
            objects => {
                extracted.insert(CITY_OBJECTS.to_string(), objects.clone());
            }
        }

        tracing::debug!(reference, version = %version.name(), "checked out version");
        Ok(Value::Object(extracted))
    }

    /// Write the plain document for `reference` into `sink`.
    pub fn checkout_to_writer<W: Write>(&self, reference: &str, sink: W) -> Result<()> {
        let extracted = self.checkout_value(reference)?;
        write_json(&extracted, sink)
    }

    /// Write the plain document for `reference` to the file at `output`.
    ///
    /// Resolution happens before the file is touched, so an unresolved
    /// reference leaves `output` untouched.
    pub fn checkout<P: AsRef<Path>>(&self, reference: &str, output: P) -> Result<()> {
        let extracted = self.checkout_value(reference)?;
        write_json_file(&extracted, output.as_ref())
    }
}
