//! File I/O for versioned documents.
//!
//! Documents are read and written as JSON files. Writes are pretty-printed.

use std::{io::Write, path::Path};

use serde::Serialize;

use super::{DocumentError, VersionedDocument};
use crate::{Error, Result};

impl VersionedDocument {
    /// Loads a versioned document from a JSON file.
    ///
    /// # Errors
    /// `FileIo` if the file cannot be read, `MalformedInput` if it is not
    /// JSON, `NotVersioned` if it has no versioning block.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| -> Error { DocumentError::FileIo { source: e }.into() })?;
        tracing::debug!(path = %path.display(), "read document");
        Self::from_json_str(&json)
    }

    /// Saves the whole document, versioning block included, to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_json_file(self, path.as_ref())
    }
}

/// Serializes `value` as pretty JSON into `writer`.
pub(crate) fn write_json<T: Serialize, W: Write>(value: &T, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(|e| -> Error { DocumentError::SerializationFailed { source: e }.into() })?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|e| DocumentError::FileIo { source: e }.into())
}

/// Serializes `value` as pretty JSON into the file at `path`, replacing it.
pub(crate) fn write_json_file<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| -> Error { DocumentError::FileIo { source: e }.into() })?;
    write_json(value, std::io::BufWriter::new(file))?;
    tracing::info!(path = %path.display(), "wrote document");
    Ok(())
}
