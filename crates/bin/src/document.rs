//! Opening the document a command operates on.

use std::path::Path;

use vcityjson::VersionedDocument;

/// Load the versioned document at `file`, or start from an empty one.
pub fn open_document(file: Option<&Path>) -> Result<VersionedDocument, Box<dyn std::error::Error>> {
    match file {
        Some(path) => {
            tracing::info!("Opening {}", path.display());
            Ok(VersionedDocument::load_from_file(path)?)
        }
        None => {
            tracing::info!("No input file given, using an empty versioned document");
            Ok(VersionedDocument::new())
        }
    }
}
