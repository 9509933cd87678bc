//! Amend command - rewrites a version's message in the input file.

use std::path::Path;

use vcityjson::VersionedDocument;

use crate::cli::AmendArgs;
use crate::output::{OutputFormat, print_json};

/// Run the amend command
///
/// The document is saved back to `file`, so an input file is required.
pub fn run(
    mut doc: VersionedDocument,
    file: Option<&Path>,
    args: &AmendArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = file.ok_or("amend modifies the input file; pass --file or set VCITYJSON_FILE")?;

    let name = doc
        .versioning_mut()
        .set_message(&args.reference, args.message.as_str())?;
    doc.save_to_file(file)?;

    match format {
        OutputFormat::Human => println!("Amended version {name}"),
        OutputFormat::Json => print_json(&serde_json::json!({ "version": name }))?,
    }

    Ok(())
}
