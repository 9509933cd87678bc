//! Branch and tag listing commands.

use std::collections::BTreeMap;

use vcityjson::{VersionName, VersionedDocument};

use crate::output::{OutputFormat, print_json, print_table};

/// Run the `branches` command
pub fn branches(
    doc: &VersionedDocument,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    list("BRANCH", doc.versioning().branches(), format)
}

/// Run the `tags` command
pub fn tags(doc: &VersionedDocument, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    list("TAG", doc.versioning().tags(), format)
}

fn list(
    header: &str,
    labels: &BTreeMap<String, VersionName>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            if labels.is_empty() {
                println!("No {}s found.", header.to_lowercase());
                return Ok(());
            }

            let rows: Vec<Vec<String>> = labels
                .iter()
                .map(|(label, target)| vec![label.clone(), target.to_string()])
                .collect();
            print_table(&[header, "VERSION"], &rows);
        }
        OutputFormat::Json => print_json(labels)?,
    }

    Ok(())
}
