//! Verify command - reports dangling labels, dangling parents and cycles.

use vcityjson::VersionedDocument;

use crate::output::{OutputFormat, print_json};

/// Run the verify command
///
/// Fails when any problem is found, after the problems have been printed.
pub fn run(doc: &VersionedDocument, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let problems: Vec<String> = doc
        .versioning()
        .validate()
        .iter()
        .map(ToString::to_string)
        .collect();

    match format {
        OutputFormat::Human => {
            if problems.is_empty() {
                println!("ok: {} versions checked", doc.versioning().len());
            }
            for problem in &problems {
                println!("problem: {problem}");
            }
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "versions": doc.versioning().len(),
            "problems": problems,
        }))?,
    }

    match problems.len() {
        0 => Ok(()),
        1 => Err("verification found 1 problem".into()),
        n => Err(format!("verification found {n} problems").into()),
    }
}
