//! History command - prints the ancestry of a version like a commit log.

use vcityjson::{VersionSummary, VersionedDocument};

use crate::cli::LogArgs;
use crate::output::{OutputFormat, print_json};

/// Run the log command
pub fn run(
    doc: &VersionedDocument,
    args: &LogArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let reference = args.reference.as_deref().unwrap_or(&args.default_ref);
    let log = doc.log(Some(reference))?;

    match format {
        OutputFormat::Human => {
            for summary in &log {
                print!("{}", render(summary));
            }
        }
        OutputFormat::Json => print_json(&log)?,
    }

    Ok(())
}

/// Render one log entry, including the labels currently pointing at it.
fn render(summary: &VersionSummary) -> String {
    let labels: Vec<String> = summary
        .branches
        .iter()
        .cloned()
        .chain(summary.tags.iter().map(|tag| format!("tag: {tag}")))
        .collect();

    let mut out = format!("version {}", summary.name);
    if !labels.is_empty() {
        out.push_str(&format!(" ({})", labels.join(", ")));
    }
    out.push('\n');
    if summary.parents.len() > 1 {
        let parents: Vec<&str> = summary.parents.iter().map(|p| p.as_str()).collect();
        out.push_str(&format!("Merge:  {}\n", parents.join(" ")));
    }
    out.push_str(&format!("Author: {}\n", summary.author));
    out.push_str(&format!("Date:   {}\n\n", summary.date));
    for line in summary.message.lines() {
        out.push_str(&format!("    {line}\n"));
    }
    out.push('\n');
    out
}
