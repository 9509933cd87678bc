//! Checkout command - writes one version as a plain CityJSON file.

use vcityjson::VersionedDocument;

use crate::cli::CheckoutArgs;
use crate::output::{OutputFormat, print_json};

/// Run the checkout command
pub fn run(
    doc: &VersionedDocument,
    args: &CheckoutArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = doc.versioning().resolve_ref(&args.reference)?;
    doc.checkout(name.as_str(), &args.output)?;

    match format {
        OutputFormat::Human => {
            println!(
                "Checked out version {name} ({}) into {}",
                args.reference,
                args.output.display()
            );
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "reference": args.reference,
            "version": name,
            "output": args.output,
        }))?,
    }

    Ok(())
}
