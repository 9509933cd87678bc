use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod document;
mod output;

use cli::{Cli, Commands};
use document::open_document;

fn main() -> ExitCode {
    // Initialize tracing; diagnostics go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("vcityjson=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", describe(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let file = cli.file.as_deref();
    let format = cli.format;

    match &cli.command {
        Commands::Log(args) => commands::log::run(&open_document(file)?, args, format),
        Commands::Checkout(args) => commands::checkout::run(&open_document(file)?, args, format),
        Commands::Branches => commands::labels::branches(&open_document(file)?, format),
        Commands::Tags => commands::labels::tags(&open_document(file)?, format),
        Commands::Amend(args) => commands::amend::run(open_document(file)?, file, args, format),
        Commands::Verify => commands::verify::run(&open_document(file)?, format),
    }
}

/// Render an error as `error (<stage>): <message>`, followed by its causes.
fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let stage = err
        .downcast_ref::<vcityjson::Error>()
        .map(|e| e.module())
        .unwrap_or("cli");

    let mut out = format!("error ({stage}): {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    out
}
