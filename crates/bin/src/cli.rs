//! CLI argument definitions for the vcityjson binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vcityjson::constants::DEFAULT_BRANCH;

use crate::output::OutputFormat;

/// Inspect and check out versions of a versioned CityJSON file
#[derive(Parser, Debug)]
#[command(name = "vcityjson")]
#[command(about = "vcityjson: inspect and check out versions of versioned CityJSON files")]
#[command(version)]
pub struct Cli {
    /// Versioned CityJSON file to operate on.
    /// Without it, commands run against a new, empty versioned document.
    #[arg(short, long, global = true, env = "VCITYJSON_FILE")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the history of a version, branch or tag
    Log(LogArgs),
    /// Extract one version into a plain CityJSON file
    Checkout(CheckoutArgs),
    /// List branches and the versions they point to
    Branches,
    /// List tags and the versions they point to
    Tags,
    /// Rewrite the message of a version (modifies the input file)
    Amend(AmendArgs),
    /// Check branches, tags and parent links for consistency
    Verify,
}

/// Arguments for the log command
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Version, branch or tag to start from
    pub reference: Option<String>,

    /// Reference used when none is given
    #[arg(long, default_value = DEFAULT_BRANCH, env = "VCITYJSON_DEFAULT_REF")]
    pub default_ref: String,
}

/// Arguments for the checkout command
#[derive(clap::Args, Debug)]
pub struct CheckoutArgs {
    /// Version, branch or tag to extract
    pub reference: String,

    /// Path of the plain CityJSON file to write
    pub output: PathBuf,
}

/// Arguments for the amend command
#[derive(clap::Args, Debug)]
pub struct AmendArgs {
    /// Version, branch or tag whose version to amend
    pub reference: String,

    /// The new message
    pub message: String,
}
