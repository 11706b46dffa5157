use clap::{Args, Parser, Subcommand};
use openapi_om_schema::Format;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Parser)]
#[command(name = "openapi-om", version, about = "OpenAPI 3.0.1 document export")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export a document description as canonical JSON or YAML.
    Export(ExportArgs),
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Document description (.json, .yaml or .yml), `-` reads stdin.
    pub input: PathBuf,

    /// Output format; defaults to the output file extension, else json.
    #[arg(short, long, value_parser = Format::from_str)]
    pub format: Option<Format>,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Indent JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Check object schemas before exporting.
    #[arg(long, conflicts_with = "raw")]
    pub validate: bool,

    /// Canonicalize the description as an untyped mapping.
    #[arg(long)]
    pub raw: bool,

    /// With --raw, strip every trailing underscore from keys instead of only
    /// renaming in_, not_ and schema_.
    #[arg(long, requires = "raw")]
    pub strip_underscores: bool,
}
