use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Bridge wallet CSV exports into typed records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a wallet export file and emit normalized records as JSON Lines
    Ingest(IngestArgs),
}

#[derive(Debug, Args)]
pub struct IngestArgs {
    /// Input wallet export file (semicolon-delimited, fixed 12-column schema)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Output JSON Lines file (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// Limit number of records emitted
    #[arg(long)]
    pub limit: Option<usize>,
}
