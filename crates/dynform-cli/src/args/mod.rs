// NOTE: Command Organization Rationale
//
// Why flat subcommands?
// - The tool has one job per verb (login, schema, fill, check)
// - Only configuration has enough operations to warrant a namespace
// - Offline variants reuse the same verbs through --file

mod commands;

pub use commands::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "dynform")]
#[command(about = "Fill schema-driven multi-step forms from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $DYNFORM_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Override the form service URL from config.toml
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
