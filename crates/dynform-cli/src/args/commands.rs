use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Register a user with the form service (or confirm an existing one)")]
    Login {
        #[arg(long)]
        roll_number: String,

        #[arg(long)]
        name: String,
    },

    #[command(about = "Show a form schema and report anything that will not render cleanly")]
    Schema {
        /// Fetch the form issued to this roll number
        #[arg(long, required_unless_present = "file", conflicts_with = "file")]
        roll_number: Option<String>,

        /// Read the schema from a JSON file instead of the service
        #[arg(long)]
        file: Option<PathBuf>,
    },

    #[command(about = "Fill a form interactively in the terminal")]
    Fill {
        /// Sign in as this roll number (shows the login screen when omitted)
        #[arg(long, requires = "name")]
        roll_number: Option<String>,

        #[arg(long, requires = "roll_number")]
        name: Option<String>,

        /// Fill a schema read from a JSON file, without contacting the service
        #[arg(long)]
        file: Option<PathBuf>,

        /// Write the submission JSON here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    #[command(about = "Validate a set of values against a form without the TUI")]
    Check {
        /// Schema JSON file
        #[arg(long, required_unless_present = "roll_number", conflicts_with = "roll_number")]
        file: Option<PathBuf>,

        /// Fetch the schema for this roll number instead of reading a file
        #[arg(long)]
        roll_number: Option<String>,

        /// JSON object mapping field ids to values
        #[arg(long)]
        values: PathBuf,
    },

    #[command(about = "Manage configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Write a default config.toml into the data directory")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    #[command(about = "Show the effective configuration")]
    Show,
}
