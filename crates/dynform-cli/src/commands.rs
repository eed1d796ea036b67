use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, FormSource};
use crate::context::ExecutionContext;
use crate::logging::{self, LogTarget};
use anyhow::Result;
use dynform_runtime::{Config, resolve_workspace_path};
use dynform_types::User;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    let log_target = match command {
        Commands::Fill { .. } => LogTarget::file_in(&data_dir),
        _ => LogTarget::Stderr,
    };
    logging::init(cli.log_level, log_target)?;

    let ctx = ExecutionContext::new(data_dir, cli.base_url, cli.format);

    match command {
        Commands::Login { roll_number, name } => {
            handlers::login::handle(&ctx, User::new(roll_number, name))
        }

        Commands::Schema { roll_number, file } => {
            let source = FormSource::from_args(roll_number, file)?;
            handlers::schema::handle(&ctx, &source)
        }

        Commands::Fill {
            roll_number,
            name,
            file,
            output,
        } => {
            let user = match (roll_number, name) {
                (Some(roll_number), Some(name)) => Some(User::new(roll_number, name)),
                _ => None,
            };
            handlers::fill::handle(&ctx, user, file, output)
        }

        Commands::Check {
            file,
            roll_number,
            values,
        } => {
            let source = FormSource::from_args(roll_number, file)?;
            handlers::check::handle(&ctx, &source, &values)
        }

        Commands::Config { command } => match command {
            ConfigCommand::Init { force } => handlers::config::init(&ctx, force),
            ConfigCommand::Show => handlers::config::show(&ctx),
        },
    }
}

fn show_guidance(data_dir: &Path) {
    let config_exists = Config::path_in(data_dir).exists();

    println!("dynform - schema-driven forms in the terminal\n");

    if !config_exists {
        println!("Get started:");
        println!("  dynform config init               # Write config.toml with the default service URL\n");
    }

    println!("Quick commands:");
    println!("  dynform fill                      # Sign in and fill your form");
    println!("  dynform schema --roll-number <R>  # Inspect the form issued to a roll number");
    println!("  dynform check --file <F> --values <V>");
    println!("                                    # Validate values without the TUI\n");

    println!("For more commands:");
    println!("  dynform --help");
}
