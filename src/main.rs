mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use std::io;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::plot_cmd::plot_command;
use crate::commands::project_cmd::project_command;
use crate::commands::render_cmd::render_command;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    init_tracing();

    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Render { .. } => render_command(cmd),
        cmd @ Commands::Project { .. } => project_command(cmd),
        cmd @ Commands::Plot { .. } => plot_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut io::stdout());
        }
    }
}
