//! App Hosting build core CLI
//!
//! Runs the config validator and the Next.js version resolver against a local
//! app, the same way the build orchestrator does.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;
    tracing::debug!("Verbose mode enabled");

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Validate { path, json } => commands::run_validate(&path, json),
        Commands::AdaptorVersion { specifier } => commands::run_adaptor_version(&specifier),
        Commands::Resolve {
            name,
            app_root,
            specifier,
        } => commands::run_resolve(&app_root, &name, specifier.as_deref()),
    }
}
