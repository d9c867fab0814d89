//! efmig - EF Core migration helper
//!
//! Wraps `dotnet ef migrations add` so the project, output directory, and
//! startup project don't have to be typed out every time.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;
mod config;
mod dotnet;
mod error;

use cli::Cli;
use dotnet::AddMigration;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("efmig=info".parse()?))
        .init();

    // Usage errors exit 1; --help and --version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = cli::usage_exit_code(err.kind());
            err.print()?;
            std::process::exit(code);
        }
    };

    // Load configuration
    let config = config::Config::load()?;

    let invocation = AddMigration {
        name: cli.name,
        project: cli.project.unwrap_or(config.paths.project),
        output_dir: cli.output_dir.unwrap_or(config.paths.output_dir),
        startup_project: cli.startup_project.unwrap_or(config.paths.startup_project),
    };

    if cli.dry_run {
        println!("{}", invocation.render());
        return Ok(());
    }

    dotnet::check_dotnet()?;

    let code = invocation.run()?;
    if code == 0 {
        println!("{} migration {} added", "✓".green(), invocation.name.bold());
        Ok(())
    } else {
        eprintln!("{} dotnet ef exited with code {}", "✗".red(), code);
        std::process::exit(code);
    }
}
