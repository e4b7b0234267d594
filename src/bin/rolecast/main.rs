//! rolecast CLI - navigate roles on products built through a factory registry

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rolecast::util::config::{self, Config};
use rolecast::util::diagnostic::{self, Diagnostic};
use rolecast::FactoryRegistry;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    if let Err(e) = run(cli, color) {
        match e.downcast_ref::<rolecast::Error>() {
            Some(err) => diagnostic::emit(&err.to_diagnostic(), color),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, color: bool) -> Result<()> {
    let (config, warnings) = load_config(&cli)?;

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("rolecast=debug")
    } else {
        EnvFilter::new(config.log.filter.as_deref().unwrap_or("rolecast=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    // Config files that were skipped are reported once output is set up
    for warning in &warnings {
        diagnostic::emit(warning, color);
    }

    // Install factories before the first lookup
    let registry = FactoryRegistry::global();
    config.install(registry);

    // Execute command
    match cli.command {
        Commands::Demo => commands::demo::execute(registry),
        Commands::Run(args) => commands::run::execute(args, registry),
        Commands::Products(args) => commands::products::execute(args, registry),
        Commands::Roles => commands::roles::execute(),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

fn load_config(cli: &Cli) -> Result<(Config, Vec<Diagnostic>)> {
    if let Some(path) = &cli.config {
        return Ok((Config::load(path)?, Vec::new()));
    }

    let cwd = std::env::current_dir()?;
    Ok(config::load_config_reporting(
        config::global_config_path().as_deref(),
        &config::project_config_path(&cwd),
    ))
}
