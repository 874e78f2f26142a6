//! rClockin library root.
//! Exposes the CLI parser, the `run()` entry point and the state store with
//! its storage backends.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::In { .. } | Commands::Out { .. } => cli::commands::clock::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Employee { .. } => cli::commands::employee::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, cfg),
    }
}

/// Apply global command-line overrides on top of the loaded config.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(backend) = cli.backend {
        cfg.backend = backend;
    }
    if let Some(store) = &cli.store {
        cfg.storage = Some(expand_tilde(store).to_string_lossy().to_string());
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    apply_overrides(&cli, &mut cfg);

    dispatch(&cli, &cfg)
}
