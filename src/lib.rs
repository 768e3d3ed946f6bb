//! coachtrack library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::In { .. } | Commands::Out { .. } => {
            cli::commands::clock::handle(&cli.command, cfg)
        }
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Fields => cli::commands::fields::handle(cfg),
        Commands::Assigned { .. } => cli::commands::assigned::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ apply the data directory override from the command line
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
