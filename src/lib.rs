//! worktime library root.
//! Exposes the calculator, the JSON request handler, the CLI parser and
//! the high-level run() function.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg),
        Commands::Request { .. } => cli::commands::request::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // configuration is read once and never changes afterwards
    let mut cfg = Config::from_env();

    if let Some(tz) = &cli.tz {
        cfg.timezone = config::resolve_timezone(tz);
    }

    dispatch(&cli, &cfg)
}
