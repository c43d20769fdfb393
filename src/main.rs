//! stylebust - configuration and asset cache busting for Sass projects.

#![allow(dead_code)]

mod asset;
mod cli;
mod config;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ProjectConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // Built once here, borrowed by every command
    let config = ProjectConfig::load(&cli)?;
    debug!("config"; "root {}", config.root().display());

    match &cli.command {
        Commands::Init { dry, .. } => cli::init::new_project(&config, *dry),
        Commands::Show => cli::show::show_config(&config),
        Commands::Token { paths } => cli::bust::print_tokens(&config, paths),
        Commands::Url { kind, paths } => cli::bust::print_urls(&config, *kind, paths),
    }
}
