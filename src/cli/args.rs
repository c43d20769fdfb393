//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::asset::AssetKind;

/// Stylesheet project configuration and asset cache busting
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: stylebust.toml)
    #[arg(short = 'C', long, global = true, default_value = "stylebust.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented config file and the default Sass directory
    #[command(visible_alias = "i")]
    Init {
        /// Project directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Print the effective configuration with all defaults applied
    #[command(visible_alias = "s")]
    Show,

    /// Print the version token of each file
    #[command(visible_alias = "t")]
    Token {
        /// Files to resolve (relative to cwd, or to the project root)
        #[arg(required = true, value_hint = clap::ValueHint::FilePath)]
        paths: Vec<PathBuf>,
    },

    /// Print the cache-busted URL of each asset
    #[command(visible_alias = "u")]
    Url {
        /// Asset kind, selecting the directory and web path
        #[arg(short, long, value_enum, default_value_t = AssetKind::Image)]
        kind: AssetKind,

        /// Asset names relative to the directory of their kind
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

impl Cli {
    pub fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}
