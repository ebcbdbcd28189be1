//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "parley")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect registered experiment configurations")]
pub struct Cli {
    /// Configuration file (TOML, JSON or YAML); `./parley.*` is used when present
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List registered configuration keys
    List {
        /// Only keys starting with this prefix (e.g. 'asr.')
        prefix: Option<String>,
    },
    /// Print the params of one configuration
    Show {
        /// Registry key (e.g. 'asr.wsj.WsjGrapheme')
        key: String,
        /// Attach the params of this dataset under 'input'
        #[arg(short, long)]
        dataset: Option<String>,
        /// Override a param, applied after config-file overrides (repeatable)
        #[arg(short, long, value_name = "PATH=LITERAL")]
        set: Vec<String>,
        /// Print JSON instead of 'path : value' lines
        #[arg(long)]
        json: bool,
    },
    /// List the datasets of one configuration
    Datasets {
        /// Registry key
        key: String,
    },
}
