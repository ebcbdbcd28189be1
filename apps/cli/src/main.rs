#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{datasets, list, show};
use crate::models::args::{Cli, Commands};

use anyhow::Result;
use clap::Parser;
use parley::domain::config::{LogConfig, ShellConfig};
use parley::domain::constants::DEFAULT_CONFIG_FILE;
use parley::kernel::config::load_config;
use parley_logger::{Logger, LoggerError};
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: ShellConfig = load_config(cli.config.as_deref())?;
    let _logger = init_logger(&config.log)?;
    match &cli.config {
        Some(path) => debug!(path = %path.display(), "Loaded config file"),
        None => debug!(file = DEFAULT_CONFIG_FILE, "Loaded optional config file and environment"),
    }
    let registry = parley::registry()?;

    match cli.command {
        Commands::List { prefix } => list::list_keys(&registry, prefix.as_deref()),
        Commands::Show { key, dataset, set, json } => {
            show::show(&registry, &config, &key, dataset.as_deref(), &set, json)?;
        },
        Commands::Datasets { key } => datasets::list_datasets(&registry, &key)?,
    }

    Ok(())
}

fn init_logger(log: &LogConfig) -> Result<Logger, LoggerError> {
    let mut builder = Logger::builder()
        .name(env!("CARGO_BIN_NAME"))
        .level_str(&log.level)
        .ansi(log.ansi)
        .console(true);
    if let Some(filter) = &log.filter {
        builder = builder.env_filter(filter.clone());
    }

    match &log.directory {
        Some(directory) => builder.directory(directory.clone()).json(log.json).init(),
        None => builder.init(),
    }
}
