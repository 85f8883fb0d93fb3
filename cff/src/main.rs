// cff/src/main.rs
use std::process;

use clap::Parser;
use colored::Colorize;
use cff_common::config::Config;
use tracing::level_filters::LevelFilter;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{CliArgs, CliError};

fn init_tracing(verbose_level: u8) {
    let level_filter = match verbose_level {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("CFF_LOG")
        .from_env_lossy();

    // stdout carries only the import path
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(verbose_level > 0)
        .without_time()
        .try_init();
}

#[tokio::main]
async fn main() {
    let cli_args = CliArgs::parse();
    init_tracing(cli_args.verbose);

    let result = match Config::load() {
        Ok(config) => cli_args.command.run(&config).await,
        Err(e) => Err(CliError::from(e)),
    };

    if let Err(e) = result {
        debug!("Command failed: {:?}", e);
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }

    debug!("Command completed successfully.");
}
