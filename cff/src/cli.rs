// cff/src/cli.rs
//! Defines the command-line argument structure using clap.
use clap::{ArgAction, Parser, Subcommand};
use cff_common::error::CffError;
use cff_common::Config;
use cff_core::ActionError;
use thiserror::Error;

pub mod fetch;
pub mod info;

use crate::cli::fetch::FetchArgs;
use crate::cli::info::InfoArgs;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "cff", bin_name = "cff")]
pub struct CliArgs {
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download a file from GitLab into the fastlane imports folder and print its path
    Fetch(FetchArgs),
    /// Describe the action and its options
    Info(InfoArgs),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("Could not load configuration: {0}")]
    Config(#[from] CffError),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Command {
    pub async fn run(&self, config: &Config) -> Result<(), CliError> {
        match self {
            Self::Fetch(command) => command.run(config).await,
            Self::Info(command) => command.run(),
        }
    }
}
