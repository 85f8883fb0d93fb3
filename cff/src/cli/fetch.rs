// cff/src/cli/fetch.rs
use clap::Args;
use cff_common::{Config, FetchRequest};
use cff_core::FetchRemoteFile;

use crate::cli::CliError;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Path to the file within repository
    #[arg(long)]
    pub file: Option<String>,

    /// Version of the file [branch, tag, commit]
    #[arg(long)]
    pub version: Option<String>,

    /// Gitlab repository ID, e.g. 26259886 or group/subgroup/repository
    /// [default: $GITLAB_FASTFILES_REPOSITORY]
    #[arg(long)]
    pub repository: Option<String>,

    /// Script requesting the file, shown in the "Requested by" line
    #[arg(long)]
    pub caller: Option<String>,
}

impl FetchArgs {
    pub fn to_request(&self) -> FetchRequest {
        FetchRequest {
            file: self.file.clone(),
            version: self.version.clone(),
            repository: self.repository.clone(),
            caller: self.caller.clone(),
        }
    }

    /// Prints the absolute import path on stdout so the caller can load it.
    pub async fn run(&self, config: &Config) -> Result<(), CliError> {
        let path = FetchRemoteFile::new(config)
            .run(&self.to_request())
            .await?;
        println!("{}", path.display());
        Ok(())
    }
}
