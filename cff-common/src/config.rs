// cff-common/src/config.rs
use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::{CffError, Result};
use super::import::ImportPath;
use super::request::is_blank;

pub const REPOSITORY_ENV: &str = "GITLAB_FASTFILES_REPOSITORY";
pub const API_ENDPOINT_ENV: &str = "GITLAB_API_ENDPOINT";
pub const API_PRIVATE_TOKEN_ENV: &str = "GITLAB_API_PRIVATE_TOKEN";
pub const FASTLANE_FOLDER_ENV: &str = "CFF_FASTLANE_FOLDER";

const IMPORTS_DIR_NAME: &str = "imports";
const DEFAULT_FASTLANE_FOLDER: &str = "./fastlane";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory relative paths are expanded against.
    pub working_dir: PathBuf,
    /// The host tool's working folder, usually `./fastlane`.
    pub fastlane_folder: PathBuf,
    /// Used when a request names no repository.
    pub default_repository: Option<String>,
    pub api_endpoint: Option<String>,
    pub api_private_token: Option<String>,
}

impl Config {
    /// Reads the process environment once. Nothing below this call looks at
    /// environment variables again.
    pub fn load() -> Result<Self> {
        debug!("Loading common_fastfile configuration");
        let working_dir = env::current_dir().map_err(|e| CffError::filesystem(".", e))?;
        let config = Self::from_lookup(working_dir, |key| env::var(key).ok());
        debug!("Configuration loaded successfully.");
        Ok(config)
    }

    /// Builds a configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(working_dir: impl Into<PathBuf>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let working_dir = working_dir.into();
        let var = |key: &str| lookup(key).filter(|s| !is_blank(s));

        let fastlane_folder = match var(FASTLANE_FOLDER_ENV) {
            Some(folder) => {
                debug!("{} overrides fastlane folder: {}", FASTLANE_FOLDER_ENV, folder);
                PathBuf::from(folder)
            }
            None => detect_fastlane_folder(&working_dir),
        };
        debug!("Effective fastlane folder: {}", fastlane_folder.display());

        Self {
            working_dir,
            fastlane_folder,
            default_repository: var(REPOSITORY_ENV),
            api_endpoint: var(API_ENDPOINT_ENV),
            api_private_token: var(API_PRIVATE_TOKEN_ENV),
        }
    }

    pub fn imports_dir(&self) -> PathBuf {
        self.fastlane_folder.join(IMPORTS_DIR_NAME)
    }

    pub fn import_path(&self, version: &str, file: &str) -> ImportPath {
        ImportPath::new(&self.working_dir, &self.imports_dir(), version, file)
    }
}

/// Mirrors the host tool's lookup: `./fastlane`, then `./.fastlane`, then the
/// working directory itself when it is named `fastlane` or `.fastlane` and
/// holds a `Fastfile` or `Fastfile.swift`.
fn detect_fastlane_folder(working_dir: &Path) -> PathBuf {
    if working_dir.join("fastlane").is_dir() {
        PathBuf::from("./fastlane")
    } else if working_dir.join(".fastlane").is_dir() {
        PathBuf::from("./.fastlane")
    } else if is_inside_fastlane_folder(working_dir) {
        PathBuf::from(".")
    } else {
        debug!(
            "No fastlane folder found in {}, falling back to {}",
            working_dir.display(),
            DEFAULT_FASTLANE_FOLDER
        );
        PathBuf::from(DEFAULT_FASTLANE_FOLDER)
    }
}

fn is_inside_fastlane_folder(working_dir: &Path) -> bool {
    let named_fastlane = working_dir
        .file_name()
        .is_some_and(|name| name == "fastlane" || name == ".fastlane");
    named_fastlane
        && ["Fastfile", "Fastfile.swift"]
            .iter()
            .any(|fastfile| working_dir.join(fastfile).is_file())
}
