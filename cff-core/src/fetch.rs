// cff-core/src/fetch.rs
//! The fetch action: validate, derive the import path, download, persist.
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use cff_common::config::Config;
use cff_common::error::{CffError, ErrorKind, Result};
use cff_common::import::ImportPath;
use cff_common::request::{FetchRequest, ResolvedRequest};
use cff_net::{ContentApi, GitlabClient};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::hint::write_remediation_hint;

pub const PLUGIN_TAG: &str = "[common_fastfile]";

/// The single user-facing failure of the action.
#[derive(Error, Debug, Clone)]
#[error("{tag} Download failure with:\n{source}", tag = PLUGIN_TAG)]
pub struct ActionError {
    source: CffError,
}

impl ActionError {
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }

    pub fn cause(&self) -> &CffError {
        &self.source
    }

    pub fn into_cause(self) -> CffError {
        self.source
    }
}

impl From<CffError> for ActionError {
    fn from(source: CffError) -> Self {
        Self { source }
    }
}

pub struct FetchRemoteFile<'a> {
    config: &'a Config,
    /// Receives the remediation hint on failure; stderr unless replaced.
    hint_output: Mutex<Box<dyn Write + Send + 'a>>,
}

impl<'a> FetchRemoteFile<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            hint_output: Mutex::new(Box::new(io::stderr())),
        }
    }

    pub fn with_hint_output(mut self, output: impl Write + Send + 'a) -> Self {
        self.hint_output = Mutex::new(Box::new(output));
        self
    }

    /// Fetches through a [`GitlabClient`] built from the configuration and
    /// returns the absolute path of the written file.
    pub async fn run(&self, request: &FetchRequest) -> std::result::Result<PathBuf, ActionError> {
        let result: Result<PathBuf> = async {
            let (resolved, import_path) = self.prepare(request)?;
            let client = GitlabClient::new(self.config)?;
            self.download(&resolved, import_path, &client).await
        }
        .await;
        result.map_err(|e| self.report_failure(e))
    }

    /// Same as [`run`](Self::run) with a caller-supplied content API.
    pub async fn run_with<A: ContentApi>(
        &self,
        request: &FetchRequest,
        api: &A,
    ) -> std::result::Result<PathBuf, ActionError> {
        let result: Result<PathBuf> = async {
            let (resolved, import_path) = self.prepare(request)?;
            self.download(&resolved, import_path, api).await
        }
        .await;
        result.map_err(|e| self.report_failure(e))
    }

    fn prepare(&self, request: &FetchRequest) -> Result<(ResolvedRequest, ImportPath)> {
        let resolved = request.resolve(self.config.default_repository.as_deref())?;
        let import_path = self.config.import_path(&resolved.version, &resolved.file);
        debug!(
            "Import '{}' resolves to {}",
            import_path.identifier(),
            import_path.absolute().display()
        );

        if let Some(caller) = &resolved.caller {
            info!("Requested by: {}", caller);
        }
        info!(
            " Downloading: {} [{}] from {}",
            resolved.file, resolved.version, resolved.repository
        );
        Ok((resolved, import_path))
    }

    async fn download<A: ContentApi>(
        &self,
        resolved: &ResolvedRequest,
        import_path: ImportPath,
        api: &A,
    ) -> Result<PathBuf> {
        let content = api
            .repo_file_contents(&resolved.repository, &resolved.file, &resolved.version)
            .await?;

        let target = import_path.absolute();
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CffError::filesystem(parent, e))?;
        }
        tokio::fs::write(target, &content)
            .await
            .map_err(|e| CffError::filesystem(target, e))?;
        info!("    Saved in: {}", import_path.relative().display());

        Ok(import_path.into_absolute())
    }

    fn report_failure(&self, err: CffError) -> ActionError {
        debug!("Fetch failed ({:?}): {}", err.kind(), err);
        match self.hint_output.lock() {
            Ok(mut output) => {
                if let Err(e) = write_remediation_hint(&mut **output) {
                    warn!("Could not print remediation hint: {}", e);
                }
            }
            Err(_) => warn!("Remediation hint output is poisoned"),
        }
        ActionError::from(err)
    }
}
