// cff-common/src/error.rs
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

/// The invocation parameters a request can be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    File,
    Version,
    Repository,
}

impl Parameter {
    pub fn key(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Version => "version",
            Self::Repository => "repository",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Coarse classification of a [`CffError`], for callers that branch on cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingParameter,
    RemoteFetchFailure,
    FilesystemFailure,
}

#[derive(Error, Debug, Clone)]
pub enum CffError {
    #[error("{message}")]
    MissingParameter {
        parameter: Parameter,
        message: String,
    },

    #[error(transparent)]
    RemoteFetch(#[from] RemoteFetchError),

    #[error("Filesystem Error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        source: Arc<std::io::Error>,
    },
}

impl CffError {
    pub fn missing(parameter: Parameter, message: impl Into<String>) -> Self {
        Self::MissingParameter {
            parameter,
            message: message.into(),
        }
    }

    pub fn filesystem(path: impl AsRef<Path>, err: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.as_ref().to_path_buf(),
            source: Arc::new(err),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingParameter { .. } => ErrorKind::MissingParameter,
            Self::RemoteFetch(_) => ErrorKind::RemoteFetchFailure,
            Self::Filesystem { .. } => ErrorKind::FilesystemFailure,
        }
    }
}

/// Everything that can go wrong between asking the content API for a file and
/// holding its bytes.
#[derive(Error, Debug, Clone)]
pub enum RemoteFetchError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid API endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("'{value}' is not a valid {name} path")]
    InvalidPathSegment { name: &'static str, value: String },

    #[error("HTTP Request Error: {0}")]
    Transport(Arc<reqwest::Error>),

    #[error("401 Unauthorized: the API rejected the private token for {url}")]
    Unauthorized { url: String },

    #[error("403 Forbidden: access denied for {url}")]
    Forbidden { url: String },

    #[error("404 Not Found: '{file}' [{version}] does not exist in {repository}")]
    NotFound {
        repository: String,
        file: String,
        version: String,
    },

    #[error("HTTP error {status} for URL {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },
}

impl From<reqwest::Error> for RemoteFetchError {
    fn from(err: reqwest::Error) -> Self {
        RemoteFetchError::Transport(Arc::new(err))
    }
}

impl From<reqwest::Error> for CffError {
    fn from(err: reqwest::Error) -> Self {
        CffError::RemoteFetch(err.into())
    }
}

pub type Result<T> = std::result::Result<T, CffError>;
