// cff-common/src/request.rs
use crate::config::REPOSITORY_ENV;
use crate::error::{CffError, Parameter, Result};

/// Parameters of one fetch invocation, as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchRequest {
    pub file: Option<String>,
    pub version: Option<String>,
    pub repository: Option<String>,
    /// Identifies the invoking script, for the "Requested by" line only.
    pub caller: Option<String>,
}

/// A request that passed validation; every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub file: String,
    pub version: String,
    pub repository: String,
    pub caller: Option<String>,
}

impl FetchRequest {
    pub fn new(file: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            version: Some(version.into()),
            ..Self::default()
        }
    }

    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    pub fn with_caller(mut self, caller: impl Into<String>) -> Self {
        self.caller = Some(caller.into());
        self
    }

    /// Checks `file`, `version` and `repository` in that order and stops at
    /// the first one missing. An explicit repository beats `default_repository`.
    pub fn resolve(&self, default_repository: Option<&str>) -> Result<ResolvedRequest> {
        let file = non_empty(self.file.as_deref()).ok_or_else(|| {
            CffError::missing(
                Parameter::File,
                "Cannot import due to missing 'file' value. Please provide the path to your file from ios-lib-scripts.",
            )
        })?;

        let version = non_empty(self.version.as_deref()).ok_or_else(|| {
            CffError::missing(
                Parameter::Version,
                format!(
                    "Cannot import due to missing 'version' value. Please provide the [branch | tag | commit] for '{file}'"
                ),
            )
        })?;

        let repository = non_empty(self.repository.as_deref())
            .or_else(|| non_empty(default_repository))
            .ok_or_else(|| {
                CffError::missing(
                    Parameter::Repository,
                    format!(
                        "Cannot import due to missing 'repository' value. Please provide the Gitlab project ID or name or set '{REPOSITORY_ENV}' variable"
                    ),
                )
            })?;

        Ok(ResolvedRequest {
            file: file.to_string(),
            version: version.to_string(),
            repository: repository.to_string(),
            caller: non_empty(self.caller.as_deref()).map(str::to_string),
        })
    }
}

/// Empty or whitespace-only values count as not given, for parameters and
/// environment variables alike.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !is_blank(s))
}
