// cff-common/src/import.rs
//! Deterministic local placement of fetched files.
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Replaces every character outside `[0-9A-Za-z-]` with `_`.
///
/// Works per `char`, so a multi-byte character collapses to a single `_`.
pub fn sanitize_version(version: &str) -> String {
    version
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Where a fetched file lands: `<imports_dir>/<sanitized version>/<file>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPath {
    identifier: String,
    relative: PathBuf,
    absolute: PathBuf,
}

impl ImportPath {
    pub fn new(working_dir: &Path, imports_dir: &Path, version: &str, file: &str) -> Self {
        let identifier = format!("{}/{}", sanitize_version(version), file);
        let relative = imports_dir.join(&identifier);
        let absolute = absolutize(working_dir, &relative);
        Self {
            identifier,
            relative,
            absolute,
        }
    }

    /// `<sanitized version>/<file>`, the part below the imports directory.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The path as the user would type it, e.g. `./fastlane/imports/main/Fastfile`.
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    pub fn absolute(&self) -> &Path {
        &self.absolute
    }

    pub fn into_absolute(self) -> PathBuf {
        self.absolute
    }
}

impl fmt::Display for ImportPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.absolute.display())
    }
}

/// Lexical expansion against `base`: `.` is dropped, `..` pops, nothing on
/// disk is consulted.
fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
