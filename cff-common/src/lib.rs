// cff-common/src/lib.rs
pub mod config;
pub mod error;
pub mod import;
pub mod request;

// Re-export key types
pub use config::Config;
pub use error::{CffError, ErrorKind, Parameter, RemoteFetchError, Result};
pub use import::{sanitize_version, ImportPath};
pub use request::{FetchRequest, ResolvedRequest};
