// cff-core/src/lib.rs
pub mod action;
pub mod fetch;
pub mod hint;

pub use action::{ActionInfo, OptionInfo, ACTION};
pub use fetch::{ActionError, FetchRemoteFile, PLUGIN_TAG};
pub use hint::{write_remediation_hint, REMEDIATION_HINT};
