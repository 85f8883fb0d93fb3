// cff-net/src/lib.rs
pub mod gitlab;
pub mod validation;

pub use gitlab::{ContentApi, GitlabClient};
pub use validation::{sends_token_in_clear, validate_endpoint};
