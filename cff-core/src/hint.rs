// cff-core/src/hint.rs
use std::io::{self, Write};

use colored::Colorize;

/// Shown on every failure, whatever the cause.
pub const REMEDIATION_HINT: &str = "Please check:
- if you have 'GITLAB_API_ENDPOINT' set, usually 'https://gitlab.com/api/v4'
- if you have 'GITLAB_API_PRIVATE_TOKEN' set, usually you can use 'https://gitlab.com/-/profile/personal_access_tokens' to set up one
- if you have 'GITLAB_FASTFILES_REPOSITORY' set with a Gitlab project ID or name, e.g. 'group/subgroup/repository'
Consider adding them to your .bash_profile, .zshrc or other shell configuration file";

pub fn write_remediation_hint(output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "{}", REMEDIATION_HINT.yellow())?;
    output.flush()
}
