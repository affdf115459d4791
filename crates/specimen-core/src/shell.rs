//! Shell-invoking command runner: the command-injection sample.
//!
//! Untrusted input is interpolated into a fixed `ls` template and handed to
//! `sh -c` verbatim. Metacharacters keep their shell meaning, so the input
//! controls what actually runs.

use anyhow::Result;
use std::process::{Command, ExitStatus};

/// Build the command line by direct interpolation. No quoting, no escaping.
pub fn command_line(user_input: &str) -> String {
    format!("ls {user_input}")
}

/// Run the interpolated line through `sh -c` and return the child's exit
/// status. Spawn failures propagate to the caller; nothing is caught.
pub fn run_command(user_input: &str) -> Result<ExitStatus> {
    let cmd = command_line(user_input);
    tracing::debug!("running shell command: {}", cmd);
    let status = Command::new("sh").arg("-c").arg(&cmd).status()?;
    Ok(status)
}
