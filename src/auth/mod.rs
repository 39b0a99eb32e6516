//! Login credentials
//!
//! The password comes from `--password`, from the output of the configured
//! `password_command`, or from the config file, in that order.

use anyhow::{Context, Result, bail};
use std::process::Stdio;
use tokio::process::Command;
use tokio::time::{Duration, timeout};

/// How long the password command may run
pub const PASSWORD_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// Username and password for the Lemmy login
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Username or email
    pub username: String,
    /// Password
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Run `command` through the platform shell and return its trimmed stdout
pub async fn run_password_command(command: &str, limit: Duration) -> Result<String> {
    let mut cmd = shell_command(command);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    tracing::debug!("running password command");
    let output = timeout(limit, cmd.output())
        .await
        .with_context(|| format!("Password command timed out after {}s", limit.as_secs()))?
        .context("Failed to run password command")?;

    if !output.status.success() {
        bail!("Password command exited with {}", output.status);
    }

    let password = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if password.is_empty() {
        bail!("Password command printed nothing");
    }
    Ok(password)
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}
