//! Runs AppleScript source through `osascript`.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use super::locate::{invalidate_osascript_path, osascript_path};
use crate::error::BridgeError;

/// Substring of the browser error emitted when Apple Events JavaScript is off.
pub const PERMISSION_DENIAL_MARKER: &str = "Allow JavaScript from Apple Events";

/// Remediation shown to the user on a permission denial.
pub const PERMISSION_HINT: &str =
    "Enable it in Chrome > View > Developer > Allow JavaScript from Apple Events, then retry";

/// Executes AppleScript source and returns its trimmed standard output.
#[async_trait]
pub trait ScriptRunner: Send + Sync {
    /// Run `script`. `timeout` bounds a single invocation; `None` waits
    /// for the process to exit.
    async fn run(&self, script: &str, timeout: Option<Duration>) -> Result<String, BridgeError>;
}

/// [`ScriptRunner`] backed by the host `osascript` binary.
#[derive(Debug, Clone, Default)]
pub struct OsascriptRunner {
    binary: Option<PathBuf>,
}

impl OsascriptRunner {
    /// Runner that discovers `osascript` on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner pinned to an explicit binary; discovery is skipped.
    pub fn with_binary(path: impl Into<PathBuf>) -> Self {
        Self {
            binary: Some(path.into()),
        }
    }

    fn binary(&self) -> Result<PathBuf, BridgeError> {
        match &self.binary {
            Some(path) if path.exists() => Ok(path.clone()),
            Some(path) => {
                warn!(path = %path.display(), "Configured osascript does not exist");
                Err(BridgeError::BridgeUnavailable)
            }
            None => osascript_path(),
        }
    }
}

#[async_trait]
impl ScriptRunner for OsascriptRunner {
    async fn run(&self, script: &str, timeout: Option<Duration>) -> Result<String, BridgeError> {
        let binary = self.binary()?;
        debug!(binary = %binary.display(), script_len = script.len(), "Running AppleScript");

        let mut command = Command::new(&binary);
        command.arg("-e").arg(script).kill_on_drop(true);

        let output = match timeout {
            Some(limit) => tokio::time::timeout(limit, command.output())
                .await
                .map_err(|_| {
                    BridgeError::ExecutionFailed(format!(
                        "osascript did not finish within {}ms",
                        limit.as_millis()
                    ))
                })?,
            None => command.output().await,
        };

        let output = output.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                if self.binary.is_none() {
                    invalidate_osascript_path();
                }
                BridgeError::BridgeUnavailable
            } else {
                BridgeError::ExecutionFailed(format!("Failed to spawn osascript: {}", e))
            }
        })?;

        interpret_output(output.status.success(), &output.stdout, &output.stderr)
    }
}

/// Map a finished `osascript` process onto the bridge result.
pub(crate) fn interpret_output(
    success: bool,
    stdout: &[u8],
    stderr: &[u8],
) -> Result<String, BridgeError> {
    let stdout = String::from_utf8_lossy(stdout).trim().to_string();
    if success {
        return Ok(stdout);
    }

    let stderr = String::from_utf8_lossy(stderr).trim().to_string();
    let detail = match (stderr.is_empty(), stdout.is_empty()) {
        (false, _) => stderr,
        (true, false) => stdout,
        (true, true) => "unknown error".to_string(),
    };

    if detail.contains(PERMISSION_DENIAL_MARKER) {
        warn!("Browser rejected JavaScript from Apple Events");
        return Err(BridgeError::PermissionDenied(format!(
            "{}. {}",
            detail, PERMISSION_HINT
        )));
    }

    Err(BridgeError::ExecutionFailed(detail))
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
