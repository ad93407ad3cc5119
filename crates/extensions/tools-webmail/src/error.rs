//! Bridge errors.

use thiserror::Error;

use inboxhands_protocols::error::ToolError;

/// Errors raised by the bridge, the poller, the extractors and the client.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The control binary could not be located on this host.
    #[error("Unable to locate the osascript binary on this system")]
    BridgeUnavailable,

    /// The browser refuses script execution from the control channel.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The control process exited with a non-zero status.
    #[error("Script execution failed: {0}")]
    ExecutionFailed(String),

    /// The readiness deadline elapsed.
    #[error("Timed out: {0}")]
    Timeout(String),

    /// The requested thread is not present in the current view.
    #[error("Thread not found: {0}")]
    ThreadNotFound(String),

    /// Caller contract violation; nothing was sent to the browser.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A script returned a payload that does not match its schema.
    #[error("Malformed result: {0}")]
    MalformedResult(String),
}

impl From<BridgeError> for ToolError {
    fn from(e: BridgeError) -> Self {
        match e {
            BridgeError::InvalidArgument(msg) => ToolError::InvalidParameters(msg),
            BridgeError::PermissionDenied(msg) => ToolError::PermissionDenied(msg),
            BridgeError::ThreadNotFound(id) => {
                ToolError::ResourceNotFound(format!("thread {}", id))
            }
            other => ToolError::ExecutionFailed(other.to_string()),
        }
    }
}
