//! Tool execution context.

use std::path::PathBuf;

/// Context for tool execution.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Session ID for the current session.
    pub session_id: String,

    /// Correlation ID for tracing.
    pub correlation_id: String,

    /// Working directory.
    pub work_dir: PathBuf,
}

impl ToolContext {
    /// Create a new tool context.
    pub fn new(session_id: impl Into<String>, work_dir: PathBuf) -> Self {
        Self {
            session_id: session_id.into(),
            correlation_id: uuid::Uuid::new_v4().to_string(),
            work_dir,
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
