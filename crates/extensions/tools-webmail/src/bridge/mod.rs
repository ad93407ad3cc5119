//! Chrome bridge.
//!
//! Evaluates JavaScript in the active tab of the front browser window and
//! drives tab focus, history and scrolling through AppleScript.

mod focus;
mod navigation;
mod poller;

use std::sync::Arc;
use std::time::Duration;

use tracing::trace;

use crate::applescript::{escape_applescript_string, ScriptRunner};
use crate::error::BridgeError;

pub use focus::FocusOutcome;
pub use navigation::ScrollDirection;
pub use poller::{PollSettings, ReadinessPayload};

/// Application controlled when none is configured.
pub const DEFAULT_APPLICATION: &str = "Google Chrome";

/// Executes scripts against one browser application.
pub struct ChromeBridge {
    runner: Arc<dyn ScriptRunner>,
    application: String,
    script_timeout: Option<Duration>,
}

impl ChromeBridge {
    pub fn new(runner: Arc<dyn ScriptRunner>) -> Self {
        Self {
            runner,
            application: DEFAULT_APPLICATION.to_string(),
            script_timeout: None,
        }
    }

    /// Target a different AppleScript-scriptable browser.
    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = application.into();
        self
    }

    /// Bound every single script invocation.
    pub fn with_script_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.script_timeout = timeout;
        self
    }

    pub fn application(&self) -> &str {
        &self.application
    }

    /// Evaluate `javascript` in the active tab of the front window.
    ///
    /// Returns the stringified completion value, trimmed. An empty string
    /// means no window is open or the script produced no value.
    pub async fn execute(&self, javascript: &str) -> Result<String, BridgeError> {
        let script = javascript_envelope(&self.application, javascript);
        trace!(js_len = javascript.len(), "Executing JavaScript in active tab");
        self.run_applescript(&script).await
    }

    /// Run raw AppleScript through the configured runner.
    pub async fn run_applescript(&self, script: &str) -> Result<String, BridgeError> {
        self.runner.run(script, self.script_timeout).await
    }
}

impl std::fmt::Debug for ChromeBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChromeBridge")
            .field("application", &self.application)
            .field("script_timeout", &self.script_timeout)
            .finish()
    }
}

/// Wrap JavaScript in the AppleScript that runs it in the active tab.
pub(crate) fn javascript_envelope(application: &str, javascript: &str) -> String {
    format!(
        r#"tell application "{app}"
    if not (exists window 1) then
        return ""
    end if
    execute front window's active tab javascript "{js}"
end tell"#,
        app = escape_applescript_string(application),
        js = escape_applescript_string(javascript),
    )
}

#[cfg(test)]
#[path = "bridge_tests.rs"]
mod tests;
