//! In-process stand-in for `osascript` used by unit tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::applescript::ScriptRunner;
use crate::error::BridgeError;

type Responder = Box<dyn Fn(&str) -> Result<String, BridgeError> + Send + Sync>;

/// Records every script and answers through a closure.
pub(crate) struct FakeRunner {
    scripts: Mutex<Vec<String>>,
    respond: Responder,
}

impl FakeRunner {
    pub(crate) fn new<F>(respond: F) -> Arc<Self>
    where
        F: Fn(&str) -> Result<String, BridgeError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            scripts: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        })
    }

    /// Answer every script with the same output.
    pub(crate) fn constant(output: &str) -> Arc<Self> {
        let output = output.to_string();
        Self::new(move |_| Ok(output.clone()))
    }

    pub(crate) fn scripts(&self) -> Vec<String> {
        self.scripts.lock().clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.scripts.lock().len()
    }

    pub(crate) fn count_containing(&self, marker: &str) -> usize {
        self.scripts
            .lock()
            .iter()
            .filter(|script| script.contains(marker))
            .count()
    }
}

#[async_trait]
impl ScriptRunner for FakeRunner {
    async fn run(&self, script: &str, _timeout: Option<Duration>) -> Result<String, BridgeError> {
        self.scripts.lock().push(script.to_string());
        (self.respond)(script)
    }
}
