//! Readiness polling.
//!
//! A readiness script answers with `{"ready": bool, "data"?: ..., "message"?: str}`.
//! The poller re-runs it until it reports ready or the deadline passes.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tokio::time::{sleep, Instant};
use tracing::{debug, trace, warn};

use super::ChromeBridge;
use crate::error::BridgeError;

/// Deadline and spacing for one wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub timeout: Duration,
    pub interval: Duration,
}

impl PollSettings {
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            interval: Duration::from_millis(500),
        }
    }
}

/// Envelope returned by every readiness script.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadinessPayload {
    #[serde(default)]
    pub ready: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of a single probe.
#[derive(Debug)]
pub(crate) enum PollState<T> {
    Pending(Option<String>),
    Ready(T),
}

/// Classify one raw script result.
///
/// Empty or unparsable output counts as not ready. A ready payload whose
/// `data` does not fit `T` is an error.
pub(crate) fn observe<T: DeserializeOwned>(raw: &str) -> Result<PollState<T>, BridgeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(PollState::Pending(None));
    }

    let payload: ReadinessPayload = match serde_json::from_str(raw) {
        Ok(payload) => payload,
        Err(e) => {
            trace!(error = %e, "Readiness output is not a payload yet");
            return Ok(PollState::Pending(None));
        }
    };

    if !payload.ready {
        return Ok(PollState::Pending(payload.message));
    }

    serde_json::from_value(payload.data.unwrap_or(Value::Null))
        .map(PollState::Ready)
        .map_err(|e| BridgeError::MalformedResult(format!("readiness data has the wrong shape: {}", e)))
}

impl ChromeBridge {
    /// Re-run `javascript` every `settings.interval` until it reports ready.
    ///
    /// Bridge errors abort the wait. On deadline the error carries the last
    /// message a pending payload reported, or `fallback_message`.
    pub async fn wait_for<T: DeserializeOwned>(
        &self,
        javascript: &str,
        settings: PollSettings,
        fallback_message: &str,
    ) -> Result<T, BridgeError> {
        let deadline = Instant::now() + settings.timeout;
        let mut last_message: Option<String> = None;
        let mut attempts: u32 = 0;

        while Instant::now() < deadline {
            attempts += 1;
            let raw = self.execute(javascript).await?;
            match observe::<T>(&raw)? {
                PollState::Ready(data) => {
                    debug!(attempts, "Condition ready");
                    return Ok(data);
                }
                PollState::Pending(message) => {
                    if let Some(message) = message {
                        trace!(attempts, %message, "Condition pending");
                        last_message = Some(message);
                    }
                }
            }
            sleep(settings.interval).await;
        }

        let message = last_message.unwrap_or_else(|| fallback_message.to_string());
        warn!(attempts, %message, "Timed out waiting for condition");
        Err(BridgeError::Timeout(message))
    }
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod tests;
