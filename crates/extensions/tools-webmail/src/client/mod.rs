//! Typed webmail facade.
//!
//! Validates arguments, focuses the webmail tab, waits for the page and
//! runs the extractors.

mod links;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::bridge::{ChromeBridge, PollSettings};
use crate::error::BridgeError;
use crate::extract::{
    collect_summaries, inbox_ready_script, list_messages_script, message_body_script,
    open_thread_script, select_message, MessageBody, MessageSummary, OpenThreadOutcome,
    RawMessageRow, ThreadDigest, ThreadSnapshot,
};

pub use links::{host_of, normalize_url, search_url};

/// Default number of rows returned by [`WebmailClient::list_recent_messages`].
pub const DEFAULT_LIST_LIMIT: usize = 5;

/// Default number of digests returned by [`WebmailClient::read_summaries`].
pub const DEFAULT_SUMMARY_LIMIT: usize = 3;

/// Where the webmail lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebmailSettings {
    pub origin: String,
    pub inbox_url: String,
    pub poll_interval: Duration,
    pub inbox_timeout: Duration,
    pub body_timeout: Duration,
}

impl Default for WebmailSettings {
    fn default() -> Self {
        Self {
            origin: "https://mail.google.com/".to_string(),
            inbox_url: "https://mail.google.com/mail/u/0/#inbox".to_string(),
            poll_interval: Duration::from_millis(500),
            inbox_timeout: Duration::from_secs(10),
            body_timeout: Duration::from_secs(10),
        }
    }
}

/// Webmail operations over a [`ChromeBridge`].
pub struct WebmailClient {
    bridge: Arc<ChromeBridge>,
    settings: WebmailSettings,
    host: String,
}

impl WebmailClient {
    pub fn new(bridge: Arc<ChromeBridge>, settings: WebmailSettings) -> Self {
        let host = host_of(&settings.origin).unwrap_or_else(|| settings.origin.clone());
        Self {
            bridge,
            settings,
            host,
        }
    }

    pub fn bridge(&self) -> &Arc<ChromeBridge> {
        &self.bridge
    }

    pub fn settings(&self) -> &WebmailSettings {
        &self.settings
    }

    /// Host used to recognize webmail tabs, e.g. `mail.google.com`.
    pub fn webmail_host(&self) -> &str {
        &self.host
    }

    /// Focus the webmail tab and wait until inbox rows are rendered.
    pub async fn ensure_inbox(&self) -> Result<(), BridgeError> {
        self.bridge
            .ensure_focused(&self.settings.origin, &self.host)
            .await?;

        let probe = inbox_ready_script(&self.host, &self.settings.inbox_url);
        self.bridge
            .wait_for::<()>(
                &probe,
                PollSettings::new(self.settings.inbox_timeout, self.settings.poll_interval),
                "Webmail inbox did not load",
            )
            .await
    }

    /// Up to `limit` most recent inbox rows, one per thread, in display order.
    pub async fn list_recent_messages(&self, limit: usize) -> Result<Vec<MessageSummary>, BridgeError> {
        if limit == 0 {
            return Err(BridgeError::InvalidArgument("limit must be positive".to_string()));
        }

        self.ensure_inbox().await?;

        let raw = self.bridge.execute(&list_messages_script(limit)).await?;
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<RawMessageRow> = serde_json::from_str(&raw)
            .map_err(|e| BridgeError::MalformedResult(format!("inbox rows: {}", e)))?;

        let summaries = collect_summaries(rows, limit, &self.settings.inbox_url);
        info!(count = summaries.len(), "Listed inbox messages");
        Ok(summaries)
    }

    /// Open `thread_id` from the inbox and return message `message_index`
    /// (clamped to the last message of the thread).
    pub async fn read_message_body(
        &self,
        thread_id: &str,
        message_index: usize,
    ) -> Result<MessageBody, BridgeError> {
        let thread_id = thread_id.trim();
        if thread_id.is_empty() {
            return Err(BridgeError::InvalidArgument("thread_id is required".to_string()));
        }

        self.ensure_inbox().await?;

        let raw = self.bridge.execute(&open_thread_script(thread_id)).await?;
        let outcome: OpenThreadOutcome = serde_json::from_str(&raw).map_err(|_| {
            BridgeError::MalformedResult(format!("unable to open thread {}: {:?}", thread_id, raw))
        })?;
        if !outcome.found {
            debug!(reason = ?outcome.message, "Thread row missing");
            return Err(BridgeError::ThreadNotFound(thread_id.to_string()));
        }

        let snapshot: ThreadSnapshot = self
            .bridge
            .wait_for(
                &message_body_script(),
                PollSettings::new(self.settings.body_timeout, self.settings.poll_interval),
                "Timed out waiting for the message body",
            )
            .await?;

        let body = select_message(snapshot, thread_id, message_index)?;
        info!(thread_id, index = body.message_index, "Read message body");
        Ok(body)
    }

    /// Open `url`, reusing an existing webmail tab when the destination is
    /// on the webmail host. Returns the normalized URL.
    pub async fn open_url(&self, url: &str) -> Result<String, BridgeError> {
        if url.trim().is_empty() {
            return Err(BridgeError::InvalidArgument("url is required".to_string()));
        }
        let url = normalize_url(url);

        let on_webmail = host_of(&url).is_some_and(|host| host.contains(&self.host));
        if on_webmail {
            self.bridge.ensure_focused(&url, &self.host).await?;
        } else {
            self.bridge.open_new_tab(&url).await?;
        }
        Ok(url)
    }

    /// One-line digests of the most recent threads.
    pub async fn read_summaries(&self, limit: usize) -> Result<Vec<ThreadDigest>, BridgeError> {
        let summaries = self.list_recent_messages(limit).await?;
        Ok(summaries.iter().map(ThreadDigest::from).collect())
    }

    /// Run a web search in a new tab. Returns the search URL.
    pub async fn search(&self, query: &str, market: &str) -> Result<String, BridgeError> {
        if query.trim().is_empty() {
            return Err(BridgeError::InvalidArgument("query is required".to_string()));
        }
        self.open_url(&search_url(query.trim(), market)).await
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
