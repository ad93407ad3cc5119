//! Webmail tools extension.

use std::any::Any;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use inboxhands_protocols::error::ExtensionError;
use inboxhands_protocols::extension::{Extension, ExtensionContext, ExtensionManifest, Provides};
use inboxhands_protocols::tool::Tool;
use inboxhands_protocols::types::Version;

use crate::applescript::{OsascriptRunner, ScriptRunner};
use crate::bridge::{ChromeBridge, DEFAULT_APPLICATION};
use crate::client::{WebmailClient, WebmailSettings};
use crate::tools::*;

/// Webmail tools extension.
///
/// Reads the webmail inbox of the user's running Chrome through AppleScript.
/// Nothing is launched on initialization; `osascript` is resolved on the
/// first tool call.
pub struct WebmailToolsExtension {
    manifest: ExtensionManifest,
    application: String,
    osascript_path: Option<PathBuf>,
    script_timeout: Option<Duration>,
    settings: WebmailSettings,
    runner: Option<Arc<dyn ScriptRunner>>,
    client: Option<Arc<WebmailClient>>,
}

impl WebmailToolsExtension {
    pub fn new() -> Self {
        let mut manifest = ExtensionManifest::new(
            "tools-webmail",
            "Webmail Tools",
            Version::new(0, 1, 0),
        );
        manifest.description =
            "Webmail inbox reading and Chrome navigation via AppleScript".to_string();
        manifest.provides = Provides {
            tools: vec![
                "webmail_list_recent".to_string(),
                "webmail_list_unread".to_string(),
                "webmail_read_summaries".to_string(),
                "webmail_read_body".to_string(),
                "webmail_open_thread".to_string(),
                "browser_open_url".to_string(),
                "browser_go_back".to_string(),
                "browser_go_forward".to_string(),
                "browser_scroll".to_string(),
                "browser_search".to_string(),
            ],
        };

        Self {
            manifest,
            application: DEFAULT_APPLICATION.to_string(),
            osascript_path: None,
            script_timeout: None,
            settings: WebmailSettings::default(),
            runner: None,
            client: None,
        }
    }

    /// Scriptable browser to drive.
    /// Default: Google Chrome
    pub fn application(mut self, application: impl Into<String>) -> Self {
        self.application = application.into();
        self
    }

    /// Use this `osascript` instead of searching for one.
    pub fn osascript_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.osascript_path = Some(path.into());
        self
    }

    /// Kill a single `osascript` invocation after this long.
    pub fn script_timeout(mut self, timeout: Duration) -> Self {
        self.script_timeout = Some(timeout);
        self
    }

    /// Webmail origin, used both to open the inbox and to recognize its tabs.
    /// Default: https://mail.google.com/
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.settings.origin = origin.into();
        self
    }

    /// Inbox URL navigated to when the inbox list is not showing.
    pub fn inbox_url(mut self, url: impl Into<String>) -> Self {
        self.settings.inbox_url = url.into();
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.settings.poll_interval = interval;
        self
    }

    pub fn inbox_timeout(mut self, timeout: Duration) -> Self {
        self.settings.inbox_timeout = timeout;
        self
    }

    pub fn body_timeout(mut self, timeout: Duration) -> Self {
        self.settings.body_timeout = timeout;
        self
    }

    /// Replace the `osascript` runner.
    pub fn with_runner(mut self, runner: Arc<dyn ScriptRunner>) -> Self {
        self.runner = Some(runner);
        self
    }

    /// Client built by [`Extension::initialize`].
    pub fn client(&self) -> Option<Arc<WebmailClient>> {
        self.client.clone()
    }

    fn build_runner(&self) -> Arc<dyn ScriptRunner> {
        if let Some(runner) = &self.runner {
            return runner.clone();
        }
        match &self.osascript_path {
            Some(path) => Arc::new(OsascriptRunner::with_binary(path.clone())),
            None => Arc::new(OsascriptRunner::new()),
        }
    }
}

impl Default for WebmailToolsExtension {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Extension for WebmailToolsExtension {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    async fn initialize(&mut self, ctx: ExtensionContext) -> Result<(), ExtensionError> {
        let bridge = ChromeBridge::new(self.build_runner())
            .with_application(self.application.clone())
            .with_script_timeout(self.script_timeout);
        let client = Arc::new(WebmailClient::new(Arc::new(bridge), self.settings.clone()));

        let tools: Vec<Arc<dyn Tool>> = vec![
            Arc::new(ListRecentTool::new(client.clone())),
            Arc::new(ListUnreadTool::new(client.clone())),
            Arc::new(ReadSummariesTool::new(client.clone())),
            Arc::new(ReadBodyTool::new(client.clone())),
            Arc::new(OpenThreadTool::new(client.clone())),
            Arc::new(OpenUrlTool::new(client.clone())),
            Arc::new(GoBackTool::new(client.clone())),
            Arc::new(GoForwardTool::new(client.clone())),
            Arc::new(ScrollTool::new(client.clone())),
            Arc::new(SearchTool::new(client.clone())),
        ];
        for tool in tools {
            ctx.tool_registry.register_tool(tool)?;
        }

        tracing::info!(
            "Webmail tools extension initialized (application: {}, origin: {})",
            self.application,
            self.settings.origin
        );
        self.client = Some(client);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "extension_tests.rs"]
mod tests;
