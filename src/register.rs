//! Extension registration for InboxHands.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use inboxhands_config::Config;
use inboxhands_core::ToolRegistry;
use inboxhands_protocols::error::ExtensionError;
use inboxhands_protocols::extension::{Extension, ExtensionContext, ToolRegistryAccess};
use inboxhands_tools_webmail::WebmailToolsExtension;

/// Build the webmail extension from the loaded configuration.
pub(crate) fn webmail_extension(config: &Config) -> WebmailToolsExtension {
    let mut ext = WebmailToolsExtension::new()
        .application(config.browser.application.clone())
        .origin(config.webmail.origin.clone())
        .inbox_url(config.webmail.inbox_url.clone())
        .poll_interval(Duration::from_millis(config.polling.interval_ms))
        .inbox_timeout(Duration::from_millis(config.polling.inbox_timeout_ms))
        .body_timeout(Duration::from_millis(config.polling.body_timeout_ms));

    if let Some(path) = &config.browser.osascript_path {
        ext = ext.osascript_path(path.clone());
    }
    if let Some(ms) = config.browser.script_timeout_ms {
        ext = ext.script_timeout(Duration::from_millis(ms));
    }
    ext
}

/// Initialize the webmail extension against `tool_registry`.
pub(crate) async fn register_tools(
    tool_registry: Arc<ToolRegistry>,
    config: &Config,
    work_dir: &Path,
) -> Result<WebmailToolsExtension, ExtensionError> {
    let ctx = ExtensionContext::new(
        serde_json::Value::Null,
        tool_registry.clone() as Arc<dyn ToolRegistryAccess>,
        work_dir.to_path_buf(),
    );

    let mut ext = webmail_extension(config);
    ext.initialize(ctx).await?;
    info!(
        "Registered {} tools from {}",
        ext.manifest().provides.tools.len(),
        ext.manifest().id
    );
    Ok(ext)
}
