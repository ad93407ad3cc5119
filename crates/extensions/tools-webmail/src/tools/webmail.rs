//! Inbox and thread tools.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use inboxhands_protocols::error::ToolError;
use inboxhands_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

use crate::client::WebmailClient;

use super::{default_list_limit, default_summary_limit, non_negative, parse_params, positive};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_list_limit")]
    pub limit: i64,
}

#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    #[serde(default = "default_summary_limit")]
    pub limit: i64,
}

#[derive(Debug, Deserialize)]
pub struct ThreadParams {
    pub thread_id: String,
    #[serde(default)]
    pub message_index: i64,
}

fn limit_schema(default: i64) -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "limit": {
                "type": "integer",
                "minimum": 1,
                "default": default,
                "description": "Maximum number of threads to return"
            }
        }
    })
}

fn thread_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "thread_id": {
                "type": "string",
                "description": "Thread id as reported by the list tools"
            },
            "message_index": {
                "type": "integer",
                "minimum": 0,
                "default": 0,
                "description": "0-based message position; clamped to the last message"
            }
        },
        "required": ["thread_id"]
    })
}

// ============================================================================
// List Tools
// ============================================================================

/// List the most recent inbox threads.
pub struct ListRecentTool {
    definition: ToolDefinition,
    client: Arc<WebmailClient>,
}

impl ListRecentTool {
    pub fn new(client: Arc<WebmailClient>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "webmail_list_recent",
                "List Recent Mail",
                "List the most recent threads in the webmail inbox open in Chrome",
            )
            .with_parameters_schema(limit_schema(default_list_limit())),
            client,
        }
    }
}

#[async_trait]
impl Tool for ListRecentTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: ListParams = parse_params(params)?;
        let limit = positive(params.limit, "limit")?;

        let messages = self.client.list_recent_messages(limit).await?;
        debug!("Listed {} recent messages", messages.len());

        Ok(ToolResult::success_json(
            format!("Found {} messages", messages.len()),
            json!(messages),
        ))
    }
}

/// List inbox threads wrapped with a count.
pub struct ListUnreadTool {
    definition: ToolDefinition,
    client: Arc<WebmailClient>,
}

impl ListUnreadTool {
    pub fn new(client: Arc<WebmailClient>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "webmail_list_unread",
                "List Inbox Threads",
                "Open the webmail inbox and list its top threads with a count",
            )
            .with_parameters_schema(limit_schema(default_list_limit())),
            client,
        }
    }
}

#[async_trait]
impl Tool for ListUnreadTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: ListParams = parse_params(params)?;
        let limit = positive(params.limit, "limit")?;

        let threads = self.client.list_recent_messages(limit).await?;
        let count = threads.len();

        Ok(ToolResult::success_json(
            format!("Found {} threads", count),
            json!({ "threads": threads, "count": count }),
        ))
    }
}

/// One-line digests of the top threads.
pub struct ReadSummariesTool {
    definition: ToolDefinition,
    client: Arc<WebmailClient>,
}

impl ReadSummariesTool {
    pub fn new(client: Arc<WebmailClient>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "webmail_read_summaries",
                "Summarize Inbox",
                "Produce short 'sender: subject - snippet' lines for the top inbox threads",
            )
            .with_parameters_schema(limit_schema(default_summary_limit())),
            client,
        }
    }
}

#[async_trait]
impl Tool for ReadSummariesTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: SummaryParams = parse_params(params)?;
        let limit = positive(params.limit, "limit")?;

        let summaries = self.client.read_summaries(limit).await?;
        let content = summaries
            .iter()
            .map(|digest| digest.summary.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let count = summaries.len();

        Ok(ToolResult::success_json(
            content,
            json!({ "summaries": summaries, "count": count }),
        ))
    }
}

// ============================================================================
// Thread Tools
// ============================================================================

/// Read one message of a thread.
pub struct ReadBodyTool {
    definition: ToolDefinition,
    client: Arc<WebmailClient>,
}

impl ReadBodyTool {
    pub fn new(client: Arc<WebmailClient>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "webmail_read_body",
                "Read Mail Body",
                "Open a thread from the inbox and return the text of one of its messages",
            )
            .with_parameters_schema(thread_schema()),
            client,
        }
    }
}

#[async_trait]
impl Tool for ReadBodyTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: ThreadParams = parse_params(params)?;
        let index = non_negative(params.message_index, "message_index")?;

        let body = self.client.read_message_body(&params.thread_id, index).await?;

        Ok(ToolResult::success_json(body.body.clone(), json!(body)))
    }
}

/// Open a thread and return the message wrapped under `thread`.
pub struct OpenThreadTool {
    definition: ToolDefinition,
    client: Arc<WebmailClient>,
}

impl OpenThreadTool {
    pub fn new(client: Arc<WebmailClient>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "webmail_open_thread",
                "Open Mail Thread",
                "Open a thread by id and return the requested message",
            )
            .with_parameters_schema(thread_schema()),
            client,
        }
    }
}

#[async_trait]
impl Tool for OpenThreadTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: ThreadParams = parse_params(params)?;
        let index = non_negative(params.message_index, "message_index")?;

        let thread = self.client.read_message_body(&params.thread_id, index).await?;

        Ok(ToolResult::success_json(
            format!("Opened thread {}", thread.thread_id),
            json!({ "thread": thread }),
        ))
    }
}
