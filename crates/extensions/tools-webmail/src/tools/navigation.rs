//! Browser navigation tools: open URL, back, forward, scroll, search.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use inboxhands_protocols::error::ToolError;
use inboxhands_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};
use inboxhands_protocols::types::RiskLevel;

use crate::bridge::ScrollDirection;
use crate::client::WebmailClient;

use super::{default_market, default_scroll_amount, parse_params};

// ============================================================================
// Open URL Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct OpenUrlParams {
    pub url: String,
}

/// Open a URL, reusing the webmail tab for webmail URLs.
pub struct OpenUrlTool {
    definition: ToolDefinition,
    client: Arc<WebmailClient>,
}

impl OpenUrlTool {
    pub fn new(client: Arc<WebmailClient>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "browser_open_url",
                "Open URL",
                "Open a URL in Chrome; webmail URLs reuse an existing webmail tab",
            )
            .with_parameters_schema(json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "Destination; https:// is assumed when no scheme is given"
                    }
                },
                "required": ["url"]
            }))
            .with_risk_level(RiskLevel::Medium),
            client,
        }
    }
}

#[async_trait]
impl Tool for OpenUrlTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: OpenUrlParams = parse_params(params)?;

        let url = self.client.open_url(&params.url).await?;
        debug!("Opened {}", url);

        Ok(ToolResult::success_json(
            format!("Opened {}", url),
            json!({ "status": "ok", "url": url }),
        ))
    }
}

// ============================================================================
// Back/Forward Tools
// ============================================================================

/// Go back in the active tab's history.
pub struct GoBackTool {
    definition: ToolDefinition,
    client: Arc<WebmailClient>,
}

impl GoBackTool {
    pub fn new(client: Arc<WebmailClient>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "browser_go_back",
                "Go Back",
                "Navigate the active Chrome tab back in history",
            ),
            client,
        }
    }
}

#[async_trait]
impl Tool for GoBackTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        _params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        self.client.bridge().go_back().await?;
        Ok(ToolResult::success_json("Navigated back", json!({ "status": "ok" })))
    }
}

/// Go forward in the active tab's history.
pub struct GoForwardTool {
    definition: ToolDefinition,
    client: Arc<WebmailClient>,
}

impl GoForwardTool {
    pub fn new(client: Arc<WebmailClient>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "browser_go_forward",
                "Go Forward",
                "Navigate the active Chrome tab forward in history",
            ),
            client,
        }
    }
}

#[async_trait]
impl Tool for GoForwardTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        _params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        self.client.bridge().go_forward().await?;
        Ok(ToolResult::success_json("Navigated forward", json!({ "status": "ok" })))
    }
}

// ============================================================================
// Scroll Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ScrollParams {
    #[serde(default)]
    pub direction: ScrollDirection,
    #[serde(default = "default_scroll_amount")]
    pub amount: u32,
}

/// Scroll the active tab vertically.
pub struct ScrollTool {
    definition: ToolDefinition,
    client: Arc<WebmailClient>,
}

impl ScrollTool {
    pub fn new(client: Arc<WebmailClient>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "browser_scroll",
                "Scroll Page",
                "Scroll the active Chrome tab up or down",
            )
            .with_parameters_schema(json!({
                "type": "object",
                "properties": {
                    "direction": {
                        "type": "string",
                        "enum": ["up", "down"],
                        "default": "down"
                    },
                    "amount": {
                        "type": "integer",
                        "minimum": 0,
                        "default": default_scroll_amount(),
                        "description": "Pixels to scroll"
                    }
                }
            })),
            client,
        }
    }
}

#[async_trait]
impl Tool for ScrollTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: ScrollParams = parse_params(params)?;

        let offset = self.client.bridge().scroll(params.direction, params.amount).await?;

        Ok(ToolResult::success_json(
            format!("Scrolled to {}", offset),
            json!({ "status": "ok", "scroll_y": offset }),
        ))
    }
}

// ============================================================================
// Search Tool
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
    #[serde(default = "default_market")]
    pub market: String,
}

/// Run a web search in a new tab.
pub struct SearchTool {
    definition: ToolDefinition,
    client: Arc<WebmailClient>,
}

impl SearchTool {
    pub fn new(client: Arc<WebmailClient>) -> Self {
        Self {
            definition: ToolDefinition::new(
                "browser_search",
                "Web Search",
                "Search Google in a new Chrome tab",
            )
            .with_parameters_schema(json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string" },
                    "market": {
                        "type": "string",
                        "default": "us",
                        "description": "Country domain suffix, e.g. 'de' for google.de"
                    }
                },
                "required": ["query"]
            }))
            .with_risk_level(RiskLevel::Medium),
            client,
        }
    }
}

#[async_trait]
impl Tool for SearchTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: SearchParams = parse_params(params)?;

        let url = self.client.search(&params.query, &params.market).await?;

        Ok(ToolResult::success_json(
            format!("Searching {}", url),
            json!({ "status": "ok", "url": url }),
        ))
    }
}
