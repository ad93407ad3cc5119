//! Agent tools over the webmail client.

mod navigation;
mod webmail;

pub use navigation::*;
pub use webmail::*;

use serde::de::DeserializeOwned;

use inboxhands_protocols::error::ToolError;

use crate::client::{DEFAULT_LIST_LIMIT, DEFAULT_SUMMARY_LIMIT};

pub(crate) fn default_list_limit() -> i64 {
    DEFAULT_LIST_LIMIT as i64
}

pub(crate) fn default_summary_limit() -> i64 {
    DEFAULT_SUMMARY_LIMIT as i64
}

pub(crate) fn default_scroll_amount() -> u32 {
    600
}

pub(crate) fn default_market() -> String {
    "us".to_string()
}

pub(crate) fn parse_params<T: DeserializeOwned>(params: serde_json::Value) -> Result<T, ToolError> {
    serde_json::from_value(params)
        .map_err(|e| ToolError::InvalidParameters(format!("Invalid params: {}", e)))
}

/// Reject zero and negative counts before they reach the browser.
pub(crate) fn positive(value: i64, field: &str) -> Result<usize, ToolError> {
    if value <= 0 {
        return Err(ToolError::InvalidParameters(format!("{} must be positive", field)));
    }
    usize::try_from(value).map_err(|_| ToolError::InvalidParameters(format!("{} is too large", field)))
}

pub(crate) fn non_negative(value: i64, field: &str) -> Result<usize, ToolError> {
    usize::try_from(value)
        .map_err(|_| ToolError::InvalidParameters(format!("{} must not be negative", field)))
}
