//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub webmail: WebmailConfig,

    #[serde(default)]
    pub polling: PollingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Controlled browser configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Scriptable application name used in `tell application`.
    #[serde(default = "default_application")]
    pub application: String,

    /// Explicit path to `osascript`; probed on PATH when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osascript_path: Option<PathBuf>,

    /// Upper bound for a single script execution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_timeout_ms: Option<u64>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            application: default_application(),
            osascript_path: None,
            script_timeout_ms: None,
        }
    }
}

fn default_application() -> String {
    "Google Chrome".to_string()
}

/// Webmail target configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebmailConfig {
    #[serde(default = "default_origin")]
    pub origin: String,

    #[serde(default = "default_inbox_url")]
    pub inbox_url: String,
}

impl Default for WebmailConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            inbox_url: default_inbox_url(),
        }
    }
}

fn default_origin() -> String {
    "https://mail.google.com/".to_string()
}

fn default_inbox_url() -> String {
    "https://mail.google.com/mail/u/0/#inbox".to_string()
}

/// Readiness polling cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    #[serde(default = "default_wait_ms")]
    pub inbox_timeout_ms: u64,

    #[serde(default = "default_wait_ms")]
    pub body_timeout_ms: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            inbox_timeout_ms: default_wait_ms(),
            body_timeout_ms: default_wait_ms(),
        }
    }
}

fn default_interval_ms() -> u64 {
    500
}

fn default_wait_ms() -> u64 {
    10_000
}

/// Log output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for rolling log files.
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            dir: default_log_dir(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".inboxhands")
        .join("logs")
}
