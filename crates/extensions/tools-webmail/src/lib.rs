//! Webmail tools for InboxHands.
//!
//! Reads the inbox of a webmail session already open in the user's Chrome
//! and drives basic tab navigation. Chrome is controlled through
//! AppleScript (`osascript`), so the session's existing login is reused and
//! no debugging port or browser profile is needed.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  osascript -e   ┌─────────────────────────────┐
//! │  this crate  │ ──────────────► │ Chrome: front window,       │
//! │              │ ◄────────────── │ active tab, execute JS      │
//! └──────────────┘   stdout JSON   └─────────────────────────────┘
//! ```
//!
//! ## Setup
//!
//! Chrome refuses JavaScript from Apple Events by default. Enable
//! *View > Developer > Allow JavaScript from Apple Events* once.
//!
//! ## Layers
//!
//! - [`applescript`] - string escaping, `osascript` discovery and the runner
//! - [`bridge`] - JavaScript execution, tab focus, history, polling
//! - [`extract`] - DOM extractor scripts and message types
//! - [`client`] - the typed [`WebmailClient`] facade
//!
//! ## Tools
//!
//! - `webmail_list_recent` / `webmail_list_unread` - top inbox threads
//! - `webmail_read_summaries` - one-line digests of the top threads
//! - `webmail_read_body` / `webmail_open_thread` - one message of a thread
//! - `browser_open_url` - open a URL, reusing the webmail tab when it matches
//! - `browser_go_back`, `browser_go_forward`, `browser_scroll`, `browser_search`

pub mod applescript;
pub mod bridge;
pub mod client;
mod error;
mod extension;
pub mod extract;
mod tools;

#[cfg(test)]
mod testing;

pub use applescript::{escape_applescript_string, invalidate_osascript_path, OsascriptRunner, ScriptRunner};
pub use bridge::{ChromeBridge, FocusOutcome, PollSettings, ScrollDirection};
pub use client::{WebmailClient, WebmailSettings};
pub use error::BridgeError;
pub use extension::WebmailToolsExtension;
pub use extract::{MessageBody, MessageSummary, ThreadDigest};
pub use tools::*;
