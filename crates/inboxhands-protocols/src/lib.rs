//! # InboxHands Protocols
//!
//! Protocol definitions (traits) shared by the InboxHands crates.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`Extension`] - Base trait for extensions that contribute tools
//! - [`Tool`] - Trait for tool implementations invoked by an agent

pub mod error;
pub mod extension;
pub mod tool;
pub mod types;

pub use error::{ExtensionError, ToolError};
pub use extension::{Extension, ExtensionContext, ExtensionManifest, ToolRegistryAccess};
pub use tool::{Tool, ToolContext, ToolDefinition, ToolResult};
pub use types::*;
