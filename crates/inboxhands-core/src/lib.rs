//! # InboxHands Core
//!
//! Registries that hold the tools contributed by extensions.

pub mod registry;

pub use registry::ToolRegistry;
