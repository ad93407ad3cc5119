//! Registries for extension-provided items.

mod base;
mod tool;

pub use base::{BaseRegistry, Registerable};
pub use tool::ToolRegistry;
