//! Error types for the InboxHands protocol layer.

mod extension;
mod tool;

pub use extension::*;
pub use tool::*;
