//! Extension protocol definitions.
//!
//! Extensions bundle related tools and register them on initialization.

mod context;
mod manifest;
mod traits;

pub use context::*;
pub use manifest::*;
pub use traits::*;
