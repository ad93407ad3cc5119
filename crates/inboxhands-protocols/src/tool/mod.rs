//! Tool protocol definitions.
//!
//! Tools are how the controlling agent reaches the browser.

mod context;
mod definition;
mod result;
mod traits;

pub use context::*;
pub use definition::*;
pub use result::*;
pub use traits::*;
