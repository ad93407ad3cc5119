//! # InboxHands Config
//!
//! TOML configuration for the browser bridge, the webmail target and the
//! readiness poller.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
