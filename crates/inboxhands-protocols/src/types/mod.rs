//! Common types used across the InboxHands crates.

mod common;

pub use common::*;
