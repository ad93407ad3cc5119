//! AppleScript plumbing: string escaping, `osascript` discovery and the
//! process runner.

mod escape;
mod locate;
mod runner;

pub use escape::escape_applescript_string;
pub use locate::{invalidate_osascript_path, osascript_path};
pub use runner::{OsascriptRunner, ScriptRunner, PERMISSION_DENIAL_MARKER, PERMISSION_HINT};
