//! Escaping for AppleScript string literals.

/// Escape text so it can sit inside a double-quoted AppleScript string.
///
/// Only backslash, double quote and newline are rewritten (`\\`, `\"`, `\n`);
/// every other character passes through unchanged.
pub fn escape_applescript_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }
    escaped
}
