//! Script templates with their arguments spliced in as JSON literals.

use serde_json::Value;

const INBOX_READY_JS: &str = include_str!("scripts/inbox_ready.js");
const LIST_MESSAGES_JS: &str = include_str!("scripts/list_messages.js");
const OPEN_THREAD_JS: &str = include_str!("scripts/open_thread.js");
const MESSAGE_BODY_JS: &str = include_str!("scripts/message_body.js");

fn render(template: &str, args: &[(&str, Value)]) -> String {
    args.iter().fold(template.to_string(), |script, (placeholder, value)| {
        script.replace(placeholder, &value.to_string())
    })
}

/// Readiness probe for the inbox list. Clicks "back" or navigates to
/// `inbox_url` once when the list is not showing.
pub fn inbox_ready_script(webmail_host: &str, inbox_url: &str) -> String {
    render(
        INBOX_READY_JS,
        &[
            ("__WEBMAIL_HOST__", Value::from(webmail_host)),
            ("__INBOX_URL__", Value::from(inbox_url)),
        ],
    )
}

/// Collect up to `limit` distinct inbox rows.
pub fn list_messages_script(limit: usize) -> String {
    render(LIST_MESSAGES_JS, &[("__LIMIT__", Value::from(limit))])
}

/// Scroll to and click the row of `thread_id`.
pub fn open_thread_script(thread_id: &str) -> String {
    render(OPEN_THREAD_JS, &[("__THREAD_ID__", Value::from(thread_id))])
}

/// Readiness probe that snapshots every rendered message of the open thread.
pub fn message_body_script() -> String {
    MESSAGE_BODY_JS.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_placeholder_survives() {
        for script in [
            inbox_ready_script("mail.google.com", "https://mail.google.com/mail/u/0/#inbox"),
            list_messages_script(5),
            open_thread_script("18c2f0a"),
            message_body_script(),
        ] {
            assert!(!script.contains("__WEBMAIL_HOST__"));
            assert!(!script.contains("__INBOX_URL__"));
            assert!(!script.contains("__LIMIT__"));
            assert!(!script.contains("__THREAD_ID__"));
            assert!(script.trim_end().ends_with("})()"));
        }
    }

    #[test]
    fn test_arguments_are_json_literals() {
        assert!(list_messages_script(12).contains("const limit = 12;"));
        assert!(open_thread_script("18c2f0a").contains("const threadId = \"18c2f0a\";"));

        let script = inbox_ready_script("mail.google.com", "https://mail.google.com/mail/u/0/#inbox");
        assert!(script.contains("const webmailHost = \"mail.google.com\";"));
        assert!(script.contains("const inboxUrl = \"https://mail.google.com/mail/u/0/#inbox\";"));
    }

    #[test]
    fn test_hostile_thread_id_stays_inside_string() {
        let script = open_thread_script("a\"; alert(1); \"");
        assert!(script.contains(r#"const threadId = "a\"; alert(1); \"";"#));
    }

    #[test]
    fn test_inbox_probe_guards_single_navigation() {
        let script = inbox_ready_script("mail.google.com", "https://mail.google.com/mail/u/0/#inbox");
        assert!(script.contains("window.__inboxhandsNavigatedToInbox"));
        assert!(script.contains("No message rows detected"));
    }

    #[test]
    fn test_inbox_probe_message_is_host_neutral() {
        let script = inbox_ready_script("outlook.office.com", "https://outlook.office.com/mail/");
        assert!(script.contains("Active tab is not the webmail inbox"));
        assert!(!script.contains("Gmail"));
    }

    #[test]
    fn test_body_probe_prefers_framed_bodies() {
        let script = message_body_script();
        let framed = script.find("div.if iframe").unwrap();
        let inline = script.find("div.a3s.aiL").unwrap();
        assert!(framed < inline);
    }
}
