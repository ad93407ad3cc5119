//! Rust-side cleanup of extractor output.

use std::collections::HashSet;

use super::types::{MessageBody, MessageSummary, RawMessageRow, ThreadDigest, ThreadSnapshot};
use crate::error::BridgeError;

/// Join sender names with `", "`, dropping blanks, bare commas and repeats.
pub fn join_senders<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut kept: Vec<String> = Vec::new();
    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() || name == "," {
            continue;
        }
        if seen.insert(name.to_string()) {
            kept.push(name.to_string());
        }
    }
    kept.join(", ")
}

/// Strip the leading `-` separator the inbox renders before snippets.
pub fn clean_snippet(snippet: &str) -> String {
    let trimmed = snippet.trim();
    trimmed
        .strip_prefix('-')
        .map(str::trim_start)
        .unwrap_or(trimmed)
        .to_string()
}

/// Deep link to a thread under the inbox URL.
pub fn thread_href(inbox_url: &str, thread_id: &str) -> String {
    format!("{}/{}", inbox_url.trim_end_matches('/'), thread_id)
}

/// Turn raw rows into at most `limit` summaries with unique thread ids,
/// keeping the first occurrence and DOM order.
pub fn collect_summaries(rows: Vec<RawMessageRow>, limit: usize, inbox_url: &str) -> Vec<MessageSummary> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter_map(|row| {
            let thread_id = row.thread_id.trim().to_string();
            if thread_id.is_empty() || !seen.insert(thread_id.clone()) {
                return None;
            }
            let href = match row.href.trim() {
                "" => thread_href(inbox_url, &thread_id),
                href => href.to_string(),
            };
            Some(MessageSummary {
                subject: row.subject.trim().to_string(),
                sender: join_senders(row.senders.iter().flatten()),
                snippet: clean_snippet(&row.snippet),
                received_at: row.received_at.trim().to_string(),
                message_id: row.message_id.trim().to_string(),
                href,
                thread_id,
            })
        })
        .take(limit)
        .collect()
}

/// Pick the message at `message_index`, clamped to the last one.
pub fn select_message(
    snapshot: ThreadSnapshot,
    thread_id: &str,
    message_index: usize,
) -> Result<MessageBody, BridgeError> {
    let last = snapshot.messages.len().checked_sub(1).ok_or_else(|| {
        BridgeError::MalformedResult(format!("thread {} reported no messages", thread_id))
    })?;
    let index = message_index.min(last);
    let message = snapshot.messages.into_iter().nth(index).unwrap_or_default();

    Ok(MessageBody {
        subject: snapshot.subject.trim().to_string(),
        sender: message.sender.trim().to_string(),
        received_at: message.received_at.trim().to_string(),
        body: message.body.trim().to_string(),
        message_index: index,
        thread_id: thread_id.to_string(),
    })
}

impl From<&MessageSummary> for ThreadDigest {
    fn from(summary: &MessageSummary) -> Self {
        let subject = if summary.subject.is_empty() {
            "(no subject)"
        } else {
            summary.subject.as_str()
        };
        let sender = if summary.sender.is_empty() {
            "Unknown sender"
        } else {
            summary.sender.as_str()
        };
        ThreadDigest {
            thread_id: summary.thread_id.clone(),
            summary: format!("{}: {} — {}", sender, subject, summary.snippet.trim()),
        }
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
