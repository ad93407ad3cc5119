use super::*;
use crate::extract::types::RawThreadMessage;

const INBOX: &str = "https://mail.google.com/mail/u/0/#inbox";

fn row(thread_id: &str, subject: &str) -> RawMessageRow {
    RawMessageRow {
        thread_id: thread_id.to_string(),
        subject: subject.to_string(),
        ..Default::default()
    }
}

fn snapshot(count: usize) -> ThreadSnapshot {
    ThreadSnapshot {
        subject: " Quarterly numbers ".to_string(),
        messages: (0..count)
            .map(|i| RawThreadMessage {
                sender: format!("Sender {}", i),
                received_at: format!("Oct {}", i + 1),
                body: format!("Body {}\n", i),
            })
            .collect(),
    }
}

#[test]
fn test_join_senders() {
    assert_eq!(join_senders(["Ann", ",", "", "Bob", "Ann", " Cy "]), "Ann, Bob, Cy");
    assert_eq!(join_senders(Vec::<String>::new()), "");
}

#[test]
fn test_clean_snippet() {
    assert_eq!(clean_snippet(" - see you at noon"), "see you at noon");
    assert_eq!(clean_snippet("-no space"), "no space");
    assert_eq!(clean_snippet("plain - dash inside"), "plain - dash inside");
    assert_eq!(clean_snippet(""), "");
}

#[test]
fn test_thread_href() {
    assert_eq!(thread_href(INBOX, "18c2f"), "https://mail.google.com/mail/u/0/#inbox/18c2f");
    assert_eq!(thread_href("https://x/inbox/", "t"), "https://x/inbox/t");
}

#[test]
fn test_duplicates_dropped_and_limit_applied() {
    let rows = vec![row("t1", "a"), row("t2", "b"), row("t2", "b again"), row("t3", "c")];
    let summaries = collect_summaries(rows, 2, INBOX);

    let ids: Vec<&str> = summaries.iter().map(|s| s.thread_id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2"]);
    assert_eq!(summaries[1].subject, "b");
}

#[test]
fn test_rows_without_thread_id_dropped() {
    let rows = vec![row("", "orphan"), row("  ", "blank"), row("t9", "kept")];
    let summaries = collect_summaries(rows, 10, INBOX);
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].thread_id, "t9");
}

#[test]
fn test_missing_fields_become_empty() {
    let summaries = collect_summaries(vec![row("t1", "")], 5, INBOX);
    let summary = &summaries[0];
    assert_eq!(summary.subject, "");
    assert_eq!(summary.sender, "");
    assert_eq!(summary.snippet, "");
    assert_eq!(summary.href, "https://mail.google.com/mail/u/0/#inbox/t1");
}

#[test]
fn test_row_fields_normalized() {
    let raw = RawMessageRow {
        thread_id: "t1".into(),
        message_id: "m1".into(),
        subject: " Hello ".into(),
        senders: vec![Some("Ann".into()), Some(",".into()), None, Some("Ann".into()), Some("Bob".into())],
        snippet: "- Lunch?".into(),
        received_at: "Oct 12, 2026, 9:14 AM".into(),
        href: "https://elsewhere/t1".into(),
    };
    let summary = collect_summaries(vec![raw], 1, INBOX).remove(0);

    assert_eq!(summary.subject, "Hello");
    assert_eq!(summary.sender, "Ann, Bob");
    assert_eq!(summary.snippet, "Lunch?");
    assert_eq!(summary.message_id, "m1");
    assert_eq!(summary.href, "https://elsewhere/t1");
}

#[test]
fn test_select_message_in_range() {
    let body = select_message(snapshot(3), "t1", 1).unwrap();
    assert_eq!(body.message_index, 1);
    assert_eq!(body.sender, "Sender 1");
    assert_eq!(body.body, "Body 1");
    assert_eq!(body.subject, "Quarterly numbers");
    assert_eq!(body.thread_id, "t1");
}

#[test]
fn test_select_message_clamps_to_last() {
    let body = select_message(snapshot(2), "t1", 7).unwrap();
    assert_eq!(body.message_index, 1);
    assert_eq!(body.received_at, "Oct 2");
}

#[test]
fn test_select_message_empty_thread() {
    let err = select_message(snapshot(0), "t1", 0).unwrap_err();
    assert!(matches!(err, BridgeError::MalformedResult(_)));
}

#[test]
fn test_digest_defaults() {
    let summary = MessageSummary {
        thread_id: "t1".into(),
        snippet: "see attached".into(),
        ..Default::default()
    };
    let digest = ThreadDigest::from(&summary);
    assert_eq!(digest.thread_id, "t1");
    assert_eq!(digest.summary, "Unknown sender: (no subject) — see attached");
}

#[test]
fn test_digest_uses_fields() {
    let summary = MessageSummary {
        thread_id: "t2".into(),
        sender: "Ann".into(),
        subject: "Lunch".into(),
        snippet: "Noon?".into(),
        ..Default::default()
    };
    assert_eq!(ThreadDigest::from(&summary).summary, "Ann: Lunch — Noon?");
}
