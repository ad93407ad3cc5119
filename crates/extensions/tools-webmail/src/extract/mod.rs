//! DOM extractors for the webmail inbox and thread views.
//!
//! The JavaScript half collects raw fields from the page; the Rust half
//! normalizes them into the public message types.

mod normalize;
mod scripts;
mod types;

pub use normalize::{clean_snippet, collect_summaries, join_senders, select_message, thread_href};
pub use scripts::{inbox_ready_script, list_messages_script, message_body_script, open_thread_script};
pub use types::{
    MessageBody, MessageSummary, OpenThreadOutcome, RawMessageRow, RawThreadMessage, ThreadDigest,
    ThreadSnapshot,
};
