//! CLI definitions for InboxHands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};

/// InboxHands CLI.
#[derive(Parser)]
#[command(name = "inboxhands")]
#[command(about = "Read the webmail inbox open in Chrome")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    /// Working directory
    #[arg(short, long, global = true)]
    pub work_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the most recent inbox threads
    List {
        /// Maximum number of threads
        #[arg(short, long, default_value_t = 5)]
        limit: i64,
    },

    /// Read one message of a thread
    Read {
        /// Thread id from `list`
        thread_id: String,

        /// 0-based message position in the thread
        #[arg(short, long, default_value_t = 0)]
        index: i64,
    },

    /// Open a URL, reusing the webmail tab for webmail URLs
    Open {
        url: String,
    },

    /// One-line digests of the top inbox threads
    Summaries {
        /// Maximum number of threads
        #[arg(short, long, default_value_t = 3)]
        limit: i64,
    },

    /// Go back in the active tab
    Back,

    /// Go forward in the active tab
    Forward,

    /// Scroll the active tab
    Scroll {
        #[arg(value_enum, default_value = "down")]
        direction: Direction,

        /// Pixels to scroll
        #[arg(short, long, default_value_t = 600)]
        amount: u32,
    },

    /// Search the web in a new tab
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Country domain suffix
        #[arg(long, default_value = "us")]
        market: String,
    },

    /// Print the registered tool definitions
    Tools,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Direction {
    Up,
    Down,
}

impl Commands {
    /// Tool id and JSON parameters for this command; `None` for `tools`.
    pub(crate) fn invocation(&self) -> Option<(&'static str, Value)> {
        let call = match self {
            Commands::List { limit } => ("webmail_list_recent", json!({ "limit": limit })),
            Commands::Read { thread_id, index } => (
                "webmail_read_body",
                json!({ "thread_id": thread_id, "message_index": index }),
            ),
            Commands::Open { url } => ("browser_open_url", json!({ "url": url })),
            Commands::Summaries { limit } => ("webmail_read_summaries", json!({ "limit": limit })),
            Commands::Back => ("browser_go_back", json!({})),
            Commands::Forward => ("browser_go_forward", json!({})),
            Commands::Scroll { direction, amount } => {
                let direction = match direction {
                    Direction::Up => "up",
                    Direction::Down => "down",
                };
                ("browser_scroll", json!({ "direction": direction, "amount": amount }))
            }
            Commands::Search { query, market } => (
                "browser_search",
                json!({ "query": query.join(" "), "market": market }),
            ),
            Commands::Tools => return None,
        };
        Some(call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("inboxhands").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_list_defaults() {
        let cli = parse(&["list"]);
        assert_eq!(cli.config, PathBuf::from("config/default.toml"));
        let (tool, params) = cli.command.invocation().unwrap();
        assert_eq!(tool, "webmail_list_recent");
        assert_eq!(params["limit"], 5);
    }

    #[test]
    fn test_read_with_index() {
        let cli = parse(&["read", "18c2f0a", "--index", "2"]);
        let (tool, params) = cli.command.invocation().unwrap();
        assert_eq!(tool, "webmail_read_body");
        assert_eq!(params["thread_id"], "18c2f0a");
        assert_eq!(params["message_index"], 2);
    }

    #[test]
    fn test_scroll_direction() {
        let cli = parse(&["scroll", "up", "--amount", "200"]);
        let (_, params) = cli.command.invocation().unwrap();
        assert_eq!(params["direction"], "up");
        assert_eq!(params["amount"], 200);
    }

    #[test]
    fn test_search_joins_words() {
        let cli = parse(&["--config", "custom.toml", "search", "rust", "async", "--market", "de"]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        let (tool, params) = cli.command.invocation().unwrap();
        assert_eq!(tool, "browser_search");
        assert_eq!(params["query"], "rust async");
        assert_eq!(params["market"], "de");
    }

    #[test]
    fn test_tools_has_no_invocation() {
        assert!(parse(&["tools"]).command.invocation().is_none());
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["inboxhands", "search"]).is_err());
    }
}
