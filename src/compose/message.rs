//! Commit records and the summary/description split.

use serde::Deserialize;

/// A commit as returned by the compare API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub message: String,
    #[serde(default)]
    pub author: String,
}

/// Split a commit message on its first blank line.
///
/// Returns `(summary, description)`. Without a blank line the whole message is
/// the summary and the description is empty. Later blank lines stay in the
/// description.
pub fn split_message(message: &str) -> (&str, &str) {
    message.split_once("\n\n").unwrap_or((message, ""))
}
