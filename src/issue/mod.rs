//! Issue tracker references found in commit messages.

pub mod link;
pub mod refs;

pub use link::{DEFAULT_ISSUE_BASE_URL, DEFAULT_ISSUE_HEADING, IssueLinker};
pub use refs::{ISSUE_REF_PATTERN, IssuePattern, dedup_refs, extract_issue_refs};
