//! lazypr - An interactive CLI that pre-fills GitHub pull requests from commit history.
//!
//! # Overview
//!
//! lazypr lists your local branches, asks for a head and base, and pre-fills
//! the pull request title and body from the commits between them, linking
//! every issue key (`ABC-123`) it finds. Reviewers picked for a repository are
//! remembered and preselected next time.

pub mod compose;
pub mod config;
pub mod create;
pub mod error;
pub mod git;
pub mod github;
pub mod issue;
pub mod reviewers;

// Re-export commonly used types
pub use compose::{Commit, ComposedResult, compose, split_message};
pub use config::Config;
pub use error::{CreateError, GitError, GitHubError, IssueError, ReviewerStoreError};
pub use issue::{IssueLinker, dedup_refs, extract_issue_refs};
pub use reviewers::{CsvReviewerStore, ReviewerStore};
