//! Reviewer persistence interface.

use crate::error::ReviewerStoreError;

/// Remembers the reviewers last chosen for each repository.
///
/// Last write wins per repository key.
#[cfg_attr(test, mockall::automock)]
pub trait ReviewerStore {
    /// Reviewers saved for `repo`, or an empty list.
    fn get(&self, repo: &str) -> Result<Vec<String>, ReviewerStoreError>;

    /// Replace the reviewers saved for `repo`.
    fn set(&self, repo: &str, reviewers: &[String]) -> Result<(), ReviewerStoreError>;
}
