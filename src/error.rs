//! Error types for lazypr modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from issue reference extraction.
#[derive(Error, Debug)]
pub enum IssueError {
    #[error("Invalid issue reference pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex_lite::Error,
    },
}

/// Errors from local git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to list branches: {0}")]
    ListBranches(#[source] git2::Error),

    #[error("Branch name is not valid UTF-8")]
    InvalidBranchName,

    #[error("Failed to resolve commit for branch '{0}': {1}")]
    BranchCommit(String, #[source] git2::Error),

    #[error("Commit time {1} of branch '{0}' is out of range")]
    InvalidCommitTime(String, i64),
}

/// Errors from GitHub CLI operations.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("GitHub CLI (gh) not found. Install it from https://cli.github.com and run 'gh auth login'")]
    NotInstalled,

    #[error("Failed to spawn gh process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("gh process timed out after {0} seconds")]
    Timeout(u64),

    #[error("gh exited with code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },

    #[error("gh returned invalid JSON: {0}")]
    InvalidJson(String),

    #[error("{0} is required to create a pull request")]
    MissingField(&'static str),

    #[error("All retry attempts failed: {0}")]
    RetriesExhausted(#[source] Box<GitHubError>),
}

impl GitHubError {
    /// Whether another attempt of the same gh call might succeed.
    ///
    /// Only timeouts and HTTP 5xx responses qualify. Client errors such as a
    /// missing branch (404) or failed authentication (401) are final.
    pub fn is_transient(&self) -> bool {
        match self {
            GitHubError::Timeout(_) => true,
            GitHubError::NonZeroExit { stderr, .. } => is_server_error(stderr),
            _ => false,
        }
    }
}

/// gh reports API failures as `... (HTTP 502)` or `HTTP 502: Bad Gateway`.
fn is_server_error(stderr: &str) -> bool {
    stderr.match_indices("HTTP ").any(|(i, marker)| {
        let status = &stderr[i + marker.len()..];
        let digits: String = status.chars().take_while(char::is_ascii_digit).collect();
        digits.len() == 3 && digits.starts_with('5')
    })
}

/// Errors from the saved reviewers file.
#[derive(Error, Debug)]
pub enum ReviewerStoreError {
    #[error("Could not determine home directory for the reviewers file")]
    NoHomeDir,

    #[error("Failed to read reviewers file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write reviewers file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed reviewers file {path} at line {line}: {reason}")]
    Malformed {
        path: PathBuf,
        line: u64,
        reason: String,
    },
}

/// Errors from the interactive create flow.
#[derive(Error, Debug)]
pub enum CreateError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    GitHub(#[from] GitHubError),

    #[error(transparent)]
    Reviewers(#[from] ReviewerStoreError),

    #[error("No local branches other than '{0}' to open a pull request from")]
    NoBranches(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Cancelled by user")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exit_with(stderr: &str) -> GitHubError {
        GitHubError::NonZeroExit {
            code: 1,
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn test_timeout_is_transient() {
        assert!(GitHubError::Timeout(60).is_transient());
    }

    #[test]
    fn test_server_errors_are_transient() {
        assert!(exit_with("gh: Server Error (HTTP 502)").is_transient());
        assert!(exit_with("HTTP 503: Service Unavailable").is_transient());
        assert!(exit_with("HTTP 500").is_transient());
    }

    #[test]
    fn test_client_errors_are_not_transient() {
        assert!(!exit_with("gh: Not Found (HTTP 404)").is_transient());
        assert!(!exit_with("HTTP 401: Bad credentials").is_transient());
        assert!(!exit_with("To get started with GitHub CLI, please run:  gh auth login").is_transient());
        assert!(!exit_with("HTTP 5").is_transient());
    }

    #[test]
    fn test_other_errors_are_not_transient() {
        assert!(!GitHubError::NotInstalled.is_transient());
        assert!(!GitHubError::InvalidJson("x".to_string()).is_transient());
        assert!(!GitHubError::MissingField("title").is_transient());
    }
}
