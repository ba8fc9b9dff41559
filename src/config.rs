//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::error::ReviewerStoreError;
use crate::github::DEFAULT_GH_TIMEOUT_SECS;
use crate::issue::{DEFAULT_ISSUE_BASE_URL, DEFAULT_ISSUE_HEADING, IssueLinker};
use crate::reviewers::CsvReviewerStore;

/// Issue tracker browse URL prefix, e.g. `https://acme.atlassian.net/browse/`.
pub const ISSUE_BASE_URL_ENV_VAR: &str = "LAZYPR_ISSUE_BASE_URL";

/// Heading placed above the issue links.
pub const ISSUE_HEADING_ENV_VAR: &str = "LAZYPR_ISSUE_HEADING";

/// Path of the saved reviewers file.
pub const REVIEWERS_FILE_ENV_VAR: &str = "LAZYPR_REVIEWERS_FILE";

/// Timeout in seconds for each gh invocation.
pub const GH_TIMEOUT_ENV_VAR: &str = "LAZYPR_GH_TIMEOUT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub issue_base_url: String,
    pub issue_heading: String,
    /// `None` means `~/.__reviewers.csv`.
    pub reviewers_file: Option<PathBuf>,
    pub gh_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            issue_base_url: DEFAULT_ISSUE_BASE_URL.to_string(),
            issue_heading: DEFAULT_ISSUE_HEADING.to_string(),
            reviewers_file: None,
            gh_timeout: Duration::from_secs(DEFAULT_GH_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// Empty variables count as unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            issue_base_url: non_empty_var(ISSUE_BASE_URL_ENV_VAR)
                .unwrap_or(defaults.issue_base_url),
            issue_heading: non_empty_var(ISSUE_HEADING_ENV_VAR).unwrap_or(defaults.issue_heading),
            reviewers_file: non_empty_var(REVIEWERS_FILE_ENV_VAR).map(PathBuf::from),
            gh_timeout: gh_timeout_from_env().unwrap_or(defaults.gh_timeout),
        }
    }

    pub fn linker(&self) -> IssueLinker {
        IssueLinker::new(&self.issue_base_url, &self.issue_heading)
    }

    pub fn reviewer_store(&self) -> Result<CsvReviewerStore, ReviewerStoreError> {
        match &self.reviewers_file {
            Some(path) => Ok(CsvReviewerStore::new(path)),
            None => CsvReviewerStore::in_home_dir(),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Logs a warning and returns `None` if the variable is set but not a
/// non-negative integer.
fn gh_timeout_from_env() -> Option<Duration> {
    let raw = non_empty_var(GH_TIMEOUT_ENV_VAR)?;
    match raw.trim().parse::<u64>() {
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(_) => {
            warn!(
                "Invalid {} value '{}', using default {}s",
                GH_TIMEOUT_ENV_VAR, raw, DEFAULT_GH_TIMEOUT_SECS
            );
            None
        }
    }
}
