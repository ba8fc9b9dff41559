//! GitHub operations through the gh CLI.

pub mod client;
pub mod executor;
pub mod retry;
pub mod types;

pub use client::{GhClient, pr_create_args};
pub use executor::{DEFAULT_GH_TIMEOUT_SECS, GhCli, GhExecutor, check_gh_installed};
pub use types::{AssignableUser, CreatePullRequestParams, RepoInfo};
