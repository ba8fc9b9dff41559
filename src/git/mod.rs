//! Git operations using git2-rs.

pub mod branches;

pub use branches::{BranchInfo, list_latest_branches, open_current_repo};
