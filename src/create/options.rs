//! Choices offered by the create prompts.

use std::collections::{BTreeMap, HashSet};

use crate::git::BranchInfo;
use crate::github::{AssignableUser, CreatePullRequestParams, RepoInfo};

/// A reviewer entry in the multi-select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewerOption {
    pub login: String,
    pub label: String,
    /// Preselected because it was saved for this repository.
    pub selected: bool,
}

/// Head branch candidates: every local branch except the default branch,
/// most recent first.
pub fn head_branch_options(branches: &[BranchInfo], default_branch: &str) -> Vec<String> {
    branches
        .iter()
        .filter(|b| b.name != default_branch)
        .map(|b| b.name.clone())
        .collect()
}

/// Base branch candidates: the default branch first, then every other local
/// branch except the chosen head.
pub fn base_branch_options(branches: &[BranchInfo], default_branch: &str, head: &str) -> Vec<String> {
    let mut options = vec![default_branch.to_string()];
    options.extend(
        branches
            .iter()
            .filter(|b| b.name != default_branch && b.name != head)
            .map(|b| b.name.clone()),
    );
    options
}

/// Reviewer candidates sorted by login, excluding the current user.
///
/// Labels read `login (Name)`, or just `login` when the user has no display
/// name. Logins in `saved` start selected.
pub fn reviewer_options(users: &[AssignableUser], me: &str, saved: &[String]) -> Vec<ReviewerOption> {
    let saved: HashSet<&str> = saved.iter().map(String::as_str).collect();

    let by_login: BTreeMap<&str, &str> = users
        .iter()
        .filter(|u| u.login != me)
        .map(|u| (u.login.as_str(), u.name.as_str()))
        .collect();

    by_login
        .into_iter()
        .map(|(login, name)| ReviewerOption {
            login: login.to_string(),
            label: if name.is_empty() {
                login.to_string()
            } else {
                format!("{} ({})", login, name)
            },
            selected: saved.contains(login),
        })
        .collect()
}

/// Human-readable overview printed before creating the pull request.
pub fn format_summary(repo: &RepoInfo, params: &CreatePullRequestParams) -> String {
    let reviewers = if params.reviewers.is_empty() {
        "(none)".to_string()
    } else {
        params.reviewers.join(", ")
    };

    let mut summary = String::from("Summary:\n");
    summary.push_str(&format!("  Repository: {}\n", repo.full_name()));
    summary.push_str(&format!(
        "  Branches:   {} <- {}\n",
        params.base_branch, params.head_branch
    ));
    summary.push_str(&format!("  Title:      {}\n", params.title));
    summary.push_str(&format!("  Reviewers:  {}\n", reviewers));
    summary.push_str(&format!(
        "  Draft:      {}\n",
        if params.is_draft { "yes" } else { "no" }
    ));
    summary.push('\n');
    summary.push_str(&params.body);
    if !params.body.ends_with('\n') {
        summary.push('\n');
    }
    summary
}
