//! Repository, commit and pull request operations over the gh CLI.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::compose::Commit;
use crate::error::GitHubError;

use super::executor::GhExecutor;
use super::retry::retry_transient;
use super::types::{CreatePullRequestParams, RepoInfo, RepoViewResponse};

/// Fields requested from `gh repo view`.
const REPO_VIEW_FIELDS: &str = "assignableUsers,defaultBranchRef,owner,name";

/// jq projection of the compare API's commit list.
const COMPARE_COMMITS_JQ: &str =
    "[.commits[] | {sha: .sha, message: .commit.message, author: .commit.author.name}]";

/// GitHub operations backed by a gh executor.
pub struct GhClient<E: GhExecutor> {
    executor: E,
}

impl<E: GhExecutor> GhClient<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Look up repository metadata.
    ///
    /// With `repo` unset, gh resolves the repository from the current directory.
    pub async fn repo_info(&self, repo: Option<&str>) -> Result<RepoInfo, GitHubError> {
        let mut args = vec!["repo".to_string(), "view".to_string()];
        if let Some(repo) = repo {
            args.push(repo.to_string());
        }
        args.push("--json".to_string());
        args.push(REPO_VIEW_FIELDS.to_string());

        let raw: RepoViewResponse = self.run_json(&args).await?;
        Ok(raw.into())
    }

    /// Commits on `head` that are not on `base`, oldest first.
    pub async fn branch_commits(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
    ) -> Result<Vec<Commit>, GitHubError> {
        let args = vec![
            "api".to_string(),
            format!("repos/{}/{}/compare/{}...{}", owner, repo, base, head),
            "--jq".to_string(),
            COMPARE_COMMITS_JQ.to_string(),
        ];

        let commits: Vec<Commit> = self.run_json(&args).await?;
        debug!("Found {} commits between {} and {}", commits.len(), base, head);
        Ok(commits)
    }

    /// Login of the authenticated user.
    pub async fn my_login(&self) -> Result<String, GitHubError> {
        let args = vec![
            "api".to_string(),
            "user".to_string(),
            "--jq".to_string(),
            ".login".to_string(),
        ];
        let out = self.run_read(&args).await?;
        Ok(out.trim().to_string())
    }

    /// Open a pull request and return gh's output (the pull request URL).
    ///
    /// Not retried: a failed attempt may still have created the pull request.
    pub async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        params: &CreatePullRequestParams,
    ) -> Result<String, GitHubError> {
        let args = pr_create_args(owner, repo, params)?;
        let out = self.executor.run(&args).await?;
        Ok(out.trim().to_string())
    }

    /// Run a read-only gh call, retrying transient failures.
    async fn run_read(&self, args: &[String]) -> Result<String, GitHubError> {
        retry_transient(|| self.executor.run(args)).await
    }

    async fn run_json<T: DeserializeOwned>(&self, args: &[String]) -> Result<T, GitHubError> {
        let out = self.run_read(args).await?;
        serde_json::from_str(&out)
            .map_err(|e| GitHubError::InvalidJson(format!("{}. Content: {}", e, out.trim())))
    }
}

/// Build the `gh pr create` argument list.
///
/// Base, head and title must be non-empty. `--body`, `--draft` and
/// `--reviewer` are only passed when they carry a value.
pub fn pr_create_args(
    owner: &str,
    repo: &str,
    params: &CreatePullRequestParams,
) -> Result<Vec<String>, GitHubError> {
    if params.base_branch.is_empty() {
        return Err(GitHubError::MissingField("base branch"));
    }
    if params.head_branch.is_empty() {
        return Err(GitHubError::MissingField("head branch"));
    }
    if params.title.is_empty() {
        return Err(GitHubError::MissingField("title"));
    }

    let mut args = vec![
        "pr".to_string(),
        "create".to_string(),
        "--repo".to_string(),
        format!("{}/{}", owner, repo),
        "--base".to_string(),
        params.base_branch.clone(),
        "--head".to_string(),
        params.head_branch.clone(),
        "--title".to_string(),
        params.title.clone(),
    ];

    if !params.body.is_empty() {
        args.push("--body".to_string());
        args.push(params.body.clone());
    }

    if params.is_draft {
        args.push("--draft".to_string());
    }

    if !params.reviewers.is_empty() {
        args.push("--reviewer".to_string());
        args.push(params.reviewers.join(","));
    }

    Ok(args)
}
