//! Shapes of the JSON returned by gh.

use serde::Deserialize;

/// A user that can be requested for review.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssignableUser {
    #[serde(default)]
    pub id: String,
    pub login: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RepoOwner {
    login: String,
}

#[derive(Debug, Clone, Deserialize)]
struct DefaultBranchRef {
    name: String,
}

/// Raw `gh repo view --json assignableUsers,defaultBranchRef,owner,name` output.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RepoViewResponse {
    #[serde(default)]
    assignable_users: Vec<AssignableUser>,
    default_branch_ref: DefaultBranchRef,
    owner: RepoOwner,
    name: String,
}

/// Repository metadata needed to open a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    pub owner: String,
    pub name: String,
    pub default_branch: String,
    pub assignable_users: Vec<AssignableUser>,
}

impl RepoInfo {
    /// `owner/name`, as used by `gh --repo` and the reviewer store.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl From<RepoViewResponse> for RepoInfo {
    fn from(raw: RepoViewResponse) -> Self {
        Self {
            owner: raw.owner.login,
            name: raw.name,
            default_branch: raw.default_branch_ref.name,
            assignable_users: raw.assignable_users,
        }
    }
}

/// Parameters for `gh pr create`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatePullRequestParams {
    pub base_branch: String,
    pub head_branch: String,
    pub title: String,
    pub body: String,
    pub reviewers: Vec<String>,
    pub is_draft: bool,
}
