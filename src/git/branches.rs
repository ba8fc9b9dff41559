//! Local branch listing.

use chrono::{DateTime, TimeZone, Utc};
use git2::{BranchType, Repository};

use crate::error::GitError;

/// A local branch and the commit it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchInfo {
    pub name: String,
    pub commit: String,
    /// Author date of the branch tip.
    pub date: DateTime<Utc>,
}

/// Open the repository containing the current directory.
pub fn open_current_repo() -> Result<Repository, GitError> {
    Repository::discover(".").map_err(GitError::OpenRepository)
}

/// List local branches, most recently committed first.
///
/// Ordering uses the committer time of each branch tip; ties are broken by
/// branch name.
pub fn list_latest_branches(repo: &Repository) -> Result<Vec<BranchInfo>, GitError> {
    let mut entries: Vec<(i64, BranchInfo)> = Vec::new();

    for item in repo
        .branches(Some(BranchType::Local))
        .map_err(GitError::ListBranches)?
    {
        let (branch, _) = item.map_err(GitError::ListBranches)?;
        let name = branch
            .name()
            .map_err(GitError::ListBranches)?
            .ok_or(GitError::InvalidBranchName)?
            .to_string();

        let commit = branch
            .get()
            .peel_to_commit()
            .map_err(|e| GitError::BranchCommit(name.clone(), e))?;

        let committed_at = commit.committer().when().seconds();
        let date = commit_date(&name, commit.author().when().seconds())?;

        entries.push((
            committed_at,
            BranchInfo {
                name,
                commit: commit.id().to_string(),
                date,
            },
        ));
    }

    entries.sort_by(|(a_time, a), (b_time, b)| b_time.cmp(a_time).then_with(|| a.name.cmp(&b.name)));

    Ok(entries.into_iter().map(|(_, info)| info).collect())
}

fn commit_date(branch: &str, seconds: i64) -> Result<DateTime<Utc>, GitError> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| GitError::InvalidCommitTime(branch.to_string(), seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_date_in_range() {
        let date = commit_date("main", 1_700_000_000).unwrap();
        assert_eq!(date.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_commit_date_out_of_range_is_an_error() {
        let result = commit_date("main", i64::MAX);
        assert!(matches!(
            result,
            Err(GitError::InvalidCommitTime(ref branch, i64::MAX)) if branch == "main"
        ));
    }
}
