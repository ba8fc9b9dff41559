//! Title and body pre-population from a commit range.

use crate::issue::{IssueLinker, dedup_refs, extract_issue_refs};

use super::message::{Commit, split_message};

/// Separator placed after each commit in a multi-commit body.
const COMMIT_SEPARATOR: &str = "---";

/// Pre-populated pull request title and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedResult {
    pub title: String,
    pub body: String,
}

/// Build a pull request title and body from the commits in a range.
///
/// - No commits: empty title and body.
/// - One commit: its summary is the title and its description is the body,
///   followed by the issue link section.
/// - Several commits: empty title; the body lists every commit's summary and
///   description separated by `---`, followed by the issue link section.
pub fn compose(commits: &[Commit], linker: &IssueLinker) -> ComposedResult {
    match commits {
        [] => ComposedResult::default(),
        [commit] => compose_single(commit, linker),
        _ => compose_range(commits, linker),
    }
}

/// References from the summary, then from the description, deduplicated.
fn commit_refs(summary: &str, description: &str) -> Vec<String> {
    dedup_refs(
        &extract_issue_refs(summary),
        &extract_issue_refs(description),
    )
}

fn compose_single(commit: &Commit, linker: &IssueLinker) -> ComposedResult {
    let (summary, description) = split_message(&commit.message);
    let refs = commit_refs(summary, description);

    let mut body = String::with_capacity(description.len() + 64 * (refs.len() + 1));
    body.push_str(description);
    body.push_str("\n\n");
    linker.push_heading(&mut body);
    linker.push_links(&mut body, &refs);

    ComposedResult {
        title: summary.to_string(),
        body,
    }
}

/// References are deduplicated within each commit only. A key mentioned by
/// several commits is linked once per commit.
fn compose_range(commits: &[Commit], linker: &IssueLinker) -> ComposedResult {
    let mut links = String::new();
    linker.push_heading(&mut links);

    let mut body = String::new();
    for commit in commits {
        let (summary, description) = split_message(&commit.message);
        linker.push_links(&mut links, &commit_refs(summary, description));

        body.push_str(summary);
        body.push_str("\n\n");
        body.push_str(description);
        body.push('\n');
        body.push_str(COMMIT_SEPARATOR);
        body.push('\n');
    }
    body.push_str(&links);

    ComposedResult {
        title: String::new(),
        body,
    }
}
