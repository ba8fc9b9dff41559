//! Interactive pull request creation.
//!
//! Stages: load repository and branches, pick head and base, pre-fill title
//! and body from the commits between them, edit, pick reviewers, confirm,
//! create, and remember the reviewers for next time.

pub mod options;

use dialoguer::{Confirm, Editor, Input, MultiSelect, Select};
use tracing::warn;

use crate::compose::{ComposedResult, compose};
use crate::error::CreateError;
use crate::git::{list_latest_branches, open_current_repo};
use crate::github::{CreatePullRequestParams, GhClient, GhExecutor, RepoInfo};
use crate::issue::IssueLinker;
use crate::reviewers::ReviewerStore;

use self::options::{
    base_branch_options, format_summary, head_branch_options, reviewer_options,
};

/// Options for the create command, derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// `owner/name`; resolved from the current directory when unset.
    pub repo: Option<String>,
    /// Initial answer of the draft prompt.
    pub draft: bool,
    /// Stop after printing the summary.
    pub dry_run: bool,
}

/// How an interactive create run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The pull request was opened at this URL.
    Created(String),
    /// Dry run: the summary was shown and nothing was created.
    DryRun,
    /// A prompt was cancelled or the final confirmation declined.
    Aborted,
}

/// Fetch the commits between `base` and `head` and pre-fill title and body.
pub async fn prefill<E: GhExecutor>(
    client: &GhClient<E>,
    repo: &RepoInfo,
    base: &str,
    head: &str,
    linker: &IssueLinker,
) -> Result<ComposedResult, CreateError> {
    let commits = client
        .branch_commits(&repo.owner, &repo.name, base, head)
        .await?;
    Ok(compose(&commits, linker))
}

/// Reviewers saved for `repo`. A store failure is logged and treated as none.
pub fn load_saved_reviewers(store: &dyn ReviewerStore, repo: &str) -> Vec<String> {
    match store.get(repo) {
        Ok(reviewers) => reviewers,
        Err(e) => {
            warn!("Could not load saved reviewers: {}", e);
            Vec::new()
        }
    }
}

/// Remember the chosen reviewers. A store failure is logged, not returned.
pub fn save_reviewers(store: &dyn ReviewerStore, repo: &str, reviewers: &[String]) {
    if let Err(e) = store.set(repo, reviewers) {
        warn!("Could not save reviewers: {}", e);
    }
}

/// Run the interactive create flow. Cancelling any prompt ends the run with
/// `CreateOutcome::Aborted` rather than an error.
pub async fn run_create<E: GhExecutor>(
    opts: CreateOptions,
    client: &GhClient<E>,
    store: &dyn ReviewerStore,
    linker: &IssueLinker,
) -> Result<CreateOutcome, CreateError> {
    abort_on_cancel(run_stages(opts, client, store, linker).await)
}

/// Map a cancelled prompt to `CreateOutcome::Aborted`.
fn abort_on_cancel(
    result: Result<CreateOutcome, CreateError>,
) -> Result<CreateOutcome, CreateError> {
    match result {
        Err(CreateError::Cancelled) => Ok(CreateOutcome::Aborted),
        other => other,
    }
}

async fn run_stages<E: GhExecutor>(
    opts: CreateOptions,
    client: &GhClient<E>,
    store: &dyn ReviewerStore,
    linker: &IssueLinker,
) -> Result<CreateOutcome, CreateError> {
    // ── Stage 1: Repository and branches ──
    println!("Loading base information to create a pull request...");
    let repo = client.repo_info(opts.repo.as_deref()).await?;
    let git_repo = open_current_repo()?;
    let branches = list_latest_branches(&git_repo)?;

    // ── Stage 2: Branch selection ──
    let heads = head_branch_options(&branches, &repo.default_branch);
    if heads.is_empty() {
        return Err(CreateError::NoBranches(repo.default_branch.clone()));
    }
    let head = heads[select("Select the head branch", &heads)?].clone();

    let bases = base_branch_options(&branches, &repo.default_branch, &head);
    let base = bases[select("Select the base branch", &bases)?].clone();

    // ── Stage 3: Pre-fill ──
    println!("Loading commits between {} and {}...", base, head);
    let prefilled = prefill(client, &repo, &base, &head, linker).await?;

    // ── Stage 4: Title, body, reviewers, draft ──
    let title = Input::<String>::new()
        .with_prompt("Enter the pull request title")
        .with_initial_text(prefilled.title)
        .allow_empty(false)
        .interact_text()
        .map_err(prompt_error)?;

    let body = edit_body(prefilled.body)?;

    let me = client.my_login().await?;
    let saved = load_saved_reviewers(store, &repo.full_name());
    let reviewer_choices = reviewer_options(&repo.assignable_users, &me, &saved);
    let reviewers = select_reviewers(&reviewer_choices)?;

    let is_draft = Confirm::new()
        .with_prompt("Create as draft?")
        .default(opts.draft)
        .interact()
        .map_err(prompt_error)?;

    let params = CreatePullRequestParams {
        base_branch: base,
        head_branch: head,
        title,
        body,
        reviewers,
        is_draft,
    };

    // ── Stage 5: Confirm and create ──
    println!();
    print!("{}", format_summary(&repo, &params));

    if opts.dry_run {
        return Ok(CreateOutcome::DryRun);
    }

    println!();
    let confirmed = Confirm::new()
        .with_prompt("Create pull request?")
        .default(true)
        .interact()
        .map_err(prompt_error)?;
    if !confirmed {
        return Err(CreateError::Cancelled);
    }

    let url = client
        .create_pull_request(&repo.owner, &repo.name, &params)
        .await?;
    save_reviewers(store, &repo.full_name(), &params.reviewers);

    Ok(CreateOutcome::Created(url))
}

fn select(prompt: &str, items: &[String]) -> Result<usize, CreateError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(prompt_error)?
        .ok_or(CreateError::Cancelled)
}

/// Open the pre-filled body in `$EDITOR`; keep it unchanged if the editor is
/// closed without saving.
fn edit_body(body: String) -> Result<String, CreateError> {
    let edited = Editor::new()
        .extension(".md")
        .edit(&body)
        .map_err(prompt_error)?;
    Ok(edited.unwrap_or(body))
}

fn select_reviewers(choices: &[options::ReviewerOption]) -> Result<Vec<String>, CreateError> {
    if choices.is_empty() {
        return Ok(Vec::new());
    }

    let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
    let defaults: Vec<bool> = choices.iter().map(|c| c.selected).collect();

    let picked = MultiSelect::new()
        .with_prompt("Select reviewers")
        .items(&labels)
        .defaults(&defaults)
        .interact_opt()
        .map_err(prompt_error)?
        .ok_or(CreateError::Cancelled)?;

    Ok(picked.into_iter().map(|i| choices[i].login.clone()).collect())
}

fn prompt_error(e: impl std::fmt::Display) -> CreateError {
    CreateError::Prompt(e.to_string())
}
