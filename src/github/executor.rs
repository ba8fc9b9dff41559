//! GitHub CLI process spawning.
//!
//! All GitHub access goes through the `gh` binary so the user's existing
//! authentication and host configuration are reused.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::error::GitHubError;

/// Default timeout for a single gh invocation.
pub const DEFAULT_GH_TIMEOUT_SECS: u64 = 60;

/// Trait for executing gh commands.
///
/// This abstraction allows mocking the gh subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GhExecutor: Send + Sync {
    /// Run gh with the given arguments and return its stdout.
    async fn run(&self, args: &[String]) -> Result<String, GitHubError>;
}

/// Executor that calls the real gh CLI.
#[derive(Debug, Clone)]
pub struct GhCli {
    timeout: Duration,
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_GH_TIMEOUT_SECS))
    }
}

impl GhCli {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl GhExecutor for GhCli {
    async fn run(&self, args: &[String]) -> Result<String, GitHubError> {
        debug!("gh {}", args.join(" "));
        run_gh(args, self.timeout).await
    }
}

/// Check that the gh CLI is installed and answers `gh --version` within `limit`.
pub async fn check_gh_installed(limit: Duration) -> Result<(), GitHubError> {
    let version = check_program("gh", limit).await?;
    debug!("Using {}", version);
    Ok(())
}

/// Resolve `program` on `PATH` and return the first line of its `--version`.
///
/// A missing binary, or one that fails to run or exits non-zero, is reported
/// as `NotInstalled`. Timeouts are reported as such.
async fn check_program(program: &str, limit: Duration) -> Result<String, GitHubError> {
    let path = which::which(program).map_err(|_| GitHubError::NotInstalled)?;
    let program = path.to_string_lossy();

    match run_program(&program, &["--version".to_string()], limit).await {
        Ok(out) => Ok(out.lines().next().unwrap_or_default().trim().to_string()),
        Err(GitHubError::SpawnFailed(_) | GitHubError::NonZeroExit { .. }) => {
            Err(GitHubError::NotInstalled)
        }
        Err(e) => Err(e),
    }
}

async fn run_gh(args: &[String], limit: Duration) -> Result<String, GitHubError> {
    run_program("gh", args, limit).await
}

/// Run a program, capturing stdout, failing on timeout or non-zero exit.
async fn run_program(program: &str, args: &[String], limit: Duration) -> Result<String, GitHubError> {
    let output = timeout(
        limit,
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output(),
    )
    .await
    .map_err(|_| GitHubError::Timeout(limit.as_secs()))?
    .map_err(GitHubError::SpawnFailed)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let code = output.status.code().unwrap_or(-1);
        return Err(GitHubError::NonZeroExit { code, stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
