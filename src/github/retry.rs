//! Exponential backoff for read-only gh calls.

use std::future::Future;
use std::time::Duration;

use backoff::ExponentialBackoff;
use backoff::backoff::Backoff;
use tracing::warn;

use crate::error::GitHubError;

/// Configuration: 3 total attempts, base 1s, max 10s.
pub const MAX_ATTEMPTS: u32 = 3;
const INITIAL_INTERVAL_SECS: u64 = 1;
const MAX_INTERVAL_SECS: u64 = 10;

/// Retry a gh call while it fails with a transient error.
///
/// Errors for which `GitHubError::is_transient` holds are retried up to
/// `MAX_ATTEMPTS` times; any other error is returned immediately. When attempts run out the last error
/// is wrapped in `GitHubError::RetriesExhausted`.
pub async fn retry_transient<T, Fut, F>(mut attempt: F) -> Result<T, GitHubError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GitHubError>>,
{
    let mut backoff = ExponentialBackoff {
        initial_interval: Duration::from_secs(INITIAL_INTERVAL_SECS),
        max_interval: Duration::from_secs(MAX_INTERVAL_SECS),
        max_elapsed_time: None,
        ..Default::default()
    };

    let mut attempts = 0;

    loop {
        attempts += 1;

        let err = match attempt().await {
            Ok(value) => return Ok(value),
            Err(e) if !e.is_transient() => return Err(e),
            Err(e) => e,
        };

        if attempts >= MAX_ATTEMPTS {
            return Err(GitHubError::RetriesExhausted(Box::new(err)));
        }

        warn!("gh call failed (attempt {}/{}): {}", attempts, MAX_ATTEMPTS, err);
        if let Some(wait_duration) = backoff.next_backoff() {
            tokio::time::sleep(wait_duration).await;
        }
    }
}
