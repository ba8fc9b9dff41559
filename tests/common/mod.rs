//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use git2::{Oid, Repository, Signature, Time};

use lazypr::Commit;
use lazypr::error::GitHubError;
use lazypr::github::GhExecutor;

/// Create a temporary directory for test output.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Build a commit record with a fixed sha and author.
pub fn commit(message: &str) -> Commit {
    Commit {
        sha: "0123456789abcdef".to_string(),
        message: message.to_string(),
        author: "Test User".to_string(),
    }
}

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    /// Create a commit on HEAD at the given unix time. Returns the commit OID.
    pub fn commit_at(&self, message: &str, seconds: i64) -> Oid {
        let sig = Signature::new("Test User", "test@example.com", &Time::new(seconds, 0))
            .expect("Failed to create signature");

        let file_path = self.dir.path().join("test.txt");
        std::fs::write(&file_path, format!("{}\n{}", message, seconds))
            .expect("Failed to write test file");

        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(std::path::Path::new("test.txt"))
            .expect("Failed to add file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a branch pointing to the given OID.
    pub fn branch(&self, name: &str, oid: Oid) {
        let commit = self.repo.find_commit(oid).expect("Failed to find commit");
        self.repo
            .branch(name, &commit, false)
            .expect("Failed to create branch");
    }

    /// Name of the branch HEAD points at.
    pub fn head_branch(&self) -> String {
        self.repo
            .head()
            .ok()
            .and_then(|h| h.shorthand().map(String::from))
            .unwrap_or_else(|| "master".to_string())
    }
}

/// A gh executor that replays canned responses and records the calls it saw.
pub struct FakeGh {
    responses: Mutex<Vec<Result<String, GitHubError>>>,
    pub calls: Mutex<Vec<Vec<String>>>,
}

impl FakeGh {
    /// Responses are returned in order, one per call.
    pub fn new(responses: Vec<Result<String, GitHubError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().rev().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

#[async_trait]
impl GhExecutor for FakeGh {
    async fn run(&self, args: &[String]) -> Result<String, GitHubError> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(args.to_vec());
        self.responses
            .lock()
            .expect("responses lock poisoned")
            .pop()
            .unwrap_or_else(|| panic!("unexpected gh call: {:?}", args))
    }
}

#[async_trait]
impl<'a> GhExecutor for &'a FakeGh {
    async fn run(&self, args: &[String]) -> Result<String, GitHubError> {
        (**self).run(args).await
    }
}
