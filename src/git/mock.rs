use crate::error::{GitCommitError, Result};
use crate::git::Repository;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    staged_diff: Option<String>,
    branch: Option<String>,
    commit_error: Option<String>,
    commits: Mutex<Vec<String>>,
}

impl MockRepository {
    /// Create a mock with nothing staged on a detached HEAD
    pub fn new() -> Self {
        MockRepository {
            staged_diff: None,
            branch: None,
            commit_error: None,
            commits: Mutex::new(Vec::new()),
        }
    }

    /// Set the staged diff text
    pub fn with_staged_diff(mut self, diff: impl Into<String>) -> Self {
        self.staged_diff = Some(diff.into());
        self
    }

    /// Set the checked-out branch name
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Make every commit fail with the given reason
    pub fn failing_commit(mut self, reason: impl Into<String>) -> Self {
        self.commit_error = Some(reason.into());
        self
    }

    /// Messages committed so far
    pub fn commits(&self) -> Vec<String> {
        self.commits
            .lock()
            .map(|commits| commits.clone())
            .unwrap_or_default()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn staged_diff(&self) -> Result<Option<String>> {
        Ok(self.staged_diff.clone())
    }

    fn current_branch(&self) -> Result<Option<String>> {
        Ok(self.branch.clone())
    }

    fn commit(&self, message: &str) -> Result<()> {
        if let Some(reason) = &self.commit_error {
            return Err(GitCommitError::commit_failed(reason.clone()));
        }
        if self.staged_diff.is_none() {
            return Err(GitCommitError::NothingStaged);
        }
        if let Ok(mut commits) = self.commits.lock() {
            commits.push(message.to_string());
        }
        Ok(())
    }
}
