//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the few Git operations
//! the commit workflow needs, allowing the workflow to run against a real
//! repository or an in-memory mock in tests.
//!
//! # Overview
//!
//! - [repository::Git2Repository]: reads the index and branch with `git2` and
//!   commits through the `git` executable so repository hooks run
//! - [mock::MockRepository]: records commits in memory
//!
//! ```rust
//! # use git_commit_ai::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_commit_ai::Result<()> {
//! if let Some(diff) = repo.staged_diff()? {
//!     println!("{} bytes staged", diff.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::branch_reference;
use crate::error::Result;

/// Version-control operations used by the commit workflow
///
/// ## Error Handling
///
/// Implementations map their failures onto [crate::error::GitCommitError]:
/// `NotARepository`, `NothingStaged`, or `CommitFailed` with the reason
/// reported by git (for example a rejecting hook).
pub trait Repository {
    /// Diff of the index against HEAD
    ///
    /// # Returns
    /// * `Ok(Some(diff))` - Patch text of the staged changes
    /// * `Ok(None)` - Nothing is staged
    fn staged_diff(&self) -> Result<Option<String>>;

    /// Name of the checked-out branch, or `None` when HEAD is detached
    fn current_branch(&self) -> Result<Option<String>>;

    /// Create a commit from the staged changes with the given message
    fn commit(&self, message: &str) -> Result<()>;

    /// Reference derived from the current branch (text after the first `/`)
    fn branch_reference(&self) -> Result<Option<String>> {
        Ok(self
            .current_branch()?
            .as_deref()
            .and_then(branch_reference))
    }
}
