use thiserror::Error;

/// Unified error type for git-commit-ai operations
#[derive(Error, Debug)]
pub enum GitCommitError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Not a git repository (or any of the parent directories)")]
    NotARepository,

    #[error("No staged changes found. Stage your changes with 'git add' first")]
    NothingStaged,

    #[error("Commit failed: {0}")]
    CommitFailed(String),

    #[error("Draft generation failed: {0}")]
    Draft(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-commit-ai
pub type Result<T> = std::result::Result<T, GitCommitError>;

impl GitCommitError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitCommitError::Config(msg.into())
    }

    /// Create a draft generation error with context
    pub fn draft(msg: impl Into<String>) -> Self {
        GitCommitError::Draft(msg.into())
    }

    /// Create a commit failure with the collaborator's message
    pub fn commit_failed(msg: impl Into<String>) -> Self {
        GitCommitError::CommitFailed(msg.into())
    }
}
