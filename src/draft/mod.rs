//! Draft generation: asking a model for a candidate commit record.

pub mod ollama;
pub mod prompt;

pub use ollama::OllamaGenerator;

use std::future::Future;
use std::pin::Pin;

use serde::Deserialize;

use crate::conventional::ValidationError;
use crate::domain::{CommitData, CommitType};
use crate::error::{GitCommitError, Result};

/// Unvalidated commit record as returned by a generator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DraftCandidate {
    #[serde(rename = "type")]
    pub r#type: String,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "isBreaking")]
    pub is_breaking: bool,
    #[serde(default, alias = "breakingDescription")]
    pub breaking_description: Option<String>,
}

impl DraftCandidate {
    /// Convert into a commit record. Fails only when the type is unknown;
    /// other fields are validated later by the workflow.
    pub fn into_commit_data(self) -> Result<CommitData> {
        let r#type: CommitType = self.r#type.parse().map_err(|_| {
            GitCommitError::draft(ValidationError::InvalidType(self.r#type.clone()).to_string())
        })?;

        let scope = self
            .scope
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let breaking_description = self
            .breaking_description
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(CommitData {
            r#type,
            scope,
            description: self.description.trim().to_string(),
            is_breaking: self.is_breaking,
            breaking_description,
            footer: None,
        })
    }
}

/// Per-request generation options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftOptions {
    /// Restrict the drafted type to these values
    pub allowed_types: Option<Vec<CommitType>>,
}

/// Boxed future returned by [`DraftGenerator`] methods
pub type DraftFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Source of drafted commit records
pub trait DraftGenerator: Send + Sync {
    /// Quick reachability check
    fn is_available<'a>(&'a self) -> DraftFuture<'a, bool>;

    /// Draft a commit record for the given staged diff
    fn generate<'a>(
        &'a self,
        diff: &'a str,
        options: &'a DraftOptions,
    ) -> DraftFuture<'a, Result<DraftCandidate>>;
}
