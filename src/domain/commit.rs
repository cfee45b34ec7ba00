use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of conventional commit types, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
    Revert,
}

impl CommitType {
    /// All types in the order they are offered to the user
    pub const ALL: [CommitType; 11] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Perf,
        CommitType::Test,
        CommitType::Build,
        CommitType::Ci,
        CommitType::Chore,
        CommitType::Revert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Chore => "chore",
            CommitType::Revert => "revert",
        }
    }

    /// Short hint shown next to the type in selection menus
    pub fn hint(&self) -> &'static str {
        match self {
            CommitType::Feat => "A new feature",
            CommitType::Fix => "A bug fix",
            CommitType::Docs => "Documentation only changes",
            CommitType::Style => "Formatting, whitespace, missing semicolons",
            CommitType::Refactor => "A code change that neither fixes a bug nor adds a feature",
            CommitType::Perf => "A code change that improves performance",
            CommitType::Test => "Adding or correcting tests",
            CommitType::Build => "Build system or external dependency changes",
            CommitType::Ci => "CI configuration changes",
            CommitType::Chore => "Other changes that don't modify src or test files",
            CommitType::Revert => "Reverts a previous commit",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        CommitType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| format!("unknown commit type '{}'", s.trim()))
    }
}

/// The commit record threaded through the workflow.
///
/// Created fresh for each run and mutated in place by edits and branch
/// reference placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitData {
    pub r#type: CommitType,
    pub scope: Option<String>,
    pub description: String,
    pub is_breaking: bool,
    pub breaking_description: Option<String>,
    pub footer: Option<String>,
}

impl CommitData {
    /// Create a non-breaking commit with no scope or footer
    pub fn new(r#type: CommitType, description: impl Into<String>) -> Self {
        CommitData {
            r#type,
            scope: None,
            description: description.into(),
            is_breaking: false,
            breaking_description: None,
            footer: None,
        }
    }

    /// Scope with empty strings treated as absent
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref().filter(|s| !s.is_empty())
    }

    /// Footer with empty strings treated as absent
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref().filter(|s| !s.is_empty())
    }

    /// Breaking-change text, only when the commit is marked breaking
    pub fn breaking_description(&self) -> Option<&str> {
        if !self.is_breaking {
            return None;
        }
        self.breaking_description
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commit_type() {
        assert_eq!("feat".parse::<CommitType>(), Ok(CommitType::Feat));
        assert_eq!(" Fix ".parse::<CommitType>(), Ok(CommitType::Fix));
        assert!("feature".parse::<CommitType>().is_err());
    }

    #[test]
    fn test_all_types_round_trip_through_display() {
        for t in CommitType::ALL {
            assert_eq!(t.to_string().parse::<CommitType>(), Ok(t));
        }
    }

    #[test]
    fn test_empty_scope_is_absent() {
        let mut data = CommitData::new(CommitType::Docs, "update readme");
        data.scope = Some(String::new());
        assert_eq!(data.scope(), None);
    }

    #[test]
    fn test_breaking_description_ignored_when_not_breaking() {
        let mut data = CommitData::new(CommitType::Feat, "add api");
        data.breaking_description = Some("old api removed".to_string());
        assert_eq!(data.breaking_description(), None);

        data.is_breaking = true;
        assert_eq!(data.breaking_description(), Some("old api removed"));
    }
}
