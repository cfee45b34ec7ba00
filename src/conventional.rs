//! Conventional commit format rules: validation and rendering.
//!
//! Everything here is pure. The workflow calls these functions after each
//! prompt and once more to render the final message.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::domain::{CommitData, CommitType};

/// Maximum header length before an advisory warning is shown
pub const HEADER_LIMIT: usize = 72;

static SCOPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("scope pattern is valid"));

/// Reasons a field or record is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("'{0}' is not a conventional commit type")]
    InvalidType(String),

    #[error("Scope may only contain letters, numbers, '-' and '_'")]
    InvalidScope(String),

    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("Description should not end with a period")]
    TrailingPeriod,

    #[error("Description must be a single line")]
    MultiLineDescription,

    #[error("A breaking change needs a description")]
    MissingBreakingDescription,
}

/// Result of checking a header against [`HEADER_LIMIT`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLength {
    pub valid: bool,
    pub length: usize,
    pub limit: usize,
}

pub fn is_valid_type(commit_type: &str) -> bool {
    CommitType::ALL.iter().any(|t| t.as_str() == commit_type)
}

/// Empty or absent scopes are valid; otherwise `[A-Za-z0-9_-]+` only.
pub fn is_valid_scope(scope: Option<&str>) -> bool {
    match scope {
        None | Some("") => true,
        Some(s) => SCOPE_RE.is_match(s),
    }
}

/// Check a raw description. Emptiness is checked before the trailing period.
///
/// Line breaks and other control characters are rejected; the description
/// has to stay on the header line.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    if description.ends_with('.') {
        return Err(ValidationError::TrailingPeriod);
    }
    if description.chars().any(char::is_control) {
        return Err(ValidationError::MultiLineDescription);
    }
    Ok(())
}

pub fn validate_breaking_description(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        Err(ValidationError::MissingBreakingDescription)
    } else {
        Ok(())
    }
}

/// Validate a whole record, returning the first problem found.
pub fn validate(data: &CommitData) -> Result<(), ValidationError> {
    if !is_valid_scope(data.scope.as_deref()) {
        return Err(ValidationError::InvalidScope(
            data.scope.clone().unwrap_or_default(),
        ));
    }
    validate_description(&data.description)?;
    if data.is_breaking {
        validate_breaking_description(data.breaking_description.as_deref().unwrap_or(""))?;
    }
    Ok(())
}

/// Lowercase the first character, leaving the rest untouched
fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render the first line: `type(scope)!: description`
pub fn render_header(data: &CommitData) -> String {
    let mut header = String::from(data.r#type.as_str());
    if let Some(scope) = data.scope() {
        header.push('(');
        header.push_str(scope);
        header.push(')');
    }
    if data.is_breaking {
        header.push('!');
    }
    header.push_str(": ");
    header.push_str(&lowercase_first(&data.description));
    header
}

/// Measure the rendered header against [`HEADER_LIMIT`].
///
/// Callers planning to splice a reference into the header pass a record
/// whose description already carries the suffix.
pub fn validate_header_length(data: &CommitData) -> HeaderLength {
    let length = render_header(data).chars().count();
    HeaderLength {
        valid: length <= HEADER_LIMIT,
        length,
        limit: HEADER_LIMIT,
    }
}

/// Render the full commit message.
pub fn build_commit_message(data: &CommitData) -> String {
    let mut message = render_header(data);

    if let Some(breaking) = data.breaking_description() {
        message.push_str("\n\nBREAKING CHANGE: ");
        message.push_str(breaking);
    }

    if let Some(footer) = data.footer() {
        message.push_str("\n\n");
        message.push_str(footer);
    }

    message
}
