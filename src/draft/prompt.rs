//! Prompt text sent to the model and parsing of its reply.

use crate::domain::CommitType;
use crate::draft::{DraftCandidate, DraftOptions};
use crate::error::{GitCommitError, Result};

const SYSTEM_PROMPT: &str = "You are an experienced software engineer who writes \
clear and concise Conventional Commit messages. You answer with a single JSON \
object and nothing else.";

/// Shorten a diff to at most `max_chars` characters, marking the cut.
pub fn truncate_diff(diff: &str, max_chars: usize) -> String {
    if diff.chars().count() <= max_chars {
        return diff.to_string();
    }
    let mut truncated: String = diff.chars().take(max_chars).collect();
    truncated.push_str("\n... [diff truncated]\n");
    truncated
}

/// Build the generation prompt for a staged diff.
pub fn build_prompt(diff: &str, options: &DraftOptions, max_diff_chars: usize) -> String {
    let types: Vec<&str> = match &options.allowed_types {
        Some(allowed) if !allowed.is_empty() => allowed.iter().map(CommitType::as_str).collect(),
        _ => CommitType::ALL.iter().map(CommitType::as_str).collect(),
    };

    format!(
        r#"{system}

Write a commit message for the staged changes below.

Rules:
- "type" must be one of: {types}
- "scope" is optional; if present it is a single word of letters, digits, '-' or '_'
- "description" is an imperative summary in lowercase, without a trailing period, under 60 characters
- set "isBreaking" to true only if the change breaks existing behaviour, and then explain it in "breakingDescription"

Respond with JSON in exactly this shape:
{{"type": "feat", "scope": "parser", "description": "add support for arrays", "isBreaking": false, "breakingDescription": null}}

Staged changes:
{diff}"#,
        system = SYSTEM_PROMPT,
        types = types.join(", "),
        diff = truncate_diff(diff, max_diff_chars),
    )
}

/// Extract the candidate from a model reply.
///
/// Models sometimes wrap the object in prose or code fences, so the first
/// `{` through the last `}` is parsed.
pub fn parse_candidate(response: &str) -> Result<DraftCandidate> {
    let start = response.find('{');
    let end = response.rfind('}');
    let json = match (start, end) {
        (Some(start), Some(end)) if start < end => &response[start..=end],
        _ => {
            return Err(GitCommitError::draft(
                "model response did not contain a JSON object",
            ))
        }
    };

    serde_json::from_str(json)
        .map_err(|e| GitCommitError::draft(format!("malformed model response: {}", e)))
}
