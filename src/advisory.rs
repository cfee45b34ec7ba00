use std::fmt;

/// Non-fatal conditions reported to the user while the workflow continues.
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// Rendered header is longer than the recommended limit
    HeaderTooLong { length: usize, limit: usize },
    /// The draft generator could not be reached
    DraftSourceUnavailable,
    /// Draft generation failed; manual entry takes over
    DraftFailed { reason: String },
    /// Drafted type is not allowed for a publishing commit
    PublishTypeMismatch { commit_type: String },
    /// Drafted fields failed validation and need editing
    DraftNeedsEdit { reason: String },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::HeaderTooLong { length, limit } => write!(
                f,
                "Header is {} characters long ({} over the recommended {})",
                length,
                length.saturating_sub(*limit),
                limit
            ),
            Advisory::DraftSourceUnavailable => {
                write!(f, "AI draft service is not reachable, switching to manual entry")
            }
            Advisory::DraftFailed { reason } => write!(
                f,
                "Could not generate a draft ({}), switching to manual entry",
                reason
            ),
            Advisory::PublishTypeMismatch { commit_type } => write!(
                f,
                "Drafted type '{}' does not trigger a release, please pick feat, fix or perf",
                commit_type
            ),
            Advisory::DraftNeedsEdit { reason } => {
                write!(f, "Draft needs changes before it can be used: {}", reason)
            }
        }
    }
}
