//! Run-time flags and the publish policy derived from them.
//!
//! Flags are resolved once when a run starts and never change afterwards.
//! They only decide which prompts are shown or skipped.

use crate::domain::branch::header_with_reference;
use crate::domain::CommitType;

/// Flags controlling a single commit run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// Commit will trigger a release; restricts types to [`PublishPolicy`]
    pub publish: bool,
    /// Skip the scope prompt and clear any drafted scope
    pub no_scope: bool,
    /// Put the branch reference in the header when the draft was not edited
    pub branch_in_header: bool,
    /// Skip the draft generator and go straight to manual entry
    pub no_ai: bool,
}

impl Flags {
    /// Combine two flag sets; a flag is set if either side sets it
    pub fn merge(self, other: Flags) -> Flags {
        Flags {
            publish: self.publish || other.publish,
            no_scope: self.no_scope || other.no_scope,
            branch_in_header: self.branch_in_header || other.branch_in_header,
            no_ai: self.no_ai || other.no_ai,
        }
    }

    /// Header suffix to budget for before the placement decision is made.
    ///
    /// Only header placement pre-selected by flag is known in advance.
    pub fn pending_header_suffix(&self, reference: Option<&str>) -> Option<String> {
        match reference {
            Some(r) if self.branch_in_header => Some(header_with_reference("", r)),
            _ => None,
        }
    }
}

/// Commit types that imply a version bump
pub struct PublishPolicy;

impl PublishPolicy {
    pub const ALLOWED: [CommitType; 3] = [CommitType::Feat, CommitType::Fix, CommitType::Perf];

    pub fn allows(commit_type: CommitType) -> bool {
        Self::ALLOWED.contains(&commit_type)
    }

    /// Type options offered to the user, in menu order
    pub fn type_options(will_publish: bool) -> Vec<CommitType> {
        if will_publish {
            Self::ALLOWED.to_vec()
        } else {
            CommitType::ALL.to_vec()
        }
    }
}
