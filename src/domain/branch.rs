use std::fmt;

use crate::domain::CommitData;

/// Derive a branch reference from a branch name.
///
/// Returns the text after the first `/` (e.g. `feature/ABC-123` -> `ABC-123`),
/// or `None` when the name has no `/` or nothing follows it.
pub fn branch_reference(branch_name: &str) -> Option<String> {
    let (_, rest) = branch_name.split_once('/')?;
    let rest = rest.trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}

/// Where the branch reference ends up in the commit message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    None,
    Header,
    Footer,
}

impl Placement {
    pub const ALL: [Placement; 3] = [Placement::None, Placement::Header, Placement::Footer];

    pub fn label(&self) -> &'static str {
        match self {
            Placement::None => "none",
            Placement::Header => "header",
            Placement::Footer => "footer",
        }
    }

    /// Apply this placement of `reference` to the commit record.
    pub fn apply(&self, data: &mut CommitData, reference: &str) {
        match self {
            Placement::None => {}
            Placement::Header => {
                data.description = header_with_reference(&data.description, reference);
            }
            Placement::Footer => {
                let line = format!("Refs #{}", reference);
                data.footer = Some(match data.footer() {
                    Some(existing) => format!("{}\n{}", existing, line),
                    None => line,
                });
            }
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The description with ` [<reference>]` appended
pub fn header_with_reference(description: &str, reference: &str) -> String {
    format!("{} [{}]", description, reference)
}
