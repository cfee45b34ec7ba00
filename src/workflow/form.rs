//! The commit form, shared by manual entry and every edit.
//!
//! One code path collects all fields. Creating and editing differ only in
//! the initial values, and the flags decide which prompts are skipped.

use crate::advisory::Advisory;
use crate::conventional::{
    is_valid_scope, validate_breaking_description, validate_description, validate_header_length,
    HeaderLength, ValidationError,
};
use crate::domain::{CommitData, CommitType, Flags, PublishPolicy};
use crate::error::Result;
use crate::ui::{Prompter, SelectItem};

/// Typed in the footer prompt to start a new line
pub const FOOTER_NEWLINE: &str = "\\n";

/// How the form is run
#[derive(Debug, Clone, Copy)]
pub struct FormSpec<'a> {
    pub flags: Flags,
    /// Text that will be appended to the description in the header later
    pub header_suffix: Option<&'a str>,
}

/// Fields collected so far, passed explicitly to later validators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialCommit {
    pub r#type: Option<CommitType>,
    pub scope: Option<String>,
    pub is_breaking: bool,
}

impl PartialCommit {
    /// Header length for `description` given the fields collected so far.
    ///
    /// `None` until a type has been chosen.
    pub fn header_length(&self, description: &str, suffix: Option<&str>) -> Option<HeaderLength> {
        let r#type = self.r#type?;
        let description = format!("{}{}", description, suffix.unwrap_or(""));
        let mut probe = CommitData::new(r#type, description);
        probe.scope = self.scope.clone();
        probe.is_breaking = self.is_breaking;
        Some(validate_header_length(&probe))
    }
}

pub fn validate_scope_field(scope: &str) -> std::result::Result<(), String> {
    if is_valid_scope(Some(scope)) {
        Ok(())
    } else {
        Err(ValidationError::InvalidScope(scope.to_string()).to_string())
    }
}

pub fn validate_description_field(description: &str) -> std::result::Result<(), String> {
    validate_description(description).map_err(|e| e.to_string())
}

pub fn validate_breaking_field(
    partial: &PartialCommit,
    text: &str,
) -> std::result::Result<(), String> {
    if !partial.is_breaking {
        return Ok(());
    }
    validate_breaking_description(text).map_err(|e| e.to_string())
}

/// Run the form. Returns `Ok(None)` if the user cancels any prompt.
pub fn run_form<P: Prompter>(
    prompter: &mut P,
    spec: &FormSpec<'_>,
    initial: Option<&CommitData>,
) -> Result<Option<CommitData>> {
    let mut partial = PartialCommit::default();

    let will_publish = if spec.flags.publish {
        true
    } else {
        let default = initial.map(|d| PublishPolicy::allows(d.r#type)).unwrap_or(false);
        match prompter.confirm("Will this commit trigger a release?", default)? {
            Some(answer) => answer,
            None => return Ok(None),
        }
    };

    let types = PublishPolicy::type_options(will_publish);
    let items: Vec<SelectItem<'_>> = types
        .iter()
        .map(|t| SelectItem::new(t.as_str(), t.hint()))
        .collect();
    let default_type = initial
        .and_then(|d| types.iter().position(|t| *t == d.r#type))
        .unwrap_or(0);
    let selection = prompter.select("Select the type of change", &items, default_type)?;
    let Some(type_index) = selection else {
        return Ok(None);
    };
    let Some(&commit_type) = types.get(type_index) else {
        return Ok(None);
    };
    partial.r#type = Some(commit_type);

    if !spec.flags.no_scope {
        let initial_scope = initial.and_then(CommitData::scope).unwrap_or("");
        let answer = prompter.input("Scope (optional)", initial_scope, &validate_scope_field)?;
        let Some(scope) = answer else {
            return Ok(None);
        };
        partial.scope = Some(scope).filter(|s| !s.is_empty());
    }

    let initial_description = initial.map(|d| d.description.as_str()).unwrap_or("");
    let answer = prompter.input(
        "Short description",
        initial_description,
        &validate_description_field,
    )?;
    let Some(description) = answer else {
        return Ok(None);
    };

    let mut warned = false;
    if let Some(header) = partial.header_length(&description, spec.header_suffix) {
        if !header.valid {
            warn_header(prompter, header);
            warned = true;
        }
    }

    let initial_breaking = initial.map(|d| d.is_breaking).unwrap_or(false);
    let Some(is_breaking) = prompter.confirm("Is this a breaking change?", initial_breaking)? else {
        return Ok(None);
    };
    partial.is_breaking = is_breaking;

    let breaking_description = if is_breaking {
        let initial_text = initial
            .and_then(|d| d.breaking_description.as_deref())
            .unwrap_or("");
        let validate = |s: &str| validate_breaking_field(&partial, s);
        let Some(text) = prompter.input("Describe the breaking change", initial_text, &validate)?
        else {
            return Ok(None);
        };
        Some(text)
    } else {
        None
    };

    let initial_footer = initial
        .and_then(CommitData::footer)
        .map(|f| f.replace('\n', FOOTER_NEWLINE))
        .unwrap_or_default();
    let accept = |_: &str| -> std::result::Result<(), String> { Ok(()) };
    let Some(footer) = prompter.input(
        "Footer (optional, \\n starts a new line)",
        &initial_footer,
        &accept,
    )?
    else {
        return Ok(None);
    };
    let footer = footer.replace(FOOTER_NEWLINE, "\n");

    let data = CommitData {
        r#type: commit_type,
        scope: partial.scope.clone(),
        description,
        is_breaking,
        breaking_description,
        footer: Some(footer).filter(|f| !f.trim().is_empty()),
    };

    // The breaking marker can push a header over the limit after the fact
    if !warned {
        if let Some(header) = partial.header_length(&data.description, spec.header_suffix) {
            if !header.valid {
                warn_header(prompter, header);
            }
        }
    }

    Ok(Some(data))
}

fn warn_header<P: Prompter>(prompter: &mut P, header: HeaderLength) {
    let advisory = Advisory::HeaderTooLong {
        length: header.length,
        limit: header.limit,
    };
    prompter.warn(&advisory.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{Answer, ScriptedPrompter};

    fn spec(flags: Flags) -> FormSpec<'static> {
        FormSpec {
            flags,
            header_suffix: None,
        }
    }

    #[test]
    fn test_manual_entry_collects_all_fields() {
        let mut prompter = ScriptedPrompter::new([
            Answer::Confirm(false),
            Answer::choose("feat"),
            Answer::text("parser"),
            Answer::text("Add ability to parse arrays"),
            Answer::Confirm(true),
            Answer::text("arrays are now parsed differently"),
            Answer::text("Refs #ABC-123"),
        ]);

        let data = run_form(&mut prompter, &spec(Flags::default()), None)
            .unwrap()
            .unwrap();

        assert_eq!(data.r#type, CommitType::Feat);
        assert_eq!(data.scope.as_deref(), Some("parser"));
        assert_eq!(data.description, "Add ability to parse arrays");
        assert!(data.is_breaking);
        assert_eq!(
            data.breaking_description.as_deref(),
            Some("arrays are now parsed differently")
        );
        assert_eq!(data.footer.as_deref(), Some("Refs #ABC-123"));
    }

    #[test]
    fn test_invalid_answers_block_until_corrected() {
        let mut prompter = ScriptedPrompter::new([
            Answer::Confirm(false),
            Answer::choose("fix"),
            Answer::text("bad scope"),
            Answer::text("core"),
            Answer::text(""),
            Answer::text("Fix bug."),
            Answer::text("fix bug"),
            Answer::Confirm(false),
            Answer::text(""),
        ]);

        let data = run_form(&mut prompter, &spec(Flags::default()), None)
            .unwrap()
            .unwrap();

        assert_eq!(data.scope.as_deref(), Some("core"));
        assert_eq!(data.description, "fix bug");
        assert_eq!(
            prompter.rejections,
            vec![
                ValidationError::InvalidScope("bad scope".into()).to_string(),
                ValidationError::EmptyDescription.to_string(),
                ValidationError::TrailingPeriod.to_string(),
            ]
        );
    }

    #[test]
    fn test_flags_skip_publish_and_scope_prompts() {
        let flags = Flags {
            publish: true,
            no_scope: true,
            ..Flags::default()
        };
        let mut prompter = ScriptedPrompter::new([
            Answer::choose("perf"),
            Answer::text("cache parsed headers"),
            Answer::Confirm(false),
            Answer::text(""),
        ]);

        let data = run_form(&mut prompter, &spec(flags), None).unwrap().unwrap();
        assert_eq!(data.r#type, CommitType::Perf);
        assert_eq!(data.scope, None);
        assert!(!prompter
            .questions
            .iter()
            .any(|q| q.contains("release") || q.contains("Scope")));
    }

    #[test]
    fn test_publish_hides_non_release_types() {
        let flags = Flags {
            publish: true,
            ..Flags::default()
        };
        // "docs" is not offered, so choosing it cancels the scripted menu
        let mut prompter = ScriptedPrompter::new([Answer::choose("docs")]);
        assert_eq!(run_form(&mut prompter, &spec(flags), None).unwrap(), None);
    }

    #[test]
    fn test_edit_keeps_initial_values() {
        let mut initial = CommitData::new(CommitType::Docs, "update readme");
        initial.scope = Some("guide".to_string());
        initial.footer = Some("Refs #1\nRefs #2".to_string());

        let mut prompter = ScriptedPrompter::new([
            Answer::Confirm(false),
            Answer::choose("docs"),
            Answer::text(""),
            Answer::text(""),
            Answer::Confirm(false),
            Answer::text(""),
        ]);

        let data = run_form(&mut prompter, &spec(Flags::default()), Some(&initial))
            .unwrap()
            .unwrap();
        assert_eq!(data, initial);
    }

    #[test]
    fn test_cancel_aborts_form() {
        let mut prompter = ScriptedPrompter::new([
            Answer::Confirm(false),
            Answer::choose("feat"),
            Answer::Cancel,
        ]);
        assert_eq!(
            run_form(&mut prompter, &spec(Flags::default()), None).unwrap(),
            None
        );
    }

    #[test]
    fn test_long_header_warns_but_continues() {
        let long = "a".repeat(70);
        let mut prompter = ScriptedPrompter::new([
            Answer::Confirm(false),
            Answer::choose("refactor"),
            Answer::text(""),
            Answer::text(&long),
            Answer::Confirm(false),
            Answer::text(""),
        ]);

        let data = run_form(&mut prompter, &spec(Flags::default()), None)
            .unwrap()
            .unwrap();
        assert_eq!(data.description, long);
        assert_eq!(prompter.warnings.len(), 1);
        assert!(prompter.warnings[0].contains("80 characters"));
    }

    #[test]
    fn test_header_suffix_counts_toward_limit() {
        // "fix: " + 60 chars = 65, plus " [ABC-123]" = 75
        let description = "b".repeat(60);
        let mut prompter = ScriptedPrompter::new([
            Answer::Confirm(false),
            Answer::choose("fix"),
            Answer::text(""),
            Answer::text(&description),
            Answer::Confirm(false),
            Answer::text(""),
        ]);
        let spec = FormSpec {
            flags: Flags::default(),
            header_suffix: Some(" [ABC-123]"),
        };

        run_form(&mut prompter, &spec, None).unwrap().unwrap();
        assert_eq!(prompter.warnings.len(), 1);
        assert!(prompter.warnings[0].contains("75 characters"));
    }

    #[test]
    fn test_breaking_marker_can_trigger_warning() {
        // "fix: " + 67 = 72 exactly; "fix!: " pushes it to 73
        let description = "c".repeat(67);
        let mut prompter = ScriptedPrompter::new([
            Answer::Confirm(false),
            Answer::choose("fix"),
            Answer::text(""),
            Answer::text(&description),
            Answer::Confirm(true),
            Answer::text("callers must migrate"),
            Answer::text(""),
        ]);

        run_form(&mut prompter, &spec(Flags::default()), None)
            .unwrap()
            .unwrap();
        assert_eq!(prompter.warnings.len(), 1);
        assert!(prompter.warnings[0].contains("73 characters"));
    }

    #[test]
    fn test_footer_newline_escape() {
        let mut prompter = ScriptedPrompter::new([
            Answer::Confirm(false),
            Answer::choose("chore"),
            Answer::text(""),
            Answer::text("bump deps"),
            Answer::Confirm(false),
            Answer::text("Refs #1\\nRefs #2"),
        ]);

        let data = run_form(&mut prompter, &spec(Flags::default()), None)
            .unwrap()
            .unwrap();
        assert_eq!(data.footer.as_deref(), Some("Refs #1\nRefs #2"));
    }

    #[test]
    fn test_field_validators_need_only_the_value() {
        assert_eq!(validate_scope_field("api-v2"), Ok(()));
        assert_eq!(validate_scope_field(""), Ok(()));
        assert!(validate_scope_field("api/v2").is_err());

        assert_eq!(validate_description_field("handle null"), Ok(()));
        assert_eq!(
            validate_description_field("handle null\nand more"),
            Err("Description must be a single line".to_string())
        );
    }

    #[test]
    fn test_multi_line_initial_description_is_rejected() {
        let initial = CommitData::new(CommitType::Fix, "handle null\nand more details");
        let mut prompter = ScriptedPrompter::new([
            Answer::Confirm(false),
            Answer::choose("fix"),
            Answer::text(""),
            Answer::text(""),
            Answer::text("handle null"),
            Answer::Confirm(false),
            Answer::text(""),
        ]);

        let data = run_form(&mut prompter, &spec(Flags::default()), Some(&initial))
            .unwrap()
            .unwrap();
        assert_eq!(data.description, "handle null");
        assert_eq!(
            prompter.rejections,
            vec!["Description must be a single line".to_string()]
        );
    }
}
