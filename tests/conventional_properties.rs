// tests/conventional_properties.rs
//! Property tests for the conventional commit format rules.

use git_commit_ai::conventional::{
    build_commit_message, is_valid_scope, render_header, validate, validate_description,
    validate_header_length, ValidationError, HEADER_LIMIT,
};
use git_commit_ai::domain::{CommitData, CommitType};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_type() -> impl Strategy<Value = CommitType> {
    prop::sample::select(CommitType::ALL.to_vec())
}

fn arb_scope() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[A-Za-z0-9_-]{1,20}")
}

/// Single-line descriptions that pass validation
fn arb_description() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9 ]{0,40}[a-z0-9]"
}

fn arb_record() -> impl Strategy<Value = CommitData> {
    (
        arb_type(),
        arb_scope(),
        arb_description(),
        any::<bool>(),
        prop::option::of("[ a-z]{0,20}"),
        prop::option::of("Refs #[A-Z]{3}-[0-9]{1,4}"),
    )
        .prop_map(
            |(r#type, scope, description, is_breaking, breaking_description, footer)| CommitData {
                r#type,
                scope,
                description,
                is_breaking,
                breaking_description,
                footer,
            },
        )
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn scope_charset_is_accepted(scope in "[A-Za-z0-9_-]{1,20}") {
        prop_assert!(is_valid_scope(Some(&scope)));
    }

    #[test]
    fn scope_with_foreign_character_is_rejected(
        scope in "[A-Za-z0-9_-]{1,20}",
        bad in prop::sample::select(vec![' ', '/', '.', ':', '(', ')', '!', '\n']),
        position in any::<prop::sample::Index>(),
    ) {
        let mut chars: Vec<char> = scope.chars().collect();
        chars.insert(position.index(chars.len() + 1), bad);
        let scope: String = chars.into_iter().collect();

        prop_assert!(!is_valid_scope(Some(&scope)));
        let mut data = CommitData::new(CommitType::Fix, "handle null");
        data.scope = Some(scope.clone());
        prop_assert_eq!(validate(&data), Err(ValidationError::InvalidScope(scope)));
    }

    #[test]
    fn description_rules_follow_their_order(description in "[a-zA-Z .]{0,30}") {
        let expected = if description.trim().is_empty() {
            Err(ValidationError::EmptyDescription)
        } else if description.ends_with('.') {
            Err(ValidationError::TrailingPeriod)
        } else {
            Ok(())
        };
        prop_assert_eq!(validate_description(&description), expected);
    }

    #[test]
    fn control_characters_break_the_header_line(
        before in "[a-z]{1,10}",
        control in prop::sample::select(vec!['\n', '\r', '\t', '\u{0}', '\u{1b}']),
        after in "[a-z]{1,10}",
    ) {
        let description = format!("{}{}{}", before, control, after);
        prop_assert_eq!(
            validate_description(&description),
            Err(ValidationError::MultiLineDescription)
        );
    }

    #[test]
    fn header_starts_description_lowercase(
        commit_type in arb_type(),
        scope in arb_scope(),
        description in "[A-Z][a-zA-Z ]{0,30}",
    ) {
        let mut data = CommitData::new(commit_type, description.clone());
        data.scope = scope;

        let header = render_header(&data);
        let (_, rendered) = header.split_once(": ").unwrap();
        let first = description.chars().next().unwrap();
        prop_assert_eq!(rendered.chars().next(), Some(first.to_ascii_lowercase()));
        prop_assert_eq!(&rendered[1..], &description[1..]);
    }

    #[test]
    fn breaking_section_only_when_described(data in arb_record()) {
        let message = build_commit_message(&data);
        let described = data
            .breaking_description
            .as_deref()
            .map(|text| !text.trim().is_empty())
            .unwrap_or(false);
        let expected = usize::from(data.is_breaking && described);

        prop_assert_eq!(message.matches("BREAKING CHANGE:").count(), expected);
        prop_assert_eq!(render_header(&data).contains("!:"), data.is_breaking);
    }

    #[test]
    fn message_opens_with_the_header(data in arb_record()) {
        let message = build_commit_message(&data);
        let header = render_header(&data);

        prop_assert_eq!(message.lines().next(), Some(header.as_str()));
        prop_assert!(!message.ends_with('\n'));
    }

    #[test]
    fn header_length_counts_every_character(
        commit_type in arb_type(),
        scope in arb_scope(),
        is_breaking in any::<bool>(),
        description in "[ -~]{0,90}",
    ) {
        let mut data = CommitData::new(commit_type, description.clone());
        data.scope = scope.clone();
        data.is_breaking = is_breaking;

        let scope_len = scope.map(|s| s.len() + 2).unwrap_or(0);
        let expected = commit_type.as_str().len()
            + scope_len
            + usize::from(is_breaking)
            + 2
            + description.len();

        let header = validate_header_length(&data);
        prop_assert_eq!(header.length, expected);
        prop_assert_eq!(header.limit, HEADER_LIMIT);
        prop_assert_eq!(header.valid, expected <= HEADER_LIMIT);
    }

    #[test]
    fn header_length_counts_characters_not_bytes(
        commit_type in arb_type(),
        description in "\\PC{0,90}",
    ) {
        let data = CommitData::new(commit_type, description);
        let header = validate_header_length(&data);

        prop_assert_eq!(header.length, render_header(&data).chars().count());
        prop_assert_eq!(header.valid, header.length <= HEADER_LIMIT);
    }
}
