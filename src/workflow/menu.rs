use crate::domain::Placement;
use crate::error::Result;
use crate::ui::{Prompter, SelectItem};

/// A fixed set of menu options
pub trait MenuChoice: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    fn hint(&self) -> &'static str {
        ""
    }
}

/// Ask the user to pick one of `T::ALL`. `Ok(None)` on cancel.
pub fn choose<T: MenuChoice, P: Prompter>(
    prompter: &mut P,
    message: &str,
    default: T,
) -> Result<Option<T>>
where
    T: PartialEq,
{
    let items: Vec<SelectItem<'_>> = T::ALL
        .iter()
        .map(|choice| SelectItem::new(choice.label(), choice.hint()))
        .collect();
    let default_index = T::ALL.iter().position(|c| *c == default).unwrap_or(0);

    Ok(prompter
        .select(message, &items, default_index)?
        .and_then(|i| T::ALL.get(i).copied()))
}

/// Actions offered for a drafted message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Accept,
    Edit,
    Regenerate,
    Manual,
}

impl MenuChoice for ReviewAction {
    const ALL: &'static [Self] = &[
        ReviewAction::Accept,
        ReviewAction::Edit,
        ReviewAction::Regenerate,
        ReviewAction::Manual,
    ];

    fn label(&self) -> &'static str {
        match self {
            ReviewAction::Accept => "accept",
            ReviewAction::Edit => "edit",
            ReviewAction::Regenerate => "regenerate",
            ReviewAction::Manual => "manual",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            ReviewAction::Accept => "Use this message",
            ReviewAction::Edit => "Adjust the suggested fields",
            ReviewAction::Regenerate => "Ask for a new suggestion",
            ReviewAction::Manual => "Write the message yourself",
        }
    }
}

/// Answers to the final "commit with this message?" question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Yes,
    Edit,
    No,
}

impl MenuChoice for ConfirmAction {
    const ALL: &'static [Self] = &[ConfirmAction::Yes, ConfirmAction::Edit, ConfirmAction::No];

    fn label(&self) -> &'static str {
        match self {
            ConfirmAction::Yes => "yes",
            ConfirmAction::Edit => "edit",
            ConfirmAction::No => "no",
        }
    }
}

impl MenuChoice for Placement {
    const ALL: &'static [Self] = &Placement::ALL;

    fn label(&self) -> &'static str {
        Placement::label(self)
    }

    fn hint(&self) -> &'static str {
        match self {
            Placement::None => "Leave the reference out",
            Placement::Header => "Append [REF] to the description",
            Placement::Footer => "Add a 'Refs #REF' footer line",
        }
    }
}
