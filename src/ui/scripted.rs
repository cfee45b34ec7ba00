use std::collections::VecDeque;

use crate::error::Result;
use crate::ui::{Prompter, SelectItem, Validator};

/// A pre-recorded answer for [`ScriptedPrompter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Choose the menu item with this label
    Choose(String),
    /// Type this text; an empty string keeps the pre-filled value
    Text(String),
    /// Answer a yes/no question
    Confirm(bool),
    /// Cancel the current prompt
    Cancel,
}

impl Answer {
    pub fn choose(label: &str) -> Self {
        Answer::Choose(label.to_string())
    }

    pub fn text(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

/// Prompter that replays answers and records everything it was shown.
///
/// Rejected text answers are recorded in `rejections` and the next answer
/// is taken, as a user retyping would. Running out of answers cancels.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    /// Every question asked, in order
    pub questions: Vec<String>,
    /// Validation messages for rejected text answers
    pub rejections: Vec<String>,
    /// Warnings shown
    pub warnings: Vec<String>,
    /// Notes shown, as (title, body)
    pub notes: Vec<(String, String)>,
    /// Status and success lines shown
    pub statuses: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        ScriptedPrompter {
            answers: answers.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Answers not consumed by the run
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, question: &str) -> Option<Answer> {
        self.questions.push(question.to_string());
        self.answers.pop_front()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(
        &mut self,
        message: &str,
        items: &[SelectItem<'_>],
        _default: usize,
    ) -> Result<Option<usize>> {
        match self.next_answer(message) {
            Some(Answer::Choose(label)) => Ok(items.iter().position(|item| item.label == label)),
            _ => Ok(None),
        }
    }

    fn input(
        &mut self,
        message: &str,
        initial: &str,
        validate: Validator<'_>,
    ) -> Result<Option<String>> {
        loop {
            let value = match self.next_answer(message) {
                Some(Answer::Text(text)) if text.is_empty() => initial.to_string(),
                Some(Answer::Text(text)) => text,
                _ => return Ok(None),
            };
            match validate(value.as_str()) {
                Ok(()) => return Ok(Some(value)),
                Err(reason) => self.rejections.push(reason),
            }
        }
    }

    fn confirm(&mut self, message: &str, _default: bool) -> Result<Option<bool>> {
        match self.next_answer(message) {
            Some(Answer::Confirm(value)) => Ok(Some(value)),
            _ => Ok(None),
        }
    }

    fn note(&mut self, title: &str, body: &str) {
        self.notes.push((title.to_string(), body.to_string()));
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn status(&mut self, message: &str) {
        self.statuses.push(message.to_string());
    }

    fn success(&mut self, message: &str) {
        self.statuses.push(message.to_string());
    }
}
