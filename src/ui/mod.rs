//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - `scripted` - Pre-recorded answers for driving the workflow in tests
//! - This module - The [`Prompter`] seam and its terminal implementation

use std::io::{self, BufRead, Write};

use crate::error::Result;

pub mod formatter;
pub mod scripted;

pub use formatter::{
    display_error, display_note, display_status, display_success, display_warning,
};
pub use scripted::{Answer, ScriptedPrompter};

/// Typed in a text prompt to clear a pre-filled value
pub const CLEAR_TOKEN: &str = "!";

/// One entry of a selection menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectItem<'a> {
    pub label: &'a str,
    pub hint: &'a str,
}

impl<'a> SelectItem<'a> {
    pub fn new(label: &'a str, hint: &'a str) -> Self {
        SelectItem { label, hint }
    }
}

/// Validator for text prompts; `Err` carries the message shown to the user
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Terminal interaction used by the workflow.
///
/// Every question returns `Ok(None)` when the user cancels.
pub trait Prompter {
    /// Pick one item; returns its index
    fn select(
        &mut self,
        message: &str,
        items: &[SelectItem<'_>],
        default: usize,
    ) -> Result<Option<usize>>;

    /// Free text, re-asked until `validate` accepts it. Empty input keeps `initial`.
    fn input(
        &mut self,
        message: &str,
        initial: &str,
        validate: Validator<'_>,
    ) -> Result<Option<String>>;

    /// Yes/no question
    fn confirm(&mut self, message: &str, default: bool) -> Result<Option<bool>>;

    /// Show a titled block of text
    fn note(&mut self, title: &str, body: &str);

    /// Show a non-blocking warning
    fn warn(&mut self, message: &str);

    /// Show progress information
    fn status(&mut self, message: &str);

    /// Show a success notice
    fn success(&mut self, message: &str);
}

/// Line-based prompter over any reader/writer pair.
///
/// End of input (Ctrl-D) counts as cancellation.
pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter reading stdin and writing stdout
    pub fn stdio() -> Self {
        TerminalPrompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        TerminalPrompter { reader, writer }
    }

    /// Read one trimmed line, `None` on end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        self.writer.flush()?;
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    /// Displays a numbered list and accepts a 1-based index.
    /// Pressing Enter selects the default.
    fn select(
        &mut self,
        message: &str,
        items: &[SelectItem<'_>],
        default: usize,
    ) -> Result<Option<usize>> {
        writeln!(self.writer, "\n{}", console::style(message).bold())?;
        for (i, item) in items.iter().enumerate() {
            if item.hint.is_empty() {
                writeln!(self.writer, "  {}. {}", i + 1, item.label)?;
            } else {
                writeln!(
                    self.writer,
                    "  {}. {} {}",
                    i + 1,
                    item.label,
                    console::style(format!("- {}", item.hint)).dim()
                )?;
            }
        }

        loop {
            write!(
                self.writer,
                "Select (1-{}) [default: {}]: ",
                items.len(),
                default + 1
            )?;
            let Some(selection) = self.read_line()? else {
                return Ok(None);
            };

            if selection.is_empty() {
                return Ok(Some(default));
            }

            // Accept either the number or the label itself
            let index = selection
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .or_else(|| items.iter().position(|item| item.label == selection));

            match index {
                Some(i) if i < items.len() => return Ok(Some(i)),
                _ => writeln!(self.writer, "  Invalid selection '{}'", selection)?,
            }
        }
    }

    fn input(
        &mut self,
        message: &str,
        initial: &str,
        validate: Validator<'_>,
    ) -> Result<Option<String>> {
        loop {
            if initial.is_empty() {
                write!(self.writer, "\n{}: ", message)?;
            } else {
                write!(
                    self.writer,
                    "\n{} [{}] ({} clears): ",
                    message, initial, CLEAR_TOKEN
                )?;
            }

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let value = if line.is_empty() {
                initial.to_string()
            } else if line == CLEAR_TOKEN {
                String::new()
            } else {
                line
            };

            match validate(value.as_str()) {
                Ok(()) => return Ok(Some(value)),
                Err(reason) => writeln!(self.writer, "  {}", console::style(reason).red())?,
            }
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<Option<bool>> {
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            write!(self.writer, "\n{} ({}): ", message, hint)?;
            let Some(response) = self.read_line()? else {
                return Ok(None);
            };

            match response.to_lowercase().as_str() {
                "" => return Ok(Some(default)),
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => writeln!(self.writer, "  Please answer y or n")?,
            }
        }
    }

    fn note(&mut self, title: &str, body: &str) {
        display_note(title, body);
    }

    fn warn(&mut self, message: &str) {
        display_warning(message);
    }

    fn status(&mut self, message: &str) {
        display_status(message);
    }

    fn success(&mut self, message: &str) {
        display_success(message);
    }
}
