//! The commit workflow state machine.
//!
//! ```text
//! Start -> [probe draft source] -> draft flow | manual flow
//!       -> review -> branch placement -> final confirm -> commit | abort
//! ```
//!
//! The workflow owns no I/O of its own: git, the draft generator and the
//! terminal are all reached through traits.

pub mod form;
pub mod menu;

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::advisory::Advisory;
use crate::config::AiConfig;
use crate::conventional::{build_commit_message, validate, validate_header_length};
use crate::domain::{CommitData, Flags, Placement, PublishPolicy};
use crate::draft::{DraftGenerator, DraftOptions};
use crate::error::{GitCommitError, Result};
use crate::git::Repository;
use crate::ui::Prompter;

pub use form::{run_form, FormSpec, PartialCommit};
pub use menu::{ConfirmAction, MenuChoice, ReviewAction};

/// How a run ended without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The commit was created with this message
    Committed { message: String },
    /// The user cancelled; nothing was committed
    Aborted,
}

/// Time limits for the draft generator calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftTimeouts {
    pub probe: Duration,
    pub generate: Duration,
}

impl From<&AiConfig> for DraftTimeouts {
    fn from(config: &AiConfig) -> Self {
        DraftTimeouts {
            probe: config.probe_timeout(),
            generate: config.generate_timeout(),
        }
    }
}

impl Default for DraftTimeouts {
    fn default() -> Self {
        DraftTimeouts::from(&AiConfig::default())
    }
}

/// A record ready for branch placement
#[derive(Debug)]
struct Resolved {
    data: CommitData,
    /// Typed or edited by the user rather than accepted from a draft
    edited: bool,
}

/// One commit run
pub struct CommitWorkflow<'a, R, G, P> {
    repo: &'a R,
    generator: &'a G,
    prompter: &'a mut P,
    flags: Flags,
    timeouts: DraftTimeouts,
}

impl<'a, R, G, P> CommitWorkflow<'a, R, G, P>
where
    R: Repository,
    G: DraftGenerator,
    P: Prompter,
{
    pub fn new(
        repo: &'a R,
        generator: &'a G,
        prompter: &'a mut P,
        flags: Flags,
        timeouts: DraftTimeouts,
    ) -> Self {
        CommitWorkflow {
            repo,
            generator,
            prompter,
            flags,
            timeouts,
        }
    }

    /// Run the workflow to completion.
    ///
    /// # Returns
    /// * `Ok(Outcome::Committed)` - The message was committed
    /// * `Ok(Outcome::Aborted)` - The user cancelled before committing
    /// * `Err` - Nothing staged, or a git failure
    pub async fn run(mut self) -> Result<Outcome> {
        let diff = self
            .repo
            .staged_diff()?
            .filter(|d| !d.trim().is_empty())
            .ok_or(GitCommitError::NothingStaged)?;
        let reference = self.repo.branch_reference()?;
        info!(
            diff_bytes = diff.len(),
            reference = ?reference,
            flags = ?self.flags,
            "starting commit workflow"
        );

        let Some(resolved) = self.initial_record(&diff, reference.as_deref()).await? else {
            return Ok(self.abort());
        };

        let mut data = resolved.data;
        if let Some(reference) = reference.as_deref() {
            let Some(placement) = self.choose_placement(reference, resolved.edited)? else {
                return Ok(self.abort());
            };
            debug!(placement = %placement, "placing branch reference");
            placement.apply(&mut data, reference);

            // Without -h the reference was not counted while the header was written
            let budgeted = self.flags.pending_header_suffix(Some(reference)).is_some();
            if placement == Placement::Header && !budgeted {
                self.advise_header(&data);
            }
        }

        let Some(data) = self.final_confirm(data)? else {
            return Ok(self.abort());
        };

        let message = build_commit_message(&data);
        self.repo.commit(&message)?;
        info!("commit created");
        self.prompter.success("Committed successfully");
        Ok(Outcome::Committed { message })
    }

    fn abort(&mut self) -> Outcome {
        info!("workflow aborted by user");
        self.prompter.status("Commit cancelled, nothing was committed");
        Outcome::Aborted
    }

    fn form_spec<'s>(&self, header_suffix: Option<&'s str>) -> FormSpec<'s> {
        FormSpec {
            flags: self.flags,
            header_suffix,
        }
    }

    async fn initial_record(
        &mut self,
        diff: &str,
        reference: Option<&str>,
    ) -> Result<Option<Resolved>> {
        let suffix = self.flags.pending_header_suffix(reference);

        if self.flags.no_ai {
            debug!("AI drafting disabled by flag");
            return self.manual(suffix.as_deref());
        }

        if !self.probe().await {
            self.advise(Advisory::DraftSourceUnavailable);
            return self.manual(suffix.as_deref());
        }

        self.draft_flow(diff, suffix.as_deref()).await
    }

    async fn probe(&mut self) -> bool {
        match tokio::time::timeout(self.timeouts.probe, self.generator.is_available()).await {
            Ok(available) => {
                debug!(available, "draft service probe finished");
                available
            }
            Err(_) => {
                debug!(timeout = ?self.timeouts.probe, "draft service probe timed out");
                false
            }
        }
    }

    fn manual(&mut self, suffix: Option<&str>) -> Result<Option<Resolved>> {
        let spec = self.form_spec(suffix);
        let data = run_form(&mut *self.prompter, &spec, None)?;
        Ok(data.map(|data| Resolved { data, edited: true }))
    }

    fn edit(&mut self, data: &CommitData, suffix: Option<&str>) -> Result<Option<Resolved>> {
        let spec = self.form_spec(suffix);
        let data = run_form(&mut *self.prompter, &spec, Some(data))?;
        Ok(data.map(|data| Resolved { data, edited: true }))
    }

    async fn draft_flow(&mut self, diff: &str, suffix: Option<&str>) -> Result<Option<Resolved>> {
        loop {
            let data = match self.generate(diff).await {
                Ok(data) => data,
                Err(e) => {
                    warn!(error = %e, "draft generation failed, falling back to manual entry");
                    self.advise(Advisory::DraftFailed {
                        reason: e.to_string(),
                    });
                    return self.manual(suffix);
                }
            };

            if let Some(advisory) = self.draft_problem(&data) {
                // Never accept a draft that breaks policy or validation
                self.advise(advisory);
                return self.edit(&data, suffix);
            }

            self.preview(&data, suffix);

            let action = menu::choose(
                &mut *self.prompter,
                "What would you like to do?",
                ReviewAction::Accept,
            )?;
            match action {
                None => return Ok(None),
                Some(ReviewAction::Accept) => {
                    return Ok(Some(Resolved {
                        data,
                        edited: false,
                    }))
                }
                Some(ReviewAction::Edit) => return self.edit(&data, suffix),
                Some(ReviewAction::Regenerate) => {
                    debug!("regenerating draft");
                    continue;
                }
                Some(ReviewAction::Manual) => return self.manual(suffix),
            }
        }
    }

    async fn generate(&mut self, diff: &str) -> Result<CommitData> {
        self.prompter.status("Generating commit message...");

        let options = DraftOptions {
            allowed_types: self
                .flags
                .publish
                .then(|| PublishPolicy::ALLOWED.to_vec()),
        };
        let candidate = tokio::time::timeout(
            self.timeouts.generate,
            self.generator.generate(diff, &options),
        )
        .await
        .map_err(|_| {
            GitCommitError::draft(format!(
                "timed out after {}s",
                self.timeouts.generate.as_secs_f32()
            ))
        })??;

        debug!(candidate = ?candidate, "received draft candidate");
        let mut data = candidate.into_commit_data()?;
        if self.flags.no_scope {
            data.scope = None;
        }
        Ok(data)
    }

    /// Why a draft cannot be offered for acceptance as-is
    fn draft_problem(&self, data: &CommitData) -> Option<Advisory> {
        if self.flags.publish && !PublishPolicy::allows(data.r#type) {
            return Some(Advisory::PublishTypeMismatch {
                commit_type: data.r#type.to_string(),
            });
        }
        validate(data).err().map(|e| Advisory::DraftNeedsEdit {
            reason: e.to_string(),
        })
    }

    /// Show the draft with any pre-selected header reference spliced in
    fn preview(&mut self, data: &CommitData, suffix: Option<&str>) {
        let mut provisional = data.clone();
        if let Some(suffix) = suffix {
            provisional.description.push_str(suffix);
        }

        self.advise_header(&provisional);
        self.prompter
            .note("Suggested commit message", &build_commit_message(&provisional));
    }

    fn advise_header(&mut self, data: &CommitData) {
        let header = validate_header_length(data);
        if !header.valid {
            self.advise(Advisory::HeaderTooLong {
                length: header.length,
                limit: header.limit,
            });
        }
    }

    fn choose_placement(&mut self, reference: &str, edited: bool) -> Result<Option<Placement>> {
        if self.flags.branch_in_header && !edited {
            self.prompter
                .status(&format!("Adding branch reference [{}] to the header", reference));
            return Ok(Some(Placement::Header));
        }

        let default = if self.flags.branch_in_header {
            Placement::Header
        } else {
            Placement::None
        };
        menu::choose(
            &mut *self.prompter,
            &format!("Include branch reference '{}'?", reference),
            default,
        )
    }

    fn final_confirm(&mut self, mut data: CommitData) -> Result<Option<CommitData>> {
        loop {
            self.prompter
                .note("Commit message", &build_commit_message(&data));

            let action = menu::choose(
                &mut *self.prompter,
                "Commit with this message?",
                ConfirmAction::Yes,
            )?;
            match action {
                Some(ConfirmAction::Yes) => return Ok(Some(data)),
                Some(ConfirmAction::Edit) => {
                    // Placement already happened; the reference is part of the text now
                    let spec = self.form_spec(None);
                    match run_form(&mut *self.prompter, &spec, Some(&data))? {
                        Some(edited) => data = edited,
                        None => return Ok(None),
                    }
                }
                Some(ConfirmAction::No) | None => return Ok(None),
            }
        }
    }

    fn advise(&mut self, advisory: Advisory) {
        self.prompter.warn(&advisory.to_string());
    }
}
