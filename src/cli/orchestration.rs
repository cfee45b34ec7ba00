//! Wires configuration, git, the draft generator and the terminal into one
//! commit run.
//!
//! Kept apart from argument parsing so a run can be started without clap.

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::Args;
use crate::config::{load_config, Config};
use crate::domain::Flags;
use crate::draft::OllamaGenerator;
use crate::git::Git2Repository;
use crate::ui::TerminalPrompter;
use crate::workflow::{CommitWorkflow, DraftTimeouts, Outcome};

/// Arguments for one commit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitWorkflowArgs {
    /// Path to custom config file
    pub config_path: Option<String>,

    /// Flags given on the command line
    pub flags: Flags,
}

impl From<&Args> for CommitWorkflowArgs {
    fn from(args: &Args) -> Self {
        CommitWorkflowArgs {
            config_path: args.config.clone(),
            flags: args.flags(),
        }
    }
}

/// Flags for the run: command line flags OR'd with configured defaults
pub fn resolve_flags(args: &CommitWorkflowArgs, config: &Config) -> Flags {
    Flags::from(config.defaults).merge(args.flags)
}

/// Run the commit workflow against the repository in the current directory.
///
/// # Returns
///
/// * `Ok(Outcome)` - Committed, or aborted by the user
/// * `Err` - Configuration, repository or commit failure
pub async fn run_commit_workflow(args: CommitWorkflowArgs) -> Result<Outcome> {
    let config = load_config(args.config_path.as_deref()).context("Error loading config")?;
    let flags = resolve_flags(&args, &config);
    debug!(?flags, model = %config.ai.model, "resolved run settings");

    let repo = Git2Repository::open(".")?;
    let timeouts = DraftTimeouts::from(&config.ai);
    let generator = OllamaGenerator::new(config.ai)?;
    let mut prompter = TerminalPrompter::stdio();

    let outcome = CommitWorkflow::new(&repo, &generator, &mut prompter, flags, timeouts)
        .run()
        .await?;
    Ok(outcome)
}
