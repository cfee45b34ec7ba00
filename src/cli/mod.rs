//! Command line surface.

pub mod orchestration;

use std::ffi::OsString;

use clap::{ArgAction, Parser};

use crate::domain::Flags;

/// Multi-letter short flags and the long forms clap understands
const SHORT_ALIASES: [(&str, &str); 2] = [("-ns", "--no-scope"), ("-nai", "--no-ai")];

#[derive(Debug, Clone, Parser)]
#[command(
    name = "git-commit-ai",
    version,
    about = "Write Conventional Commits with an optional AI-drafted message",
    disable_help_flag = true,
    args_override_self = true
)]
pub struct Args {
    #[arg(short, long, help = "Only offer commit types that trigger a release (feat, fix, perf)")]
    pub publish: bool,

    #[arg(short = 'h', long, help = "Append the branch reference to the header")]
    pub header: bool,

    #[arg(long = "no-scope", help = "Skip the scope prompt [short: -ns]")]
    pub no_scope: bool,

    #[arg(long = "no-ai", help = "Write the message manually without a draft [short: -nai]")]
    pub no_ai: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(long, action = ArgAction::Help, help = "Print help")]
    #[allow(dead_code)]
    help: Option<bool>,
}

impl Args {
    /// Parse the process arguments, accepting `-ns` and `-nai`
    pub fn parse_normalized() -> Self {
        Args::parse_from(normalize_args(std::env::args_os()))
    }

    /// Flags requested on the command line
    pub fn flags(&self) -> Flags {
        Flags {
            publish: self.publish,
            no_scope: self.no_scope,
            branch_in_header: self.header,
            no_ai: self.no_ai,
        }
    }
}

/// Rewrite `-ns`/`-nai` to their long forms.
///
/// Arguments after `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            SHORT_ALIASES
                .iter()
                .find(|(short, _)| arg == *short)
                .map(|(_, long)| OsString::from(*long))
                .unwrap_or(arg)
        })
        .collect()
}
