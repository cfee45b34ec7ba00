pub mod advisory;
pub mod cli;
pub mod config;
pub mod conventional;
pub mod domain;
pub mod draft;
pub mod error;
pub mod git;
pub mod ui;
pub mod workflow;

pub use error::{GitCommitError, Result};
