use crate::error::{GitCommitError, Result};
use git2::{DiffFormat, ErrorCode, Repository as Git2Repo};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| match e.code() {
            ErrorCode::NotFound => GitCommitError::NotARepository,
            _ => GitCommitError::Git(e),
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn workdir(&self) -> Result<PathBuf> {
        self.repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| GitCommitError::commit_failed("repository has no working directory"))
    }
}

impl super::Repository for Git2Repository {
    fn staged_diff(&self) -> Result<Option<String>> {
        // An unborn HEAD has no tree; everything in the index is new
        let head_tree = match self.repo.head() {
            Ok(head) => Some(head.peel_to_tree()?),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                None
            }
            Err(e) => return Err(e.into()),
        };

        let index = self.repo.index()?;
        let diff = self
            .repo
            .diff_tree_to_index(head_tree.as_ref(), Some(&index), None)?;

        if diff.deltas().len() == 0 {
            debug!("index matches HEAD, nothing staged");
            return Ok(None);
        }

        let mut patch = String::new();
        diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
            if matches!(line.origin(), '+' | '-' | ' ') {
                patch.push(line.origin());
            }
            patch.push_str(&String::from_utf8_lossy(line.content()));
            true
        })?;

        debug!(
            files = diff.deltas().len(),
            bytes = patch.len(),
            "collected staged diff"
        );
        Ok(Some(patch))
    }

    fn current_branch(&self) -> Result<Option<String>> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => Ok(head.shorthand().map(str::to_string)),
            Ok(_) => Ok(None),
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                // Fresh repository: HEAD still names the branch symbolically
                let head = self.repo.find_reference("HEAD")?;
                Ok(head
                    .symbolic_target()
                    .and_then(|target| target.strip_prefix("refs/heads/"))
                    .map(str::to_string))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn commit(&self, message: &str) -> Result<()> {
        let workdir = self.workdir()?;
        info!(workdir = %workdir.display(), "running git commit");

        let mut child = Command::new("git")
            .args(["commit", "-F", "-"])
            .current_dir(&workdir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| GitCommitError::commit_failed(format!("cannot run git: {}", e)))?;

        // Wait for git before reporting a failed write
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(message.as_bytes()),
            None => Ok(()),
        };

        let output = child.wait_with_output()?;
        if output.status.success() {
            written?;
            return Ok(());
        }
        if let Err(e) = written {
            debug!(error = %e, "git closed stdin before reading the message");
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if stdout.contains("nothing to commit") || stderr.contains("nothing to commit") {
            return Err(GitCommitError::NothingStaged);
        }

        let reason = if stderr.trim().is_empty() {
            stdout.trim().to_string()
        } else {
            stderr.trim().to_string()
        };
        Err(GitCommitError::commit_failed(format!(
            "git exited with code {}: {}",
            output.status.code().unwrap_or(-1),
            reason
        )))
    }
}
