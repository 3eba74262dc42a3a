#![allow(async_fn_in_trait)]

use std::path::PathBuf;
use std::process::ExitStatus;

use anyhow::Context;
use anyhow::Result;
#[cfg(test)]
use mockall::automock;
use tokio::process::Command;

// -----------------------------------------------------------------------------
// GitOps trait

/// Operations for interacting with Git.
///
/// Every operation reports the child process's [`ExitStatus`]; an `Err`
/// means the git binary could not be run at all. Callers decide what a
/// non-zero status means.
#[cfg_attr(test, automock)]
pub trait GitOps {
    /// Stage every change in the working tree: additions, modifications and
    /// deletions.
    async fn stage_all(&self) -> Result<ExitStatus>;

    /// Create a commit from the currently staged changes.
    async fn commit(&self, message: &str) -> Result<ExitStatus>;

    /// Push the current branch to its configured upstream.
    async fn push(&self) -> Result<ExitStatus>;
}

// -----------------------------------------------------------------------------
// RealGit

/// Real implementation that calls the git CLI.
///
/// Commands run with the project directory as their working directory and
/// inherit stdout/stderr, so whatever git prints lands on the console
/// unchanged.
pub struct RealGit {
    path: PathBuf,
}

impl RealGit {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl GitOps for RealGit {
    async fn stage_all(&self) -> Result<ExitStatus> {
        Command::new("git")
            .current_dir(&self.path)
            .args(["add", "."])
            .status()
            .await
            .context("Failed to execute git command")
    }

    async fn commit(&self, message: &str) -> Result<ExitStatus> {
        Command::new("git")
            .current_dir(&self.path)
            .args(["commit", "-m", message])
            .status()
            .await
            .context("Failed to execute git command")
    }

    async fn push(&self) -> Result<ExitStatus> {
        Command::new("git")
            .current_dir(&self.path)
            .args(["push"])
            .status()
            .await
            .context("Failed to execute git command")
    }
}
