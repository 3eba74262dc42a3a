use std::process::ExitStatus;

use anyhow::Result;
use anyhow::bail;
use chrono::Local;
use colored::Colorize;
use tracing::debug;

use crate::App;
use crate::message;
use crate::ops::git::GitOps;

// -----------------------------------------------------------------------------
// SyncOutcome

/// Exit statuses recorded for the three git steps of a sync run.
#[derive(Debug)]
pub struct SyncOutcome {
    pub stage: ExitStatus,
    pub commit: ExitStatus,
    pub push: ExitStatus,
}

impl SyncOutcome {
    /// Process exit code for the whole run: the push status, since push is
    /// the last command in the chain. A push killed by a signal has no code
    /// and maps to 1.
    pub fn exit_code(&self) -> u8 {
        match self.push.code() {
            Some(code) => code as u8,
            None => 1,
        }
    }
}

// -----------------------------------------------------------------------------
// cmd_sync

impl<G: GitOps> App<G> {
    /// Stage, commit and push the project repository in one shot.
    ///
    /// 1. Verify the project directory exists; a missing directory aborts
    ///    the run and nothing below executes.
    /// 2. Stage every working-tree change.
    /// 3. Commit with a message stamping the current local time.
    /// 4. Push the current branch to its upstream.
    ///
    /// Steps 2-4 are fire-and-forget: each exit status is recorded in the
    /// returned [`SyncOutcome`] but a failure never stops the next step.
    /// Git's own output goes straight to the console.
    pub async fn cmd_sync(&self, stdout: &mut impl std::io::Write) -> Result<SyncOutcome> {
        let repo_dir = &self.config.repo_dir;
        if !repo_dir.is_dir() {
            bail!("Project directory not found: {}", repo_dir.display());
        }

        writeln!(stdout, "Syncing {}", repo_dir.display().to_string().cyan())?;

        writeln!(stdout, "{}", "Staging changes".dimmed())?;
        let stage = self.git.stage_all().await?;
        debug!(status = %stage, "git add finished");

        let message = message::commit_message(Local::now());
        writeln!(stdout, "{} {}", "Committing:".dimmed(), message)?;
        let commit = self.git.commit(&message).await?;
        debug!(status = %commit, "git commit finished");

        writeln!(stdout, "{}", "Pushing to upstream".dimmed())?;
        let push = self.git.push().await?;
        debug!(status = %push, "git push finished");

        Ok(SyncOutcome { stage, commit, push })
    }
}
