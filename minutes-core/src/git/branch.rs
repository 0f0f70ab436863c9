//! Recreating the notes branch on every run

use tracing::info;

use super::cli::Git;
use crate::{console, Result};

/// What [`Git::ensure_branch_fresh`] had to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchRefresh {
    /// No branch with that name existed
    Absent,
    /// A stale branch was force-deleted
    Replaced,
}

impl Git<'_> {
    /// Make sure no branch named `branch` exists so it can be created anew
    ///
    /// A branch left over from an earlier run on the same day is deleted
    /// without merging.
    pub fn ensure_branch_fresh(&self, branch: &str) -> Result<BranchRefresh> {
        if !self.branch_exists(branch)? {
            return Ok(BranchRefresh::Absent);
        }

        console::note("Branch already exists: overwriting");
        info!(%branch, workdir = %self.workdir().display(), "Deleting existing branch");
        self.delete_branch(branch)?;
        Ok(BranchRefresh::Replaced)
    }
}
