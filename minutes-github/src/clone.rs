//! Reusing or creating the cached clone of a target repository

use std::path::{Path, PathBuf};

use minutes_core::git::{cached_repo_path, inspect_clone};
use minutes_core::{console, CloneState};
use tracing::{debug, info};

use crate::{Error, GhCli, RepoSpec, Result};

/// Where the clone lives and whether this run created it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneOutcome {
    /// Path of the working tree
    pub path: PathBuf,
    /// True when `gh repo clone` ran during this call
    pub cloned: bool,
}

/// Make sure `repo` is cloned under `cache_dir`, cloning it if missing
///
/// The clone directory is named after the repository name, so two
/// organizations with equally named repositories share a slot.
pub fn ensure_repository_cloned(
    gh: &GhCli<'_>,
    repo: &RepoSpec,
    cache_dir: &Path,
) -> Result<CloneOutcome> {
    let path = cached_repo_path(cache_dir, &repo.name);

    match inspect_clone(&path) {
        CloneState::Cloned => {
            debug!(path = %path.display(), "Reusing cached clone");
            Ok(CloneOutcome {
                path,
                cloned: false,
            })
        }
        CloneState::Occupied => Err(Error::CloneOccupied(path)),
        CloneState::Missing => {
            console::section(&format!("Cloning {repo}"));
            gh.clone_repo(repo, cache_dir)?;
            info!(repo = %repo, path = %path.display(), "Cloned repository");
            Ok(CloneOutcome { path, cloned: true })
        }
    }
}
