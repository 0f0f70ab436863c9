//! The publish flow: download notes, commit them on a fresh branch, open a PR

use std::path::{Path, PathBuf};

use anyhow::Context;
use minutes_core::git::ensure_cache_dir;
use minutes_core::{
    console, BranchRefresh, CommandRunner, Config, DocumentSource, Git, HackMdUrl, MinutesDate,
    NotesPath,
};
use minutes_github::{ensure_repository_cloned, GhCli, RepoSpec};
use tracing::{debug, info};

/// Validated inputs for one publish run
#[derive(Debug, Clone)]
pub struct PublishRequest {
    /// Note to download
    pub document: HackMdUrl,
    /// Repository the pull request targets
    pub repo: RepoSpec,
    /// Directory inside the repository that receives the file
    pub notes_path: NotesPath,
    /// Date used for both the branch and the file name
    pub date: MinutesDate,
}

impl PublishRequest {
    /// Validate raw command-line inputs
    ///
    /// Touches neither the network nor the filesystem.
    pub fn parse(url: &str, repo: &str, path: &str, date: MinutesDate) -> anyhow::Result<Self> {
        Ok(Self {
            document: HackMdUrl::parse(url)?,
            repo: RepoSpec::parse(repo)?,
            notes_path: NotesPath::parse(path)?,
            date,
        })
    }
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct Published {
    /// Branch the pull request was opened from
    pub branch: String,
    /// Absolute path of the notes file inside the clone
    pub file: PathBuf,
    /// Whether the clone was created during this run
    pub cloned: bool,
    /// Whether a branch from an earlier run was replaced
    pub refresh: BranchRefresh,
}

/// Drives git and gh to turn a HackMD note into a pull request
pub struct Publisher<'a> {
    config: &'a Config,
    runner: &'a dyn CommandRunner,
    source: &'a dyn DocumentSource,
}

impl<'a> Publisher<'a> {
    pub fn new(
        config: &'a Config,
        runner: &'a dyn CommandRunner,
        source: &'a dyn DocumentSource,
    ) -> Self {
        Self {
            config,
            runner,
            source,
        }
    }

    /// Run the whole flow, stopping at the first failure
    ///
    /// Nothing is rolled back on failure; the clone stays in the cache.
    pub async fn publish(&self, request: &PublishRequest) -> anyhow::Result<Published> {
        let content = self.source.fetch(&request.document).await?;

        let repository = &self.config.repository;
        let cache_dir = ensure_cache_dir(&repository.cache_dir)?;

        let gh = GhCli::new(self.runner, &self.config.tools.gh);
        let clone = ensure_repository_cloned(&gh, &request.repo, &cache_dir)?;
        let git = Git::new(self.runner, &self.config.tools.git, &clone.path);

        console::section("Fetching latest commits");
        git.checkout(&repository.base_branch)?;
        git.pull(&repository.remote, &repository.base_branch)?;

        let branch = request.date.branch_name();
        console::section(&format!("Creating `{branch}` branch"));
        let refresh = git.ensure_branch_fresh(&branch)?;
        git.checkout_new_branch(&branch)?;

        let relative = request.notes_path.file_for(&request.date);
        let file = clone.path.join(&relative);
        write_notes(&file, &content)?;

        git.add(&relative)?;
        git.commit(&request.date.commit_message())?;
        gh.create_pull_request(&request.repo, &clone.path)?;

        info!(repo = %request.repo, %branch, "Opened pull request");
        Ok(Published {
            branch,
            file,
            cloned: clone.cloned,
            refresh,
        })
    }
}

/// Write the notes verbatim, replacing any earlier file
fn write_notes(file: &Path, content: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    std::fs::write(file, content)
        .with_context(|| format!("failed to write {}", file.display()))?;
    debug!(file = %file.display(), bytes = content.len(), "Wrote meeting notes");
    Ok(())
}

/// Map an error from the publish flow to the process exit code
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<minutes_core::Error>() {
        return err.exit_code();
    }
    if let Some(err) = err.downcast_ref::<minutes_github::Error>() {
        return err.exit_code();
    }
    minutes_core::error::EXIT_FAILURE
}
