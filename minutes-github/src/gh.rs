//! GitHub CLI (`gh`) wrapper

use std::path::Path;

use minutes_core::{CommandLine, CommandRunner};
use tracing::info;

use crate::{RepoSpec, Result};

/// Runs `gh` subcommands through a [`CommandRunner`]
pub struct GhCli<'a> {
    runner: &'a dyn CommandRunner,
    program: String,
}

impl std::fmt::Debug for GhCli<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GhCli")
            .field("program", &self.program)
            .finish_non_exhaustive()
    }
}

impl<'a> GhCli<'a> {
    pub fn new(runner: &'a dyn CommandRunner, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    /// Clone `repo` into `<parent>/<name>`
    pub fn clone_repo(&self, repo: &RepoSpec, parent: &Path) -> Result<()> {
        let cmd = CommandLine::new(&self.program, parent)
            .args(["repo", "clone"])
            .arg(repo.to_string());
        self.runner.run(&cmd)?;
        Ok(())
    }

    /// Open a pull request for the branch checked out in `workdir`
    ///
    /// Title and body are filled from the commit by `gh`.
    pub fn create_pull_request(&self, repo: &RepoSpec, workdir: &Path) -> Result<()> {
        let cmd = CommandLine::new(&self.program, workdir)
            .args(["pr", "create", "--fill", "--repo"])
            .arg(repo.to_string());
        self.runner.run(&cmd)?;

        info!(repo = %repo, "Pull request created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use minutes_core::process::testing::ScriptedRunner;

    #[test]
    fn test_clone_runs_in_parent() {
        let runner = ScriptedRunner::new();
        let gh = GhCli::new(&runner, "gh");
        let repo = RepoSpec::parse("org/notes").unwrap();

        gh.clone_repo(&repo, Path::new("/cache")).unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].to_string(), "gh repo clone org/notes");
        assert_eq!(calls[0].current_dir(), Path::new("/cache"));
    }

    #[test]
    fn test_create_pull_request_args() {
        let runner = ScriptedRunner::new();
        let gh = GhCli::new(&runner, "/opt/bin/gh");
        let repo = RepoSpec::parse("org/notes").unwrap();

        gh.create_pull_request(&repo, Path::new("/cache/notes")).unwrap();

        assert_eq!(
            runner.rendered(),
            vec!["/opt/bin/gh pr create --fill --repo org/notes"]
        );
    }

    #[test]
    fn test_pull_request_failure_forwards_code() {
        let runner = ScriptedRunner::new().exit_with(&["gh", "pr", "create"], 1);
        let gh = GhCli::new(&runner, "gh");
        let repo = RepoSpec::parse("org/notes").unwrap();

        let err = gh
            .create_pull_request(&repo, Path::new("/cache/notes"))
            .unwrap_err();
        assert!(matches!(err, Error::Core(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
