//! Git command-line wrapper bound to one working tree

use std::path::{Path, PathBuf};

use crate::process::{CommandLine, CommandRunner};
use crate::Result;

/// Runs git commands inside a specific clone
pub struct Git<'a> {
    runner: &'a dyn CommandRunner,
    program: String,
    workdir: PathBuf,
}

impl std::fmt::Debug for Git<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("program", &self.program)
            .field("workdir", &self.workdir)
            .finish_non_exhaustive()
    }
}

impl<'a> Git<'a> {
    /// Bind `program` (usually `git`) to the working tree at `workdir`
    pub fn new(
        runner: &'a dyn CommandRunner,
        program: impl Into<String>,
        workdir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            runner,
            program: program.into(),
            workdir: workdir.into(),
        }
    }

    /// The working tree commands run in
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn command<I, S>(&self, args: I) -> CommandLine
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandLine::new(&self.program, &self.workdir).args(args)
    }

    pub fn checkout(&self, branch: &str) -> Result<()> {
        self.runner.run(&self.command(["checkout", branch]))
    }

    pub fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        self.runner.run(&self.command(["pull", remote, branch]))
    }

    /// Whether a branch with this name exists
    ///
    /// Uses `git show-branch`, whose nonzero exit means the branch is absent.
    pub fn branch_exists(&self, branch: &str) -> Result<bool> {
        let code = self.runner.status(&self.command(["show-branch", branch]))?;
        Ok(code == 0)
    }

    /// Force-delete a local branch
    pub fn delete_branch(&self, branch: &str) -> Result<()> {
        self.runner.run(&self.command(["branch", "-D", branch]))
    }

    /// Create a branch from HEAD and switch to it
    pub fn checkout_new_branch(&self, branch: &str) -> Result<()> {
        self.runner.run(&self.command(["checkout", "-b", branch]))
    }

    /// Stage a path relative to the working tree
    pub fn add(&self, path: &str) -> Result<()> {
        self.runner.run(&self.command(["add", path]))
    }

    pub fn commit(&self, message: &str) -> Result<()> {
        self.runner.run(&self.command(["commit", "-m", message]))
    }
}
