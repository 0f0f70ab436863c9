//! External command execution
//!
//! Every `git` and `gh` invocation goes through a [`CommandRunner`]. Commands
//! carry their own working directory so the process-wide current directory is
//! never touched.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::{console, Error, Result};

/// A fully specified external command: program, arguments and working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
    current_dir: PathBuf,
}

impl CommandLine {
    /// Create a command that will run `program` inside `current_dir`
    pub fn new(program: impl Into<String>, current_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: current_dir.into(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Build the std command; stdio is inherited so tool output reaches the user
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).current_dir(&self.current_dir);
        cmd
    }
}

/// Renders the command the way a user would type it into a POSIX shell
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

/// Quote a word for display in a POSIX shell command line
pub fn shell_quote(word: &str) -> String {
    let is_safe = |c: char| c.is_ascii_alphanumeric() || "@%+=:,./_-".contains(c);

    if word.is_empty() {
        "''".to_string()
    } else if word.chars().all(is_safe) {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r#"'"'"'"#))
    }
}

/// Something that can execute external commands
pub trait CommandRunner {
    /// Run the command to completion and return its exit code
    ///
    /// A nonzero exit code is not an error at this level; only failing to
    /// start the command or losing it to a signal is.
    fn status(&self, command: &CommandLine) -> Result<i32>;

    /// Run the command and fail unless it exits with code zero
    fn run(&self, command: &CommandLine) -> Result<()> {
        match self.status(command)? {
            0 => Ok(()),
            code => Err(Error::CommandFailed {
                command: command.to_string(),
                code,
            }),
        }
    }
}

/// Runs commands on the host, echoing each one before it starts
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn status(&self, command: &CommandLine) -> Result<i32> {
        console::command(command);
        debug!(
            program = %command.program(),
            cwd = %command.current_dir().display(),
            "Spawning command"
        );

        let status = command
            .to_command()
            .status()
            .map_err(|source| Error::CommandSpawn {
                program: command.program().to_string(),
                source,
            })?;

        debug!(%status, "Command finished");

        status.code().ok_or_else(|| Error::CommandKilled {
            command: command.to_string(),
        })
    }
}

/// Test double that records commands instead of running them
#[cfg(any(test, feature = "testing"))]
pub mod testing {
    use std::cell::RefCell;

    use super::{CommandLine, CommandRunner};
    use crate::Result;

    /// Records every command and answers with scripted exit codes
    ///
    /// Commands exit with code 0 unless a rule registered through
    /// [`ScriptedRunner::exit_with`] matches. A rule matches when the program
    /// followed by the arguments starts with the given words.
    #[derive(Debug, Default)]
    pub struct ScriptedRunner {
        calls: RefCell<Vec<CommandLine>>,
        rules: Vec<(Vec<String>, i32)>,
    }

    impl ScriptedRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make commands starting with `prefix` exit with `code`
        pub fn exit_with(mut self, prefix: &[&str], code: i32) -> Self {
            self.rules
                .push((prefix.iter().map(|s| s.to_string()).collect(), code));
            self
        }

        /// Commands run so far, in order
        pub fn calls(&self) -> Vec<CommandLine> {
            self.calls.borrow().clone()
        }

        /// Commands run so far, rendered as shell command lines
        pub fn rendered(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|c| c.to_string()).collect()
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn status(&self, command: &CommandLine) -> Result<i32> {
            self.calls.borrow_mut().push(command.clone());

            let words: Vec<&str> = std::iter::once(command.program())
                .chain(command.arguments().iter().map(String::as_str))
                .collect();

            let code = self
                .rules
                .iter()
                .find(|(prefix, _)| {
                    prefix.len() <= words.len()
                        && prefix.iter().zip(&words).all(|(p, w)| p == w)
                })
                .map(|(_, code)| *code)
                .unwrap_or(0);

            Ok(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedRunner;
    use super::*;

    #[test]
    fn test_display_plain_words() {
        let cmd = CommandLine::new("git", "/tmp").args(["checkout", "main"]);
        assert_eq!(cmd.to_string(), "git checkout main");
    }

    #[test]
    fn test_display_quotes_spaces() {
        let cmd = CommandLine::new("git", "/tmp").args(["commit", "-m", "Add 2024-03-05 meeting notes"]);
        assert_eq!(cmd.to_string(), "git commit -m 'Add 2024-03-05 meeting notes'");
    }

    #[test]
    fn test_shell_quote_edge_cases() {
        assert_eq!(shell_quote(""), "''");
        assert_eq!(shell_quote("org/notes"), "org/notes");
        assert_eq!(shell_quote("it's"), r#"'it'"'"'s'"#);
        assert_eq!(shell_quote("a;b"), "'a;b'");
    }

    #[test]
    fn test_run_maps_nonzero_exit() {
        let runner = ScriptedRunner::new().exit_with(&["gh", "repo", "clone"], 4);
        let cmd = CommandLine::new("gh", "/tmp").args(["repo", "clone", "org/notes"]);

        let err = runner.run(&cmd).unwrap_err();
        match err {
            Error::CommandFailed { command, code } => {
                assert_eq!(command, "gh repo clone org/notes");
                assert_eq!(code, 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_scripted_runner_defaults_to_success() {
        let runner = ScriptedRunner::new().exit_with(&["git", "show-branch"], 1);
        let cmd = CommandLine::new("git", "/tmp").args(["checkout", "main"]);

        assert_eq!(runner.status(&cmd).unwrap(), 0);
        assert_eq!(runner.rendered(), vec!["git checkout main"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_reports_exit_code() {
        let dir = tempfile::TempDir::new().unwrap();
        let cmd = CommandLine::new("sh", dir.path()).args(["-c", "exit 3"]);

        assert_eq!(SystemRunner.status(&cmd).unwrap(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_uses_working_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let cmd = CommandLine::new("sh", dir.path()).args(["-c", "touch marker"]);

        SystemRunner.run(&cmd).unwrap();
        assert!(dir.path().join("marker").exists());
    }

    #[test]
    fn test_system_runner_missing_program() {
        let dir = tempfile::TempDir::new().unwrap();
        let cmd = CommandLine::new("/nonexistent/minutes-test-binary", dir.path());

        let err = SystemRunner.status(&cmd).unwrap_err();
        assert!(matches!(err, Error::CommandSpawn { .. }));
        assert_eq!(err.exit_code(), 127);
    }
}
