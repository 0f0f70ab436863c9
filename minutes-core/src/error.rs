//! Error types for minutes

use thiserror::Error;

/// Result type alias for minutes operations
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code used when user input fails validation
pub const EXIT_INVALID_INPUT: i32 = -1;

/// Exit code used when an external tool cannot be started
pub const EXIT_SPAWN_FAILED: i32 = 127;

/// Exit code for every other failure
pub const EXIT_FAILURE: i32 = 1;

/// Error type for minutes operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed document URL, repository identifier or destination path
    #[error("{0}")]
    InvalidInput(String),

    /// An external command ran but exited unsuccessfully
    #[error("command `{command}` exited with error code {code}")]
    CommandFailed {
        /// The command line as it was echoed
        command: String,
        /// Exit code of the command
        code: i32,
    },

    /// An external command was terminated by a signal
    #[error("command `{command}` was terminated by a signal")]
    CommandKilled {
        /// The command line as it was echoed
        command: String,
    },

    /// An external command could not be started
    #[error("failed to run `{program}`: {source}")]
    CommandSpawn {
        /// Program that was being spawned
        program: String,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// The meeting notes could not be downloaded
    #[error("failed to download {url}: {reason}")]
    Fetch {
        /// URL that was requested
        url: String,
        /// Transport error or unexpected HTTP status
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Failed commands forward their own exit code so callers scripting
    /// `minutes` see what `git` or `gh` reported.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidInput(_) => EXIT_INVALID_INPUT,
            Error::CommandFailed { code, .. } => *code,
            Error::CommandSpawn { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                EXIT_SPAWN_FAILED
            }
            _ => EXIT_FAILURE,
        }
    }
}
