//! Error types for GitHub operations

use std::path::PathBuf;

use thiserror::Error;

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub operations
#[derive(Error, Debug)]
pub enum Error {
    /// Command execution or filesystem error from the core library
    #[error(transparent)]
    Core(#[from] minutes_core::Error),

    /// Repository identifier is not `org/name`
    #[error("Invalid repo: {0}; should be org/reponame")]
    InvalidRepo(String),

    /// The clone path is taken by something that is not a git working tree
    #[error("{} exists but is not a git repository; remove it and retry", .0.display())]
    CloneOccupied(PathBuf),
}

impl Error {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Core(err) => err.exit_code(),
            Error::InvalidRepo(_) => minutes_core::error::EXIT_INVALID_INPUT,
            Error::CloneOccupied(_) => minutes_core::error::EXIT_FAILURE,
        }
    }
}
