//! Minutes GitHub - GitHub integration for minutes
//!
//! This crate drives the `gh` command line to clone target repositories and
//! open pull requests carrying meeting notes.

mod clone;
mod error;
mod gh;
mod repo;

pub use clone::{ensure_repository_cloned, CloneOutcome};
pub use error::{Error, Result};
pub use gh::GhCli;
pub use repo::RepoSpec;
