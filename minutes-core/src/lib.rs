//! Minutes Core - Core library for publishing meeting notes
//!
//! This crate provides configuration, error handling, command execution and
//! the git plumbing used to turn a HackMD note into a pull request.

pub mod config;
pub mod console;
pub mod document;
pub mod error;
pub mod git;
pub mod notes;
pub mod process;

pub use config::Config;
pub use document::{DocumentSource, HackMdClient, HackMdUrl};
pub use error::{Error, Result};
pub use git::{BranchRefresh, CloneState, Git};
pub use notes::{MinutesDate, NotesPath};
pub use process::{CommandLine, CommandRunner, SystemRunner};
