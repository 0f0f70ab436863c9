//! Git operations for minutes
//!
//! This module wraps the git command line for the operations the publish
//! flow needs and manages the local clone cache.

mod branch;
mod cache;
mod cli;

pub use branch::BranchRefresh;
pub use cache::{cached_repo_path, ensure_cache_dir, inspect_clone, CloneState};
pub use cli::Git;
