//! Configuration management for minutes
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Environment variables (MINUTES_*)
//! 2. Config file (~/.config/minutes/config.toml)
//! 3. Default values

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Name of the clone cache directory, relative to where minutes is invoked
pub const DEFAULT_CACHE_DIR: &str = "__minutes_cache";

/// External tool locations
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Path to the git executable
    pub git: String,

    /// Path to the GitHub CLI executable
    pub gh: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            git: "git".to_string(),
            gh: "gh".to_string(),
        }
    }
}

/// Where repositories are cloned and which branch pull requests start from
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Directory holding one clone per target repository
    pub cache_dir: PathBuf,

    /// Branch that is checked out and pulled before branching
    pub base_branch: String,

    /// Remote the base branch is pulled from
    pub remote: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            base_branch: "main".to_string(),
            remote: "origin".to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// External tools
    pub tools: ToolsConfig,

    /// Repository clone settings
    pub repository: RepositoryConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading config file");
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/minutes/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("minutes").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - MINUTES_GIT_PATH: Path to git
    /// - MINUTES_GH_PATH: Path to gh
    /// - MINUTES_CACHE_DIR: Clone cache directory
    /// - MINUTES_BASE_BRANCH: Branch pull requests start from
    /// - MINUTES_REMOTE: Remote the base branch is pulled from
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(git) = lookup("MINUTES_GIT_PATH") {
            self.tools.git = git;
        }

        if let Some(gh) = lookup("MINUTES_GH_PATH") {
            self.tools.gh = gh;
        }

        if let Some(dir) = lookup("MINUTES_CACHE_DIR") {
            self.repository.cache_dir = PathBuf::from(dir);
        }

        if let Some(branch) = lookup("MINUTES_BASE_BRANCH") {
            self.repository.base_branch = branch;
        }

        if let Some(remote) = lookup("MINUTES_REMOTE") {
            self.repository.remote = remote;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: env > config file > defaults
    pub fn load_with_overrides() -> Result<Self> {
        Ok(Self::load()?.with_env_overrides())
    }
}
