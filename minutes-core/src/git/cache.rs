//! Local cache of repository clones

use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::debug;

use crate::{Error, Result};

/// State of a repository's slot in the clone cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneState {
    /// Nothing at the clone path yet
    Missing,
    /// A git working tree is already there
    Cloned,
    /// Something other than a git working tree occupies the path
    Occupied,
}

/// Create the cache directory if needed and return its absolute path
pub fn ensure_cache_dir(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| {
        Error::Other(format!(
            "Failed to create cache directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let dir = std::path::absolute(dir)?;
    debug!(cache_dir = %dir.display(), "Cache directory ready");
    Ok(dir)
}

/// Path a repository called `name` is cloned to
pub fn cached_repo_path(cache_dir: &Path, name: &str) -> PathBuf {
    cache_dir.join(name)
}

/// Check whether `path` holds a usable clone
pub fn inspect_clone(path: &Path) -> CloneState {
    if !path.exists() {
        return CloneState::Missing;
    }

    match Repository::open(path) {
        Ok(repo) if repo.workdir().is_some() => CloneState::Cloned,
        Ok(_) => CloneState::Occupied,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Cache entry is not a git repository");
            CloneState::Occupied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_cache_dir_creates_nested() {
        let temp = TempDir::new().unwrap();
        let cache = temp.path().join("a").join("__minutes_cache");

        let dir = ensure_cache_dir(&cache).unwrap();
        assert!(dir.is_absolute());
        assert!(dir.is_dir());

        // Second call is a no-op
        ensure_cache_dir(&cache).unwrap();
    }

    #[test]
    fn test_cached_repo_path_uses_name() {
        let path = cached_repo_path(Path::new("/cache"), "meeting-notes");
        assert_eq!(path, PathBuf::from("/cache/meeting-notes"));
    }

    #[test]
    fn test_inspect_clone_states() {
        let temp = TempDir::new().unwrap();

        let missing = temp.path().join("missing");
        assert_eq!(inspect_clone(&missing), CloneState::Missing);

        let plain = temp.path().join("plain");
        std::fs::create_dir(&plain).unwrap();
        assert_eq!(inspect_clone(&plain), CloneState::Occupied);

        let cloned = temp.path().join("cloned");
        Repository::init(&cloned).unwrap();
        assert_eq!(inspect_clone(&cloned), CloneState::Cloned);

        let bare = temp.path().join("bare.git");
        Repository::init_bare(&bare).unwrap();
        assert_eq!(inspect_clone(&bare), CloneState::Occupied);
    }
}
