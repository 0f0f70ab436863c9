//! `org/name` repository identifiers

use std::fmt;

use crate::{Error, Result};

/// A GitHub repository named by organization and repository name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSpec {
    /// Repository owner/organization
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoSpec {
    /// Parse `org/name`
    ///
    /// Exactly one `/` is allowed and neither side may be empty.
    pub fn parse(input: &str) -> Result<Self> {
        let (owner, name) = input
            .split_once('/')
            .filter(|(owner, name)| !owner.is_empty() && !name.is_empty() && !name.contains('/'))
            .ok_or_else(|| Error::InvalidRepo(input.to_string()))?;

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepoSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
