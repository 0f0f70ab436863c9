//! Naming of the branch, file and commit that carry a set of meeting notes

use std::fmt;

use chrono::{Local, NaiveDate};

use crate::{Error, Result};

/// Calendar date the notes are filed under
///
/// Computed once per run so the branch name and file name always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinutesDate(NaiveDate);

impl MinutesDate {
    /// Today's date in the local time zone
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Branch the notes are committed on: `minutes_<date>`
    pub fn branch_name(&self) -> String {
        format!("minutes_{self}")
    }

    /// File name of the notes: `<date>.md`
    pub fn file_name(&self) -> String {
        format!("{self}.md")
    }

    pub fn commit_message(&self) -> String {
        format!("Add {self} meeting notes")
    }
}

impl fmt::Display for MinutesDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Directory inside the target repository that receives the notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesPath {
    segments: Vec<String>,
}

impl NotesPath {
    /// Parse a repository-relative destination directory
    ///
    /// A single leading `/` is stripped. Empty and `.` segments are dropped;
    /// `..` is rejected since it would leave the repository.
    pub fn parse(input: &str) -> Result<Self> {
        let relative = input.strip_prefix('/').unwrap_or(input);

        let mut segments = Vec::new();
        for segment in relative.split('/') {
            match segment {
                "" | "." => continue,
                ".." => {
                    return Err(Error::InvalidInput(format!(
                        "Invalid path: {input}; must stay inside the repository"
                    )))
                }
                other => segments.push(other.to_string()),
            }
        }

        Ok(Self { segments })
    }

    /// Path of the notes file relative to the repository root
    pub fn file_for(&self, date: &MinutesDate) -> String {
        self.segments
            .iter()
            .cloned()
            .chain(std::iter::once(date.file_name()))
            .collect::<Vec<_>>()
            .join("/")
    }
}
