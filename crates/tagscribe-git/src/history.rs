//! Revision history abstraction.

use std::fmt;

use tracing::{debug, warn};

use crate::GitResult;

/// A range of commits reachable from `current` but not from `previous`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRange {
    /// The older boundary (excluded from the range).
    pub previous: String,

    /// The newer boundary (included in the range).
    pub current: String,
}

impl CommitRange {
    /// Creates a new commit range.
    #[must_use]
    pub fn new(previous: impl Into<String>, current: impl Into<String>) -> Self {
        Self {
            previous: previous.into(),
            current: current.into(),
        }
    }
}

impl fmt::Display for CommitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.previous, self.current)
    }
}

/// Returns the placeholder line used when a range cannot be read.
#[must_use]
pub fn no_changes_line(previous: &str, current: &str) -> String {
    format!("- no changes from version {previous} to {current}")
}

/// Read access to a repository's release history.
///
/// Backends implement the four query methods; range fallback, latest tag
/// and unreleased range resolution are provided on top of them.
pub trait RevisionHistory {
    /// Returns tag names, newest version first.
    ///
    /// # Errors
    ///
    /// Returns an error if tags cannot be listed.
    fn tags(&self) -> GitResult<Vec<String>>;

    /// Returns the id of the repository's root commit.
    ///
    /// When the history has several roots, the oldest one is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if HEAD cannot be walked.
    fn first_commit(&self) -> GitResult<String>;

    /// Returns the id of the commit HEAD points to.
    ///
    /// # Errors
    ///
    /// Returns an error if HEAD is unborn or detached from any commit.
    fn current_commit(&self) -> GitResult<String>;

    /// Returns the message bodies of `previous..current`, one per commit.
    ///
    /// # Errors
    ///
    /// Returns an error if either revision cannot be resolved or the walk fails.
    fn commit_bodies(
        &self,
        previous: &str,
        current: &str,
        exclude_merges: bool,
    ) -> GitResult<Vec<String>>;

    /// Returns the message bodies of `previous..current`, never failing.
    ///
    /// A failed query that excluded merges is retried with merges included.
    /// If that fails too, a single "no changes" line stands in for the range.
    fn commits(&self, previous: &str, current: &str, exclude_merges: bool) -> Vec<String> {
        let first_attempt = match self.commit_bodies(previous, current, exclude_merges) {
            Ok(bodies) => return bodies,
            Err(err) => err,
        };

        let err = if exclude_merges {
            debug!(%first_attempt, previous, current, "retrying range with merge commits");
            match self.commit_bodies(previous, current, false) {
                Ok(bodies) => return bodies,
                Err(err) => err,
            }
        } else {
            first_attempt
        };

        warn!(%err, previous, current, "could not read commit range");
        vec![no_changes_line(previous, current)]
    }

    /// Returns the newest tag, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if tags cannot be listed.
    fn latest_tag(&self) -> GitResult<Option<String>> {
        Ok(self.tags()?.into_iter().next())
    }

    /// Returns the range of commits not covered by any tag.
    ///
    /// Starts at the latest tag, or at the first commit when there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if tags, the first commit or HEAD cannot be resolved.
    fn unreleased_range(&self) -> GitResult<CommitRange> {
        let previous = match self.latest_tag()? {
            Some(tag) => tag,
            None => self.first_commit()?,
        };
        Ok(CommitRange::new(previous, self.current_commit()?))
    }

    /// Returns the message bodies of commits made since the latest tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the unreleased range cannot be resolved.
    fn new_commits(&self) -> GitResult<Vec<String>> {
        let range = self.unreleased_range()?;
        Ok(self.commits(&range.previous, &range.current, true))
    }
}
