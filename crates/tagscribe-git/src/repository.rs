//! Git repository wrapper.

use std::path::Path;

use git2::{Commit, Repository as Git2Repo, Sort};
use tracing::debug;

use crate::{GitError, GitResult, RevisionHistory, sort_tags_descending};

/// A Git repository wrapper.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Discovers the repository containing the given directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner =
            Git2Repo::discover(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    fn head_commit(&self) -> GitResult<Commit<'_>> {
        let head = self.inner.head().map_err(|_| GitError::NoHead)?;
        head.peel_to_commit().map_err(|_| GitError::NoHead)
    }

    fn resolve_commit(&self, revision: &str) -> GitResult<Commit<'_>> {
        let object = self
            .inner
            .revparse_single(revision)
            .map_err(|_| GitError::RevisionNotFound(revision.to_string()))?;
        Ok(object.peel_to_commit()?)
    }
}

impl RevisionHistory for Repository {
    fn tags(&self) -> GitResult<Vec<String>> {
        let names = self.inner.tag_names(None)?;
        let mut tags: Vec<String> = names.iter().flatten().map(String::from).collect();
        sort_tags_descending(&mut tags);

        debug!(count = tags.len(), "listed tags");
        Ok(tags)
    }

    fn first_commit(&self) -> GitResult<String> {
        let head = self.head_commit()?;

        let mut revwalk = self.inner.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;

        // Newest first, so the last root seen is the oldest one.
        let mut root = None;
        for oid in revwalk {
            let oid = oid?;
            if self.inner.find_commit(oid)?.parent_count() == 0 {
                root = Some(oid);
            }
        }

        let root = root.ok_or(GitError::NoCommits)?;
        debug!(%root, "resolved first commit");
        Ok(root.to_string())
    }

    fn current_commit(&self) -> GitResult<String> {
        Ok(self.head_commit()?.id().to_string())
    }

    fn commit_bodies(
        &self,
        previous: &str,
        current: &str,
        exclude_merges: bool,
    ) -> GitResult<Vec<String>> {
        let previous_commit = self.resolve_commit(previous)?;
        let current_commit = self.resolve_commit(current)?;

        let mut revwalk = self.inner.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(current_commit.id())?;
        revwalk.hide(previous_commit.id())?;

        let mut bodies = Vec::new();
        for oid in revwalk {
            let commit = self.inner.find_commit(oid?)?;
            if exclude_merges && commit.parent_count() > 1 {
                continue;
            }

            let message = String::from_utf8_lossy(commit.message_bytes());
            bodies.push(message.trim_end().to_string());
        }

        debug!(previous, current, count = bodies.len(), "read commit range");
        Ok(bodies)
    }
}
