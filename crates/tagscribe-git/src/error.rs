//! Git error types.

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository.
    #[error("not a git repository: {0}")]
    NotARepo(std::path::PathBuf),

    /// HEAD is unborn or cannot be resolved to a commit.
    #[error("HEAD does not point to a commit")]
    NoHead,

    /// A revision (tag, branch or commit id) could not be resolved.
    #[error("revision not found: {0}")]
    RevisionNotFound(String),

    /// No commits found.
    #[error("no commits found")]
    NoCommits,

    /// Git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_not_a_repo_display() {
        let err = GitError::NotARepo(PathBuf::from("/tmp/not-git"));
        assert_eq!(err.to_string(), "not a git repository: /tmp/not-git");
    }

    #[test]
    fn test_no_head_display() {
        assert_eq!(GitError::NoHead.to_string(), "HEAD does not point to a commit");
    }

    #[test]
    fn test_revision_not_found_display() {
        let err = GitError::RevisionNotFound("v1.0.0".to_string());
        assert_eq!(err.to_string(), "revision not found: v1.0.0");
    }

    #[test]
    fn test_no_commits_display() {
        let err = GitError::NoCommits;
        assert_eq!(err.to_string(), "no commits found");
    }

    #[test]
    fn test_git2_display() {
        let err = GitError::from(git2::Error::from_str("object not found"));
        assert_eq!(err.to_string(), "git error: object not found");
    }
}
