//! Core error types.

use std::path::PathBuf;

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Git error.
    #[error("git error: {0}")]
    Git(#[from] tagscribe_git::GitError),

    /// The changelog destination could not be opened or written.
    #[error("could not write changelog to {}", path.display())]
    DestinationWrite {
        /// Full path of the destination.
        path: PathBuf,

        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;
    use tagscribe_git::GitError;

    #[test]
    fn test_git_display() {
        let err = CoreError::from(GitError::NoHead);
        assert_eq!(err.to_string(), "git error: HEAD does not point to a commit");
    }

    #[test]
    fn test_destination_write_display() {
        let err = CoreError::DestinationWrite {
            path: PathBuf::from("/tmp/out/changelog.md"),
            source: std::io::Error::other("disk full"),
        };
        assert_eq!(
            err.to_string(),
            "could not write changelog to /tmp/out/changelog.md"
        );
        assert_eq!(err.source().unwrap().to_string(), "disk full");
    }
}
