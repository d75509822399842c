//! Git revision history access for Tagscribe.
//!
//! This crate provides:
//! - The [`RevisionHistory`] trait the changelog assembler reads from
//! - A git2-backed [`Repository`] implementing it
//! - Version-aware tag ordering

mod error;
mod history;
mod repository;
mod sort;

pub use error::{GitError, GitResult};
pub use history::{CommitRange, RevisionHistory, no_changes_line};
pub use repository::Repository;
pub use sort::sort_tags_descending;
