//! Core library for Tagscribe.
//!
//! This crate turns a repository's tag history into a markdown changelog:
//! it pairs tags into commit ranges, escapes commit messages and streams
//! the resulting sections to a destination.

mod assembler;
mod document;
mod error;
mod escape;
mod writer;

pub use assembler::{ChangelogAssembler, ChangelogOptions, empty_tag_label};
pub use document::{ChangelogDocument, ChangelogSection, SectionSink, render_header};
pub use error::{CoreError, CoreResult};
pub use escape::{MARKDOWN_RESERVED_CHARACTERS, escape_commits};
pub use writer::ChangelogWriter;
