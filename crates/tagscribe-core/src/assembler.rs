//! Changelog assembly from tag history.

use tagscribe_config::{ChangelogConfig, DEFAULT_HEADER};
use tagscribe_git::{CommitRange, RevisionHistory};
use tracing::debug;

use crate::{ChangelogDocument, ChangelogSection, CoreResult, SectionSink, escape_commits};

/// Options for a single changelog run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogOptions {
    /// Document title.
    pub header: String,

    /// Label for commits made since the latest tag.
    pub new_tag: Option<String>,

    /// Fail when a commit range cannot be read instead of writing a placeholder.
    pub strict: bool,
}

impl Default for ChangelogOptions {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            new_tag: None,
            strict: false,
        }
    }
}

impl ChangelogOptions {
    /// Creates options from the changelog configuration.
    #[must_use]
    pub fn from_config(config: &ChangelogConfig) -> Self {
        Self {
            header: config.header.clone(),
            new_tag: None,
            strict: config.strict,
        }
    }

    /// Sets the unreleased section label.
    #[must_use]
    pub fn with_new_tag(mut self, new_tag: impl Into<String>) -> Self {
        self.new_tag = Some(new_tag.into());
        self
    }
}

/// Returns the title used for a release that has no tag name.
#[must_use]
pub fn empty_tag_label(head: &str) -> String {
    format!("empty tag \\(latest commit: {head}\\)")
}

/// Builds a changelog from a revision history.
pub struct ChangelogAssembler<'a, H: RevisionHistory + ?Sized> {
    history: &'a H,
}

impl<'a, H: RevisionHistory + ?Sized> ChangelogAssembler<'a, H> {
    /// Creates an assembler reading from the given history.
    #[must_use]
    pub fn new(history: &'a H) -> Self {
        Self { history }
    }

    /// Assembles the changelog in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if tags, the first commit or HEAD cannot be resolved.
    pub fn assemble(&self, options: &ChangelogOptions) -> CoreResult<ChangelogDocument> {
        let mut document = ChangelogDocument::default();
        self.assemble_into(options, &mut document)?;
        Ok(document)
    }

    /// Assembles the changelog, handing each part to `sink` as soon as it is built.
    ///
    /// The header comes first, then the unreleased section (if any), then one
    /// section per tag, newest first. Tag sections without commits are skipped.
    /// On error, everything handed over before the failure stays in the sink.
    ///
    /// # Errors
    ///
    /// Returns an error if tags, the first commit or HEAD cannot be resolved,
    /// if a range cannot be read in strict mode, or if the sink fails.
    pub fn assemble_into(
        &self,
        options: &ChangelogOptions,
        sink: &mut impl SectionSink,
    ) -> CoreResult<()> {
        let tags = self.history.tags()?;
        debug!(tags = tags.len(), new_tag = ?options.new_tag, "assembling changelog");

        sink.header(&options.header)?;

        let unreleased_title = match &options.new_tag {
            Some(new_tag) => Some(new_tag.clone()),
            None if tags.is_empty() => Some(empty_tag_label(&self.history.current_commit()?)),
            None => None,
        };

        if let Some(title) = unreleased_title {
            let body = join_escaped(&self.unreleased_commits(options.strict)?);
            sink.section(&ChangelogSection::new(title, body))?;
        }

        for (i, current) in tags.iter().enumerate() {
            let previous = match tags.get(i + 1) {
                Some(previous) => previous.clone(),
                None => self.history.first_commit()?,
            };
            let range = CommitRange::new(previous, current.as_str());

            let body = join_escaped(&self.range_commits(&range, options.strict)?);
            if body.is_empty() {
                debug!(%range, "skipping release without commits");
                continue;
            }

            let title = if current.is_empty() {
                empty_tag_label(&self.history.current_commit()?)
            } else {
                current.clone()
            };
            sink.section(&ChangelogSection::new(title, body))?;
        }

        Ok(())
    }

    fn unreleased_commits(&self, strict: bool) -> CoreResult<Vec<String>> {
        if strict {
            let range = self.history.unreleased_range()?;
            return self.range_commits(&range, true);
        }
        Ok(self.history.new_commits()?)
    }

    fn range_commits(&self, range: &CommitRange, strict: bool) -> CoreResult<Vec<String>> {
        if strict {
            return Ok(self
                .history
                .commit_bodies(&range.previous, &range.current, true)?);
        }
        Ok(self.history.commits(&range.previous, &range.current, true))
    }
}

fn join_escaped(commits: &[String]) -> String {
    escape_commits(commits).join("\n")
}
