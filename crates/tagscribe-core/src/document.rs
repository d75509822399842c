//! Changelog document model and markdown rendering.

use crate::CoreResult;

/// A single release section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogSection {
    /// Section title (a tag name or an unreleased label).
    pub title: String,

    /// Escaped commit lines joined with newlines.
    pub body: String,
}

impl ChangelogSection {
    /// Creates a new section.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Renders the section as markdown.
    #[must_use]
    pub fn render(&self) -> String {
        format!("## {}\n{}\n", self.title, self.body)
    }
}

/// Renders the document title line.
#[must_use]
pub fn render_header(header: &str) -> String {
    format!("# {header}\n\n")
}

/// Receives a changelog as it is assembled, header first.
pub trait SectionSink {
    /// Receives the document title.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot store the header.
    fn header(&mut self, header: &str) -> CoreResult<()>;

    /// Receives the next section.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot store the section.
    fn section(&mut self, section: &ChangelogSection) -> CoreResult<()>;
}

/// A fully assembled changelog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogDocument {
    /// Document title.
    pub header: String,

    /// Sections in output order.
    pub sections: Vec<ChangelogSection>,
}

impl ChangelogDocument {
    /// Renders the whole document as markdown.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = render_header(&self.header);
        for section in &self.sections {
            output.push_str(&section.render());
        }
        output
    }
}

impl SectionSink for ChangelogDocument {
    fn header(&mut self, header: &str) -> CoreResult<()> {
        self.header = header.to_string();
        Ok(())
    }

    fn section(&mut self, section: &ChangelogSection) -> CoreResult<()> {
        self.sections.push(section.clone());
        Ok(())
    }
}
