//! Changelog destination file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{ChangelogSection, CoreError, CoreResult, SectionSink, render_header};

/// Streams an assembled changelog to its destination.
///
/// Every part is flushed as soon as it is written, so a failed run leaves
/// whatever was assembled before the failure on disk. The underlying
/// handle is closed when the writer is dropped.
pub struct ChangelogWriter<W: Write> {
    inner: W,
    path: PathBuf,
}

impl ChangelogWriter<BufWriter<File>> {
    /// Creates (or truncates) the changelog file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DestinationWrite`] if the file cannot be created.
    pub fn create(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        debug!(path = %path.display(), "opening changelog destination");

        let file = File::create(&path).map_err(|source| CoreError::DestinationWrite {
            path: path.clone(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> ChangelogWriter<W> {
    /// Wraps an arbitrary writer; `path` is only used in error reports.
    pub fn new(inner: W, path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            path: path.into(),
        }
    }

    /// Returns the destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DestinationWrite`] if the final flush fails.
    pub fn finish(mut self) -> CoreResult<W> {
        self.inner.flush().map_err(|source| self.write_error(source))?;
        Ok(self.inner)
    }

    fn write_flushed(&mut self, text: &str) -> CoreResult<()> {
        let result = self
            .inner
            .write_all(text.as_bytes())
            .and_then(|()| self.inner.flush());
        result.map_err(|source| self.write_error(source))
    }

    fn write_error(&self, source: io::Error) -> CoreError {
        CoreError::DestinationWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl<W: Write> SectionSink for ChangelogWriter<W> {
    fn header(&mut self, header: &str) -> CoreResult<()> {
        self.write_flushed(&render_header(header))
    }

    fn section(&mut self, section: &ChangelogSection) -> CoreResult<()> {
        debug!(title = %section.title, "writing section");
        self.write_flushed(&section.render())
    }
}
