//! In-memory zip assembly for slide decks, markup archives and bundles.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::ExportResult;

/// Builds a zip archive in memory.
pub struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl std::fmt::Debug for ArchiveBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveBuilder").finish_non_exhaustive()
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveBuilder {
    /// Start an empty archive with deflate compression.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
        }
    }

    /// Add a file at `path` (forward slashes, no leading slash).
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be written, including a
    /// duplicate path.
    pub fn add(&mut self, path: &str, bytes: &[u8]) -> ExportResult<()> {
        self.writer.start_file(path, self.options)?;
        self.writer.write_all(bytes)?;
        Ok(())
    }

    /// Finish the archive and return its bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the central directory cannot be written.
    pub fn finish(self) -> ExportResult<Vec<u8>> {
        let cursor = self.writer.finish()?;
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_entries_round_trip() {
        let mut builder = ArchiveBuilder::new();
        builder.add("html/index.html", b"<html></html>").expect("add");
        builder.add("svg/page.svg", b"<svg/>").expect("add");

        let bytes = builder.finish().expect("finish");
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("open");
        assert_eq!(archive.len(), 2);
        assert_eq!(
            archive.by_index(0).expect("first entry").name(),
            "html/index.html"
        );
        assert_eq!(
            archive.by_index(1).expect("second entry").name(),
            "svg/page.svg"
        );

        let mut body = String::new();
        archive
            .by_name("html/index.html")
            .expect("entry")
            .read_to_string(&mut body)
            .expect("read");
        assert_eq!(body, "<html></html>");
    }

    #[test]
    fn test_duplicate_entry_is_an_error() {
        let mut builder = ArchiveBuilder::new();
        builder.add("a.txt", b"1").expect("add");
        assert!(builder.add("a.txt", b"2").is_err());
    }
}
