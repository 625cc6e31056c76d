//! Writes generated sections to the top of the changelog file.
//!
//! The file is read and rewritten without locking, so two runs against the
//! same file must not overlap. Run generation as a single CI step.
use log::*;
use std::{
    fs::OpenOptions,
    io::{Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use crate::{changelog::section::ChangelogSection, error::Result};

/// Changelog file on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert `section` before the existing content, creating the file when
    /// it does not exist. Existing content is kept byte for byte, separated
    /// from the new section by two newlines.
    pub fn prepend(&self, section: &ChangelogSection) -> Result<()> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;

        let mut existing = Vec::new();
        file.read_to_end(&mut existing)?;

        debug!(
            "prepending section '{}' to {} ({} existing bytes)",
            section.header,
            self.path.display(),
            existing.len()
        );

        // new content is always longer than the old, no truncation needed
        file.seek(SeekFrom::Start(0))?;
        file.write_all(section.render().as_bytes())?;

        if !existing.is_empty() {
            file.write_all(b"\n\n")?;
            file.write_all(&existing)?;
        }

        file.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::changelog::group::ChangelogGroup;

    fn section(version: &str, line: &str) -> ChangelogSection {
        ChangelogSection::new(
            "Version:",
            version,
            vec![ChangelogGroup {
                title: "".into(),
                lines: vec![line.to_string()],
            }],
        )
    }

    #[test]
    fn creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        let writer = FileWriter::new(&path);

        writer.prepend(&section("1.0.0", "* [#1](u1): One\n")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Version: 1.0.0\n==============\n\n* [#1](u1): One\n");
    }

    #[test]
    fn preserves_existing_content_after_new_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        let original = "Version: 0.9.0\n==============\n\n* [#0](u0): Init\n";
        fs::write(&path, original).unwrap();
        let writer = FileWriter::new(&path);

        writer.prepend(&section("1.0.0", "* [#1](u1): One\n")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Version: 1.0.0\n"));
        assert!(content.ends_with(original));
        assert_eq!(
            content,
            format!(
                "Version: 1.0.0\n==============\n\n* [#1](u1): One\n\n\n{original}"
            )
        );
    }

    #[test]
    fn successive_sections_stack_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        let writer = FileWriter::new(&path);

        writer.prepend(&section("1.0.0", "* [#1](u1): One\n")).unwrap();
        writer.prepend(&section("1.1.0", "* [#2](u2): Two\n")).unwrap();
        writer.prepend(&section("1.2.0", "* [#3](u3): Three\n")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let newest = content.find("Version: 1.2.0").unwrap();
        let middle = content.find("Version: 1.1.0").unwrap();
        let oldest = content.find("Version: 1.0.0").unwrap();
        assert!(newest < middle && middle < oldest);
        assert_eq!(content.matches("Version:").count(), 3);
    }

    #[test]
    fn keeps_non_utf8_content_intact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        let original: &[u8] = b"Version: 0.1.0\n\xff\xfe latin-1 caf\xe9\n";
        fs::write(&path, original).unwrap();
        let writer = FileWriter::new(&path);

        writer.prepend(&section("0.2.0", "* [#2](u2): Two\n")).unwrap();

        let content = fs::read(&path).unwrap();
        assert!(content.starts_with(b"Version: 0.2.0\n"));
        assert!(content.ends_with(original));
        assert!(content.windows(2).any(|w| w == b"\n\n"));
    }

    #[test]
    fn fails_when_file_cannot_be_opened() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("CHANGELOG.md");
        let writer = FileWriter::new(&path);

        let result = writer.prepend(&section("1.0.0", "* [#1](u1): One\n"));

        assert!(result.is_err());
        assert!(!path.exists());
    }
}
