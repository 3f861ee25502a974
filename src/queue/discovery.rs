//! File discovery for batch runs.
//!
//! Scans a directory (non-recursive), keeps regular files whose extension
//! is in the format allow-list, and records the metadata the ordering
//! criteria sort by.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::formats;

use super::ordering::extract_number;

/// A candidate file with its derived sort attributes.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    /// Creation time; falls back to the modification time on filesystems
    /// that don't report it.
    pub created: SystemTime,
    pub modified: SystemTime,
    /// Parenthesized integer from the filename, if any.
    pub sequence: Option<u64>,
}

impl FileEntry {
    /// Build an entry from a path, reading its metadata.
    pub fn from_path(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let meta = fs::metadata(&path)?;
        let modified = meta.modified()?;
        let created = meta.created().unwrap_or(modified);
        let sequence = path
            .file_name()
            .and_then(|name| extract_number(&name.to_string_lossy()));

        Ok(Self {
            path,
            created,
            modified,
            sequence,
        })
    }

    /// Filename for display.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

/// List the allow-listed regular files directly inside `dir`.
///
/// Subdirectories are not descended into; unsupported extensions are
/// filtered out here so the batch only ever sees processable candidates.
pub fn scan_directory(dir: &Path) -> io::Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    for dir_entry in fs::read_dir(dir)? {
        let dir_entry = dir_entry?;
        let path = dir_entry.path();

        if !path.is_file() {
            continue;
        }
        if !formats::is_supported(&path) {
            continue;
        }

        entries.push(FileEntry::from_path(path)?);
    }

    tracing::debug!("Discovered {} candidate file(s) in {}", entries.len(), dir.display());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn scan_filters_to_allow_list() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.wav"), b"x").unwrap();
        fs::write(dir.path().join("b.mkv"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        fs::write(dir.path().join("no_extension"), b"x").unwrap();

        let entries = scan_directory(dir.path()).unwrap();
        let mut names: Vec<String> = entries.iter().map(|e| e.display_name()).collect();
        names.sort();
        assert_eq!(names, ["a.wav", "b.mkv"]);
    }

    #[test]
    fn scan_ignores_subdirectories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested.wav")).unwrap();
        fs::write(dir.path().join("real.wav"), b"x").unwrap();

        let entries = scan_directory(dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].display_name(), "real.wav");
    }

    #[test]
    fn entry_records_sequence_number() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("take_(7).wav");
        fs::write(&path, b"x").unwrap();

        let entry = FileEntry::from_path(&path).unwrap();
        assert_eq!(entry.sequence, Some(7));
    }

    #[test]
    fn entry_without_number_has_no_sequence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.wav");
        fs::write(&path, b"x").unwrap();

        let entry = FileEntry::from_path(&path).unwrap();
        assert_eq!(entry.sequence, None);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(FileEntry::from_path("/nonexistent/file.wav").is_err());
    }
}
