//! Source directory listing and the reserved-name filter.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExtractError;

/// One entry of the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name (lossily decoded for non-UTF-8 names).
    pub name: String,
    /// Full path inside the source directory.
    pub path: PathBuf,
    /// Whether the entry itself is a regular file (symlinks are not).
    pub is_file: bool,
}

/// List a directory without recursing, sorted by file name.
///
/// Entries that fail to read individually are logged and left out.
///
/// # Errors
///
/// * If the directory cannot be opened for listing
pub fn list_entries(dir: &Path) -> Result<Vec<FileEntry>, ExtractError> {
    log::debug!("Listing {}", dir.display());

    let read_dir = fs::read_dir(dir).map_err(|e| ExtractError::ReadDirError {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut entries = Vec::new();

    for entry in read_dir {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {e}", dir.display());
                continue;
            }
        };

        let is_file = entry.file_type().is_ok_and(|t| t.is_file());

        entries.push(FileEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
            is_file,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!("Found {} entries", entries.len());

    Ok(entries)
}

/// Name fragments identifying cache bookkeeping files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedNames {
    fragments: Vec<String>,
}

impl ReservedNames {
    /// Build a filter from name fragments. Empty fragments are ignored.
    #[must_use]
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fragments: fragments
                .into_iter()
                .map(Into::into)
                .filter(|f: &String| !f.is_empty())
                .collect(),
        }
    }

    /// Whether a file name contains any reserved fragment.
    #[must_use]
    pub fn is_reserved(&self, name: &str) -> bool {
        self.fragments.iter().any(|f| name.contains(f.as_str()))
    }

    /// Split a listing into kept entries (in original order) and the number
    /// of reserved entries dropped.
    #[must_use]
    pub fn apply(&self, entries: Vec<FileEntry>) -> (Vec<FileEntry>, usize) {
        let total = entries.len();
        let kept: Vec<FileEntry> = entries
            .into_iter()
            .filter(|entry| {
                let reserved = self.is_reserved(&entry.name);
                if reserved {
                    log::trace!("Skipping reserved entry {}", entry.name);
                }
                !reserved
            })
            .collect();
        let dropped = total - kept.len();

        (kept, dropped)
    }
}

impl Default for ReservedNames {
    fn default() -> Self {
        Self::new(["data", "index"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(name: &str) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            path: PathBuf::from(name),
            is_file: true,
        }
    }

    #[test]
    fn test_list_entries_sorted_and_flat() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("f_0002"), "b").unwrap();
        fs::write(dir.path().join("f_0001"), "a").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/inner"), "c").unwrap();

        let entries = list_entries(dir.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["f_0001", "f_0002", "nested"]);
        assert!(entries[0].is_file);
        assert!(!entries[2].is_file);
        assert_eq!(entries[0].path, dir.path().join("f_0001"));
    }

    #[test]
    fn test_list_entries_missing_directory() {
        let dir = TempDir::new().unwrap();

        let result = list_entries(&dir.path().join("missing"));

        assert!(matches!(result, Err(ExtractError::ReadDirError { .. })));
    }

    #[test]
    fn test_default_reserved_names() {
        let reserved = ReservedNames::default();

        assert!(reserved.is_reserved("index"));
        assert!(reserved.is_reserved("data_0"));
        assert!(reserved.is_reserved("the-index-file"));
        assert!(!reserved.is_reserved("f_000a1b"));
        // Matching is case sensitive.
        assert!(!reserved.is_reserved("DATA_1"));
    }

    #[test]
    fn test_empty_fragments_ignored() {
        let reserved = ReservedNames::new(["", "journal"]);

        assert!(!reserved.is_reserved("f_0001"));
        assert!(reserved.is_reserved("journal"));
    }

    #[test]
    fn test_apply_keeps_order() {
        let entries = vec![
            entry("index"),
            entry("f_1"),
            entry("data_0"),
            entry("f_2"),
            entry("data_1"),
            entry("f_3"),
        ];

        let (kept, dropped) = ReservedNames::default().apply(entries);
        let names: Vec<&str> = kept.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["f_1", "f_2", "f_3"]);
        assert_eq!(dropped, 3);
    }
}
