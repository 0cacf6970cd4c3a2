//! Directory listing.

use std::cmp::Ordering;
use std::fs;

use tracing::{debug, warn};

use super::{FileTransferError, existing_dir};
use crate::domain::DirEntry;

/// List the entries of `dir`.
///
/// Entries are sorted directories first, then by case-insensitive name.
/// An entry that cannot be stat'ed is reported as a 0-byte file instead of
/// failing the whole listing. Symlinks are followed.
pub fn list_dir(dir: &str) -> Result<Vec<DirEntry>, FileTransferError> {
    let path = existing_dir(dir)?;

    let read_dir = fs::read_dir(path).map_err(|source| FileTransferError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries: Vec<DirEntry> = read_dir
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(dir = %path.display(), error = %e, "Skipping unreadable directory entry");
                None
            }
        })
        .map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_dir() => DirEntry::dir(name),
                Ok(meta) => DirEntry::file(name, meta.len()),
                Err(e) => {
                    debug!(name = %name, error = %e, "stat failed, listing as empty file");
                    DirEntry::file(name, 0)
                }
            }
        })
        .collect();

    entries.sort_by(compare_entries);
    Ok(entries)
}

/// Listing order: directories before files, then case-insensitive name,
/// with the exact name as a tie-breaker so the order is total.
pub fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(entries: &[DirEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn lists_directories_first_then_case_insensitive() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), b"bb").unwrap();
        fs::create_dir(dir.path().join("A")).unwrap();
        fs::write(dir.path().join("a.txt"), b"a").unwrap();

        let entries = list_dir(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(names(&entries), ["A", "a.txt", "b.txt"]);
    }

    #[test]
    fn reports_sizes_and_kinds() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), b"<html></html>").unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();

        let entries = list_dir(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(
            entries,
            vec![DirEntry::dir("assets"), DirEntry::file("index.html", 13)]
        );
    }

    #[test]
    fn directories_sort_among_themselves() {
        let dir = TempDir::new().unwrap();
        for name in ["zeta", "Beta", "alpha"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::write(dir.path().join("Aardvark.txt"), b"").unwrap();

        let entries = list_dir(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(names(&entries), ["alpha", "Beta", "zeta", "Aardvark.txt"]);
    }

    #[test]
    fn empty_path_is_validation_error() {
        assert!(matches!(list_dir(""), Err(FileTransferError::Validation(_))));
        assert!(matches!(list_dir("  "), Err(FileTransferError::Validation(_))));
    }

    #[test]
    fn missing_path_is_not_found() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            list_dir(missing.to_str().unwrap()),
            Err(FileTransferError::NotFound(_))
        ));
    }

    #[test]
    fn file_path_is_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(
            list_dir(file.to_str().unwrap()),
            Err(FileTransferError::NotADirectory(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_listed_as_empty_file() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("link")).unwrap();

        let entries = list_dir(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(entries, vec![DirEntry::file("link", 0)]);
    }
}
