//! File discovery for metadata locations.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{IngestError, Result};

/// Controls which files a directory search picks up.
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// File name suffix of metadata files.
    pub extension: String,
    /// Directory names pruned from the search.
    pub excluded_dirs: Vec<String>,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            extension: ".meta".to_string(),
            excluded_dirs: vec![".git".to_string()],
        }
    }
}

impl DiscoveryOptions {
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    #[must_use]
    pub fn with_excluded_dir(mut self, name: impl Into<String>) -> Self {
        self.excluded_dirs.push(name.into());
        self
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && self
                .excluded_dirs
                .iter()
                .any(|name| entry.file_name().to_string_lossy() == name.as_str())
    }

    /// Regular files and symlinks to files qualify.
    fn is_metadata(&self, entry: &DirEntry) -> bool {
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        is_file
            && entry
                .file_name()
                .to_string_lossy()
                .ends_with(self.extension.as_str())
    }
}

/// Turns a user-supplied location into the list of files to validate.
///
/// A file is returned as-is, whatever its name. A directory is searched
/// recursively. Anything else is an error.
pub fn resolve_metadata_paths(location: &Path, options: &DiscoveryOptions) -> Result<Vec<PathBuf>> {
    if location.is_file() {
        return Ok(vec![location.to_path_buf()]);
    }
    if location.is_dir() {
        return Ok(find_metadata_files(location, options));
    }
    Err(IngestError::PathNotFound {
        path: location.to_path_buf(),
    })
}

/// Recursively lists metadata files below `dir`.
///
/// Excluded directories are pruned; unreadable entries are logged and
/// skipped. Returns paths sorted for a stable report order.
pub fn find_metadata_files(dir: &Path, options: &DiscoveryOptions) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !options.is_excluded(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                warn!(%error, "skipping unreadable directory entry");
                continue;
            }
        };
        if options.is_metadata(&entry) {
            files.push(entry.into_path());
        }
    }

    files.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
    debug!(dir = %dir.display(), count = files.len(), "discovered metadata files");
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in [
            "physics/a.meta",
            "physics/sub/b.meta",
            "physics/notes.txt",
            "physics/meta",
            ".git/hooks/c.meta",
            "top.meta",
        ] {
            let path = dir.path().join(name);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, "").unwrap();
        }
        dir
    }

    #[test]
    fn test_find_metadata_files() {
        let dir = create_test_dir();
        let files = find_metadata_files(dir.path(), &DiscoveryOptions::default());
        let names: Vec<String> = files
            .iter()
            .map(|path| {
                path.strip_prefix(dir.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(names, vec!["physics/a.meta", "physics/sub/b.meta", "top.meta"]);
    }

    #[test]
    fn test_excluded_dir_option() {
        let dir = create_test_dir();
        let options = DiscoveryOptions::default().with_excluded_dir("sub");
        let files = find_metadata_files(dir.path(), &options);
        assert_eq!(files.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_files_are_found() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real.meta");
        std::fs::write(&real, "").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::os::unix::fs::symlink(&real, dir.path().join("sub/link.meta")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.meta"), dir.path().join("dangling.meta"))
            .unwrap();

        let files = find_metadata_files(dir.path(), &DiscoveryOptions::default());
        assert_eq!(files, vec![real, dir.path().join("sub/link.meta")]);
    }

    #[test]
    fn test_resolve_single_file_keeps_any_name() {
        let dir = create_test_dir();
        let path = dir.path().join("physics/notes.txt");
        let files = resolve_metadata_paths(&path, &DiscoveryOptions::default()).unwrap();
        assert_eq!(files, vec![path]);
    }

    #[test]
    fn test_resolve_missing_location() {
        let dir = create_test_dir();
        let missing = dir.path().join("nowhere");
        let err = resolve_metadata_paths(&missing, &DiscoveryOptions::default()).unwrap_err();
        assert!(matches!(err, IngestError::PathNotFound { .. }));
    }
}
