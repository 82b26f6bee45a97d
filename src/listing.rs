//! Directory listing collaborators.
//!
//! A lister turns a directory path into the ordered file names that become
//! scheduling items. Listing order is arrival order for FIFO, so the
//! filesystem lister sorts by creation time.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, warn};

use crate::error::DirectoryError;

/// Supplies the files of a directory in arrival order.
pub trait DirectoryLister {
    /// Lists file names ordered by arrival (creation time ascending).
    fn list_files(&self, dir: &Path) -> Result<Vec<String>, DirectoryError>;

    /// Lists file names alphabetically, for browsing views.
    fn list_sorted_by_name(&self, dir: &Path) -> Result<Vec<String>, DirectoryError> {
        let mut names = self.list_files(dir)?;
        names.sort();
        Ok(names)
    }
}

/// Lists regular files on the local filesystem.
///
/// Files are ordered by creation time, falling back to modification time
/// on platforms without creation timestamps, then by name. Sub-directories
/// and names that are not valid UTF-8 are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl FsLister {
    /// Creates a filesystem lister.
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryLister for FsLister {
    fn list_files(&self, dir: &Path) -> Result<Vec<String>, DirectoryError> {
        let meta = fs::metadata(dir).map_err(|e| DirectoryError::from_io(dir, e))?;
        if !meta.is_dir() {
            return Err(DirectoryError::NotADirectory(dir.to_path_buf()));
        }

        let reader = fs::read_dir(dir).map_err(|e| DirectoryError::from_io(dir, e))?;
        let mut files: Vec<(SystemTime, String)> = Vec::new();

        for entry in reader {
            let entry = entry.map_err(|e| DirectoryError::from_io(dir, e))?;
            let meta = match entry.metadata() {
                Ok(m) => m,
                Err(e) => {
                    warn!(path = %entry.path().display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !meta.is_file() {
                continue;
            }
            let arrived = meta
                .created()
                .or_else(|_| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!(name = ?raw, "skipping non UTF-8 file name");
                    continue;
                }
            };
            files.push((arrived, name));
        }

        files.sort();
        debug!(dir = %dir.display(), files = files.len(), "directory listed");
        Ok(files.into_iter().map(|(_, name)| name).collect())
    }
}

/// In-memory lister with fixed listings per path.
///
/// Useful for presentation layers that already hold a listing, and for
/// tests that need exact arrival orders.
#[derive(Debug, Clone, Default)]
pub struct StaticLister {
    listings: HashMap<PathBuf, Vec<String>>,
}

impl StaticLister {
    /// Creates an empty lister; every path is reported as not found.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the arrival-ordered listing of a directory.
    pub fn with_dir<P, I, S>(mut self, dir: P, files: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.listings
            .insert(dir.into(), files.into_iter().map(Into::into).collect());
        self
    }
}

impl DirectoryLister for StaticLister {
    fn list_files(&self, dir: &Path) -> Result<Vec<String>, DirectoryError> {
        self.listings
            .get(dir)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(dir.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        let err = FsLister::new().list_files(&missing).unwrap_err();
        assert!(matches!(err, DirectoryError::NotFound(_)));
    }

    #[test]
    fn test_fs_not_a_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();
        let err = FsLister::new().list_files(&file).unwrap_err();
        assert!(matches!(err, DirectoryError::NotADirectory(_)));
    }

    #[test]
    fn test_fs_skips_subdirectories() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a.pdf"), b"").unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        let files = FsLister::new().list_files(tmp.path()).unwrap();
        assert_eq!(files, vec!["a.pdf".to_string()]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_fs_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(OsStr::from_bytes(b"bad\xff.txt")), b"").unwrap();
        fs::write(tmp.path().join(OsStr::from_bytes(b"bad\xfe.txt")), b"").unwrap();
        fs::write(tmp.path().join("good.txt"), b"").unwrap();
        let files = FsLister::new().list_files(tmp.path()).unwrap();
        assert_eq!(files, vec!["good.txt".to_string()]);
    }

    #[test]
    fn test_fs_empty_dir() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(FsLister::new().list_files(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_sorted_by_name() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["c.txt", "a.txt", "b.txt"] {
            fs::write(tmp.path().join(name), b"").unwrap();
        }
        let files = FsLister::new().list_sorted_by_name(tmp.path()).unwrap();
        assert_eq!(files, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_static_lister() {
        let lister = StaticLister::new().with_dir("/docs", ["z.pdf", "a.txt"]);
        assert_eq!(
            lister.list_files(Path::new("/docs")).unwrap(),
            vec!["z.pdf", "a.txt"]
        );
        assert_eq!(
            lister.list_sorted_by_name(Path::new("/docs")).unwrap(),
            vec!["a.txt", "z.pdf"]
        );
        assert!(lister.list_files(Path::new("/other")).is_err());
    }
}
