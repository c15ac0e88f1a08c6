//! The set of directories a scan starts from

use std::path::{Path, PathBuf};

use crate::error::ScanError;
use crate::fs::Filesystem;

/// Ordered, validated list of root directories.
///
/// Only directories that existed when they were added make it in. Duplicates
/// are allowed.
#[derive(Debug, Clone, Default)]
pub struct RootSet {
    roots: Vec<PathBuf>,
}

impl RootSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `path` against `fs` and append it.
    pub fn add<F: Filesystem>(&mut self, fs: &F, path: PathBuf) -> Result<(), ScanError> {
        if path.as_os_str().is_empty() || !fs.is_dir(&path) {
            return Err(ScanError::InvalidRoot { path });
        }
        self.roots.push(path);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.roots.iter().map(PathBuf::as_path)
    }
}
