//! Filesystem access used by the scanner
//!
//! The scanner never touches `std::fs` directly. Everything goes through the
//! [`Filesystem`] trait so scans can run against an in-memory tree in tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::platform::platform_roots;

/// What a path resolves to, with symlinks followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Sockets, devices, fifos and broken symlinks
    Other,
}

impl From<fs::FileType> for EntryKind {
    fn from(ft: fs::FileType) -> Self {
        if ft.is_file() {
            EntryKind::File
        } else if ft.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::Other
        }
    }
}

/// One item of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Operations the scanner needs from a filesystem.
pub trait Filesystem {
    /// Resolve what `path` is. `None` when it does not exist.
    fn kind(&self, path: &Path) -> Option<EntryKind>;

    /// List the immediate contents of `dir`.
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<Entry>>;

    /// Canonical identity of `path`, if it can be resolved.
    fn identity(&self, path: &Path) -> Option<PathBuf>;

    /// The host's top-level roots.
    fn roots(&self) -> Vec<PathBuf>;

    fn is_dir(&self, path: &Path) -> bool {
        self.kind(path) == Some(EntryKind::Dir)
    }
}

/// The real, local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl Filesystem for LocalFs {
    fn kind(&self, path: &Path) -> Option<EntryKind> {
        fs::metadata(path).ok().map(|m| m.file_type().into())
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Vec<Entry>> {
        let entries = fs::read_dir(dir)?;

        Ok(entries
            .filter_map(|e| e.ok())
            .map(|entry| {
                let path = entry.path();
                let kind = match entry.file_type() {
                    // Symlinks count as whatever they point at
                    Ok(ft) if ft.is_symlink() => fs::metadata(&path)
                        .map(|m| m.file_type().into())
                        .unwrap_or(EntryKind::Other),
                    Ok(ft) => ft.into(),
                    Err(_) => EntryKind::Other,
                };
                Entry { path, kind }
            })
            .collect())
    }

    fn identity(&self, path: &Path) -> Option<PathBuf> {
        fs::canonicalize(path).ok()
    }

    fn roots(&self) -> Vec<PathBuf> {
        platform_roots()
    }
}
