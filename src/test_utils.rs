//! Test utilities for building directory fixtures.
//!
//! This module is only compiled for tests and benchmarks.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fs::{Entry, EntryKind, Filesystem};

/// A temporary directory tree on the real filesystem.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Build `width` directories per level, `depth` levels deep, with
    /// `files_per_dir` files in each directory.
    pub fn populate(&self, depth: usize, width: usize, files_per_dir: usize) {
        fn fill(dir: &Path, depth: usize, width: usize, files: usize) {
            for f in 0..files {
                fs::write(dir.join(format!("file_{}.txt", f)), "x").expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for d in 0..width {
                let child = dir.join(format!("dir_{}", d));
                fs::create_dir(&child).expect("Failed to create dir");
                fill(&child, depth - 1, width, files);
            }
        }
        fill(self.dir.path(), depth, width, files_per_dir);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// An in-memory filesystem for driving the scanner without touching disk.
///
/// Supports directory aliases (symlinks), directories that refuse to be
/// listed, and records how often the platform roots were requested.
#[derive(Debug, Default)]
pub struct FakeFs {
    nodes: BTreeMap<PathBuf, EntryKind>,
    links: HashMap<PathBuf, PathBuf>,
    denied: HashSet<PathBuf>,
    roots: Vec<PathBuf>,
    roots_calls: Cell<usize>,
    listed: RefCell<Vec<PathBuf>>,
}

impl FakeFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory and all of its ancestors.
    pub fn dir(mut self, path: impl AsRef<Path>) -> Self {
        self.insert_ancestors(path.as_ref());
        self.nodes.insert(path.as_ref().to_path_buf(), EntryKind::Dir);
        self
    }

    /// Add a regular file, creating its ancestors as directories.
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self = self.dir(parent);
        }
        self.nodes.insert(path.to_path_buf(), EntryKind::File);
        self
    }

    /// Add a non-regular entry (socket, device, broken link).
    pub fn special(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self = self.dir(parent);
        }
        self.nodes.insert(path.to_path_buf(), EntryKind::Other);
        self
    }

    /// Add a symlink at `path` pointing at `target`.
    pub fn link(mut self, path: impl AsRef<Path>, target: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self = self.dir(parent);
        }
        self.links
            .insert(path.to_path_buf(), target.as_ref().to_path_buf());
        self
    }

    /// Make listing `path` fail with permission denied.
    pub fn deny(mut self, path: impl AsRef<Path>) -> Self {
        self.denied.insert(path.as_ref().to_path_buf());
        self
    }

    /// Set what `roots()` reports.
    pub fn with_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    /// How many times the platform roots were requested.
    pub fn roots_calls(&self) -> usize {
        self.roots_calls.get()
    }

    /// Every directory passed to `read_dir`, in call order.
    pub fn listed(&self) -> Vec<PathBuf> {
        self.listed.borrow().clone()
    }

    fn insert_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.nodes
                .entry(ancestor.to_path_buf())
                .or_insert(EntryKind::Dir);
        }
    }

    /// Replace any symlinked prefix of `path` with its target.
    fn resolve(&self, path: &Path) -> PathBuf {
        let mut current = path.to_path_buf();
        // Bounded so a self-referencing link cannot spin forever
        for _ in 0..64 {
            let hit = current.ancestors().find_map(|ancestor| {
                self.links.get(ancestor).map(|target| {
                    let rest = current.strip_prefix(ancestor).unwrap_or(Path::new(""));
                    if rest.as_os_str().is_empty() {
                        target.clone()
                    } else {
                        target.join(rest)
                    }
                })
            });
            match hit {
                Some(next) => current = next,
                None => return current,
            }
        }
        current
    }

    fn children_of(&self, resolved: &Path) -> Vec<std::ffi::OsString> {
        let nodes = self.nodes.keys();
        let links = self.links.keys();
        nodes
            .chain(links)
            .filter(|p| p.parent() == Some(resolved))
            .filter_map(|p| p.file_name().map(|n| n.to_os_string()))
            .collect()
    }
}

impl Filesystem for FakeFs {
    fn kind(&self, path: &Path) -> Option<EntryKind> {
        let resolved = self.resolve(path);
        match self.nodes.get(&resolved) {
            Some(kind) => Some(*kind),
            // Dangling links exist but resolve to nothing useful
            None if self.links.contains_key(path) => Some(EntryKind::Other),
            None => None,
        }
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Vec<Entry>> {
        self.listed.borrow_mut().push(dir.to_path_buf());

        let resolved = self.resolve(dir);
        if self.denied.contains(dir) || self.denied.contains(&resolved) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        if self.nodes.get(&resolved) != Some(&EntryKind::Dir) {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }

        Ok(self
            .children_of(&resolved)
            .into_iter()
            .map(|name| {
                let path = dir.join(name);
                let kind = self.kind(&path).unwrap_or(EntryKind::Other);
                Entry { path, kind }
            })
            .collect())
    }

    fn identity(&self, path: &Path) -> Option<PathBuf> {
        let resolved = self.resolve(path);
        self.nodes.contains_key(&resolved).then_some(resolved)
    }

    fn roots(&self) -> Vec<PathBuf> {
        self.roots_calls.set(self.roots_calls.get() + 1);
        self.roots.clone()
    }
}
