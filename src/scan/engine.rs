//! Scanner - breadth-first directory expansion with an explicit queue

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::ScanError;
use crate::fs::{EntryKind, Filesystem, LocalFs};

use super::config::ScanConfig;
use super::report::{DirRecord, ScanReport};
use super::roots::RootSet;

/// Counts files and subdirectories under every directory reachable from
/// its roots.
///
/// The scanner keeps only the root set between runs. Each call to
/// [`Scanner::traverse`] builds a fresh queue and returns a fresh report.
pub struct Scanner<F: Filesystem = LocalFs> {
    fs: F,
    config: ScanConfig,
    roots: RootSet,
}

impl Scanner<LocalFs> {
    pub fn new(config: ScanConfig) -> Self {
        Self::with_filesystem(LocalFs, config)
    }
}

impl<F: Filesystem> Scanner<F> {
    pub fn with_filesystem(fs: F, config: ScanConfig) -> Self {
        Self {
            fs,
            config,
            roots: RootSet::new(),
        }
    }

    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    pub fn roots(&self) -> &RootSet {
        &self.roots
    }

    /// Register a root directory.
    ///
    /// Paths that are empty, missing, or not directories are logged and
    /// dropped. Returns whether the path was added.
    pub fn add_root(&mut self, path: impl Into<PathBuf>) -> bool {
        match self.roots.add(&self.fs, path.into()) {
            Ok(()) => true,
            Err(err) => {
                warn!("{}", err);
                false
            }
        }
    }

    /// Register every top-level root the platform reports.
    pub fn load_platform_roots(&mut self) {
        for root in self.fs.roots() {
            self.add_root(root);
        }
    }

    /// Walk everything reachable from the roots, breadth first.
    ///
    /// Falls back to the platform roots when none were registered.
    /// Directories that cannot be listed are logged, left out of the report,
    /// and not descended into.
    pub fn traverse(&mut self) -> ScanReport {
        if self.roots.is_empty() {
            info!("No root directories available. Loading system roots.");
            self.load_platform_roots();
        }

        let mut report = ScanReport::new(self.roots.len());
        let mut queue: VecDeque<PathBuf> = self.roots.iter().map(Path::to_path_buf).collect();
        let mut expanded: HashSet<PathBuf> = HashSet::new();

        while let Some(current) = queue.pop_front() {
            // May have vanished or been replaced since it was queued
            if !self.fs.is_dir(&current) {
                debug!(path = %current.display(), "no longer a directory, skipping");
                continue;
            }

            if self.config.skip_revisits {
                let identity = self
                    .fs
                    .identity(&current)
                    .unwrap_or_else(|| current.clone());
                if !expanded.insert(identity) {
                    debug!(path = %current.display(), "already expanded, skipping");
                    continue;
                }
            }

            let entries = match self.fs.read_dir(&current) {
                Ok(entries) => entries,
                Err(source) => {
                    let path = std::path::absolute(&current).unwrap_or_else(|_| current.clone());
                    let err = ScanError::Inaccessible { path, source };
                    warn!("{}", err);
                    report.mark_inaccessible(err.path().to_path_buf());
                    continue;
                }
            };

            let mut files = 0;
            let mut subdirs = 0;
            for entry in entries {
                match entry.kind {
                    EntryKind::File => {
                        files += 1;
                        report.count_file();
                    }
                    EntryKind::Dir => {
                        subdirs += 1;
                        queue.push_back(entry.path);
                    }
                    EntryKind::Other => {}
                }
            }

            report.record(DirRecord::new(current, files, subdirs));
        }

        debug!(
            directories = report.len(),
            files = report.total_files(),
            inaccessible = report.inaccessible().len(),
            "scan complete"
        );
        report
    }
}
