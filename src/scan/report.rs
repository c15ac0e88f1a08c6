//! Results of a single scan

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Counts for one expanded directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirRecord {
    pub path: PathBuf,
    /// Immediate regular files
    pub files: usize,
    /// Immediate subdirectories
    pub subdirs: usize,
}

impl DirRecord {
    pub fn new(path: impl Into<PathBuf>, files: usize, subdirs: usize) -> Self {
        Self {
            path: path.into(),
            files,
            subdirs,
        }
    }
}

/// Aggregate figures for a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanTotals {
    pub roots: usize,
    /// Directories that were listed and recorded
    pub directories: usize,
    pub subdirectories: usize,
    pub files: usize,
    pub inaccessible: usize,
}

/// Everything one `traverse` run produced.
///
/// Records are kept in the order directories finished expanding. Recording
/// the same path twice replaces the earlier record in place.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    roots: usize,
    files: usize,
    records: Vec<DirRecord>,
    index: HashMap<PathBuf, usize>,
    inaccessible: Vec<PathBuf>,
}

impl ScanReport {
    pub fn new(roots: usize) -> Self {
        Self {
            roots,
            ..Default::default()
        }
    }

    /// Bump the running file total by one.
    pub fn count_file(&mut self) {
        self.files += 1;
    }

    /// Store `record`. Replacing an earlier record for the same path
    /// withdraws that record's files from the running total.
    pub fn record(&mut self, record: DirRecord) {
        match self.index.get(&record.path) {
            Some(&slot) => {
                self.files = self.files.saturating_sub(self.records[slot].files);
                self.records[slot] = record;
            }
            None => {
                self.index.insert(record.path.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn mark_inaccessible(&mut self, path: PathBuf) {
        self.inaccessible.push(path);
    }

    /// Records in scan (breadth-first completion) order.
    pub fn records(&self) -> &[DirRecord] {
        &self.records
    }

    pub fn get(&self, path: &Path) -> Option<&DirRecord> {
        self.index.get(path).map(|&slot| &self.records[slot])
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Directories whose listing failed, as absolute paths.
    pub fn inaccessible(&self) -> &[PathBuf] {
        &self.inaccessible
    }

    pub fn total_roots(&self) -> usize {
        self.roots
    }

    pub fn total_files(&self) -> usize {
        self.files
    }

    pub fn total_subdirectories(&self) -> usize {
        self.records.iter().map(|r| r.subdirs).sum()
    }

    pub fn totals(&self) -> ScanTotals {
        ScanTotals {
            roots: self.roots,
            directories: self.records.len(),
            subdirectories: self.total_subdirectories(),
            files: self.files,
            inaccessible: self.inaccessible.len(),
        }
    }
}
