//! Shared helpers for tree rendering

use std::path::Path;

use crate::scan::{DirRecord, ScanReport};

use super::config::TreeOrder;

/// Indentation unit, repeated once per level of depth.
pub const INDENT_UNIT: &str = "│   ";

/// Number of parent steps from `path` up to its root.
///
/// A filesystem root has depth 0. For relative paths the first component
/// has depth 0. Only the path text is inspected.
pub fn depth_of(path: &Path) -> usize {
    let mut depth = 0;
    let mut current = path;
    while let Some(parent) = current.parent() {
        if parent.as_os_str().is_empty() {
            break;
        }
        depth += 1;
        current = parent;
    }
    depth
}

/// Display name of a directory: its last component, or the whole path
/// for roots like `/` and `C:\`.
pub fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Indentation for a directory at `depth`.
pub fn indent(depth: usize) -> String {
    INDENT_UNIT.repeat(depth)
}

/// Records of `report` arranged for display.
pub fn ordered_records(report: &ScanReport, order: TreeOrder) -> Vec<&DirRecord> {
    let mut records: Vec<&DirRecord> = report.records().iter().collect();
    match order {
        TreeOrder::Path => records.sort_by(|a, b| a.path.cmp(&b.path)),
        TreeOrder::Depth => {
            records.sort_by(|a, b| {
                depth_of(&a.path)
                    .cmp(&depth_of(&b.path))
                    .then_with(|| a.path.cmp(&b.path))
            })
        }
        TreeOrder::Scan => {}
    }
    records
}
