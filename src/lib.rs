//! dirtally - count files and subdirectories under a set of root directories

pub mod error;
pub mod fs;
pub mod output;
pub mod platform;
pub mod scan;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::ScanError;
pub use fs::{Entry, EntryKind, Filesystem, LocalFs};
pub use output::{OutputConfig, TreeOrder, TreeReporter, depth_of, dir_name, print_json};
pub use scan::{DirRecord, RootSet, ScanConfig, ScanReport, ScanTotals, Scanner};
