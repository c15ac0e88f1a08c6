//! Directory scanning
//!
//! This module discovers every directory reachable from a set of roots and
//! counts what each one immediately contains.
//!
//! - `Scanner`: owns the root set and runs breadth-first traversals
//! - `ScanReport`: the records and totals one traversal produced

mod config;
mod engine;
mod report;
mod roots;

pub use config::ScanConfig;
pub use engine::Scanner;
pub use report::{DirRecord, ScanReport, ScanTotals};
pub use roots::RootSet;
