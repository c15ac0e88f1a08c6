//! JSON output formatting

use std::io;
use std::path::PathBuf;

use serde::Serialize;

use crate::scan::{DirRecord, ScanReport, ScanTotals};

use super::config::TreeOrder;
use super::utils::ordered_records;

#[derive(Serialize)]
struct JsonReport<'a> {
    totals: ScanTotals,
    directories: Vec<&'a DirRecord>,
    inaccessible: &'a [PathBuf],
}

/// Serialize a report as pretty-printed JSON.
pub fn format_json(report: &ScanReport, order: TreeOrder) -> serde_json::Result<String> {
    let doc = JsonReport {
        totals: report.totals(),
        directories: ordered_records(report, order),
        inaccessible: report.inaccessible(),
    };
    serde_json::to_string_pretty(&doc)
}

/// Print a report as pretty-printed JSON to stdout.
pub fn print_json(report: &ScanReport, order: TreeOrder) -> io::Result<()> {
    let json = format_json(report, order).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
