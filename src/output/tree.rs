//! Tree reporter for scan results
//!
//! Renders a `ScanReport` as an indented directory tree followed by the
//! aggregate statistics, either into a string or to stdout with colors.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::scan::ScanReport;

use super::config::OutputConfig;
use super::utils::{depth_of, dir_name, indent, ordered_records};

/// Shown instead of a tree when nothing has been scanned.
pub const EMPTY_MESSAGE: &str = "No directories traversed. Run a scan first.";

/// Formatter for scan reports.
pub struct TreeReporter {
    config: OutputConfig,
}

impl TreeReporter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the tree and statistics without colors.
    pub fn format(&self, report: &ScanReport) -> io::Result<String> {
        self.render(|out| self.write_tree(out, report))
    }

    /// Render only the statistics block without colors.
    pub fn format_statistics(&self, report: &ScanReport) -> io::Result<String> {
        self.render(|out| self.write_statistics(out, report))
    }

    /// Render the closing summary lines without colors.
    pub fn format_summary(&self, report: &ScanReport) -> io::Result<String> {
        self.render(|out| self.write_summary(out, report))
    }

    pub fn print(&self, report: &ScanReport) -> io::Result<()> {
        let mut stdout = self.stdout();
        self.write_tree(&mut stdout, report)
    }

    pub fn print_summary(&self, report: &ScanReport) -> io::Result<()> {
        let mut stdout = self.stdout();
        self.write_summary(&mut stdout, report)
    }

    /// Write the tree, then the statistics.
    ///
    /// An empty report produces only the "run a scan first" line.
    pub fn write_tree<W: WriteColor>(&self, out: &mut W, report: &ScanReport) -> io::Result<()> {
        if report.is_empty() {
            writeln!(out, "{}", EMPTY_MESSAGE)?;
            return Ok(());
        }

        writeln!(out, "Complete Directory Tree:")?;

        let mut name_color = ColorSpec::new();
        name_color.set_fg(Some(Color::Blue)).set_bold(true);

        for record in ordered_records(report, self.config.order) {
            let prefix = indent(depth_of(&record.path));

            write!(out, "{}├── ", prefix)?;
            out.set_color(&name_color)?;
            write!(out, "{}", dir_name(&record.path))?;
            out.reset()?;
            writeln!(out)?;
            writeln!(out, "{}    └── Files: {}", prefix, record.files)?;
            writeln!(out, "{}    └── Subdirectories: {}", prefix, record.subdirs)?;
        }

        self.write_statistics(out, report)
    }

    pub fn write_statistics<W: WriteColor>(
        &self,
        out: &mut W,
        report: &ScanReport,
    ) -> io::Result<()> {
        let mut bold = ColorSpec::new();
        bold.set_bold(true);

        writeln!(out)?;
        out.set_color(&bold)?;
        writeln!(out, "--- Directory Statistics ---")?;
        out.reset()?;
        writeln!(out, "Total Root Directories: {}", report.total_roots())?;
        writeln!(out, "Total Subdirectories: {}", report.total_subdirectories())?;
        writeln!(out, "Total Files: {}", report.total_files())?;
        Ok(())
    }

    /// Closing lines: registered roots and files seen.
    pub fn write_summary<W: WriteColor>(&self, out: &mut W, report: &ScanReport) -> io::Result<()> {
        writeln!(out, "Total directories: {}", report.total_roots())?;
        writeln!(out, "Total files: {}", report.total_files())?;
        Ok(())
    }

    fn stdout(&self) -> StandardStream {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        StandardStream::stdout(choice)
    }

    fn render<F>(&self, write: F) -> io::Result<String>
    where
        F: FnOnce(&mut NoColor<Vec<u8>>) -> io::Result<()>,
    {
        let mut out = NoColor::new(Vec::new());
        write(&mut out)?;
        Ok(String::from_utf8_lossy(&out.into_inner()).into_owned())
    }
}
