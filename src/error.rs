//! Diagnostics raised while registering roots and scanning directories
//!
//! Neither kind aborts a scan. Both are logged and the scan moves on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    /// Root path is empty, missing, or not a directory
    #[error("Invalid directory skipped: {}", path.display())]
    InvalidRoot { path: PathBuf },

    /// Directory listing was refused (usually a permission problem)
    #[error("Security exception accessing directory: {}", path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Path the diagnostic is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::InvalidRoot { path } => path,
            ScanError::Inaccessible { path, .. } => path,
        }
    }
}
