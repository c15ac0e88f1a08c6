//! Configuration types for the scanner

/// Configuration for scanning behavior.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Expand each physical directory at most once per run, even when it is
    /// reachable through several paths (symlinks, duplicate roots).
    /// Turning this off lets symlink cycles run forever.
    pub skip_revisits: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            skip_revisits: true,
        }
    }
}
