//! Top-level filesystem roots of the host

use std::path::PathBuf;

/// List the host's filesystem roots.
///
/// Unix-like systems have a single root. On Windows every drive letter whose
/// root directory currently exists is returned, in letter order.
#[cfg(not(windows))]
pub fn platform_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("/")]
}

#[cfg(windows)]
pub fn platform_roots() -> Vec<PathBuf> {
    (b'A'..=b'Z')
        .map(|letter| PathBuf::from(format!("{}:\\", letter as char)))
        .filter(|root| root.is_dir())
        .collect()
}
