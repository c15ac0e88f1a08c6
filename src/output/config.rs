//! Output configuration types

/// Order in which directories appear in the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TreeOrder {
    /// Lexicographic by path, so children follow their parent
    #[default]
    Path,
    /// Shallowest first, then by path
    Depth,
    /// The order the scanner finished expanding directories
    Scan,
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    pub order: TreeOrder,
}
