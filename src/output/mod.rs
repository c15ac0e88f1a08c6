//! Scan report formatting and display
//!
//! This module provides formatters for scan results:
//! - Console tree with statistics (plain or colored)
//! - JSON output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Depth, naming, and ordering helpers
//! - `tree` - Tree reporter
//! - `json` - JSON output

mod config;
mod json;
mod tree;
mod utils;

pub use config::{OutputConfig, TreeOrder};
pub use json::{format_json, print_json};
pub use tree::{EMPTY_MESSAGE, TreeReporter};
pub use utils::{INDENT_UNIT, depth_of, dir_name, indent, ordered_records};
