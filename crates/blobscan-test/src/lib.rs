//! blobscan-test - Regression test framework for blobscan
//!
//! This crate provides a golden-file regression test framework supporting
//! three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use blobscan_test::{RegParams, RegTestMode};
//!
//! let mut rp = RegParams::new("label");
//! rp.compare_values(5.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use blobscan_core::Grid;

/// Render a grid as text, one row per line with space-separated values
///
/// Useful for writing label maps or distance fields as golden artifacts.
pub fn format_grid(grid: &Grid) -> String {
    let mut out = String::new();
    for y in 0..grid.height() as usize {
        let row = &grid.data()[y * grid.width() as usize..(y + 1) * grid.width() as usize];
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // blobscan-test is at crates/blobscan-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
