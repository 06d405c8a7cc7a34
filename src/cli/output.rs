//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying progress bars
//! and formatted status messages to the user.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for variant builds
pub fn create_variant_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} variants ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Banner line marking a finished project build
pub fn completion_banner(directory: &str) -> String {
    format!("*********************** {directory} DONE *************************")
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}
