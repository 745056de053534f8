//! Common test utilities shared across all test modules
//!
//! This module provides helper functions for reading bundled asset files
//! and other common testing operations.

use std::path::Path;

/// Helper function to read a text file, panicking with a clear message if not found.
/// This ensures CI catches missing asset files instead of silently skipping tests.
pub fn read_asset_file(file_path: &str) -> String {
    std::fs::read_to_string(file_path)
        .unwrap_or_else(|e| panic!("Failed to read asset file '{}': {}", file_path, e))
}

/// Check if an asset file exists (useful for conditional tests)
#[allow(dead_code)]
pub fn asset_file_exists(file_path: &str) -> bool {
    Path::new(file_path).exists()
}

/// Bundled data file paths referenced by the content catalog
pub mod asset_files {
    /// Enhanced model training curves
    pub const TRAINING_ENHANCED: &str = "assets/data/vae_gan/training_data.dat";

    /// Baseline model training curves
    pub const TRAINING_BASIC: &str = "assets/data/vae_gan/training_data_basic.dat";

    /// Hue distribution histogram
    pub const HISTOGRAM: &str = "assets/data/vae_gan/histogram_sample_40.dat";

    pub const ALL: &[&str] = &[TRAINING_ENHANCED, TRAINING_BASIC, HISTOGRAM];
}
