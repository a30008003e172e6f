use crate::normalize::math::{coefficient_of_variation, p90, sigmoid};
use crate::types::scoring::DimensionResult;

/// D8: navigability from directory depth, directory density and how uneven
/// file sizes are.
pub fn normalize_d8(
    max_directory_depth: f64,
    files_per_directory: &[f64],
    file_sizes: &[f64],
) -> DimensionResult {
    let nav_depth = sigmoid(max_directory_depth, 5.0, 0.4);
    let nav_density = if files_per_directory.is_empty() {
        0.0
    } else {
        sigmoid(p90(files_per_directory), 15.0, 0.1)
    };
    let nav_variance = sigmoid(coefficient_of_variation(file_sizes), 1.5, 0.8);
    let d8 = 0.35 * nav_depth + 0.35 * nav_density + 0.30 * nav_variance;

    DimensionResult::new("d8", d8)
        .with("nav_depth", nav_depth)
        .with("nav_density", nav_density)
        .with("nav_variance", nav_variance)
}
