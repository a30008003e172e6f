use crate::normalize::math::{mean, p90, sigmoid};
use crate::types::scoring::DimensionResult;

/// D1: structural complexity from per-function cyclomatic or cognitive
/// complexity. The tail weighs more than the average.
pub fn normalize_d1(complexity_scores: &[f64]) -> DimensionResult {
    blend_mean_and_tail("d1", complexity_scores, 0.4, 0.6, 15.0, 0.15)
}

/// D2: nesting depth per function.
pub fn normalize_d2(nesting_depths: &[f64]) -> DimensionResult {
    blend_mean_and_tail("d2", nesting_depths, 0.3, 0.7, 4.0, 0.5)
}

fn blend_mean_and_tail(
    key: &'static str,
    values: &[f64],
    mean_weight: f64,
    p90_weight: f64,
    midpoint: f64,
    steepness: f64,
) -> DimensionResult {
    if values.is_empty() {
        return DimensionResult::zeroed(key, &["raw", "mean", "p90"]);
    }
    let m = mean(values);
    let p = p90(values);
    let raw = mean_weight * m + p90_weight * p;
    DimensionResult::new(key, sigmoid(raw, midpoint, steepness))
        .with("raw", raw)
        .with("mean", m)
        .with("p90", p)
}
