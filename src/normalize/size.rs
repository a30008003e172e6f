use crate::normalize::math::{mean, p90, sigmoid};
use crate::types::scoring::DimensionResult;

const W_FUNC: f64 = 0.35;
const W_FILE: f64 = 0.25;
const W_PARAMS: f64 = 0.20;
const W_CLASS: f64 = 0.20;

/// D3: volume and size. Each metric is squashed on its own curve, then
/// blended; an empty metric contributes zero.
pub fn normalize_d3(
    func_locs: &[f64],
    file_locs: &[f64],
    param_counts: &[f64],
    methods_per_class: &[f64],
) -> DimensionResult {
    let size_func = squash_non_empty(func_locs, p90, 30.0, 0.05);
    let size_file = squash_non_empty(file_locs, p90, 300.0, 0.005);
    let size_params = squash_non_empty(param_counts, mean, 4.0, 0.5);
    let size_class = squash_non_empty(methods_per_class, p90, 15.0, 0.1);
    let d3 =
        W_FUNC * size_func + W_FILE * size_file + W_PARAMS * size_params + W_CLASS * size_class;

    DimensionResult::new("d3", d3)
        .with("size_func", size_func)
        .with("size_file", size_file)
        .with("size_params", size_params)
        .with("size_class", size_class)
}

fn squash_non_empty(
    values: &[f64],
    statistic: fn(&[f64]) -> f64,
    midpoint: f64,
    steepness: f64,
) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sigmoid(statistic(values), midpoint, steepness)
}
