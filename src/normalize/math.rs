//! Numeric kernels shared by the dimension normalizers.

/// Exponent magnitude beyond which the logistic curve is treated as saturated.
const SIGMOID_EXPONENT_LIMIT: f64 = 500.0;

/// Logistic squashing `1 / (1 + e^(-steepness * (x - midpoint)))`.
///
/// Saturates to exactly 0.0 or 1.0 once the exponent leaves
/// `[-500, 500]`, so `exp` is never asked to overflow.
pub fn sigmoid(x: f64, midpoint: f64, steepness: f64) -> f64 {
    let z = -steepness * (x - midpoint);
    if z > SIGMOID_EXPONENT_LIMIT {
        return 0.0;
    }
    if z < -SIGMOID_EXPONENT_LIMIT {
        return 1.0;
    }
    1.0 / (1.0 + z.exp())
}

/// 90th percentile by linear interpolation between the two closest ranks.
pub fn p90(values: &[f64]) -> f64 {
    match values {
        [] => 0.0,
        [only] => *only,
        _ => {
            let mut sorted = values.to_vec();
            sorted.sort_by(|a, b| a.total_cmp(b));
            let idx = 0.9 * (sorted.len() - 1) as f64;
            let lo = idx.floor() as usize;
            let hi = idx.ceil() as usize;
            let frac = idx - lo as f64;
            sorted[lo] + frac * (sorted[hi] - sorted[lo])
        }
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation over the mean. Zero for empty input or a
/// zero mean.
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    if m == 0.0 {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt() / m
}

/// Round the exact binary value to `decimals` places, ties to even.
///
/// Goes through the decimal expansion instead of scaling by `10^decimals`,
/// since the scaled product can itself round onto a false `.5` tie.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
