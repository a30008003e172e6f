use crate::normalize::math::sigmoid;
use crate::types::scoring::DimensionResult;

/// D7: duplication given as a fraction (0.05 = 5%). The curve is calibrated
/// on percentages, so the fraction is scaled by 100 first.
pub fn normalize_d7(duplication_pct: f64) -> DimensionResult {
    let pct_100 = duplication_pct * 100.0;
    DimensionResult::new("d7", sigmoid(pct_100, 5.0, 0.3)).with("duplication_pct_100", pct_100)
}
