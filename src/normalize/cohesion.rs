use crate::normalize::math::{mean, sigmoid};
use crate::types::scoring::DimensionResult;

/// D6 for class-oriented code: mean LCOM (0 = cohesive, 1 = no shared state).
pub fn normalize_d6_class(lcom_values: &[f64]) -> DimensionResult {
    if lcom_values.is_empty() {
        return DimensionResult::zeroed("d6", &["mean_lcom"]);
    }
    let m = mean(lcom_values);
    DimensionResult::new("d6", sigmoid(m, 0.5, 4.0)).with("mean_lcom", m)
}

/// D6 for module-oriented code: how few of a module's exports are used
/// together.
pub fn normalize_d6_module(avg_exports_used_together: f64, total_exports: f64) -> DimensionResult {
    if total_exports == 0.0 {
        return DimensionResult::zeroed("d6", &["module_cohesion"]);
    }
    let module_cohesion = 1.0 - avg_exports_used_together / total_exports;
    DimensionResult::new("d6", sigmoid(module_cohesion, 0.4, 4.0))
        .with("module_cohesion", module_cohesion)
}
