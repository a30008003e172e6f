use crate::normalize::math::{mean, sigmoid};
use crate::types::scoring::DimensionResult;

const EPSILON: f64 = 1e-9;

/// D5: coupling from efferent couplings (Ce), imports per file and afferent
/// couplings (Ca).
///
/// Instability risk is the mean per-module instability `Ce / (Ca + Ce)`,
/// paired over the shorter of the two lists, scaled by mean Ce.
pub fn normalize_d5(
    efferent_couplings: &[f64],
    imports_per_file: &[f64],
    afferent_couplings: &[f64],
) -> DimensionResult {
    let ce_mean = mean(efferent_couplings);
    let coupling_efferent = sigmoid(ce_mean, 8.0, 0.2);
    let coupling_imports = if imports_per_file.is_empty() {
        0.0
    } else {
        sigmoid(mean(imports_per_file), 10.0, 0.15)
    };

    let instability_risk = if efferent_couplings.is_empty() || afferent_couplings.is_empty() {
        0.0
    } else {
        let instabilities: Vec<f64> = efferent_couplings
            .iter()
            .zip(afferent_couplings)
            .map(|(ce, ca)| ce / (ca + ce + EPSILON))
            .collect();
        mean(&instabilities) * ce_mean
    };
    let instability_sigmoid = sigmoid(instability_risk, 5.0, 0.2);

    let d5 = 0.40 * coupling_efferent + 0.35 * coupling_imports + 0.25 * instability_sigmoid;
    DimensionResult::new("d5", d5)
        .with("coupling_efferent", coupling_efferent)
        .with("coupling_imports", coupling_imports)
        .with("instability_risk", instability_risk)
        .with("instability_sigmoid", instability_sigmoid)
}
