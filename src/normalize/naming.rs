//! D4: naming quality.
//!
//! Three variants share the same heuristic inputs. The static score stands
//! alone when no semantic review exists, the LLM blend mixes it with a
//! semantic naming score, and the fallback adds dictionary coverage for runs
//! where the semantic review is unavailable.

use crate::normalize::math::sigmoid;
use crate::types::scoring::DimensionResult;

/// Raw naming heuristics for one codebase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamingSignals {
    /// Share of identifiers shorter than three characters (0-1).
    pub short_name_proportion: f64,
    /// Abbreviation density (0-1).
    pub abbreviation_density: f64,
    pub single_char_per_100loc: f64,
    /// Naming convention consistency (1 = fully consistent).
    pub consistency_ratio: f64,
}

struct NamingParts {
    short: f64,
    abbrev: f64,
    single_char: f64,
    consistency: f64,
}

impl NamingSignals {
    fn parts(&self) -> NamingParts {
        NamingParts {
            short: self.short_name_proportion,
            abbrev: self.abbreviation_density,
            single_char: sigmoid(self.single_char_per_100loc, 2.0, 0.5),
            consistency: 1.0 - self.consistency_ratio,
        }
    }
}

pub fn normalize_d4_static(signals: &NamingSignals) -> DimensionResult {
    let parts = signals.parts();
    let d4_static = 0.30 * parts.short
        + 0.25 * parts.abbrev
        + 0.25 * parts.single_char
        + 0.20 * parts.consistency;
    with_parts(DimensionResult::new("d4_static", d4_static), &parts)
}

/// Blend the static score with a semantic score (0 = excellent, 1 = poor).
pub fn normalize_d4_with_llm(d4_static: f64, llm_score: f64) -> DimensionResult {
    DimensionResult::new("d4", 0.60 * d4_static + 0.40 * llm_score)
        .with("d4_static", d4_static)
        .with("llm_score", llm_score)
}

pub fn normalize_d4_fallback(
    signals: &NamingSignals,
    dictionary_coverage: f64,
) -> DimensionResult {
    let parts = signals.parts();
    let dict_penalty = 1.0 - dictionary_coverage;
    let d4_fallback = 0.35 * parts.short
        + 0.30 * parts.abbrev
        + 0.15 * parts.single_char
        + 0.10 * parts.consistency
        + 0.10 * dict_penalty;
    with_parts(DimensionResult::new("d4_fallback", d4_fallback), &parts)
        .with("dict_penalty", dict_penalty)
}

fn with_parts(result: DimensionResult, parts: &NamingParts) -> DimensionResult {
    result
        .with("naming_short", parts.short)
        .with("naming_abbrev", parts.abbrev)
        .with("naming_single_char", parts.single_char)
        .with("naming_consistency", parts.consistency)
}
