use crate::aggregate::{clamp_score, get_rating};
use crate::error::{CogloadError, Result};
use crate::normalize::math::round_to;
use crate::types::report::{LanguageBreakdown, LanguageScore, PolyglotResult};
use crate::types::scoring::Rating;
use std::collections::BTreeMap;
use tracing::debug;

/// Combine per-language CLI scores into one, weighting each language by its
/// share of the total lines of code.
pub fn aggregate_polyglot(
    language_scores: &BTreeMap<String, LanguageScore>,
) -> Result<PolyglotResult> {
    let total_loc = language_scores
        .values()
        .try_fold(0u64, |acc, entry| acc.checked_add(entry.loc))
        .ok_or_else(|| CogloadError::Computation("total lines of code overflow".to_string()))?;

    if total_loc == 0 {
        return Ok(PolyglotResult {
            cli_score: 0,
            rating: Rating::Excellent,
            breakdown: BTreeMap::new(),
        });
    }

    let total = total_loc as f64;
    let weighted_score = language_scores.values().fold(0.0, |acc, entry| {
        acc + entry.loc as f64 / total * f64::from(entry.cli_score)
    });
    let cli_score = clamp_score(weighted_score);

    let breakdown = language_scores
        .iter()
        .map(|(language, entry)| {
            (
                language.clone(),
                LanguageBreakdown {
                    cli_score: entry.cli_score,
                    loc: entry.loc,
                    weight: round_to(entry.loc as f64 / total, 4),
                },
            )
        })
        .collect();

    debug!(
        languages = language_scores.len(),
        total_loc,
        cli_score,
        "aggregated polyglot score"
    );

    Ok(PolyglotResult {
        cli_score,
        rating: get_rating(i64::from(cli_score)),
        breakdown,
    })
}
