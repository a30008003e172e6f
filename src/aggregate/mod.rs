pub mod polyglot;
pub mod rating;

use crate::normalize::math::round_to;
use crate::types::report::CliResult;
use crate::types::scoring::{Dimension, DimensionScores, Score};
use tracing::debug;

pub use polyglot::aggregate_polyglot;
pub use rating::get_rating;

/// Dimension weights in evaluation order. They sum to 1.00.
pub const WEIGHTS: [(Dimension, f64); 8] = [
    (Dimension::D1, 0.20),
    (Dimension::D2, 0.15),
    (Dimension::D3, 0.12),
    (Dimension::D4, 0.15),
    (Dimension::D5, 0.12),
    (Dimension::D6, 0.10),
    (Dimension::D7, 0.08),
    (Dimension::D8, 0.08),
];

/// Dimension pairs whose joint elevation compounds cognitive load:
/// complexity with nesting, poor naming with large units, coupling with low
/// cohesion.
pub const INTERACTION_PAIRS: [(Dimension, Dimension); 3] = [
    (Dimension::D1, Dimension::D2),
    (Dimension::D4, Dimension::D3),
    (Dimension::D5, Dimension::D6),
];

pub const INTERACTION_PENALTY_PER_PAIR: f64 = 0.05;

/// Both members of a pair must be strictly above this for the penalty.
const INTERACTION_THRESHOLD: f64 = 0.6;

pub const MAX_CLI_SCORE: u32 = 999;

pub fn compute_weighted_sum(scores: &DimensionScores) -> Score {
    WEIGHTS
        .iter()
        .fold(0.0, |acc, (dim, weight)| acc + weight * scores.score_or_zero(*dim))
}

pub fn compute_interaction_penalty(scores: &DimensionScores) -> Score {
    INTERACTION_PAIRS
        .iter()
        .filter(|(a, b)| {
            scores.score_or_zero(*a) > INTERACTION_THRESHOLD
                && scores.score_or_zero(*b) > INTERACTION_THRESHOLD
        })
        .fold(0.0, |acc, _| acc + INTERACTION_PENALTY_PER_PAIR)
}

pub fn compute_cli_score(scores: &DimensionScores) -> CliResult {
    let cli_raw = compute_weighted_sum(scores);
    let interaction_penalty = compute_interaction_penalty(scores);
    let cli_score = clamp_score((cli_raw + interaction_penalty) * 1000.0);
    let weighted_components = WEIGHTS
        .iter()
        .map(|(dim, weight)| (*dim, round_to(weight * scores.score_or_zero(*dim), 6)))
        .collect();

    debug!(cli_raw, interaction_penalty, cli_score, "computed cognitive load index");

    CliResult {
        cli_score,
        rating: get_rating(i64::from(cli_score)),
        cli_raw,
        interaction_penalty,
        weighted_components,
    }
}

/// Round half to even and clamp into `0..=999`. NaN lands on zero.
pub(crate) fn clamp_score(value: f64) -> u32 {
    let rounded = value.round_ties_even();
    if rounded.is_nan() || rounded <= 0.0 {
        return 0;
    }
    rounded.min(f64::from(MAX_CLI_SCORE)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::Rating;

    #[test]
    fn weights_sum_to_one() {
        let total: f64 = WEIGHTS.iter().map(|(_, weight)| weight).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn weights_cover_every_dimension_in_order() {
        let dims: Vec<Dimension> = WEIGHTS.iter().map(|(dim, _)| *dim).collect();
        assert_eq!(dims, Dimension::ALL.to_vec());
    }

    #[test]
    fn missing_dimensions_contribute_nothing() {
        let scores = DimensionScores::default().with(Dimension::D1, 0.5);
        assert!((compute_weighted_sum(&scores) - 0.1).abs() < 1e-12);
        assert_eq!(compute_weighted_sum(&DimensionScores::default()), 0.0);
    }

    #[test]
    fn penalty_boundary_is_exclusive() {
        let at_boundary = DimensionScores::default()
            .with(Dimension::D1, 0.6)
            .with(Dimension::D2, 0.6);
        assert_eq!(compute_interaction_penalty(&at_boundary), 0.0);

        let just_above = DimensionScores::default()
            .with(Dimension::D1, 0.60001)
            .with(Dimension::D2, 0.61);
        assert_eq!(compute_interaction_penalty(&just_above), 0.05);
    }

    #[test]
    fn penalty_requires_both_members() {
        let scores = DimensionScores::default()
            .with(Dimension::D5, 0.9)
            .with(Dimension::D6, 0.2)
            .with(Dimension::D4, 0.8)
            .with(Dimension::D3, 0.7);
        assert_eq!(compute_interaction_penalty(&scores), 0.05);
    }

    #[test]
    fn all_high_dimensions_trigger_every_pair() {
        let result = compute_cli_score(&DimensionScores::uniform(0.7));
        assert!((result.interaction_penalty - 0.15).abs() < 1e-12);
        assert!((result.cli_raw - 0.7).abs() < 1e-12);
        assert_eq!(result.cli_score, 850);
        assert_eq!(result.rating, Rating::Severe);
        assert_eq!(result.weighted_components.get(&Dimension::D1), Some(&0.14));
    }

    #[test]
    fn weighted_components_round_the_stored_product() {
        let scores = DimensionScores::default().with(Dimension::D1, 0.7937325);
        let result = compute_cli_score(&scores);
        assert_eq!(result.weighted_components.get(&Dimension::D1), Some(&0.158747));
    }

    #[test]
    fn cli_score_is_clamped_to_range() {
        let saturated = compute_cli_score(&DimensionScores::uniform(1.0));
        assert_eq!(saturated.cli_score, MAX_CLI_SCORE);
        assert_eq!(saturated.rating, Rating::Severe);

        let negative = compute_cli_score(&DimensionScores::uniform(-0.5));
        assert_eq!(negative.cli_score, 0);
        assert_eq!(negative.rating, Rating::Excellent);
    }

    #[test]
    fn empty_scores_produce_zero_components() {
        let result = compute_cli_score(&DimensionScores::default());
        assert_eq!(result.cli_score, 0);
        assert_eq!(result.weighted_components.len(), 8);
        assert!(result.weighted_components.values().all(|value| *value == 0.0));
    }
}
