use crate::types::scoring::Rating;

/// Inclusive upper bounds, ascending.
pub const RATING_THRESHOLDS: [(i64, Rating); 6] = [
    (100, Rating::Excellent),
    (250, Rating::Good),
    (400, Rating::Moderate),
    (600, Rating::Concerning),
    (800, Rating::Poor),
    (999, Rating::Severe),
];

pub fn get_rating(score: i64) -> Rating {
    RATING_THRESHOLDS
        .iter()
        .find(|(threshold, _)| score <= *threshold)
        .map(|(_, rating)| *rating)
        .unwrap_or(Rating::Severe)
}
