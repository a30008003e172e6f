use crate::types::scoring::{Dimension, Rating, Score};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Final Cognitive Load Index for one codebase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CliResult {
    pub cli_score: u32,
    pub rating: Rating,
    pub cli_raw: Score,
    pub interaction_penalty: Score,
    pub weighted_components: BTreeMap<Dimension, Score>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LanguageScore {
    pub cli_score: u32,
    pub loc: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageBreakdown {
    pub cli_score: u32,
    pub loc: u64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolyglotResult {
    pub cli_score: u32,
    pub rating: Rating,
    pub breakdown: BTreeMap<String, LanguageBreakdown>,
}
