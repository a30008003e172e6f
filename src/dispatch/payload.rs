//! JSON payload shapes accepted by each command. Unknown fields are ignored.

use crate::normalize::NamingSignals;
use crate::types::report::LanguageScore;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
pub struct ComplexityPayload {
    pub complexity_scores: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct NestingPayload {
    pub nesting_depths: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct SizePayload {
    pub func_locs: Vec<f64>,
    pub file_locs: Vec<f64>,
    pub param_counts: Vec<f64>,
    pub methods_per_class: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct NamingPayload {
    pub short_name_proportion: f64,
    pub abbreviation_density: f64,
    pub single_char_per_100loc: f64,
    pub consistency_ratio: f64,
}

impl NamingPayload {
    pub fn signals(&self) -> NamingSignals {
        NamingSignals {
            short_name_proportion: self.short_name_proportion,
            abbreviation_density: self.abbreviation_density,
            single_char_per_100loc: self.single_char_per_100loc,
            consistency_ratio: self.consistency_ratio,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NamingLlmPayload {
    pub d4_static: f64,
    pub llm_score: f64,
}

#[derive(Debug, Deserialize)]
pub struct NamingFallbackPayload {
    #[serde(flatten)]
    pub naming: NamingPayload,
    pub dictionary_coverage: f64,
}

#[derive(Debug, Deserialize)]
pub struct CouplingPayload {
    pub efferent_couplings: Vec<f64>,
    pub imports_per_file: Vec<f64>,
    pub afferent_couplings: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ClassCohesionPayload {
    pub lcom_values: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ModuleCohesionPayload {
    pub avg_exports_used_together: f64,
    pub total_exports: f64,
}

#[derive(Debug, Deserialize)]
pub struct DuplicationPayload {
    pub duplication_pct: f64,
}

#[derive(Debug, Deserialize)]
pub struct NavigabilityPayload {
    pub max_directory_depth: f64,
    pub files_per_directory: Vec<f64>,
    pub file_sizes: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct PolyglotPayload {
    pub language_scores: BTreeMap<String, LanguageScore>,
}

#[derive(Debug, Deserialize)]
pub struct SampleFilesPayload {
    pub file_paths: Vec<String>,
    pub sample_pct: Option<f64>,
    pub min_loc: Option<f64>,
    pub file_locs: Option<BTreeMap<String, f64>>,
}

#[derive(Debug, Deserialize)]
pub struct SampleIdentifiersPayload {
    pub file_path: String,
    pub identifiers: Vec<String>,
    pub count: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct RatingPayload {
    pub score: i64,
}
