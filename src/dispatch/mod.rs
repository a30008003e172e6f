pub mod payload;

use crate::aggregate::{aggregate_polyglot, compute_cli_score, get_rating};
use crate::error::{CogloadError, Result};
use crate::normalize;
use crate::sampling::{select_files, select_identifiers_for_file};
use crate::types::config::SamplingDefaults;
use crate::types::scoring::{DimensionResult, DimensionScores};
use payload::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NormalizeD1,
    NormalizeD2,
    NormalizeD3,
    NormalizeD4Static,
    NormalizeD4Llm,
    NormalizeD4Fallback,
    NormalizeD5,
    NormalizeD6Class,
    NormalizeD6Module,
    NormalizeD7,
    NormalizeD8,
    Aggregate,
    AggregatePolyglot,
    SampleFiles,
    SampleIdentifiers,
    Rating,
}

impl Command {
    pub const ALL: [Command; 16] = [
        Command::NormalizeD1,
        Command::NormalizeD2,
        Command::NormalizeD3,
        Command::NormalizeD4Static,
        Command::NormalizeD4Llm,
        Command::NormalizeD4Fallback,
        Command::NormalizeD5,
        Command::NormalizeD6Class,
        Command::NormalizeD6Module,
        Command::NormalizeD7,
        Command::NormalizeD8,
        Command::Aggregate,
        Command::AggregatePolyglot,
        Command::SampleFiles,
        Command::SampleIdentifiers,
        Command::Rating,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::NormalizeD1 => "normalize-d1",
            Command::NormalizeD2 => "normalize-d2",
            Command::NormalizeD3 => "normalize-d3",
            Command::NormalizeD4Static => "normalize-d4-static",
            Command::NormalizeD4Llm => "normalize-d4-llm",
            Command::NormalizeD4Fallback => "normalize-d4-fallback",
            Command::NormalizeD5 => "normalize-d5",
            Command::NormalizeD6Class => "normalize-d6-class",
            Command::NormalizeD6Module => "normalize-d6-module",
            Command::NormalizeD7 => "normalize-d7",
            Command::NormalizeD8 => "normalize-d8",
            Command::Aggregate => "aggregate",
            Command::AggregatePolyglot => "aggregate-polyglot",
            Command::SampleFiles => "sample-files",
            Command::SampleIdentifiers => "sample-identifiers",
            Command::Rating => "rating",
        }
    }

    /// Command names in alphabetical order.
    pub fn available() -> Vec<&'static str> {
        let mut names: Vec<&'static str> =
            Self::ALL.iter().map(|command| command.name()).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = CogloadError;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|command| command.name() == name)
            .ok_or_else(|| {
                CogloadError::Usage(format!(
                    "Unknown command: {name}. Available: {}",
                    Self::available().join(", ")
                ))
            })
    }
}

/// Decode the payload for `command`, run it, and return the result value
/// that goes inside the success envelope.
pub fn execute(command: Command, data: Value, defaults: &SamplingDefaults) -> Result<Value> {
    debug!(%command, "dispatching command");
    let result = match command {
        Command::NormalizeD1 => {
            let p: ComplexityPayload = decode(data)?;
            dimension(normalize::normalize_d1(&p.complexity_scores))?
        }
        Command::NormalizeD2 => {
            let p: NestingPayload = decode(data)?;
            dimension(normalize::normalize_d2(&p.nesting_depths))?
        }
        Command::NormalizeD3 => {
            let p: SizePayload = decode(data)?;
            dimension(normalize::normalize_d3(
                &p.func_locs,
                &p.file_locs,
                &p.param_counts,
                &p.methods_per_class,
            ))?
        }
        Command::NormalizeD4Static => {
            let p: NamingPayload = decode(data)?;
            dimension(normalize::normalize_d4_static(&p.signals()))?
        }
        Command::NormalizeD4Llm => {
            let p: NamingLlmPayload = decode(data)?;
            dimension(normalize::normalize_d4_with_llm(p.d4_static, p.llm_score))?
        }
        Command::NormalizeD4Fallback => {
            let p: NamingFallbackPayload = decode(data)?;
            dimension(normalize::normalize_d4_fallback(
                &p.naming.signals(),
                p.dictionary_coverage,
            ))?
        }
        Command::NormalizeD5 => {
            let p: CouplingPayload = decode(data)?;
            dimension(normalize::normalize_d5(
                &p.efferent_couplings,
                &p.imports_per_file,
                &p.afferent_couplings,
            ))?
        }
        Command::NormalizeD6Class => {
            let p: ClassCohesionPayload = decode(data)?;
            dimension(normalize::normalize_d6_class(&p.lcom_values))?
        }
        Command::NormalizeD6Module => {
            let p: ModuleCohesionPayload = decode(data)?;
            dimension(normalize::normalize_d6_module(
                p.avg_exports_used_together,
                p.total_exports,
            ))?
        }
        Command::NormalizeD7 => {
            let p: DuplicationPayload = decode(data)?;
            dimension(normalize::normalize_d7(p.duplication_pct))?
        }
        Command::NormalizeD8 => {
            let p: NavigabilityPayload = decode(data)?;
            dimension(normalize::normalize_d8(
                p.max_directory_depth,
                &p.files_per_directory,
                &p.file_sizes,
            ))?
        }
        Command::Aggregate => {
            let scores: DimensionScores = decode(data)?;
            let result = compute_cli_score(&scores);
            if !result.cli_raw.is_finite() {
                return Err(CogloadError::Computation(
                    "weighted sum is not finite".to_string(),
                ));
            }
            info!(cli_score = result.cli_score, rating = %result.rating, "aggregated dimensions");
            to_value(&result)?
        }
        Command::AggregatePolyglot => {
            let p: PolyglotPayload = decode(data)?;
            to_value(&aggregate_polyglot(&p.language_scores)?)?
        }
        Command::SampleFiles => {
            let p: SampleFilesPayload = decode(data)?;
            let selected = select_files(
                &p.file_paths,
                p.sample_pct.unwrap_or(f64::from(defaults.sample_pct)),
                p.min_loc.unwrap_or(defaults.min_loc as f64),
                p.file_locs.as_ref(),
            );
            json!({ "selected_files": selected, "count": selected.len() })
        }
        Command::SampleIdentifiers => {
            let p: SampleIdentifiersPayload = decode(data)?;
            let selected = select_identifiers_for_file(
                &p.file_path,
                &p.identifiers,
                p.count.unwrap_or(defaults.identifier_count),
            );
            json!({ "selected_identifiers": selected, "count": selected.len() })
        }
        Command::Rating => {
            let p: RatingPayload = decode(data)?;
            json!({ "rating": get_rating(p.score) })
        }
    };
    Ok(result)
}

fn decode<T: DeserializeOwned>(data: Value) -> Result<T> {
    serde_json::from_value(data).map_err(|e| CogloadError::Validation(e.to_string()))
}

fn dimension(result: DimensionResult) -> Result<Value> {
    if let Some(name) = result.first_non_finite() {
        return Err(CogloadError::Computation(format!(
            "{} produced a non-finite {name}",
            result.key
        )));
    }
    to_value(&result)
}

fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(command: Command, data: Value) -> Result<Value> {
        execute(command, data, &SamplingDefaults::default())
    }

    #[test]
    fn command_names_round_trip() {
        for command in Command::ALL {
            let parsed: Command = command.name().parse().expect("name should parse");
            assert_eq!(parsed, command);
        }
    }

    #[test]
    fn unknown_command_lists_available_commands() {
        let err = "normalize-d9"
            .parse::<Command>()
            .expect_err("unknown command should fail");
        let message = err.to_string();
        assert!(matches!(err, CogloadError::Usage(_)));
        assert!(message.starts_with("Unknown command: normalize-d9. Available: aggregate, "));
        assert!(message.contains("sample-identifiers"));
    }

    #[test]
    fn normalize_d1_returns_breakdown() {
        let value = run(Command::NormalizeD1, json!({ "complexity_scores": [5, 10, 15] }))
            .expect("d1 should run");
        assert_eq!(value["mean"], json!(10.0));
        assert!(value["d1"].as_f64().is_some_and(|d1| (d1 - 0.4037).abs() < 1e-3));
    }

    #[test]
    fn dimension_score_leads_its_breakdown() {
        let value = run(
            Command::NormalizeD5,
            json!({
                "efferent_couplings": [3],
                "imports_per_file": [4],
                "afferent_couplings": [1]
            }),
        )
        .expect("d5 should run");
        let keys: Vec<&str> = value
            .as_object()
            .expect("d5 result should be an object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            vec![
                "d5",
                "coupling_efferent",
                "coupling_imports",
                "instability_risk",
                "instability_sigmoid"
            ]
        );
    }

    #[test]
    fn sampling_options_accept_integral_floats() {
        let value = run(
            Command::SampleFiles,
            json!({
                "file_paths": ["a.py", "b.py", "c.py"],
                "sample_pct": 0.0,
                "min_loc": 200.0,
                "file_locs": { "b.py": 500.0 }
            }),
        )
        .expect("float options should be accepted");
        assert_eq!(value, json!({ "selected_files": ["b.py"], "count": 1 }));
    }

    #[test]
    fn missing_field_is_validation_error() {
        let err = run(Command::NormalizeD2, json!({ "depths": [1, 2] }))
            .expect_err("missing field should fail");
        assert!(matches!(err, CogloadError::Validation(_)));
        assert!(err.to_string().contains("nesting_depths"));
    }

    #[test]
    fn wrong_shape_is_validation_error() {
        let err = run(Command::NormalizeD7, json!({ "duplication_pct": "lots" }))
            .expect_err("string pct should fail");
        assert!(matches!(err, CogloadError::Validation(_)));
    }

    #[test]
    fn fallback_requires_dictionary_coverage() {
        let err = run(
            Command::NormalizeD4Fallback,
            json!({
                "short_name_proportion": 0.1,
                "abbreviation_density": 0.1,
                "single_char_per_100loc": 1.0,
                "consistency_ratio": 0.9
            }),
        )
        .expect_err("missing coverage should fail");
        assert!(err.to_string().contains("dictionary_coverage"));
    }

    #[test]
    fn overflowing_input_is_computation_error() {
        let err = run(
            Command::NormalizeD1,
            json!({ "complexity_scores": [1.0e308, 1.0e308, -1.0e308] }),
        )
        .expect_err("overflow should fail");
        assert!(matches!(err, CogloadError::Computation(_)));
    }

    #[test]
    fn aggregate_accepts_partial_dimensions() {
        let value = run(Command::Aggregate, json!({ "D1": 1.0, "D2": 1.0 }))
            .expect("aggregate should run");
        assert_eq!(value["cli_score"], json!(400));
        assert_eq!(value["rating"], json!("Moderate"));
        assert_eq!(value["weighted_components"]["D8"], json!(0.0));
    }

    #[test]
    fn sample_files_uses_configured_defaults() {
        let defaults = SamplingDefaults {
            sample_pct: 0,
            min_loc: 100,
            identifier_count: 20,
        };
        let value = execute(
            Command::SampleFiles,
            json!({ "file_paths": ["a.py", "b.py"], "file_locs": { "a.py": 150 } }),
            &defaults,
        )
        .expect("sample should run");
        assert_eq!(value["selected_files"], json!(["a.py"]));
        assert_eq!(value["count"], json!(1));
    }

    #[test]
    fn sample_identifiers_defaults_count() {
        let identifiers: Vec<String> = (0..30).map(|i| format!("name_{i}")).collect();
        let value = run(
            Command::SampleIdentifiers,
            json!({ "file_path": "src/lib.rs", "identifiers": identifiers }),
        )
        .expect("identifier sample should run");
        assert_eq!(value["count"], json!(20));
    }

    #[test]
    fn rating_command_maps_score() {
        let value = run(Command::Rating, json!({ "score": 251 })).expect("rating should run");
        assert_eq!(value, json!({ "rating": "Moderate" }));
    }
}
