use crate::error::CogloadError;
use serde::Deserialize;

pub const DEFAULT_SAMPLE_PCT: u32 = 30;
pub const DEFAULT_MIN_LOC: u64 = 200;
pub const DEFAULT_IDENTIFIER_COUNT: usize = 20;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CogloadConfig {
    pub sampling: Option<SamplingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SamplingConfig {
    pub sample_pct: Option<u32>,
    pub min_loc: Option<u64>,
    pub identifier_count: Option<usize>,
}

/// Resolved sampler defaults used when a payload omits the matching field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingDefaults {
    pub sample_pct: u32,
    pub min_loc: u64,
    pub identifier_count: usize,
}

impl Default for SamplingDefaults {
    fn default() -> Self {
        Self {
            sample_pct: DEFAULT_SAMPLE_PCT,
            min_loc: DEFAULT_MIN_LOC,
            identifier_count: DEFAULT_IDENTIFIER_COUNT,
        }
    }
}

impl CogloadConfig {
    pub fn sampling_defaults(&self) -> SamplingDefaults {
        let defaults = SamplingDefaults::default();
        match &self.sampling {
            Some(sampling) => SamplingDefaults {
                sample_pct: sampling.sample_pct.unwrap_or(defaults.sample_pct),
                min_loc: sampling.min_loc.unwrap_or(defaults.min_loc),
                identifier_count: sampling
                    .identifier_count
                    .unwrap_or(defaults.identifier_count),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), CogloadError> {
        let resolved = self.sampling_defaults();
        if resolved.sample_pct > 100 {
            return Err(CogloadError::ConfigParse(format!(
                "sampling.sample_pct must be between 0 and 100, got {}",
                resolved.sample_pct
            )));
        }
        Ok(())
    }
}
