use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub type Score = f64;

/// One of the eight cognitive load dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Dimension {
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
}

impl Dimension {
    #[cfg(test)]
    pub const ALL: [Dimension; 8] = [
        Dimension::D1,
        Dimension::D2,
        Dimension::D3,
        Dimension::D4,
        Dimension::D5,
        Dimension::D6,
        Dimension::D7,
        Dimension::D8,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::D1 => "D1",
            Dimension::D2 => "D2",
            Dimension::D3 => "D3",
            Dimension::D4 => "D4",
            Dimension::D5 => "D5",
            Dimension::D6 => "D6",
            Dimension::D7 => "D7",
            Dimension::D8 => "D8",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized scores keyed by dimension. A dimension that was never measured
/// stays `None`; aggregation resolves it to zero through [`score_or_zero`].
///
/// [`score_or_zero`]: DimensionScores::score_or_zero
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DimensionScores {
    #[serde(rename = "D1", default)]
    d1: Option<Score>,
    #[serde(rename = "D2", default)]
    d2: Option<Score>,
    #[serde(rename = "D3", default)]
    d3: Option<Score>,
    #[serde(rename = "D4", default)]
    d4: Option<Score>,
    #[serde(rename = "D5", default)]
    d5: Option<Score>,
    #[serde(rename = "D6", default)]
    d6: Option<Score>,
    #[serde(rename = "D7", default)]
    d7: Option<Score>,
    #[serde(rename = "D8", default)]
    d8: Option<Score>,
}

impl DimensionScores {
    #[cfg(test)]
    pub fn uniform(score: Score) -> Self {
        Dimension::ALL
            .iter()
            .fold(Self::default(), |scores, dim| scores.with(*dim, score))
    }

    #[cfg(test)]
    pub fn with(mut self, dimension: Dimension, score: Score) -> Self {
        *self.slot_mut(dimension) = Some(score);
        self
    }

    pub fn get(&self, dimension: Dimension) -> Option<Score> {
        match dimension {
            Dimension::D1 => self.d1,
            Dimension::D2 => self.d2,
            Dimension::D3 => self.d3,
            Dimension::D4 => self.d4,
            Dimension::D5 => self.d5,
            Dimension::D6 => self.d6,
            Dimension::D7 => self.d7,
            Dimension::D8 => self.d8,
        }
    }

    pub fn score_or_zero(&self, dimension: Dimension) -> Score {
        self.get(dimension).unwrap_or(0.0)
    }

    #[cfg(test)]
    fn slot_mut(&mut self, dimension: Dimension) -> &mut Option<Score> {
        match dimension {
            Dimension::D1 => &mut self.d1,
            Dimension::D2 => &mut self.d2,
            Dimension::D3 => &mut self.d3,
            Dimension::D4 => &mut self.d4,
            Dimension::D5 => &mut self.d5,
            Dimension::D6 => &mut self.d6,
            Dimension::D7 => &mut self.d7,
            Dimension::D8 => &mut self.d8,
        }
    }
}

/// Output of a dimension normalizer: the headline score under `key`, followed
/// by the intermediate sub-scores that produced it. Serializes as one flat
/// JSON object in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionResult {
    pub key: &'static str,
    pub score: Score,
    pub components: Vec<(&'static str, Score)>,
}

impl DimensionResult {
    pub fn new(key: &'static str, score: Score) -> Self {
        Self {
            key,
            score,
            components: Vec::new(),
        }
    }

    /// A result with the score and every named component set to zero.
    pub fn zeroed(key: &'static str, components: &[&'static str]) -> Self {
        components
            .iter()
            .copied()
            .fold(Self::new(key, 0.0), |result, name| result.with(name, 0.0))
    }

    pub fn with(mut self, name: &'static str, value: Score) -> Self {
        self.components.push((name, value));
        self
    }

    #[cfg(test)]
    pub fn component(&self, name: &str) -> Option<Score> {
        self.components
            .iter()
            .find(|(component, _)| *component == name)
            .map(|(_, value)| *value)
    }

    /// First entry (score or component) that is NaN or infinite.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        std::iter::once((self.key, self.score))
            .chain(self.components.iter().copied())
            .find(|(_, value)| !value.is_finite())
            .map(|(name, _)| name)
    }
}

impl Serialize for DimensionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.components.len() + 1))?;
        map.serialize_entry(self.key, &self.score)?;
        for (name, value) in &self.components {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rating {
    Excellent,
    Good,
    Moderate,
    Concerning,
    Poor,
    Severe,
}

impl Rating {
    pub fn as_str(self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Moderate => "Moderate",
            Rating::Concerning => "Concerning",
            Rating::Poor => "Poor",
            Rating::Severe => "Severe",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dimensions_resolve_to_zero() {
        let scores: DimensionScores =
            serde_json::from_str(r#"{"D1": 0.4, "D7": 0.2, "note": "ignored"}"#)
                .expect("scores should deserialize");

        assert_eq!(scores.get(Dimension::D1), Some(0.4));
        assert_eq!(scores.get(Dimension::D2), None);
        assert_eq!(scores.score_or_zero(Dimension::D2), 0.0);
        assert_eq!(scores.score_or_zero(Dimension::D7), 0.2);
    }

    #[test]
    fn dimension_result_serializes_score_first() {
        let result = DimensionResult::new("d7", 0.25).with("duplication_pct_100", 3.0);
        let rendered = serde_json::to_string(&result).expect("result should serialize");
        assert_eq!(rendered, r#"{"d7":0.25,"duplication_pct_100":3.0}"#);
    }

    #[test]
    fn first_non_finite_names_offending_entry() {
        let result = DimensionResult::new("d1", 0.5).with("mean", f64::INFINITY);
        assert_eq!(result.first_non_finite(), Some("mean"));
        assert_eq!(DimensionResult::zeroed("d6", &["mean_lcom"]).first_non_finite(), None);
    }
}
