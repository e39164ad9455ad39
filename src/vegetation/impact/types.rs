//! Impact result types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal band of the impact score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactCategory {
    Excellent,
    Good,
    Moderate,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
}

impl ImpactCategory {
    /// Lower bound (inclusive) of each band, highest first.
    pub const THRESHOLDS: [(f64, ImpactCategory); 4] = [
        (80.0, ImpactCategory::Excellent),
        (65.0, ImpactCategory::Good),
        (50.0, ImpactCategory::Moderate),
        (35.0, ImpactCategory::Poor),
    ];

    pub fn from_score(score: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(lower, _)| score >= *lower)
            .map(|(_, category)| *category)
            .unwrap_or(ImpactCategory::VeryPoor)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImpactCategory::Excellent => "Excellent",
            ImpactCategory::Good => "Good",
            ImpactCategory::Moderate => "Moderate",
            ImpactCategory::Poor => "Poor",
            ImpactCategory::VeryPoor => "Very Poor",
        }
    }

    /// Score band as shown in the scoring catalog, e.g. `"65-79"`.
    pub fn score_band(self) -> &'static str {
        match self {
            ImpactCategory::Excellent => "80-100",
            ImpactCategory::Good => "65-79",
            ImpactCategory::Moderate => "50-64",
            ImpactCategory::Poor => "35-49",
            ImpactCategory::VeryPoor => "0-34",
        }
    }

    pub fn interpretation(self) -> &'static str {
        match self {
            ImpactCategory::Excellent => {
                "Excellent environmental impact! Significant vegetation improvement detected."
            }
            ImpactCategory::Good => {
                "Good environmental impact. Positive vegetation changes observed."
            }
            ImpactCategory::Moderate => {
                "Moderate environmental impact. Some vegetation changes detected."
            }
            ImpactCategory::Poor => {
                "Poor environmental impact. Limited or negative vegetation changes."
            }
            ImpactCategory::VeryPoor => {
                "Very poor environmental impact. Significant vegetation degradation detected."
            }
        }
    }
}

impl fmt::Display for ImpactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse reading of the confidence value for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Moderate,
    Low,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 80.0 {
            ConfidenceLevel::High
        } else if confidence >= 60.0 {
            ConfidenceLevel::Moderate
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High confidence in results.",
            ConfidenceLevel::Moderate => "Moderate confidence in results.",
            ConfidenceLevel::Low => {
                "Low confidence in results. Consider using higher quality images."
            }
        }
    }
}

/// Outcome of comparing two metric sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactResult {
    /// 0-100, 50 means no change
    pub impact_score: f64,
    /// 0-100 agreement between the four index changes
    pub confidence: f64,
    pub category: ImpactCategory,
    pub ndvi_change_percent: f64,
    pub evi_change_percent: f64,
    pub fvc_change_percent: f64,
    pub lai_change_percent: f64,
    pub weighted_score: f64,
    /// Confidence before clipping to [0, 100]. Strongly negative values flag index
    /// changes that disagree in sign. Not part of the persisted document.
    #[serde(skip)]
    pub raw_confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundaries() {
        assert_eq!(ImpactCategory::from_score(100.0), ImpactCategory::Excellent);
        assert_eq!(ImpactCategory::from_score(80.0), ImpactCategory::Excellent);
        assert_eq!(ImpactCategory::from_score(79.999), ImpactCategory::Good);
        assert_eq!(ImpactCategory::from_score(65.0), ImpactCategory::Good);
        assert_eq!(ImpactCategory::from_score(64.999), ImpactCategory::Moderate);
        assert_eq!(ImpactCategory::from_score(50.0), ImpactCategory::Moderate);
        assert_eq!(ImpactCategory::from_score(49.999), ImpactCategory::Poor);
        assert_eq!(ImpactCategory::from_score(35.0), ImpactCategory::Poor);
        assert_eq!(ImpactCategory::from_score(34.999), ImpactCategory::VeryPoor);
        assert_eq!(ImpactCategory::from_score(0.0), ImpactCategory::VeryPoor);
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(
            serde_json::to_string(&ImpactCategory::VeryPoor).unwrap(),
            "\"Very Poor\""
        );
        assert_eq!(
            serde_json::from_str::<ImpactCategory>("\"Good\"").unwrap(),
            ImpactCategory::Good
        );
        assert_eq!(ImpactCategory::VeryPoor.to_string(), "Very Poor");
    }

    #[test]
    fn test_confidence_levels() {
        assert_eq!(ConfidenceLevel::from_confidence(80.0), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_confidence(79.9), ConfidenceLevel::Moderate);
        assert_eq!(ConfidenceLevel::from_confidence(60.0), ConfidenceLevel::Moderate);
        assert_eq!(ConfidenceLevel::from_confidence(12.0), ConfidenceLevel::Low);
    }
}
