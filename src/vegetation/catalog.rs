//! Human-readable description of the indices and the scoring scheme.

use std::collections::BTreeMap;

use serde::Serialize;
use crate::vegetation::impact::{ImpactCategory, SCORE_WEIGHTS};
use crate::vegetation::indices::SpectralIndex;

#[derive(Debug, Clone, Serialize)]
pub struct IndexInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub range: &'static str,
    pub interpretation: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoringInfo {
    pub description: &'static str,
    pub range: &'static str,
    pub weights: BTreeMap<&'static str, f64>,
    pub categories: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub metrics: BTreeMap<&'static str, IndexInfo>,
    pub impact_scoring: ScoringInfo,
}

impl SpectralIndex {
    pub fn info(self) -> IndexInfo {
        match self {
            SpectralIndex::Ndvi => IndexInfo {
                name: "Normalized Difference Vegetation Index",
                description: "Measures vegetation health and density",
                range: "-1 to 1",
                interpretation: "Higher values indicate healthier vegetation",
            },
            SpectralIndex::Evi => IndexInfo {
                name: "Enhanced Vegetation Index",
                description: "Improved version of NDVI for dense vegetation",
                range: "-1 to 1",
                interpretation: "Better sensitivity in high biomass areas",
            },
            SpectralIndex::Ndwi => IndexInfo {
                name: "Normalized Difference Water Index",
                description: "Measures water content in vegetation",
                range: "-1 to 1",
                interpretation: "Higher values indicate more water content",
            },
            SpectralIndex::Savi => IndexInfo {
                name: "Soil Adjusted Vegetation Index",
                description: "NDVI adjusted for soil background",
                range: "-1 to 1",
                interpretation: "Better for areas with exposed soil",
            },
            SpectralIndex::Lai => IndexInfo {
                name: "Leaf Area Index",
                description: "Total leaf area per unit ground area",
                range: "0 to 8",
                interpretation: "Higher values indicate more leaf coverage",
            },
            SpectralIndex::Fvc => IndexInfo {
                name: "Fractional Vegetation Cover",
                description: "Fraction of ground covered by vegetation",
                range: "0 to 1",
                interpretation: "Percentage of area covered by vegetation",
            },
        }
    }
}

pub fn catalog() -> Catalog {
    let categories = [
        ImpactCategory::Excellent,
        ImpactCategory::Good,
        ImpactCategory::Moderate,
        ImpactCategory::Poor,
        ImpactCategory::VeryPoor,
    ]
    .into_iter()
    .map(|category| (category.score_band(), category.as_str()))
    .collect();

    Catalog {
        metrics: SpectralIndex::ALL
            .into_iter()
            .map(|index| (index.key(), index.info()))
            .collect(),
        impact_scoring: ScoringInfo {
            description: "Weighted combination of NDVI, EVI, FVC and LAI changes",
            range: "0 to 100",
            weights: SCORE_WEIGHTS
                .iter()
                .map(|(index, weight)| (index.key(), *weight))
                .collect(),
            categories,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_every_index() {
        let catalog = catalog();

        assert_eq!(catalog.metrics.len(), SpectralIndex::COUNT);
        assert_eq!(catalog.metrics["lai"].range, "0 to 8");
        assert_eq!(catalog.impact_scoring.categories["0-34"], "Very Poor");
    }

    #[test]
    fn test_weights_sum_to_one() {
        let total: f64 = catalog().impact_scoring.weights.values().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }
}
