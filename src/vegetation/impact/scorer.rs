use tracing::debug;
use crate::vegetation::impact::types::{ImpactCategory, ImpactResult};
use crate::vegetation::indices::formulas::EPSILON;
use crate::vegetation::indices::{MetricSet, SpectralIndex};

/// Indices that contribute to the score and their weights (sum to 1).
pub const SCORE_WEIGHTS: [(SpectralIndex, f64); 4] = [
    (SpectralIndex::Ndvi, 0.35),
    (SpectralIndex::Evi, 0.25),
    (SpectralIndex::Fvc, 0.25),
    (SpectralIndex::Lai, 0.15),
];

/// Score of an unchanged scene.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Compresses the weighted percentage change into the ±50 band around neutral.
pub const SCORE_SCALE: f64 = 0.5;

/// Signed percentage change relative to `|before|`.
pub fn percent_change(before: f64, after: f64) -> f64 {
    (after - before) / (before.abs() + EPSILON) * 100.0
}

fn mean4(values: &[f64; 4]) -> f64 {
    // pairwise so four equal values average back to exactly that value
    ((values[0] + values[1]) + (values[2] + values[3])) / 4.0
}

fn population_std4(values: &[f64; 4]) -> f64 {
    let mean = mean4(values);
    mean4(&values.map(|v| (v - mean) * (v - mean))).sqrt()
}

/// Compares two metric sets. Infallible: `MetricSet` always carries every mean.
pub fn compute_impact(before: &MetricSet, after: &MetricSet) -> ImpactResult {
    let changes =
        SCORE_WEIGHTS.map(|(index, _)| percent_change(before.mean(index), after.mean(index)));

    let weighted_score = SCORE_WEIGHTS
        .iter()
        .zip(changes.iter())
        .fold(0.0, |acc, ((_, weight), change)| acc + weight * change);

    let impact_score = (NEUTRAL_SCORE + weighted_score * SCORE_SCALE).clamp(0.0, 100.0);

    let raw_confidence =
        (1.0 - population_std4(&changes) / (mean4(&changes.map(f64::abs)) + EPSILON)) * 100.0;
    let confidence = raw_confidence.clamp(0.0, 100.0);

    let category = ImpactCategory::from_score(impact_score);

    debug!(impact_score, weighted_score, raw_confidence, %category, "Computed impact");

    ImpactResult {
        impact_score,
        confidence,
        category,
        ndvi_change_percent: changes[0],
        evi_change_percent: changes[1],
        fvc_change_percent: changes[2],
        lai_change_percent: changes[3],
        weighted_score,
        raw_confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vegetation::indices::IndexStats;

    fn metrics_with_means(means: [f64; SpectralIndex::COUNT]) -> MetricSet {
        MetricSet::from_stats(means.map(|mean| IndexStats {
            mean,
            std: 0.0,
            max: mean,
            min: mean,
        }))
    }

    /// Means for ndvi, evi, ndwi, savi, lai, fvc with the scored ones set from
    /// (ndvi, evi, fvc, lai).
    fn scored(ndvi: f64, evi: f64, fvc: f64, lai: f64) -> MetricSet {
        metrics_with_means([ndvi, evi, 0.0, 0.0, lai, fvc])
    }

    #[test]
    fn test_identical_metrics_are_neutral() {
        let metrics = scored(0.3, 0.2, 0.4, 1.1);

        let result = compute_impact(&metrics, &metrics);

        assert_eq!(result.impact_score, 50.0);
        assert_eq!(result.weighted_score, 0.0);
        assert_eq!(result.confidence, 100.0);
        assert_eq!(result.category, ImpactCategory::Moderate);
    }

    #[test]
    fn test_zero_before_means_do_not_divide_by_zero() {
        let before = scored(0.0, 0.0, 0.0, 0.0);
        let after = scored(0.1, 0.1, 0.1, 0.1);

        let result = compute_impact(&before, &after);

        assert!(result.ndvi_change_percent.is_finite());
        assert!(result.ndvi_change_percent > 0.0);
        assert_eq!(result.impact_score, 100.0);
        assert_eq!(result.category, ImpactCategory::Excellent);
    }

    #[test]
    fn test_regression_is_negative() {
        let before = scored(0.5, 0.4, 0.5, 2.0);
        let after = scored(0.25, 0.2, 0.25, 1.0);

        let result = compute_impact(&before, &after);

        // every index halves: -50% each
        assert!((result.ndvi_change_percent + 50.0).abs() < 1e-6);
        assert!((result.lai_change_percent + 50.0).abs() < 1e-6);
        assert!((result.weighted_score + 50.0).abs() < 1e-6);
        assert!((result.impact_score - 25.0).abs() < 1e-6);
        assert_eq!(result.category, ImpactCategory::VeryPoor);
    }

    #[test]
    fn test_weights_combine_changes() {
        let before = scored(1.0, 1.0, 1.0, 1.0);
        let after = scored(1.2, 1.0, 1.0, 1.0);

        let result = compute_impact(&before, &after);

        assert!((result.weighted_score - 0.35 * 20.0).abs() < 1e-6);
        assert!((result.impact_score - (50.0 + 3.5)).abs() < 1e-6);
    }

    #[test]
    fn test_uniform_change_gives_full_confidence() {
        let before = scored(0.5, 0.5, 0.5, 0.5);
        let after = scored(0.6, 0.6, 0.6, 0.6);

        let result = compute_impact(&before, &after);

        assert_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_confidence_decreases_with_dispersion() {
        let before = scored(1.0, 1.0, 1.0, 1.0);
        // mean |change| stays at 10% while the spread grows
        let spreads = [0.0, 0.02, 0.04, 0.06];

        let confidences: Vec<f64> = spreads
            .iter()
            .map(|s| {
                let after = scored(1.1 + s, 1.1 - s, 1.1 + s, 1.1 - s);
                compute_impact(&before, &after).confidence
            })
            .collect();

        assert_eq!(confidences[0], 100.0);
        for pair in confidences.windows(2) {
            assert!(pair[1] < pair[0], "{confidences:?}");
        }
        assert!((confidences[1] - 80.0).abs() < 1e-6);
    }

    #[test]
    fn test_divergent_changes_clip_confidence() {
        let before = scored(1.0, 1.0, 1.0, 1.0);
        // +10% on three indices, -100% on LAI
        let after = scored(1.1, 1.1, 1.1, 0.0);

        let result = compute_impact(&before, &after);

        assert_eq!(result.confidence, 0.0);
        assert!(result.raw_confidence < -40.0, "{}", result.raw_confidence);
    }

    #[test]
    fn test_large_gain_saturates_at_100() {
        let before = scored(0.01, 0.01, 0.01, 0.01);
        let after = scored(0.9, 0.9, 0.9, 0.9);

        let result = compute_impact(&before, &after);

        assert_eq!(result.impact_score, 100.0);
    }
}
