//! The 24-entry metric set exchanged between analysis and scoring.
//!
//! In memory a [`MetricSet`] is six typed [`IndexStats`], so a missing entry cannot
//! be represented. On the wire it is the flat `"{index}_{stat}"` object; parsing
//! rejects documents with missing, unknown or non-finite entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use crate::vegetation::common::error::AnalysisError;
use crate::vegetation::indices::stats::IndexStats;
use crate::vegetation::indices::types::{SpectralIndex, Statistic, metric_key};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<String, f64>", try_from = "BTreeMap<String, f64>")]
pub struct MetricSet {
    stats: [IndexStats; SpectralIndex::COUNT],
}

impl MetricSet {
    pub const LEN: usize = SpectralIndex::COUNT * Statistic::COUNT;

    /// `stats` is ordered like [`SpectralIndex::ALL`].
    pub fn from_stats(stats: [IndexStats; SpectralIndex::COUNT]) -> Self {
        Self { stats }
    }

    pub fn stats(&self, index: SpectralIndex) -> IndexStats {
        self.stats[index.position()]
    }

    pub fn mean(&self, index: SpectralIndex) -> f64 {
        self.stats(index).mean
    }

    pub fn get(&self, index: SpectralIndex, stat: Statistic) -> f64 {
        self.stats(index).get(stat)
    }

    /// Looks up a flat key such as `"lai_max"`.
    pub fn get_key(&self, key: &str) -> Option<f64> {
        self.entries()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// All 24 `(key, value)` pairs, index-major.
    pub fn entries(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        SpectralIndex::ALL.into_iter().flat_map(move |index| {
            Statistic::ALL
                .into_iter()
                .map(move |stat| (metric_key(index, stat), self.get(index, stat)))
        })
    }

    pub fn len(&self) -> usize {
        Self::LEN
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<MetricSet> for BTreeMap<String, f64> {
    fn from(metrics: MetricSet) -> Self {
        metrics.entries().collect()
    }
}

impl TryFrom<BTreeMap<String, f64>> for MetricSet {
    type Error = AnalysisError;

    fn try_from(mut map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        let mut stats = [IndexStats::default(); SpectralIndex::COUNT];

        for index in SpectralIndex::ALL {
            for stat in Statistic::ALL {
                let key = metric_key(index, stat);
                let value = map.remove(&key).ok_or_else(|| {
                    AnalysisError::ComputationError(format!("metric set is missing {}", key))
                })?;
                if !value.is_finite() {
                    return Err(AnalysisError::ComputationError(format!(
                        "metric {} is not finite",
                        key
                    )));
                }
                stats[index.position()].set(stat, value);
            }
        }

        if let Some(extra) = map.keys().next() {
            return Err(AnalysisError::ComputationError(format!(
                "unknown metric {}",
                extra
            )));
        }

        Ok(Self { stats })
    }
}
