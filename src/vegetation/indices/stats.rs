use ndarray::Array2;
use crate::vegetation::common::error::{AnalysisError, Result};
use crate::vegetation::indices::types::{SpectralIndex, Statistic};

/// Summary of one index raster over all pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndexStats {
    pub mean: f64,
    /// Population standard deviation
    pub std: f64,
    pub max: f64,
    pub min: f64,
}

impl IndexStats {
    pub fn from_raster(index: SpectralIndex, raster: &Array2<f64>) -> Result<Self> {
        let mean = raster.mean().ok_or_else(|| {
            AnalysisError::ComputationError(format!("{} raster has no pixels", index))
        })?;

        let stats = Self {
            mean,
            std: raster.std(0.0),
            max: raster.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v)),
            min: raster.fold(f64::INFINITY, |acc, &v| acc.min(v)),
        };

        if !stats.is_finite() {
            return Err(AnalysisError::ComputationError(format!(
                "{} statistics are not finite: {:?}",
                index, stats
            )));
        }

        Ok(stats)
    }

    pub fn get(&self, stat: Statistic) -> f64 {
        match stat {
            Statistic::Mean => self.mean,
            Statistic::Std => self.std,
            Statistic::Max => self.max,
            Statistic::Min => self.min,
        }
    }

    pub(crate) fn set(&mut self, stat: Statistic, value: f64) {
        match stat {
            Statistic::Mean => self.mean = value,
            Statistic::Std => self.std = value,
            Statistic::Max => self.max = value,
            Statistic::Min => self.min = value,
        }
    }

    pub fn is_finite(&self) -> bool {
        Statistic::ALL.iter().all(|&stat| self.get(stat).is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_population_statistics() {
        let raster = array![[1.0, 2.0], [3.0, 4.0]];

        let stats = IndexStats::from_raster(SpectralIndex::Ndvi, &raster).unwrap();

        assert_eq!(stats.mean, 2.5);
        // population variance of 1..4 is 1.25
        assert!((stats.std - 1.25f64.sqrt()).abs() < 1e-12);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.min, 1.0);
    }

    #[test]
    fn test_constant_raster_has_zero_std() {
        let raster = Array2::from_elem((5, 7), 0.25);

        let stats = IndexStats::from_raster(SpectralIndex::Fvc, &raster).unwrap();

        assert_eq!(stats.std, 0.0);
        assert_eq!(stats.max, 0.25);
        assert_eq!(stats.min, 0.25);
    }

    #[test]
    fn test_empty_raster_is_computation_error() {
        let raster = Array2::<f64>::zeros((0, 3));

        let result = IndexStats::from_raster(SpectralIndex::Evi, &raster);

        assert!(matches!(result, Err(AnalysisError::ComputationError(_))));
    }

    #[test]
    fn test_nan_is_computation_error() {
        let raster = array![[0.1, f64::NAN]];

        let result = IndexStats::from_raster(SpectralIndex::Savi, &raster);

        assert!(matches!(result, Err(AnalysisError::ComputationError(_))));
    }
}
