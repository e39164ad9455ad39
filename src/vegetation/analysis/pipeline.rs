use std::path::Path;

use tracing::{error, info, instrument, warn};
use crate::vegetation::{
    analysis::AnalysisConfig,
    bands::{BandSynthesizer, VisibleLightSynthesizer},
    common::error::{AnalysisError, Result},
    impact::{ImpactResult, compute_impact},
    indices::{MetricSet, compute_metrics_with},
    raster::{FormatAwareReader, RasterReader, is_allowed_extension},
    report::AnalysisReport,
};

/// Metrics of both images and the impact derived from them.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub before_metrics: MetricSet,
    pub after_metrics: MetricSet,
    pub impact: ImpactResult,
}

impl Comparison {
    pub fn from_metrics(before_metrics: MetricSet, after_metrics: MetricSet) -> Self {
        let impact = compute_impact(&before_metrics, &after_metrics);
        Self {
            before_metrics,
            after_metrics,
            impact,
        }
    }
}

pub struct VegetationPipeline<R: RasterReader, S: BandSynthesizer> {
    reader: R,
    synthesizer: S,
    config: AnalysisConfig,
}

impl VegetationPipeline<FormatAwareReader, VisibleLightSynthesizer> {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            reader: FormatAwareReader::new(),
            synthesizer: VisibleLightSynthesizer,
            config,
        }
    }
}

impl<R: RasterReader, S: BandSynthesizer> VegetationPipeline<R, S> {
    pub fn with_custom(reader: R, synthesizer: S, config: AnalysisConfig) -> Self {
        Self {
            reader,
            synthesizer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(AnalysisError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(AnalysisError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn analyze_bytes(&self, input_data: &[u8]) -> Result<MetricSet> {
        let raster = {
            let _span = tracing::info_span!("decode_raster").entered();
            self.reader.read_raster(input_data)?
        };

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = raster.width,
                height = raster.height
            )
            .entered();
            self.validate_dimensions(raster.width, raster.height)?;
        }

        let metrics = {
            let _span = tracing::info_span!("compute_metrics").entered();
            compute_metrics_with(&raster, &self.synthesizer)?
        };

        info!(
            width = raster.width,
            height = raster.height,
            "Image analyzed"
        );
        Ok(metrics)
    }

    #[instrument(skip(self, input_path), fields(input = %input_path.as_ref().display()))]
    pub fn analyze_file<P: AsRef<Path>>(&self, input_path: P) -> Result<MetricSet> {
        let input_path = input_path.as_ref();

        if self.config.enforce_extensions && !is_allowed_extension(input_path) {
            return Err(AnalysisError::UnsupportedFormat(format!(
                "{} (allowed: png, jpg, jpeg, tiff, tif)",
                input_path.display()
            )));
        }

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                AnalysisError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        self.analyze_bytes(&input_data)
    }

    pub fn compare_bytes(&self, before: &[u8], after: &[u8]) -> Result<Comparison> {
        let before_metrics = self.analyze_bytes(before)?;
        let after_metrics = self.analyze_bytes(after)?;
        Ok(Comparison::from_metrics(before_metrics, after_metrics))
    }

    pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        before_path: P,
        after_path: Q,
    ) -> Result<Comparison> {
        let before_metrics = self.analyze_file(before_path)?;
        let after_metrics = self.analyze_file(after_path)?;
        Ok(Comparison::from_metrics(before_metrics, after_metrics))
    }

    /// Compares two files and wraps the outcome in a report; failures become an
    /// `"error"` report instead of an `Err`.
    pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(&self, before_path: P, after_path: Q) -> AnalysisReport {
        let before_path = before_path.as_ref();
        let after_path = after_path.as_ref();

        info!(
            before = %before_path.display(),
            after = %after_path.display(),
            "Starting vegetation analysis"
        );

        match self.compare_files(before_path, after_path) {
            Ok(comparison) => {
                info!(
                    impact_score = comparison.impact.impact_score,
                    category = %comparison.impact.category,
                    "Analysis complete"
                );
                AnalysisReport::success(
                    before_path.display().to_string(),
                    after_path.display().to_string(),
                    comparison,
                )
            }
            Err(e) => {
                error!("Analysis failed: {}", e);
                AnalysisReport::failure(&e)
            }
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalysisConfig) {
        self.config = config;
    }
}
