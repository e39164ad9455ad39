use ndarray::Array2;
use tracing::{debug, instrument};
use crate::vegetation::bands::{BandSynthesizer, ChannelSet, VisibleLightSynthesizer, split_visible};
use crate::vegetation::common::error::{AnalysisError, Result};
use crate::vegetation::indices::formulas;
use crate::vegetation::indices::metrics::MetricSet;
use crate::vegetation::indices::stats::IndexStats;
use crate::vegetation::indices::types::SpectralIndex;
use crate::vegetation::raster::RgbRaster;

/// One clipped raster per index, all with the channel shape.
#[derive(Debug, Clone)]
pub struct IndexRasters {
    pub ndvi: Array2<f64>,
    pub evi: Array2<f64>,
    pub ndwi: Array2<f64>,
    pub savi: Array2<f64>,
    pub lai: Array2<f64>,
    pub fvc: Array2<f64>,
}

impl IndexRasters {
    /// LAI and FVC are derived from the clipped NDVI raster, not from the channels.
    pub fn compute(channels: &ChannelSet) -> Self {
        let ndvi = formulas::ndvi(&channels.nir, &channels.red);
        let evi = formulas::evi(&channels.nir, &channels.red, &channels.blue);
        let ndwi = formulas::ndwi(&channels.green, &channels.nir);
        let savi = formulas::savi(&channels.nir, &channels.red);
        let lai = formulas::lai(&ndvi);
        let fvc = formulas::fvc(&ndvi);

        Self { ndvi, evi, ndwi, savi, lai, fvc }
    }

    pub fn get(&self, index: SpectralIndex) -> &Array2<f64> {
        match index {
            SpectralIndex::Ndvi => &self.ndvi,
            SpectralIndex::Evi => &self.evi,
            SpectralIndex::Ndwi => &self.ndwi,
            SpectralIndex::Savi => &self.savi,
            SpectralIndex::Lai => &self.lai,
            SpectralIndex::Fvc => &self.fvc,
        }
    }

    pub fn summarize(&self) -> Result<MetricSet> {
        let mut stats = [IndexStats::default(); SpectralIndex::COUNT];
        for index in SpectralIndex::ALL {
            stats[index.position()] = IndexStats::from_raster(index, self.get(index))?;
        }
        Ok(MetricSet::from_stats(stats))
    }
}

/// Summarizes the six indices of `raster` using the RGB band heuristic.
pub fn compute_metrics(raster: &RgbRaster) -> Result<MetricSet> {
    compute_metrics_with(raster, &VisibleLightSynthesizer)
}

#[instrument(skip_all, fields(width = raster.width, height = raster.height))]
pub fn compute_metrics_with<S: BandSynthesizer + ?Sized>(
    raster: &RgbRaster,
    synthesizer: &S,
) -> Result<MetricSet> {
    if !raster.is_well_formed() {
        return Err(AnalysisError::DecodeError(format!(
            "not a 3-channel image: {}x{} with {} samples",
            raster.width,
            raster.height,
            raster.data.len()
        )));
    }

    let visible = split_visible(raster)?;
    let infrared = synthesizer.synthesize(&visible);
    let channels = ChannelSet::from_parts(visible, infrared)?;

    let indices = {
        let _span = tracing::debug_span!("compute_indices").entered();
        IndexRasters::compute(&channels)
    };
    let metrics = indices.summarize()?;

    debug!(
        ndvi_mean = metrics.mean(SpectralIndex::Ndvi),
        evi_mean = metrics.mean(SpectralIndex::Evi),
        "Computed vegetation metrics"
    );
    Ok(metrics)
}
