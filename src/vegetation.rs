//! Vegetation impact analysis pipeline
//!
//! Decodes before/after RGB images, estimates infrared bands, computes six
//! vegetation/water indices per image and scores the change between the two.
//! The two core entry points are [`compute_metrics`] and [`compute_impact`];
//! [`VegetationPipeline`] wraps them with decoding and validation.

pub mod raster;
pub mod bands;
pub mod indices;
pub mod impact;
pub mod analysis;
pub mod report;
pub mod catalog;
pub mod common;

pub use common::{
    AnalysisError,
    Result,
};

pub use raster::{
    RgbRaster,
    RasterReader,
    FormatAwareReader,
    ImageCrateReader,
    TiffRasterReader,
    is_allowed_extension,
};

pub use bands::{
    BandSynthesizer,
    VisibleLightSynthesizer,
    ChannelSet,
};

pub use indices::{
    MetricSet,
    IndexStats,
    SpectralIndex,
    Statistic,
    compute_metrics,
    compute_metrics_with,
};

pub use impact::{
    ImpactResult,
    ImpactCategory,
    ConfidenceLevel,
    compute_impact,
};

pub use analysis::{
    AnalysisConfig,
    AnalysisConfigBuilder,
    Comparison,
    VegetationPipeline,
};

pub use report::{
    AnalysisReport,
    ReportStatus,
    ResultStore,
    UploadRole,
};
