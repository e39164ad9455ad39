//! Analysis configuration types

/// Configuration for [`VegetationPipeline`](crate::vegetation::analysis::VegetationPipeline)
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Whether to reject rasters with a zero dimension before computing indices
    pub validate_dimensions: bool,
    /// Largest accepted width or height, checked when `validate_dimensions` is set
    pub max_dimension: Option<usize>,
    /// Whether file inputs must carry an allow-listed extension
    pub enforce_extensions: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            validate_dimensions: true,
            max_dimension: None,
            enforce_extensions: true,
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }
}

/// Builder for AnalysisConfig
#[derive(Default)]
pub struct AnalysisConfigBuilder {
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    enforce_extensions: Option<bool>,
}

impl AnalysisConfigBuilder {
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn enforce_extensions(mut self, enforce: bool) -> Self {
        self.enforce_extensions = Some(enforce);
        self
    }

    pub fn build(self) -> AnalysisConfig {
        let default = AnalysisConfig::default();
        AnalysisConfig {
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            enforce_extensions: self.enforce_extensions.unwrap_or(default.enforce_extensions),
        }
    }
}
