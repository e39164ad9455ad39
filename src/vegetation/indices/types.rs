//! Index and statistic identifiers

use std::fmt;

/// The indices computed for every image, in metric-set order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpectralIndex {
    /// Normalized Difference Vegetation Index
    Ndvi,
    /// Enhanced Vegetation Index
    Evi,
    /// Normalized Difference Water Index
    Ndwi,
    /// Soil Adjusted Vegetation Index
    Savi,
    /// Leaf Area Index
    Lai,
    /// Fractional Vegetation Cover
    Fvc,
}

impl SpectralIndex {
    pub const COUNT: usize = 6;

    pub const ALL: [SpectralIndex; Self::COUNT] = [
        SpectralIndex::Ndvi,
        SpectralIndex::Evi,
        SpectralIndex::Ndwi,
        SpectralIndex::Savi,
        SpectralIndex::Lai,
        SpectralIndex::Fvc,
    ];

    /// Lowercase key used in metric names, e.g. `ndvi` in `ndvi_mean`.
    pub fn key(self) -> &'static str {
        match self {
            SpectralIndex::Ndvi => "ndvi",
            SpectralIndex::Evi => "evi",
            SpectralIndex::Ndwi => "ndwi",
            SpectralIndex::Savi => "savi",
            SpectralIndex::Lai => "lai",
            SpectralIndex::Fvc => "fvc",
        }
    }

    /// Inclusive (min, max) every value of this index is clipped to.
    pub fn valid_range(self) -> (f64, f64) {
        match self {
            SpectralIndex::Lai => (0.0, 8.0),
            SpectralIndex::Fvc => (0.0, 1.0),
            _ => (-1.0, 1.0),
        }
    }

    pub(crate) fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SpectralIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-index summary statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    Mean,
    /// Population standard deviation
    Std,
    Max,
    Min,
}

impl Statistic {
    pub const COUNT: usize = 4;

    pub const ALL: [Statistic; Self::COUNT] =
        [Statistic::Mean, Statistic::Std, Statistic::Max, Statistic::Min];

    pub fn key(self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::Std => "std",
            Statistic::Max => "max",
            Statistic::Min => "min",
        }
    }
}

/// `"{index}_{stat}"`
pub fn metric_key(index: SpectralIndex, stat: Statistic) -> String {
    format!("{}_{}", index.key(), stat.key())
}
