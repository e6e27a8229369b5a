use crate::table::TableError;
use units::UnitError;

/// Problems with the requested binning or output options, detected before any
/// data is touched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("number of bins must be positive")]
    ZeroBins,

    #[error("columns are numbered from 1")]
    ColumnZero,

    #[error("binning range [{lo}, {hi}] is empty or not finite")]
    BadRange { lo: f64, hi: f64 },

    #[error("cannot make {bins} distinct bins of finite width in [{lo}, {hi}]")]
    UnrepresentableBins { bins: usize, lo: f64, hi: f64 },

    #[error("both ends of the binning range must be given, only got {0}")]
    HalfRange(&'static str),

    #[error("weight file and weight column must be given together")]
    HalfWeights,

    #[error("correcting for data outside the range requires a normalized histogram")]
    AllDataWithoutNormalization,

    #[error(transparent)]
    Unit(#[from] UnitError),
}

/// Problems with the samples themselves, detected while binning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HistError {
    #[error("no samples to histogram")]
    NoSamples,

    #[error("got {samples} samples but {weights} weights")]
    WeightCountMismatch { samples: usize, weights: usize },

    #[error("got {xs} x-coordinates but {ys} y-coordinates")]
    CoordinateCountMismatch { xs: usize, ys: usize },

    #[error("weight {weight} of sample {index} is negative or not finite")]
    BadWeight { index: usize, weight: f64 },

    #[error("sample {index} is not finite: {value}")]
    NonFiniteSample { index: usize, value: f64 },

    #[error("cannot normalize: no weight falls inside the binning range")]
    NoMassInRange,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Hist(#[from] HistError),

    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),
}

impl From<UnitError> for Error {
    fn from(e: UnitError) -> Self { Error::Config(e.into()) }
}

pub type Result<T> = std::result::Result<T, Error>;
