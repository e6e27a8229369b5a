//! Validated, immutable settings for one run of either tool.
//!
//! The binaries build these from their command lines; everything downstream
//! takes them by reference.

use std::path::PathBuf;

use units::{checked_kelvin, kelvin, EnergyUnit, Temperature};

use crate::axis::BinSpec;
use crate::error::ConfigError;

/// Where per-sample weights come from
#[derive(Debug, Clone, PartialEq)]
pub struct WeightSource {
    pub file: PathBuf,
    /// 1-based
    pub column: usize,
}

/// Settings for the conversion of densities into free energies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeEnergySettings {
    pub unit: EnergyUnit,
    pub temperature: Temperature,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config1D {
    pub datafile: PathBuf,
    /// 1-based
    pub column: usize,
    pub weights: Option<WeightSource>,
    pub bins: BinSpec,
    pub free_energy: Option<FreeEnergySettings>,
    /// Redistribute data outside the range into extra edge bins
    pub all_data: bool,
    pub normalize: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config2D {
    pub datafile: PathBuf,
    /// 1-based (x, y)
    pub columns: (usize, usize),
    pub weights: Option<WeightSource>,
    pub x_bins: BinSpec,
    pub y_bins: BinSpec,
    pub free_energy: Option<FreeEnergySettings>,
}

impl Config1D {
    pub fn validate(self) -> Result<Self, ConfigError> {
        check_column(self.column)?;
        if let Some(w) = &self.weights { check_column(w.column)? }
        self.bins.validate()?;
        if self.all_data && !self.normalize {
            return Err(ConfigError::AllDataWithoutNormalization)
        }
        Ok(self)
    }
}

impl Config2D {
    pub fn validate(self) -> Result<Self, ConfigError> {
        check_column(self.columns.0)?;
        check_column(self.columns.1)?;
        if let Some(w) = &self.weights { check_column(w.column)? }
        self.x_bins.validate()?;
        self.y_bins.validate()?;
        Ok(self)
    }
}

fn check_column(column: usize) -> Result<(), ConfigError> {
    if column == 0 { Err(ConfigError::ColumnZero) } else { Ok(()) }
}

/// Weights are used only if both the file and the column are given.
pub fn weight_source(file: Option<PathBuf>, column: Option<usize>) -> Result<Option<WeightSource>, ConfigError> {
    match (file, column) {
        (Some(file), Some(column)) => Ok(Some(WeightSource { file, column })),
        (None      , None        ) => Ok(None),
        _                          => Err(ConfigError::HalfWeights),
    }
}

/// Combine optional range ends into an optional range: both or neither.
pub fn range<T>(lo: Option<T>, hi: Option<T>) -> Result<Option<(T, T)>, ConfigError> {
    match (lo, hi) {
        (Some(lo), Some(hi)) => Ok(Some((lo, hi))),
        (None    , None    ) => Ok(None),
        (Some(_) , None    ) => Err(ConfigError::HalfRange("the lower end")),
        (None    , Some(_) ) => Err(ConfigError::HalfRange("the upper end")),
    }
}

/// Free-energy settings, if the conversion was requested.
pub fn free_energy_settings(
    enabled    : bool,
    unit       : EnergyUnit,
    temperature: f64,
) -> Result<Option<FreeEnergySettings>, ConfigError> {
    if !enabled { return Ok(None) }
    // kBT does not depend on the temperature
    let temperature = match unit {
        EnergyUnit::KBT => kelvin(temperature),
        _               => checked_kelvin(temperature)?,
    };
    Ok(Some(FreeEnergySettings { unit, temperature }))
}
