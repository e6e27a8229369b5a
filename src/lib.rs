//! Histograms and free-energy profiles of columnar data.
//!
//! The pipeline shared by the `histogram` and `histogram2d` tools: read
//! columns of samples ([`table`]), bin them ([`hist1d`], [`hist2d`]),
//! optionally fold the data outside the binning range back in
//! ([`boundary`]), optionally turn densities into free energies
//! ([`free_energy`]) and print the result ([`report`]).

mod error;
pub use error::{ConfigError, Error, HistError, Result};

pub mod axis;
pub mod boundary;
pub mod config;
pub mod free_energy;
pub mod hist1d;
pub mod hist2d;
pub mod pipeline;
pub mod report;
pub mod table;
pub mod utils;
pub mod weights;

pub use axis::{BinAxis, BinSpec};
pub use hist1d::{histogram_1d, Histogram1D};
pub use hist2d::{histogram_2d, Histogram2D};
