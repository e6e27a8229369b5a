/// Command line interface for `histogram` executable
#[derive(clap::Parser, Debug, Clone)]
#[clap(
    name = "histogram",
    about = "Histogram one column of a data file, optionally as a free-energy profile",
)]
pub (super) struct Cli {
    /// Data file: whitespace-separated columns, `#` and `@` start comments
    #[clap(short = 'f', long = "datafile")]
    pub datafile: PathBuf,

    /// Column to histogram, counting from 1
    #[clap(short = 'i', long = "column")]
    pub column: usize,

    /// File containing per-sample weights
    #[clap(short = 'w', long = "weightfile", requires = "weightcolumn")]
    pub weightfile: Option<PathBuf>,

    /// Column of the weight file holding the weights, counting from 1
    #[clap(short = 'j', long = "weightcolumn", requires = "weightfile")]
    pub weightcolumn: Option<usize>,

    /// Left edge of the first bin
    #[clap(short = 'n', long = "minbin", requires = "maxbin", allow_hyphen_values = true)]
    pub minbin: Option<f64>,

    /// Right edge of the last bin
    #[clap(short = 'x', long = "maxbin", requires = "minbin", allow_hyphen_values = true)]
    pub maxbin: Option<f64>,

    /// Number of bins
    #[clap(short = 'b', long = "nbins")]
    pub nbins: usize,

    /// Also report the free energy, -ln(p), relative to its minimum
    #[clap(short = 'e', long = "freeE")]
    pub free_e: bool,

    /// Free energy unit: 0 = kBT, 1 = kcal/mol, 2 = kJ/mol
    #[clap(short = 'o', long = "unit", default_value = "0")]
    pub unit: EnergyUnit,

    /// Temperature in Kelvin
    #[clap(short = 't', long = "temperature", default_value = "300.0")]
    pub temperature: f64,

    /// Account for data outside [minbin, maxbin] with an extra bin at either end
    #[clap(short = 'a', long = "alldata")]
    pub alldata: bool,

    /// Report weighted counts rather than probability densities
    #[clap(short = 'r', long = "nonormalization")]
    pub nonormalization: bool,
}

impl Cli {
    pub (super) fn into_config(self) -> Result<Config1D, ConfigError> {
        let bins = match config::range(self.minbin, self.maxbin)? {
            Some((lo, hi)) => BinSpec::new(self.nbins).with_range(lo, hi),
            None           => BinSpec::new(self.nbins),
        };
        Config1D {
            datafile   : self.datafile,
            column     : self.column,
            weights    : config::weight_source(self.weightfile, self.weightcolumn)?,
            bins,
            free_energy: config::free_energy_settings(self.free_e, self.unit, self.temperature)?,
            all_data   : self.alldata,
            normalize  : !self.nonormalization,
        }.validate()
    }
}

// ----- Imports -----------------------------------------------------------------------------------------
use std::path::PathBuf;
use freehist::{
    BinSpec, ConfigError,
    config::{self, Config1D},
};
use units::EnergyUnit;
