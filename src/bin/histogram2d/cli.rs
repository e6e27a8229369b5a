/// Command line interface for `histogram2d` executable
#[derive(clap::Parser, Debug, Clone)]
#[clap(
    name = "histogram2d",
    about = "Joint histogram of two columns of a data file, optionally as a free-energy surface",
)]
pub (super) struct Cli {
    /// Data file: whitespace-separated columns, `#` and `@` start comments
    #[clap(short = 'f', long = "datafile")]
    pub datafile: PathBuf,

    /// Columns to histogram, counting from 1 (e.g. '2,3')
    #[clap(short = 'i', long = "column", value_parser = parse_pair::<usize>)]
    pub column: (usize, usize),

    /// File containing per-sample weights
    #[clap(short = 'w', long = "weightfile", requires = "weightcolumn")]
    pub weightfile: Option<PathBuf>,

    /// Column of the weight file holding the weights, counting from 1
    #[clap(short = 'j', long = "weightcolumn", requires = "weightfile")]
    pub weightcolumn: Option<usize>,

    /// Left edges of the first x and y bins (e.g. '-180,-180')
    #[clap(short = 'n', long = "minmid", requires = "maxmid", allow_hyphen_values = true,
           value_parser = parse_pair::<f64>)]
    pub minmid: Option<(f64, f64)>,

    /// Right edges of the last x and y bins (e.g. '180,180')
    #[clap(short = 'x', long = "maxmid", requires = "minmid", allow_hyphen_values = true,
           value_parser = parse_pair::<f64>)]
    pub maxmid: Option<(f64, f64)>,

    /// Number of x and y bins (e.g. '36,36')
    #[clap(short = 'b', long = "nbins", value_parser = parse_pair::<usize>)]
    pub nbins: (usize, usize),

    /// Also report the free energy, -ln(p), relative to its minimum
    #[clap(short = 'e', long = "freeE")]
    pub free_e: bool,

    /// Free energy unit: 0 = kBT, 1 = kcal/mol, 2 = kJ/mol
    #[clap(short = 'o', long = "unit", default_value = "0")]
    pub unit: EnergyUnit,

    /// Temperature in Kelvin
    #[clap(short = 't', long = "temperature", default_value = "300.0")]
    pub temperature: f64,
}

impl Cli {
    pub (super) fn into_config(self) -> Result<Config2D, ConfigError> {
        let (nx, ny) = self.nbins;
        let (x_bins, y_bins) = match config::range(self.minmid, self.maxmid)? {
            Some(((xlo, ylo), (xhi, yhi))) => (BinSpec::new(nx).with_range(xlo, xhi),
                                               BinSpec::new(ny).with_range(ylo, yhi)),
            None                           => (BinSpec::new(nx), BinSpec::new(ny)),
        };
        Config2D {
            datafile   : self.datafile,
            columns    : self.column,
            weights    : config::weight_source(self.weightfile, self.weightcolumn)?,
            x_bins,
            y_bins,
            free_energy: config::free_energy_settings(self.free_e, self.unit, self.temperature)?,
        }.validate()
    }
}

// ----- Imports -----------------------------------------------------------------------------------------
use std::path::PathBuf;
use freehist::{
    BinSpec, ConfigError,
    config::{self, Config2D},
    utils::parse_pair,
};
use units::EnergyUnit;
