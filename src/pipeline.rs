//! Load → bin → (correct) → (transform) → report, for each tool.

use std::io::Write;

use crate::boundary::correct_boundaries;
use crate::config::{Config1D, Config2D, FreeEnergySettings, WeightSource};
use crate::error::Result;
use crate::free_energy::{free_energy, FreeEnergy};
use crate::hist1d::histogram_1d;
use crate::hist2d::histogram_2d;
use crate::report;
use crate::table;
use crate::utils::group_digits;

fn read_weights(source: Option<&WeightSource>) -> Result<Option<Vec<f64>>> {
    Ok(source
       .map(|WeightSource { file, column }| table::read_column(file, *column))
       .transpose()?)
}

fn transform<D: ndarray::Dimension>(
    values  : &ndarray::Array<f64, D>,
    settings: Option<FreeEnergySettings>,
) -> Option<FreeEnergy<D>> {
    settings.map(|FreeEnergySettings { unit, temperature }| {
        let fe = free_energy(values, unit, temperature);
        if let Some(base) = fe.baseline {
            tracing::debug!("Free energies in {unit}, shifted by {base}");
        }
        fe
    })
}

/// Run the 1-D tool, writing the report to `out`.
pub fn run_1d(config: &Config1D, invocation: &[String], out: &mut impl Write) -> Result<()> {
    report::write_header(out, invocation)?;

    let samples = table::read_column(&config.datafile, config.column)?;
    let weights = read_weights(config.weights.as_ref())?;
    tracing::info!("Binning {} samples", group_digits(samples.len()));

    let hist = histogram_1d(&samples, weights.as_deref(), config.bins, config.normalize)?;
    let (centres, values) = if config.all_data {
        let corrected = correct_boundaries(&hist)?;
        (corrected.centres, corrected.values)
    } else {
        (hist.centres(), hist.values)
    };

    let fe = transform(&values, config.free_energy);
    report::write_rows_1d(out, &centres, &values, fe.as_ref().map(|fe| &fe.values))?;
    Ok(())
}

/// Run the 2-D tool, writing the report to `out`.
pub fn run_2d(config: &Config2D, invocation: &[String], out: &mut impl Write) -> Result<()> {
    report::write_header(out, invocation)?;

    let (x_column, y_column) = config.columns;
    let mut columns = table::read_columns(&config.datafile, &[x_column, y_column])?;
    let ys = columns.pop().unwrap_or_default();
    let xs = columns.pop().unwrap_or_default();
    let weights = read_weights(config.weights.as_ref())?;
    tracing::info!("Binning {} sample pairs", group_digits(xs.len()));

    let hist = histogram_2d(&xs, &ys, weights.as_deref(), config.x_bins, config.y_bins, true)?;
    let fe = transform(&hist.values, config.free_energy);
    report::write_rows_2d(out,
                          &hist.x_axis.centres(),
                          &hist.y_axis.centres(),
                          &hist.values,
                          fe.as_ref().map(|fe| &fe.values))?;
    Ok(())
}
