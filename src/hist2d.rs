//! Two-dimensional histograms of weighted sample pairs.

use ndarray::Array2;
use ndhistogram::{ndhistogram, Histogram};

use crate::axis::{BinAxis, BinSpec};
use crate::error::{HistError, Result};
use crate::weights::{check_samples, check_weights, weights_or_ones};

#[derive(Debug, Clone)]
pub struct Histogram2D {
    pub x_axis: BinAxis,
    pub y_axis: BinAxis,
    /// `values[[ix, iy]]`: weighted counts, or probability densities if `normalized`
    pub values: Array2<f64>,
    pub normalized: bool,
}

impl Histogram2D {
    /// Area of every bin
    pub fn bin_area(&self) -> f64 { self.x_axis.width() * self.y_axis.width() }

    /// `Σ value * area`: 1 for a normalized histogram with mass in range
    pub fn integral(&self) -> f64 { self.values.sum() * self.bin_area() }
}

/// Bin the pairs `(xs[i], ys[i])`, each dimension according to its own spec.
///
/// A pair outside either range is left out. With `normalize`, the values are
/// divided by the in-range weight and the bin area.
pub fn histogram_2d(
    xs       : &[f64],
    ys       : &[f64],
    weights  : Option<&[f64]>,
    x_spec   : BinSpec,
    y_spec   : BinSpec,
    normalize: bool,
) -> Result<Histogram2D> {
    check_samples(xs)?;
    check_samples(ys)?;
    if xs.len() != ys.len() {
        return Err(HistError::CoordinateCountMismatch { xs: xs.len(), ys: ys.len() }.into())
    }
    check_weights(xs.len(), weights)?;
    let x_axis = BinAxis::resolve(x_spec, xs)?;
    let y_axis = BinAxis::resolve(y_spec, ys)?;

    let mut hist = ndhistogram!(x_axis.clone(), y_axis.clone(); f64);
    for ((&x, &y), w) in xs.iter().zip(ys).zip(weights_or_ones(xs.len(), weights)) {
        hist.fill_with(&(x, y), w);
    }

    // `ndhistogram` stores the first axis fastest
    let nx = x_axis.bins();
    let mut values = Array2::from_shape_fn((nx, y_axis.bins()), |(i, j)| {
        hist.value_at_index(i + nx * j).copied().unwrap_or(0.0)
    });

    if normalize {
        let inside = values.sum();
        if inside <= 0.0 { return Err(HistError::NoMassInRange.into()) }
        values /= inside * x_axis.width() * y_axis.width();
    }

    Ok(Histogram2D { x_axis, y_axis, values, normalized: normalize })
}
