//! One-dimensional histograms of weighted samples.

use ndarray::Array1;
use ndhistogram::{ndhistogram, Histogram};

use crate::axis::{BinAxis, BinSpec};
use crate::error::{HistError, Result};
use crate::weights::{check_samples, check_weights, weights_or_ones};

/// Weight of the samples which fell outside the binning range, kept for
/// redistribution by [`crate::boundary`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OutsideMass {
    /// Weight of samples below the lowest edge
    pub below: f64,
    /// Weight of samples above the highest edge
    pub above: f64,
    /// Weight of all samples, inside or outside the range
    pub total: f64,
}

impl OutsideMass {
    pub fn below_fraction(&self) -> f64 { fraction(self.below, self.total) }
    pub fn above_fraction(&self) -> f64 { fraction(self.above, self.total) }
    pub fn inside(&self) -> f64 { self.total - self.below - self.above }
}

fn fraction(part: f64, total: f64) -> f64 { if total > 0.0 { part / total } else { 0.0 } }

#[derive(Debug, Clone)]
pub struct Histogram1D {
    pub axis: BinAxis,
    /// Weighted counts, or probability densities if `normalized`
    pub values: Array1<f64>,
    pub outside: OutsideMass,
    pub normalized: bool,
}

impl Histogram1D {
    pub fn centres(&self) -> Array1<f64> { self.axis.centres() }
    pub fn edges  (&self) -> &Array1<f64> { self.axis.edges() }
    pub fn width  (&self) -> f64 { self.axis.width() }

    /// `Σ value * width`: 1 for a normalized histogram with mass in range
    pub fn integral(&self) -> f64 { self.values.sum() * self.width() }
}

/// Bin `samples` according to `spec`.
///
/// Each sample in range contributes its weight (1 if `weights` is `None`) to
/// its bin. Samples outside an explicit range are left out of the bins, but
/// their weight is recorded in `outside`. With `normalize`, the values are
/// divided by the in-range weight and the bin width, turning them into a
/// probability density.
pub fn histogram_1d(
    samples  : &[f64],
    weights  : Option<&[f64]>,
    spec     : BinSpec,
    normalize: bool,
) -> Result<Histogram1D> {
    check_samples(samples)?;
    check_weights(samples.len(), weights)?;
    let axis = BinAxis::resolve(spec, samples)?;
    let (lo, hi) = (axis.lo(), axis.hi());

    let mut hist = ndhistogram!(axis.clone(); f64);
    let mut outside = OutsideMass::default();
    for (&x, w) in samples.iter().zip(weights_or_ones(samples.len(), weights)) {
        outside.total += w;
        if      x < lo { outside.below += w }
        else if x > hi { outside.above += w }
        else           { hist.fill_with(&x, w) }
    }

    let mut values: Array1<f64> = (0..axis.bins())
        .map(|k| hist.value_at_index(k).copied().unwrap_or(0.0))
        .collect();

    if outside.below + outside.above > 0.0 {
        tracing::info!("{} of {} total weight lies outside [{lo}, {hi}]",
                       outside.below + outside.above, outside.total);
    }

    if normalize {
        let inside = values.sum();
        if inside <= 0.0 { return Err(HistError::NoMassInRange.into()) }
        values /= inside * axis.width();
    }

    Ok(Histogram1D { axis, values, outside, normalized: normalize })
}
