//! Fixed-width binning of one dimension.

use itertools::Itertools;
use ndarray::Array1;
use ndhistogram::axis::{Axis, BinInterval, Uniform};

use crate::error::{ConfigError, HistError, Result};

/// How one dimension should be binned: the number of bins and, optionally, the
/// range they should cover. Without a range, the extent of the data is used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinSpec {
    pub bins: usize,
    pub range: Option<(f64, f64)>,
}

impl BinSpec {
    pub fn new(bins: usize) -> Self { Self { bins, range: None } }

    pub fn with_range(self, lo: f64, hi: f64) -> Self { Self { range: Some((lo, hi)), ..self } }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.bins == 0 { return Err(ConfigError::ZeroBins) }
        if let Some((lo, hi)) = self.range {
            if !(lo.is_finite() && hi.is_finite() && lo < hi) {
                return Err(ConfigError::BadRange { lo, hi })
            }
        }
        Ok(())
    }
}

/// `bins` equal-width bins covering `[lo, hi]`.
///
/// Every bin is closed below and open above, except the last, which also
/// contains `hi`. Samples outside `[lo, hi]` have no index: unlike
/// `ndhistogram`'s `Uniform` there are no underflow or overflow bins.
#[derive(Debug, Clone)]
pub struct BinAxis {
    uniform: Uniform<f64>,
    edges: Array1<f64>,
    explicit: bool,
}

impl BinAxis {

    /// Bins covering exactly `[lo, hi]`, as requested by the user.
    pub fn new(bins: usize, lo: f64, hi: f64) -> std::result::Result<Self, ConfigError> {
        BinSpec::new(bins).with_range(lo, hi).validate()?;
        Self::build(bins, lo, hi, true)
    }

    /// Resolve `spec` against `samples`: use the explicit range if there is one,
    /// otherwise the extent of the samples.
    ///
    /// When all samples coincide, the derived range is widened by 0.5 on either
    /// side, so that the bins have non-zero width.
    pub fn resolve(spec: BinSpec, samples: &[f64]) -> Result<Self> {
        spec.validate()?;
        if let Some((lo, hi)) = spec.range {
            return Ok(Self::build(spec.bins, lo, hi, true)?)
        }
        let (lo, hi) = extent(samples).ok_or(HistError::NoSamples)?;
        let (lo, hi) = if lo == hi { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
        Ok(Self::build(spec.bins, lo, hi, false)?)
    }

    /// Fails unless every bin has a finite width and distinct edges: a range
    /// only a few ULPs wide cannot hold many bins, and one spanning most of the
    /// `f64` range overflows.
    fn build(bins: usize, lo: f64, hi: f64, explicit: bool) -> std::result::Result<Self, ConfigError> {
        let unrepresentable = || ConfigError::UnrepresentableBins { bins, lo, hi };
        let width = (hi - lo) / bins as f64;
        if !(width.is_finite() && width > 0.0) { return Err(unrepresentable()) }
        let mut edges = Array1::from_iter((0..=bins).map(|k| lo + k as f64 * width));
        // The last edge must be exactly `hi`
        edges[bins] = hi;
        if edges.iter().tuple_windows().any(|(a, b)| a >= b) { return Err(unrepresentable()) }
        Ok(Self { uniform: Uniform::new(bins, lo, hi), edges, explicit })
    }

    pub fn bins (&self) -> usize { self.edges.len() - 1 }
    pub fn lo   (&self) -> f64   { self.edges[0] }
    pub fn hi   (&self) -> f64   { self.edges[self.bins()] }
    pub fn width(&self) -> f64   { (self.hi() - self.lo()) / self.bins() as f64 }

    /// Was the range given explicitly, rather than derived from the data?
    pub fn is_explicit(&self) -> bool { self.explicit }

    pub fn edges(&self) -> &Array1<f64> { &self.edges }

    pub fn centres(&self) -> Array1<f64> {
        self.edges.iter()
            .tuple_windows()
            .map(|(a, b)| (a + b) / 2.0)
            .collect()
    }

    /// Index of the bin containing `x`, or `None` if `x` lies outside `[lo, hi]`.
    pub fn bin_index(&self, x: f64) -> Option<usize> {
        let (lo, hi, last) = (self.lo(), self.hi(), self.bins() - 1);
        if !(lo..=hi).contains(&x) { return None }
        if x == hi { return Some(last) }
        // `Uniform` reserves index 0 for underflow
        let mut k = self.uniform.index(&x)?.checked_sub(1)?.min(last);
        // The index arithmetic may disagree with the stored edges by a few ULPs
        while k > 0    && x <  self.edges[k    ] { k -= 1 }
        while k < last && x >= self.edges[k + 1] { k += 1 }
        Some(k)
    }
}

impl Axis for BinAxis {
    type Coordinate = f64;
    type BinInterval = BinInterval<f64>;

    fn index(&self, coordinate: &Self::Coordinate) -> Option<usize> {
        self.bin_index(*coordinate)
    }

    fn num_bins(&self) -> usize {
        self.bins()
    }

    fn bin(&self, index: usize) -> Option<Self::BinInterval> {
        if index < self.bins() { self.uniform.bin(index + 1) } else { None }
    }
}

/// Smallest and largest sample, or `None` if there are no samples.
fn extent(samples: &[f64]) -> Option<(f64, f64)> {
    samples.iter().copied().fold(None, |acc, x| match acc {
        None             => Some((x, x)),
        Some((lo, hi))   => Some((lo.min(x), hi.max(x))),
    })
}
