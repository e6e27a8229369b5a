//! Account for samples which fell outside an explicit binning range.
//!
//! A density normalized over the range alone overstates the probability of the
//! binned region whenever some of the data lies outside it. The mass outside is
//! moved into one synthetic bin on each side, and the in-range bins are scaled
//! down to make room for it, so that the whole still integrates to 1.

use ndarray::Array1;

use crate::error::{ConfigError, Result};
use crate::hist1d::Histogram1D;

/// Bin centres and densities after redistributing the outside mass.
///
/// Has one more bin than the input at each end that had any mass outside it.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectedHistogram {
    pub centres: Array1<f64>,
    pub values: Array1<f64>,
    pub width: f64,
}

impl CorrectedHistogram {
    pub fn integral(&self) -> f64 { self.values.sum() * self.width }
}

/// Redistribute the weight of samples below/above the range of `hist` into
/// synthetic edge bins.
///
/// Only meaningful for a normalized histogram with an explicit range. If the
/// range was derived from the data, nothing lies outside it and the histogram
/// is returned unchanged.
pub fn correct_boundaries(hist: &Histogram1D) -> Result<CorrectedHistogram> {
    if !hist.normalized { return Err(ConfigError::AllDataWithoutNormalization.into()) }

    let width = hist.width();
    let mut centres = hist.centres().to_vec();
    let mut values  = hist.values.to_vec();

    if !hist.axis.is_explicit() {
        tracing::warn!("No binning range was given, so no data lies outside it: nothing to correct");
        return Ok(CorrectedHistogram { centres: centres.into(), values: values.into(), width })
    }

    let left  = hist.outside.below_fraction();
    let right = hist.outside.above_fraction();
    if left + right > 0.0 {
        let factor = 1.0 - left - right;
        values.iter_mut().for_each(|v| *v *= factor);
        if left > 0.0 {
            centres.insert(0, centres[0] - width);
            values .insert(0, left / width);
        }
        if right > 0.0 {
            centres.push(centres[centres.len() - 1] + width);
            values .push(right / width);
        }
    }
    Ok(CorrectedHistogram { centres: centres.into(), values: values.into(), width })
}

#[cfg(test)]
mod test_correct_boundaries {
    use super::*;
    use crate::axis::BinSpec;
    use crate::hist1d::histogram_1d;
    use proptest::prelude::*;
    use float_eq::assert_float_eq;
    #[allow(unused)] use pretty_assertions::{assert_eq, assert_ne};

    const SAMPLES: [f64; 6] = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0];

    fn corrected(lo: f64, hi: f64, bins: usize) -> CorrectedHistogram {
        let h = histogram_1d(&SAMPLES, None, BinSpec::new(bins).with_range(lo, hi), true).unwrap();
        correct_boundaries(&h).unwrap()
    }

    #[test]
    fn nothing_outside_changes_nothing() {
        let c = corrected(1.0, 4.0, 3);
        assert_eq!(c.centres.to_vec(), vec![1.5, 2.5, 3.5]);
        assert_float_eq!(c.values.to_vec(), vec![1.0/6.0, 2.0/6.0, 3.0/6.0], rmax_all <= 1e-15);
    }

    #[test]
    fn mass_on_both_sides() {
        // 1.0 below, 3.0s above: fractions 1/6 and 3/6, leaving 2/6 inside
        let c = corrected(1.5, 2.5, 2);
        assert_eq!(c.width, 0.5);
        assert_eq!(c.centres.to_vec(), vec![1.25, 1.75, 2.25, 2.75]);
        // Inside, both 2.0s fall in the upper bin: density 2 before scaling
        assert_float_eq!(c.values.to_vec(), vec![(1.0/6.0) / 0.5, 0.0, 2.0 * (2.0/6.0), (3.0/6.0) / 0.5],
                         abs_all <= 1e-12);
        assert_float_eq!(c.integral(), 1.0, abs <= 1e-12);
    }

    #[test]
    fn mass_only_above() {
        let c = corrected(0.0, 2.0, 1);
        assert_eq!(c.centres.to_vec(), vec![1.0, 3.0]);
        assert_float_eq!(c.values.to_vec(), vec![0.5 / 2.0, 0.5 / 2.0], abs_all <= 1e-12);
    }

    #[test]
    fn single_bin_uses_axis_width() {
        let c = corrected(2.5, 3.5, 1);
        assert_eq!(c.centres.to_vec(), vec![2.0, 3.0]);
        assert_float_eq!(c.integral(), 1.0, abs <= 1e-12);
    }

    #[test]
    fn derived_range_is_left_alone() {
        let h = histogram_1d(&SAMPLES, None, BinSpec::new(2), true).unwrap();
        let c = correct_boundaries(&h).unwrap();
        assert_eq!(c.centres, h.centres());
        assert_eq!(c.values, h.values);
    }

    #[test]
    fn raw_counts_are_rejected() {
        let h = histogram_1d(&SAMPLES, None, BinSpec::new(2).with_range(1.5, 2.5), false).unwrap();
        assert!(matches!(correct_boundaries(&h),
                         Err(crate::Error::Config(ConfigError::AllDataWithoutNormalization))));
    }

    proptest! {
        #[test]
        fn total_mass_is_preserved(
            samples in proptest::collection::vec((-10.0 .. 10.0_f64, 0.01 .. 5.0_f64), 1..200),
            bins    in 1 .. 30_usize,
            lo      in -5.0 .. 0.0_f64,
            len     in  0.5 .. 5.0_f64,
        ) {
            let (x, w): (Vec<_>, Vec<_>) = samples.into_iter().unzip();
            let spec = BinSpec::new(bins).with_range(lo, lo + len);
            if let Ok(h) = histogram_1d(&x, Some(&w), spec, true) {
                let c = correct_boundaries(&h).unwrap();
                assert_float_eq!(c.integral(), 1.0, abs <= 1e-9);
                prop_assert!(c.values.len() >= bins && c.values.len() <= bins + 2);
            }
        }
    }
}
