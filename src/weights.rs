//! Per-sample weights: validation and the unweighted default.

use crate::error::HistError;

/// Check that every sample is finite.
pub fn check_samples(samples: &[f64]) -> Result<(), HistError> {
    match samples.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(HistError::NonFiniteSample { index, value: samples[index] }),
        None        => Ok(()),
    }
}

/// Check that there is one finite, non-negative weight per sample.
pub fn check_weights(n_samples: usize, weights: Option<&[f64]>) -> Result<(), HistError> {
    let Some(weights) = weights else { return Ok(()) };
    if weights.len() != n_samples {
        return Err(HistError::WeightCountMismatch { samples: n_samples, weights: weights.len() })
    }
    match weights.iter().position(|w| !(w.is_finite() && *w >= 0.0)) {
        Some(index) => Err(HistError::BadWeight { index, weight: weights[index] }),
        None        => Ok(()),
    }
}

/// The weight of each of `n` samples: as given, or 1 if unweighted.
pub fn weights_or_ones(n: usize, weights: Option<&[f64]>) -> impl Iterator<Item = f64> + '_ {
    (0..n).map(move |i| weights.map_or(1.0, |w| w[i]))
}
