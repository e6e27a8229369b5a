//! Boltzmann inversion of probability densities into relative free energies.

use ndarray::{Array, Dimension};
use ordered_float::OrderedFloat;
use units::{EnergyUnit, Temperature, todo::Energyf64};

/// Free energies on the same grid as the densities they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeEnergy<D: Dimension> {
    /// `-ln(p) * factor - baseline`; `+∞` wherever `p == 0`
    pub values: Array<Energyf64, D>,
    /// The minimum which was subtracted, or `None` if every bin was empty
    pub baseline: Option<Energyf64>,
    pub unit: EnergyUnit,
}

/// `-ln(p)` in units of `factor`, with empty bins infinitely high.
pub fn boltzmann_inversion(p: f64, factor: f64) -> Energyf64 {
    if p == 0.0 { f64::INFINITY }
    else        { -p.ln() * factor }
}

/// Convert `density` into free energies in `unit` at `temperature`, shifted so
/// that the lowest one is exactly 0.
///
/// If every bin is empty there is nothing to shift by: all values stay `+∞`
/// and `baseline` is `None`.
pub fn free_energy<D: Dimension>(
    density    : &Array<f64, D>,
    unit       : EnergyUnit,
    temperature: Temperature,
) -> FreeEnergy<D> {
    let factor = unit.factor(temperature);
    let mut values = density.mapv(|p| boltzmann_inversion(p, factor));
    let baseline = values.iter()
        .copied()
        .filter(|e| e.is_finite())
        .map(OrderedFloat)
        .min()
        .map(|OrderedFloat(e)| e);
    match baseline {
        Some(base) => values.mapv_inplace(|e| e - base),
        None       => tracing::warn!("Every bin is empty: all free energies are infinite"),
    }
    FreeEnergy { values, baseline, unit }
}
