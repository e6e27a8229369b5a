/// Quantities which are simply type aliases for `f64` rather than having an
/// implementation as a `uom` `Quantity`.
///
/// Free energies come out in whichever unit the user selected (including the
/// dimensionless kBT), so they cannot be given a single `uom` type without
/// also carrying the unit choice around at the type level.

pub type Energyf64 = f64; // TODO uom MolarEnergy for the kcal/mol and kJ/mol cases
