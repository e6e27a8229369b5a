//! Temperatures, energy units and the physical constants needed to express
//! relative free energies.

pub mod todo;

pub use uom::si::f64::ThermodynamicTemperature as Temperature;

use std::fmt;
use std::str::FromStr;

mod units {
  pub use uom::si::thermodynamic_temperature::kelvin;
}

/// Generate a function called NAME which returns QUANTITY by interpreting its
/// argument as UNIT
///
/// wrap!(NAME QUANTITY UNIT);
macro_rules! wrap {
  ($name:ident $quantity:ident $unit:ident ) => {
    pub fn $name(x: f64) -> $quantity { $quantity::new::<units::$unit>(x) }
  };
}

wrap!(kelvin Temperature kelvin);

pub fn kelvin_(t: Temperature) -> f64 { t.get::<units::kelvin>() }

/// Boltzmann constant in kcal mol⁻¹ K⁻¹
pub const K_B: f64 = 0.0019872041;

/// Joules per (thermochemical) calorie
pub const CAL_TO_J: f64 = 4.184;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
  #[error("undefined unit `{0}`: expected 0 (kBT), 1 (kcal/mol) or 2 (kJ/mol)")]
  Unknown(String),

  #[error("temperature must be finite and positive, got {0} K")]
  Temperature(f64),
}

/// Make a temperature from a value in Kelvin, rejecting anything that
/// cannot be used as `kB T`.
pub fn checked_kelvin(x: f64) -> Result<Temperature, UnitError> {
  if x.is_finite() && x > 0.0 { Ok(kelvin(x)) }
  else                        { Err(UnitError::Temperature(x)) }
}

/// The unit in which free energies are reported.
///
/// Selected on the command line by the integers 0, 1 and 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnergyUnit {
  /// Multiples of the thermal energy `kB T`
  #[default]
  KBT,
  KcalPerMol,
  KjPerMol,
}

impl EnergyUnit {

  /// Size of `kB T` in this unit, at temperature `t`
  pub fn factor(self, t: Temperature) -> f64 {
    let kbt = K_B * kelvin_(t);
    match self {
      EnergyUnit::KBT        => 1.0,
      EnergyUnit::KcalPerMol => kbt,
      EnergyUnit::KjPerMol   => kbt * CAL_TO_J,
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      EnergyUnit::KBT        => "kBT",
      EnergyUnit::KcalPerMol => "kcal/mol",
      EnergyUnit::KjPerMol   => "kJ/mol",
    }
  }
}

impl TryFrom<u8> for EnergyUnit {
  type Error = UnitError;

  fn try_from(selector: u8) -> Result<Self, Self::Error> {
    match selector {
      0 => Ok(EnergyUnit::KBT),
      1 => Ok(EnergyUnit::KcalPerMol),
      2 => Ok(EnergyUnit::KjPerMol),
      n => Err(UnitError::Unknown(n.to_string())),
    }
  }
}

impl FromStr for EnergyUnit {
  type Err = UnitError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.trim().parse::<u8>()
      .map_err(|_| UnitError::Unknown(s.to_string()))
      .and_then(EnergyUnit::try_from)
  }
}

impl fmt::Display for EnergyUnit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
