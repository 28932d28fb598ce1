//! Closed set of convertible physical quantities

use crate::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical quantity category with a defined conversion factor
///
/// `Velocity` and `Entropy` are derived: their factors come from other stored
/// factors (length and time, and kb respectively). Every other quantity is stored
/// directly on each unit system. `Density` should be read as a number density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Length,
    Time,
    Velocity,
    Density,
    Mass,
    Energy,
    Entropy,
    Pressure,
    Temperature,
    ChemicalPotential,
}

impl Quantity {
    /// Every quantity, in canonical order
    pub const ALL: [Quantity; 10] = [
        Quantity::Length,
        Quantity::Time,
        Quantity::Velocity,
        Quantity::Density,
        Quantity::Mass,
        Quantity::Energy,
        Quantity::Entropy,
        Quantity::Pressure,
        Quantity::Temperature,
        Quantity::ChemicalPotential,
    ];

    /// Snake-case name used for lookup by string
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Quantity::Length => "length",
            Quantity::Time => "time",
            Quantity::Velocity => "velocity",
            Quantity::Density => "density",
            Quantity::Mass => "mass",
            Quantity::Energy => "energy",
            Quantity::Entropy => "entropy",
            Quantity::Pressure => "pressure",
            Quantity::Temperature => "temperature",
            Quantity::ChemicalPotential => "chemical_potential",
        }
    }

    /// True for quantities computed from other factors rather than stored
    #[must_use]
    pub const fn is_derived(self) -> bool {
        matches!(self, Quantity::Velocity | Quantity::Entropy)
    }
}

impl FromStr for Quantity {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quantity::ALL
            .into_iter()
            .find(|q| q.name() == s)
            .ok_or_else(|| UnitError::UnknownQuantity(s.to_string()))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
