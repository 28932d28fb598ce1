//! Unit systems and the conversion protocol
//!
//! Each [`UnitSystem`] carries five base constants (c, G, kb, Msun, MeV) and eight
//! stored per-quantity factors. A factor says how many of this system's units one CGS
//! unit of the quantity is worth (1 cm, 1 s, 1 g, 1 erg, 1 K, ...), so CGS is the
//! common reference and every system only knows itself.
//!
//! Converting from `source` to `target` multiplies by `target.factor / source.factor`.
//! Two quantities are derived instead of stored:
//! - velocity: length ratio divided by time ratio,
//! - entropy: `target.kb / source.kb` (entropy in units of Boltzmann's constant).
//!
//! # Usage
//! ```
//! use mc_unit_core::core_types::Quantity;
//! use mc_unit_core::unit_system::UnitSystems;
//!
//! let systems = UnitSystems::new();
//! let km = systems.cgs().convert(systems.geometric_kilometer(), Quantity::Length, 1e5_f64);
//! assert!((km - 1.0).abs() < 1e-12);
//!
//! // Attribute-style through a proxy
//! let lens = systems.cgs().to(systems.geometric_kilometer()).length(vec![1e5_f64, 2.2e3]);
//! assert_eq!(lens.len(), 2);
//! ```

mod cgs;
mod geometric;
mod nuclear;
pub mod proxy;
pub mod registry;
mod si;

pub use cgs::{
    BOLTZMANN_CONSTANT, GRAVITATIONAL_CONSTANT, MEV_IN_ERG, SOLAR_MASS, SPEED_OF_LIGHT,
};
pub use proxy::{ConversionProxy, Converter};
pub use registry::UnitSystems;

use crate::core_types::{Constant, ConstantTable, Quantity, Scalable};
use crate::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

#[inline]
pub(crate) fn pow2(x: f64) -> f64 {
    x * x
}

#[inline]
pub(crate) fn pow3(x: f64) -> f64 {
    x * x * x
}

#[inline]
pub(crate) fn pow4(x: f64) -> f64 {
    pow2(x) * pow2(x)
}

/// The five concrete unit systems
///
/// Deserializes through [`FromStr`], so config files accept the same spellings as
/// [`UnitSystems::by_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum UnitSystemKind {
    /// Centimetre-gram-second, the reference system
    #[serde(rename = "CGS")]
    Cgs,
    /// International System of Units
    #[serde(rename = "SI")]
    Si,
    /// G = c = kb = 1, lengths in kilometres
    GeometricKilometer,
    /// G = c = kb = 1, lengths in solar masses
    GeometricSolar,
    /// c = kb = 1, energies in MeV and lengths in femtometres
    Nuclear,
}

impl UnitSystemKind {
    /// Every kind, in canonical order
    pub const ALL: [UnitSystemKind; 5] = [
        UnitSystemKind::Cgs,
        UnitSystemKind::Si,
        UnitSystemKind::GeometricKilometer,
        UnitSystemKind::GeometricSolar,
        UnitSystemKind::Nuclear,
    ];

    /// Canonical name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            UnitSystemKind::Cgs => "CGS",
            UnitSystemKind::Si => "SI",
            UnitSystemKind::GeometricKilometer => "GeometricKilometer",
            UnitSystemKind::GeometricSolar => "GeometricSolar",
            UnitSystemKind::Nuclear => "Nuclear",
        }
    }

    /// Construct the system from its closed-form definition
    #[must_use]
    pub fn build(self) -> UnitSystem {
        match self {
            UnitSystemKind::Cgs => UnitSystem::cgs(),
            UnitSystemKind::Si => UnitSystem::si(),
            UnitSystemKind::GeometricKilometer => UnitSystem::geometric_kilometer(),
            UnitSystemKind::GeometricSolar => UnitSystem::geometric_solar(),
            UnitSystemKind::Nuclear => UnitSystem::nuclear(),
        }
    }
}

impl FromStr for UnitSystemKind {
    type Err = UnitError;

    /// Accepts the canonical name in any case, or its `snake_case` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.replace('_', "").to_ascii_lowercase();
        UnitSystemKind::ALL
            .into_iter()
            .find(|kind| kind.name().to_ascii_lowercase() == folded)
            .ok_or_else(|| UnitError::InvalidEndpoint(s.to_string()))
    }
}

impl TryFrom<String> for UnitSystemKind {
    type Error = UnitError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl fmt::Display for UnitSystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A consistent set of base constants and per-quantity factors
///
/// Immutable after construction. Build one through [`UnitSystemKind::build`], the
/// named constructors, or take it from a [`UnitSystems`] registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitSystem {
    kind: UnitSystemKind,

    // base constants
    c: Constant,
    #[serde(rename = "G")]
    g: Constant,
    kb: Constant,
    #[serde(rename = "Msun")]
    msun: Constant,
    #[serde(rename = "MeV")]
    mev: Constant,

    // stored factors, relative to one CGS unit
    length: Constant,
    time: Constant,
    density: Constant,
    mass: Constant,
    energy: Constant,
    pressure: Constant,
    temperature: Constant,
    chemical_potential: Constant,
}

/// Result of [`UnitSystem::invoke`], one variant per call shape
#[derive(Debug)]
pub enum Invocation<'a, T> {
    /// No target: snapshot of the source's constants and factors
    Factors(ConstantTable),
    /// Target without quantity: a proxy bound to the pair
    Proxy(ConversionProxy<'a>),
    /// Target, quantity and value: the converted value
    Converted(T),
}

impl<'a, T> Invocation<'a, T> {
    pub fn into_factors(self) -> Option<ConstantTable> {
        match self {
            Invocation::Factors(table) => Some(table),
            _ => None,
        }
    }

    pub fn into_proxy(self) -> Option<ConversionProxy<'a>> {
        match self {
            Invocation::Proxy(proxy) => Some(proxy),
            _ => None,
        }
    }

    pub fn into_converted(self) -> Option<T> {
        match self {
            Invocation::Converted(value) => Some(value),
            _ => None,
        }
    }
}

impl UnitSystem {
    /// Keys of [`UnitSystem::factors`], in order
    pub const FACTOR_KEYS: [&'static str; 13] = [
        "c",
        "G",
        "kb",
        "Msun",
        "MeV",
        "length",
        "time",
        "density",
        "mass",
        "energy",
        "pressure",
        "temperature",
        "chemical_potential",
    ];

    pub fn kind(&self) -> UnitSystemKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Speed of light
    pub fn c(&self) -> Constant {
        self.c
    }

    /// Gravitational constant
    pub fn g(&self) -> Constant {
        self.g
    }

    /// Boltzmann constant
    pub fn kb(&self) -> Constant {
        self.kb
    }

    /// Solar mass
    pub fn msun(&self) -> Constant {
        self.msun
    }

    /// One MeV expressed in this system
    pub fn mev(&self) -> Constant {
        self.mev
    }

    pub fn length(&self) -> Constant {
        self.length
    }

    pub fn time(&self) -> Constant {
        self.time
    }

    pub fn density(&self) -> Constant {
        self.density
    }

    pub fn mass(&self) -> Constant {
        self.mass
    }

    pub fn energy(&self) -> Constant {
        self.energy
    }

    pub fn pressure(&self) -> Constant {
        self.pressure
    }

    pub fn temperature(&self) -> Constant {
        self.temperature
    }

    pub fn chemical_potential(&self) -> Constant {
        self.chemical_potential
    }

    /// Stored factor for `quantity`, or `None` for the derived velocity and entropy
    pub fn stored_factor(&self, quantity: Quantity) -> Option<Constant> {
        match quantity {
            Quantity::Length => Some(self.length),
            Quantity::Time => Some(self.time),
            Quantity::Density => Some(self.density),
            Quantity::Mass => Some(self.mass),
            Quantity::Energy => Some(self.energy),
            Quantity::Pressure => Some(self.pressure),
            Quantity::Temperature => Some(self.temperature),
            Quantity::ChemicalPotential => Some(self.chemical_potential),
            Quantity::Velocity | Quantity::Entropy => None,
        }
    }

    /// Snapshot of all base constants and stored factors, keyed by [`Self::FACTOR_KEYS`]
    pub fn factors(&self) -> ConstantTable {
        Self::FACTOR_KEYS
            .into_iter()
            .zip([
                self.c,
                self.g,
                self.kb,
                self.msun,
                self.mev,
                self.length,
                self.time,
                self.density,
                self.mass,
                self.energy,
                self.pressure,
                self.temperature,
                self.chemical_potential,
            ])
            .collect()
    }

    /// Factor converting `quantity` from this system into `target`
    pub fn ratio(&self, target: &UnitSystem, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Velocity => {
                target.length.value() / self.length.value() * self.time.value()
                    / target.time.value()
            }
            Quantity::Entropy => target.kb.value() / self.kb.value(),
            Quantity::Length => target.length.value() / self.length.value(),
            Quantity::Time => target.time.value() / self.time.value(),
            Quantity::Density => target.density.value() / self.density.value(),
            Quantity::Mass => target.mass.value() / self.mass.value(),
            Quantity::Energy => target.energy.value() / self.energy.value(),
            Quantity::Pressure => target.pressure.value() / self.pressure.value(),
            Quantity::Temperature => target.temperature.value() / self.temperature.value(),
            Quantity::ChemicalPotential => {
                target.chemical_potential.value() / self.chemical_potential.value()
            }
        }
    }

    /// Convert `value` of `quantity` from this system into `target`
    ///
    /// The output container matches the input: scalars stay scalars, sequences keep
    /// their kind and length, matrices keep their shape.
    pub fn convert<V: Scalable>(
        &self,
        target: &UnitSystem,
        quantity: Quantity,
        value: V,
    ) -> V::Output {
        let factor = self.ratio(target, quantity);
        trace!(
            source = self.name(),
            target = target.name(),
            %quantity,
            factor,
            "converting"
        );
        value.scale(factor)
    }

    /// Convert a quantity given by name
    ///
    /// # Errors
    /// Returns [`UnitError::UnknownQuantity`] if `quantity` is not a known quantity name.
    pub fn convert_named<V: Scalable>(
        &self,
        target: &UnitSystem,
        quantity: &str,
        value: V,
    ) -> Result<V::Output, UnitError> {
        let quantity: Quantity = quantity.parse()?;
        Ok(self.convert(target, quantity, value))
    }

    /// Bind a proxy for attribute-style conversion into `target`
    pub fn to<'a>(&'a self, target: &'a UnitSystem) -> ConversionProxy<'a> {
        ConversionProxy::new(self, target)
    }

    /// Single entry point mirroring the call protocol
    ///
    /// - no `target`: [`Invocation::Factors`] with the factor snapshot,
    /// - `target` without `quantity`: [`Invocation::Proxy`],
    /// - `target`, `quantity` and `value`: [`Invocation::Converted`].
    ///
    /// # Errors
    /// - [`UnitError::UnknownQuantity`] if `quantity` is not a known quantity name.
    /// - [`UnitError::MissingValue`] if `quantity` is given without `value`.
    pub fn invoke<'a, V: Scalable>(
        &'a self,
        target: Option<&'a UnitSystem>,
        quantity: Option<&str>,
        value: Option<V>,
    ) -> Result<Invocation<'a, V::Output>, UnitError> {
        let Some(target) = target else {
            return Ok(Invocation::Factors(self.factors()));
        };
        let Some(quantity) = quantity else {
            return Ok(Invocation::Proxy(self.to(target)));
        };
        let quantity: Quantity = quantity.parse()?;
        let value = value.ok_or(UnitError::MissingValue(quantity))?;
        Ok(Invocation::Converted(self.convert(target, quantity, value)))
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name())?;
        write!(f, "{}", self.factors())
    }
}
