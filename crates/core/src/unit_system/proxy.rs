//! Attribute-style conversion bound to a (source, target) pair

use super::{UnitSystem, UnitSystems};
use crate::core_types::{Quantity, Scalable};
use crate::error::UnitError;

/// Conversion sugar: `source.to(target).length(value)`
///
/// Holds nothing but the two endpoints; every call goes back through
/// [`UnitSystem::convert`].
#[derive(Debug, Clone, Copy)]
pub struct ConversionProxy<'a> {
    source: &'a UnitSystem,
    target: &'a UnitSystem,
}

/// Single-argument converter for one quantity, produced by a [`ConversionProxy`]
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    proxy: ConversionProxy<'a>,
    quantity: Quantity,
}

macro_rules! quantity_methods {
    ($($method:ident => $quantity:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Convert a `", stringify!($method), "` value from source to target")]
            pub fn $method<V: Scalable>(&self, value: V) -> V::Output {
                self.source.convert(self.target, Quantity::$quantity, value)
            }
        )+
    };
}

impl<'a> ConversionProxy<'a> {
    pub fn new(source: &'a UnitSystem, target: &'a UnitSystem) -> Self {
        Self { source, target }
    }

    /// Bind a proxy between two systems of `systems` selected by name
    ///
    /// # Errors
    /// Returns [`UnitError::InvalidEndpoint`] if either name is not a unit system.
    pub fn between(
        systems: &'a UnitSystems,
        source: &str,
        target: &str,
    ) -> Result<Self, UnitError> {
        Ok(Self::new(systems.by_name(source)?, systems.by_name(target)?))
    }

    pub fn source(&self) -> &'a UnitSystem {
        self.source
    }

    pub fn target(&self) -> &'a UnitSystem {
        self.target
    }

    /// Converter for `quantity`
    pub fn converter(&self, quantity: Quantity) -> Converter<'a> {
        Converter {
            proxy: *self,
            quantity,
        }
    }

    /// Converter for a quantity given by name
    ///
    /// # Errors
    /// Returns [`UnitError::UnknownQuantity`] if `name` is not a known quantity.
    pub fn lookup(&self, name: &str) -> Result<Converter<'a>, UnitError> {
        Ok(self.converter(name.parse()?))
    }

    quantity_methods! {
        length => Length,
        time => Time,
        velocity => Velocity,
        density => Density,
        mass => Mass,
        energy => Energy,
        entropy => Entropy,
        pressure => Pressure,
        temperature => Temperature,
        chemical_potential => ChemicalPotential,
    }
}

impl Converter<'_> {
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Factor applied by [`Converter::apply`]
    pub fn factor(&self) -> f64 {
        self.proxy.source.ratio(self.proxy.target, self.quantity)
    }

    pub fn apply<V: Scalable>(&self, value: V) -> V::Output {
        self.proxy
            .source
            .convert(self.proxy.target, self.quantity, value)
    }
}
