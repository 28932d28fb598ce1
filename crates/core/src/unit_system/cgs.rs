//! Centimetre-gram-second units
//!
//! Fundamental constants follow CODATA 2014 (consistent with CompOSE). The solar mass
//! comes from the 2021 Astronomer's Almanac solar mass parameter
//! `GM_sun` = 1.32712442099e26 cm^3 s^-2.

use super::{UnitSystem, UnitSystemKind};
use crate::core_types::Constant;
use tracing::debug;

/// Speed of light [cm s^-1]
pub const SPEED_OF_LIGHT: f64 = 2.99792458e10;

/// Gravitational constant [cm^3 g^-1 s^-2]
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67408e-8;

/// Boltzmann constant [erg K^-1]
pub const BOLTZMANN_CONSTANT: f64 = 1.38064852e-16;

/// Solar mass [g]
pub const SOLAR_MASS: f64 = 1.98848e33;

/// One MeV [erg]
pub const MEV_IN_ERG: f64 = 1.6021766208e-6;

impl UnitSystem {
    /// CGS, the reference system: every stored factor is exactly 1
    pub fn cgs() -> Self {
        debug!(system = "CGS", "building unit system");
        UnitSystem {
            kind: UnitSystemKind::Cgs,

            c: Constant::new(SPEED_OF_LIGHT, "cm s^-1"),
            g: Constant::new(GRAVITATIONAL_CONSTANT, "cm^3 g^-1 s^-2"),
            kb: Constant::new(BOLTZMANN_CONSTANT, "erg K^-1"),
            msun: Constant::new(SOLAR_MASS, "g"),
            mev: Constant::new(MEV_IN_ERG, "erg"),

            length: Constant::new(1.0, "cm"),
            time: Constant::new(1.0, "s"),
            density: Constant::new(1.0, "g cm^-3"),
            mass: Constant::new(1.0, "g"),
            energy: Constant::new(1.0, "erg"),
            pressure: Constant::new(1.0, "erg cm^-3"),
            temperature: Constant::new(1.0, "K"),
            chemical_potential: Constant::new(1.0, "erg"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Quantity;

    #[test]
    fn test_reference_factors_are_one() {
        let cgs = UnitSystem::cgs();
        for q in Quantity::ALL {
            if let Some(f) = cgs.stored_factor(q) {
                assert_eq!(f.value(), 1.0, "{q}");
            }
        }
    }

    #[test]
    fn test_base_constants() {
        let cgs = UnitSystem::cgs();
        assert_eq!(cgs.c().value(), 2.99792458e10);
        assert_eq!(cgs.g().value(), 6.67408e-8);
        assert_eq!(cgs.kb().value(), 1.38064852e-16);
        assert_eq!(cgs.msun().value(), 1.98848e33);
        assert_eq!(cgs.mev().value(), 1.6021766208e-6);
        assert_eq!(cgs.g().unit(), "cm^3 g^-1 s^-2");
    }

    #[test]
    fn test_solar_mass_matches_almanac_parameter() {
        let gm_sun = GRAVITATIONAL_CONSTANT * SOLAR_MASS;
        assert!((gm_sun / 1.32712442099e26 - 1.0).abs() < 1e-4);
    }
}
