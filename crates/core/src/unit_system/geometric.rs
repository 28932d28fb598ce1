//! Geometrized units (G = c = kb = 1)
//!
//! Mass and energy become lengths through GM/c^2 and GE/c^4, time through ct. The
//! kilometre flavour expresses everything as powers of km, the solar flavour as
//! powers of `GM_sun/c^2`. Temperatures and chemical potentials are given in MeV.

use super::{pow2, pow3, pow4, UnitSystem, UnitSystemKind};
use crate::core_types::Constant;
use tracing::debug;

impl UnitSystem {
    /// Geometric units with lengths in kilometres
    pub fn geometric_kilometer() -> Self {
        debug!(system = "GeometricKilometer", "building unit system");
        let cgs = UnitSystem::cgs();
        let c = cgs.c.value();
        let g = cgs.g.value();
        let kb = cgs.kb.value();
        let mev = cgs.mev.value();

        UnitSystem {
            kind: UnitSystemKind::GeometricKilometer,

            c: Constant::new(1.0, Constant::DIMENSIONLESS),
            g: Constant::new(1.0, Constant::DIMENSIONLESS),
            kb: Constant::new(1.0, Constant::DIMENSIONLESS),
            msun: Constant::new(cgs.msun.value() * g / pow2(c) * 1e-5, "km"),
            mev: Constant::new(mev * g / pow4(c) * 1e-5, "km"),

            length: Constant::new(1e-5, "km"),
            time: Constant::new(c * 1e-5, "km"),
            density: Constant::new(1e15, "km^-3"),
            mass: Constant::new(g / pow2(c) * 1e-5, "km"),
            energy: Constant::new(g / pow4(c) * 1e-5, "km"),
            pressure: Constant::new(g / pow4(c) * 1e10, "km^-2"),
            temperature: Constant::new(kb * g / pow4(c) * 1e-5, "km"),
            chemical_potential: Constant::new(kb / mev, "MeV"),
        }
    }

    /// Geometric units with lengths in solar masses
    pub fn geometric_solar() -> Self {
        debug!(system = "GeometricSolar", "building unit system");
        let cgs = UnitSystem::cgs();
        let c = cgs.c.value();
        let g = cgs.g.value();
        let kb = cgs.kb.value();
        let msun = cgs.msun.value();
        let mev = cgs.mev.value();

        UnitSystem {
            kind: UnitSystemKind::GeometricSolar,

            c: Constant::new(1.0, Constant::DIMENSIONLESS),
            g: Constant::new(1.0, Constant::DIMENSIONLESS),
            kb: Constant::new(1.0, Constant::DIMENSIONLESS),
            msun: Constant::new(1.0, Constant::DIMENSIONLESS),
            mev: Constant::new(mev / pow2(c), "Msun"),

            length: Constant::new(pow2(c) / (g * msun), "Msun"),
            time: Constant::new(pow3(c) / (g * msun), "Msun"),
            density: Constant::new(pow3((g * msun) / pow2(c)), "Msun^-3"),
            mass: Constant::new(1.0 / msun, "Msun"),
            energy: Constant::new(1.0 / (msun * pow2(c)), "Msun"),
            pressure: Constant::new(pow3(g / pow2(c)) * pow2(msun / c), "Msun^-2"),
            temperature: Constant::new(kb / mev, "MeV"),
            chemical_potential: Constant::new(kb / mev, "MeV"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Quantity;
    use approx::assert_relative_eq;

    #[test]
    fn test_geometrized_constants_are_unity() {
        for us in [UnitSystem::geometric_kilometer(), UnitSystem::geometric_solar()] {
            assert_eq!(us.c().value(), 1.0);
            assert_eq!(us.g().value(), 1.0);
            assert_eq!(us.kb().value(), 1.0);
            assert_eq!(us.c().unit(), Constant::DIMENSIONLESS);
            assert_eq!(us.kb().unit(), Constant::DIMENSIONLESS);
        }
    }

    #[test]
    fn test_solar_mass_is_about_1477_m() {
        let gk = UnitSystem::geometric_kilometer();
        assert_relative_eq!(gk.msun().value(), 1.4766, max_relative = 1e-4);
    }

    #[test]
    fn test_one_solar_mass_converts_to_one() {
        let cgs = UnitSystem::cgs();
        let gs = UnitSystem::geometric_solar();
        let m = cgs.convert(&gs, Quantity::Mass, cgs.msun().value());
        assert_relative_eq!(m, 1.0, max_relative = 1e-15);
    }

    #[test]
    fn test_solar_length_unit_in_km() {
        let gs = UnitSystem::geometric_solar();
        let gk = UnitSystem::geometric_kilometer();
        // one GeometricSolar length unit is GM_sun/c^2 ~ 1.4766 km
        let km = gs.convert(&gk, Quantity::Length, 1.0_f64);
        assert_relative_eq!(km, gk.msun().value(), max_relative = 1e-12);
    }
}
