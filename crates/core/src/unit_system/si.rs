//! International System of Units: metric-prefix rescaling of CGS

use super::{pow3, UnitSystem, UnitSystemKind};
use crate::core_types::Constant;
use tracing::debug;

impl UnitSystem {
    /// SI units (m, kg, s, J, K)
    pub fn si() -> Self {
        debug!(system = "SI", "building unit system");
        let cgs = UnitSystem::cgs();

        UnitSystem {
            kind: UnitSystemKind::Si,

            // cm -> m
            c: Constant::new(cgs.c.value() / 100.0, "m s^-1"),
            // cm^3 g^-1 -> m^3 kg^-1
            g: Constant::new(
                cgs.g.value() * pow3(1.0 / 100.0) / (1.0 / 1000.0),
                "m^3 kg^-1 s^-2",
            ),
            // erg -> J
            kb: Constant::new(cgs.kb.value() * 1e-7, "J K^-1"),
            // g -> kg
            msun: Constant::new(cgs.msun.value() / 1000.0, "kg"),
            mev: Constant::new(cgs.mev.value() * 1e-7, "J"),

            length: Constant::new(0.01, "m"),
            time: Constant::new(1.0, "s"),
            density: Constant::new(1000.0, "kg m^-3"),
            mass: Constant::new(0.001, "kg"),
            energy: Constant::new(1.0e-7, "J"),
            // 1 erg cm^-3 = 0.1 Pa
            pressure: Constant::new(0.1, "Pa"),
            temperature: Constant::new(1.0, "K"),
            chemical_potential: Constant::new(1.0e-7, "J"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_codata_si_values() {
        let si = UnitSystem::si();
        assert_relative_eq!(si.c().value(), 299_792_458.0, max_relative = 1e-15);
        assert_relative_eq!(si.g().value(), 6.67408e-11, max_relative = 1e-14);
        assert_relative_eq!(si.kb().value(), 1.38064852e-23, max_relative = 1e-14);
        assert_relative_eq!(si.msun().value(), 1.98848e30, max_relative = 1e-15);
        assert_relative_eq!(si.mev().value(), 1.6021766208e-13, max_relative = 1e-14);
    }

    #[test]
    fn test_energy_and_chemical_potential_agree() {
        let si = UnitSystem::si();
        assert_eq!(si.energy().value(), si.chemical_potential().value());
        assert_eq!(si.pressure().unit(), "Pa");
    }
}
