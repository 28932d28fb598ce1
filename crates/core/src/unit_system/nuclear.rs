//! Nuclear units: c = kb = 1, energies in MeV, lengths in femtometres

use super::{pow2, pow4, UnitSystem, UnitSystemKind};
use crate::core_types::Constant;
use tracing::debug;

impl UnitSystem {
    /// Nuclear units (MeV, fm)
    pub fn nuclear() -> Self {
        debug!(system = "Nuclear", "building unit system");
        let cgs = UnitSystem::cgs();
        let c = cgs.c.value();
        let kb = cgs.kb.value();
        let mev = cgs.mev.value();

        UnitSystem {
            kind: UnitSystemKind::Nuclear,

            c: Constant::new(1.0, Constant::DIMENSIONLESS),
            g: Constant::new(cgs.g.value() * mev / pow4(c) * 1e13, "fm"),
            kb: Constant::new(1.0, Constant::DIMENSIONLESS),
            msun: Constant::new(cgs.msun.value() * pow2(c) / mev, "MeV"),
            mev: Constant::new(1.0, "MeV"),

            length: Constant::new(1e13, "fm"),
            time: Constant::new(c * 1e13, "fm"),
            density: Constant::new(1e-39, "fm^-3"),
            mass: Constant::new(pow2(c) / mev, "MeV"),
            energy: Constant::new(1.0 / mev, "MeV"),
            pressure: Constant::new(1e-39 / mev, "MeV fm^-3"),
            temperature: Constant::new(kb / mev, "MeV"),
            chemical_potential: Constant::new(kb / mev, "MeV"),
        }
    }
}
