//! Fixed conversions out of a simulation code's internal units
//!
//! A [`CodeConvention`] is a named [`ConstantTable`] mapping descriptive output labels
//! such as `"rho [g cm^-3]"` to the factor that turns one code unit into that
//! physical unit. Factors are composed from unit-system ratios and prefix scalings.
//!
//! # Usage
//! ```
//! use mc_unit_core::code_conventions::CodeConvention;
//! use mc_unit_core::unit_system::UnitSystems;
//!
//! let gra = CodeConvention::gr_athena(&UnitSystems::new());
//! let rho_cgs = 1e-12_f64 * gra["rho [g cm^-3]"];
//! assert!(rho_cgs.value() > 0.0);
//!
//! for (label, factor) in gra.iter() {
//!     println!("{label}: {factor}");
//! }
//! ```

use crate::core_types::{Constant, ConstantTable, Quantity, Scalable};
use crate::error::UnitError;
use crate::unit_system::UnitSystems;
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;
use std::ops::Deref;
use tracing::debug;

/// Conversion table from one code's units into common physical units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeConvention {
    code: &'static str,
    table: ConstantTable,
}

impl CodeConvention {
    /// GR-Athena++ code units (geometric, solar-mass based) to physical units
    ///
    /// Temperatures in GR-Athena++ are always carried in MeV.
    pub fn gr_athena(systems: &UnitSystems) -> Self {
        let cgs = systems.cgs();
        let si = systems.si();
        let nuclear = systems.nuclear();
        let gs = systems.geometric_solar();

        let mass = gs.ratio(cgs, Quantity::Mass);
        let density = gs.ratio(cgs, Quantity::Density);
        let time = gs.ratio(cgs, Quantity::Time);
        let length = gs.ratio(cgs, Quantity::Length);
        let energy = gs.ratio(cgs, Quantity::Energy);

        let mut table = ConstantTable::new();
        table.insert("mass [g]", Constant::new(mass, "gra_cu -> g"));
        table.insert(
            "rho [g cm^-3]",
            Constant::new(density * mass, "gra_cu -> g cm^-3"),
        );
        table.insert("n [cm^-3]", Constant::new(density, "gra_cu -> cm^-3"));
        table.insert("t [ms]", Constant::new(1000.0 * time, "gra_cu -> ms"));
        table.insert("T [MeV]", Constant::new(1.0, "gra_cu -> MeV"));
        table.insert(
            "T [GK]",
            Constant::new(nuclear.ratio(si, Quantity::Temperature) / 1e9, "gra_cu -> GK"),
        );
        table.insert(
            "u [erg cm^-3]",
            Constant::new(energy / length.powf(3.0), "gra_cu -> erg cm^-3"),
        );
        table.insert(
            "l [km]",
            Constant::new(length / 100.0 / 1000.0, "gra_cu -> km"),
        );
        table.insert(
            "E [MeV]",
            Constant::new(gs.ratio(nuclear, Quantity::Energy), "gra_cu -> MeV"),
        );
        table.insert(
            "L [erg s^-1]",
            Constant::new(energy / time, "gra_cu -> erg s^-1"),
        );
        // Gaussian field unit: sqrt(4 pi) * sqrt(M / L) / T
        table.insert(
            "B [G]",
            Constant::new(
                (4.0 * PI).sqrt() * (mass / length).sqrt() / time,
                "gra_cu -> G = cm^-1/2 g^1/2 s * (4 * pi)^1/2",
            ),
        );

        debug!(code = "GR-Athena++", entries = table.len(), "code convention built");
        Self {
            code: "GR-Athena++",
            table,
        }
    }

    /// Name of the simulation code
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Look up a conversion by label
    ///
    /// # Errors
    /// Returns [`UnitError::UnknownEntry`] if the table has no such label.
    pub fn factor(&self, label: &str) -> Result<Constant, UnitError> {
        self.table
            .get(label)
            .ok_or_else(|| UnitError::UnknownEntry(label.to_string()))
    }

    /// Convert `value` from code units into the physical unit named by `label`
    ///
    /// # Errors
    /// Returns [`UnitError::UnknownEntry`] if the table has no such label.
    pub fn to_physical<V: Scalable>(
        &self,
        label: &str,
        value: V,
    ) -> Result<V::Output, UnitError> {
        Ok(value.scale(self.factor(label)?.value()))
    }
}

impl Deref for CodeConvention {
    type Target = ConstantTable;
    fn deref(&self) -> &ConstantTable {
        &self.table
    }
}

impl fmt::Display for CodeConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} unit conversions:", self.code)?;
        write!(f, "{}", self.table)
    }
}
