//! Owned set of the five unit systems
//!
//! Built once by whoever needs it and passed around by reference. Each system is
//! built from its own local CGS reference, so construction order does not matter.

use super::{UnitSystem, UnitSystemKind};
use crate::error::UnitError;
use std::array;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct UnitSystems {
    cgs: UnitSystem,
    si: UnitSystem,
    geometric_kilometer: UnitSystem,
    geometric_solar: UnitSystem,
    nuclear: UnitSystem,
}

impl UnitSystems {
    pub fn new() -> Self {
        let systems = Self {
            cgs: UnitSystem::cgs(),
            si: UnitSystem::si(),
            geometric_kilometer: UnitSystem::geometric_kilometer(),
            geometric_solar: UnitSystem::geometric_solar(),
            nuclear: UnitSystem::nuclear(),
        };
        debug!(count = UnitSystemKind::ALL.len(), "unit systems ready");
        systems
    }

    pub fn get(&self, kind: UnitSystemKind) -> &UnitSystem {
        match kind {
            UnitSystemKind::Cgs => &self.cgs,
            UnitSystemKind::Si => &self.si,
            UnitSystemKind::GeometricKilometer => &self.geometric_kilometer,
            UnitSystemKind::GeometricSolar => &self.geometric_solar,
            UnitSystemKind::Nuclear => &self.nuclear,
        }
    }

    /// Look up a system by name (see [`UnitSystemKind`]'s `FromStr`)
    ///
    /// # Errors
    /// Returns [`UnitError::InvalidEndpoint`] if `name` is not a unit system.
    pub fn by_name(&self, name: &str) -> Result<&UnitSystem, UnitError> {
        Ok(self.get(name.parse()?))
    }

    pub fn cgs(&self) -> &UnitSystem {
        &self.cgs
    }

    pub fn si(&self) -> &UnitSystem {
        &self.si
    }

    pub fn geometric_kilometer(&self) -> &UnitSystem {
        &self.geometric_kilometer
    }

    pub fn geometric_solar(&self) -> &UnitSystem {
        &self.geometric_solar
    }

    pub fn nuclear(&self) -> &UnitSystem {
        &self.nuclear
    }

    /// All systems in [`UnitSystemKind::ALL`] order
    pub fn iter(&self) -> array::IntoIter<&UnitSystem, 5> {
        UnitSystemKind::ALL.map(|kind| self.get(kind)).into_iter()
    }
}

impl<'a> IntoIterator for &'a UnitSystems {
    type Item = &'a UnitSystem;
    type IntoIter = array::IntoIter<&'a UnitSystem, 5>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Default for UnitSystems {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_matches_kind() {
        let systems = UnitSystems::new();
        for kind in UnitSystemKind::ALL {
            assert_eq!(systems.get(kind).kind(), kind);
        }
        assert_eq!(systems.iter().count(), 5);
    }

    #[test]
    fn test_construction_is_repeatable() {
        // Reverse order of construction yields identical systems
        let reversed: Vec<UnitSystem> = UnitSystemKind::ALL
            .into_iter()
            .rev()
            .map(UnitSystemKind::build)
            .collect();
        let systems = UnitSystems::new();
        for us in &reversed {
            assert_eq!(systems.get(us.kind()), us);
        }
        assert_eq!(UnitSystems::new(), UnitSystems::default());
    }

    #[test]
    fn test_by_name() {
        let systems = UnitSystems::new();
        assert_eq!(systems.by_name("nuclear").unwrap().name(), "Nuclear");
        assert!(matches!(
            systems.by_name("Gaussian"),
            Err(UnitError::InvalidEndpoint(_))
        ));
    }
}
