//! Unit conversion for numerical relativity and nuclear astrophysics
//!
//! Converts physical quantities between CGS, SI, two geometrized unit families
//! (kilometre and solar-mass based) and nuclear units, and provides the fixed factors
//! that take GR-Athena++ code units to common physical units.
//!
//! ## Layout
//! - [`core_types`]: labelled [`Constant`]s, the closed [`Quantity`] set, the
//!   [`Scalable`] container abstraction and [`ConstantTable`]
//! - [`unit_system`]: [`UnitSystem`] definitions, the conversion protocol, proxies
//!   and the [`UnitSystems`] registry
//! - [`code_conventions`]: per-code conversion tables
//!
//! ```
//! use mc_unit_core::{Quantity, UnitSystems};
//!
//! let systems = UnitSystems::new();
//! let grams = systems.si().convert(systems.cgs(), Quantity::Mass, [1.0_f64, 2.5]);
//! assert_eq!(grams, [1000.0, 2500.0]);
//! ```

// Core types and utilities
pub mod core_types;

pub mod code_conventions;
pub mod error;
pub mod unit_system;

pub use code_conventions::CodeConvention;
pub use core_types::{Constant, ConstantTable, Quantity, Scalable};
pub use error::UnitError;
pub use unit_system::{
    ConversionProxy, Converter, Invocation, UnitSystem, UnitSystemKind, UnitSystems,
};
