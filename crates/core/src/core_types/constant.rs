//! Labelled constants that take part in ordinary arithmetic
//!
//! A [`Constant`] is an immutable `(value, unit)` pair. The unit is a human-readable
//! label only: it is never parsed, validated or composed. Arithmetic always yields a
//! new `Constant` and the label is carried through by a fixed rule:
//!
//! - `Constant op Constant`: the left operand's label wins, the right one is dropped.
//! - `Constant op f64` and `f64 op Constant`: the `Constant`'s own label is kept,
//!   whichever side it is on.
//!
//! So `1.0 - c` and `2.0 / c` are labelled like `c`, even though the value has the
//! reciprocal or shifted meaning. Keeping the label meaningful is the caller's job.
//!
//! # Usage
//! ```
//! use mc_unit_core::core_types::Constant;
//!
//! let a = Constant::new(2.0, "u");
//! let b = Constant::new(3.0, "v");
//! assert_eq!((a + b).value(), 5.0);
//! assert_eq!((a + b).unit(), "u");
//! assert_eq!((10.0_f64 * a).unit(), "u");
//! ```

use serde::Serialize;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Numeric value tagged with a unit label
///
/// Labels are `&'static str`: every label is fixed when the unit system or table
/// is written down, never assembled at runtime. That keeps `Constant` `Copy` and
/// lets [`Constant::new`] build constants in `const` items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Constant {
    value: f64,
    unit: &'static str,
}

impl Constant {
    /// Label used for dimensionless constants (c = G = kb = 1 systems)
    pub const DIMENSIONLESS: &'static str = "-";

    /// Create a new labelled constant
    #[inline]
    #[must_use]
    pub const fn new(value: f64, unit: &'static str) -> Self {
        Constant { value, unit }
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Get the unit label
    #[inline]
    #[must_use]
    pub const fn unit(self) -> &'static str {
        self.unit
    }

    /// Unary plus (identity on the value)
    #[inline]
    #[must_use]
    pub fn pos(self) -> Self {
        Constant::new(self.value, self.unit)
    }

    /// Absolute value
    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        Constant::new(self.value.abs(), self.unit)
    }

    /// Raise to a floating point power
    #[inline]
    #[must_use]
    pub fn powf(self, exponent: f64) -> Self {
        Constant::new(self.value.powf(exponent), self.unit)
    }

    /// Raise to an integer power
    #[inline]
    #[must_use]
    pub fn powi(self, exponent: i32) -> Self {
        Constant::new(self.value.powi(exponent), self.unit)
    }
}

impl Neg for Constant {
    type Output = Constant;
    fn neg(self) -> Constant {
        Constant::new(-self.value, self.unit)
    }
}

// Each operator gets three impls: Constant ∘ Constant (left label),
// Constant ∘ f64 and f64 ∘ Constant (the Constant's label).
macro_rules! impl_constant_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Constant {
            type Output = Constant;
            fn $method(self, rhs: Constant) -> Constant {
                Constant::new(self.value $op rhs.value, self.unit)
            }
        }

        impl $trait<f64> for Constant {
            type Output = Constant;
            fn $method(self, rhs: f64) -> Constant {
                Constant::new(self.value $op rhs, self.unit)
            }
        }

        impl $trait<Constant> for f64 {
            type Output = Constant;
            fn $method(self, rhs: Constant) -> Constant {
                Constant::new(self $op rhs.value, rhs.unit)
            }
        }
    };
}

impl_constant_op!(Add, add, +);
impl_constant_op!(Sub, sub, -);
impl_constant_op!(Mul, mul, *);
impl_constant_op!(Div, div, /);

impl PartialEq<f64> for Constant {
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl From<Constant> for f64 {
    fn from(c: Constant) -> f64 {
        c.value
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:e} [{}]", self.value, self.unit)
    }
}
