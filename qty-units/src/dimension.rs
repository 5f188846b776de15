//! Dimensional signatures of quantity types.
//!
//! Each quantity type declares its [`Dimension`] as a vector of exponents over the seven SI base
//! dimensions. The signatures are never used to derive units at runtime; they only exist so that
//! the [dimensional relations](crate::relation) can be checked for consistency.

use std::fmt::{self, Display, Formatter};

/// Symbols of the SI base dimensions, in exponent order.
const SYMBOLS: [&str; 7] = ["L", "M", "T", "I", "Θ", "N", "J"];

/// The exponents of a quantity over the SI base dimensions, in the order
/// `[length, mass, time, current, temperature, amount, luminosity]`.
///
/// Plane angle is dimensionless.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dimension {
    pub exponents: [i8; 7],
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 0]);
    pub const LENGTH: Dimension = Dimension::new([1, 0, 0, 0, 0, 0, 0]);
    pub const MASS: Dimension = Dimension::new([0, 1, 0, 0, 0, 0, 0]);
    pub const TIME: Dimension = Dimension::new([0, 0, 1, 0, 0, 0, 0]);
    pub const CURRENT: Dimension = Dimension::new([0, 0, 0, 1, 0, 0, 0]);
    pub const TEMPERATURE: Dimension = Dimension::new([0, 0, 0, 0, 1, 0, 0]);
    pub const AMOUNT: Dimension = Dimension::new([0, 0, 0, 0, 0, 1, 0]);
    pub const LUMINOSITY: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 1]);

    /// Creates a dimension from its exponents.
    pub const fn new(exponents: [i8; 7]) -> Self {
        Self { exponents }
    }

    /// Returns true if every exponent is zero.
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// The dimension of the product of two quantities (exponents are added).
    ///
    /// Returns [`None`] if an exponent overflows.
    pub fn multiply(&self, other: &Dimension) -> Option<Dimension> {
        self.zip_with(other, i8::checked_add)
    }

    /// The dimension of the quotient of two quantities (exponents are subtracted).
    ///
    /// Returns [`None`] if an exponent overflows.
    pub fn divide(&self, other: &Dimension) -> Option<Dimension> {
        self.zip_with(other, i8::checked_sub)
    }

    /// The dimension of a quantity raised to an integer power.
    ///
    /// Returns [`None`] if an exponent overflows.
    pub fn power(&self, exp: i8) -> Option<Dimension> {
        let mut exponents = [0; 7];
        for (out, &e) in exponents.iter_mut().zip(self.exponents.iter()) {
            *out = e.checked_mul(exp)?;
        }
        Some(Dimension::new(exponents))
    }

    /// The dimension of the reciprocal of a quantity.
    pub fn invert(&self) -> Option<Dimension> {
        self.power(-1)
    }

    fn zip_with(&self, other: &Dimension, f: impl Fn(i8, i8) -> Option<i8>) -> Option<Dimension> {
        let mut exponents = [0; 7];
        for (i, exp) in exponents.iter_mut().enumerate() {
            *exp = f(self.exponents[i], other.exponents[i])?;
        }
        Some(Dimension::new(exponents))
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }

        let mut first = true;
        for (symbol, &exp) in SYMBOLS.iter().zip(self.exponents.iter()) {
            if exp == 0 {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;

            write!(f, "{}", symbol)?;
            if exp != 1 {
                write!(f, "^{}", exp)?;
            }
        }

        Ok(())
    }
}
