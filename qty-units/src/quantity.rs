//! The generic [`Quantity`] value type.
//!
//! A quantity is a magnitude paired with a unit of one quantity type. Every operation that mixes
//! units goes through [`Quantity::base_value`], the magnitude expressed in the base unit of the
//! quantity type.

use approx::{AbsDiffEq, RelativeEq};
use crate::{convert::{QuantityInfo, Unit}, EQUALITY_TOLERANCE};
use std::{
    cmp::Ordering,
    iter::Sum,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How [`Quantity::equals_within`] interprets its tolerance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// The base values may differ by at most the tolerance.
    ///
    /// This is the default, and the comparison used by `==`.
    #[default]
    Absolute,

    /// The base values may differ by at most the tolerance times the larger of their absolute
    /// values.
    Relative,
}

/// A magnitude and the unit it is expressed in.
///
/// Quantities are plain immutable values; every operation returns a new quantity. Two quantities
/// compare equal if their [base values](Quantity::base_value) differ by at most
/// [`EQUALITY_TOLERANCE`], so quantities expressed in different units can be equal:
///
/// ```
/// use qty_units::{Length, LengthUnit};
///
/// assert_eq!(Length::new(1000.0, LengthUnit::Millimeter), Length::new(1.0, LengthUnit::Meter));
/// ```
///
/// Note that tolerance equality is not transitive in general: a chain of values that are each
/// within the tolerance of the next can drift arbitrarily far apart.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantity<U> {
    #[cfg_attr(feature = "serde", serde(rename = "Value"))]
    value: f64,

    #[cfg_attr(feature = "serde", serde(rename = "Unit"))]
    unit: U,
}

/// Builds methods that apply an `f64` method to the magnitude, keeping the unit.
macro_rules! magnitude_fns {
    ($($name:ident; $doc:literal),* $(,)?) => {
        $(
            #[doc = $doc]
            pub fn $name(self) -> Self {
                Self::new(self.value.$name(), self.unit)
            }
        )*
    };
}

impl<U: Unit> Quantity<U> {
    /// Static information about the quantity type.
    pub const INFO: QuantityInfo = U::INFO;

    /// Creates a quantity from a magnitude and its unit.
    pub const fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// Creates a quantity in the base unit of its quantity type.
    pub const fn from_base(base: f64) -> Self {
        Self::new(base, U::BASE)
    }

    /// A quantity of zero, in the base unit.
    pub const fn zero() -> Self {
        Self::from_base(0.0)
    }

    /// The magnitude, in [`Quantity::unit`].
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The unit the magnitude is expressed in.
    pub fn unit(&self) -> U {
        self.unit
    }

    /// Static information about the quantity type.
    pub fn info(&self) -> QuantityInfo {
        U::INFO
    }

    /// The magnitude expressed in the base unit of the quantity type.
    pub fn base_value(&self) -> f64 {
        self.unit.to_base(self.value)
    }

    /// Converts this quantity to the given unit.
    ///
    /// Converting to the unit the quantity is already in returns an identical quantity.
    pub fn to(&self, target: U) -> Self {
        Self::new(self.unit.convert(target, self.value), target)
    }

    /// Converts this quantity to the base unit of its quantity type.
    pub fn to_base(&self) -> Self {
        self.to(U::BASE)
    }

    /// Compares two quantities by base value with a caller-selected tolerance.
    pub fn equals_within(&self, other: &Self, tolerance: f64, comparison: Comparison) -> bool {
        let (a, b) = (self.base_value(), other.base_value());
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        match comparison {
            Comparison::Absolute => diff <= tolerance,
            Comparison::Relative => diff <= tolerance * a.abs().max(b.abs()),
        }
    }

    magnitude_fns! {
        sqrt; "Takes the square root of the magnitude. The unit is kept as is.",
        cbrt; "Takes the cube root of the magnitude. The unit is kept as is.",
        ln; "Takes the natural logarithm of the magnitude. The unit is kept as is.",
        log2; "Takes the base 2 logarithm of the magnitude. The unit is kept as is.",
        log10; "Takes the base 10 logarithm of the magnitude. The unit is kept as is.",
        abs; "Takes the absolute value of the magnitude.",
        floor; "Rounds the magnitude down to the nearest integer.",
        ceil; "Rounds the magnitude up to the nearest integer.",
        trunc; "Rounds the magnitude towards zero.",
        round; "Rounds the magnitude to the nearest integer, rounding half-way cases away from zero.",
    }

    /// Takes the logarithm of the magnitude to an arbitrary base. The unit is kept as is.
    pub fn log(self, base: f64) -> Self {
        Self::new(self.value.log(base), self.unit)
    }

    /// Raises the magnitude to a floating-point power. The unit is kept as is.
    pub fn powf(self, exp: f64) -> Self {
        Self::new(self.value.powf(exp), self.unit)
    }

    /// Raises the magnitude to an integer power. The unit is kept as is.
    pub fn powi(self, exp: i32) -> Self {
        Self::new(self.value.powi(exp), self.unit)
    }

    /// Rounds the magnitude to the given number of fractional digits, rounding half-way cases away
    /// from zero. A negative number of digits rounds to the left of the decimal point.
    ///
    /// If the magnitude cannot be scaled by `10^digits` without overflowing or underflowing, it is
    /// returned unchanged.
    pub fn round_to(self, digits: i32) -> Self {
        let scale = 10f64.powi(digits);
        let scaled = self.value * scale;
        if scale == 0.0 || !scale.is_finite() || !scaled.is_finite() {
            return self;
        }
        Self::new(scaled.round() / scale, self.unit)
    }

    /// Returns true if the magnitude is NaN.
    pub fn is_nan(&self) -> bool {
        self.value.is_nan()
    }

    /// Returns true if the magnitude is positive or negative infinity.
    pub fn is_infinite(&self) -> bool {
        self.value.is_infinite()
    }

    /// Returns true if the magnitude is positive infinity.
    pub fn is_positive_infinity(&self) -> bool {
        self.value == f64::INFINITY
    }

    /// Returns true if the magnitude is negative infinity.
    pub fn is_negative_infinity(&self) -> bool {
        self.value == f64::NEG_INFINITY
    }

    /// Returns true if the magnitude is neither infinite nor NaN.
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }

    /// The sign of the magnitude: `1`, `-1`, or `0` for either zero. Returns [`None`] if the
    /// magnitude is NaN.
    pub fn sign(&self) -> Option<i32> {
        if self.value.is_nan() {
            None
        } else if self.value > 0.0 {
            Some(1)
        } else if self.value < 0.0 {
            Some(-1)
        } else {
            Some(0)
        }
    }
}

impl<U: Unit> Default for Quantity<U> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<U: Unit> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.equals_within(other, EQUALITY_TOLERANCE, Comparison::Absolute)
    }
}

impl<U: Unit> PartialOrd for Quantity<U> {
    /// Orders quantities by base value. Quantities that compare equal with `==` are ordered as
    /// [`Ordering::Equal`].
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.base_value().partial_cmp(&other.base_value())
        }
    }
}

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;

    /// Adds two quantities. If both are in the same unit, the magnitudes are added and the unit is
    /// kept; otherwise the result is in the base unit.
    fn add(self, rhs: Self) -> Self {
        if self.unit == rhs.unit {
            Self::new(self.value + rhs.value, self.unit)
        } else {
            Self::from_base(self.base_value() + rhs.base_value())
        }
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;

    /// Subtracts two quantities. If both are in the same unit, the magnitudes are subtracted and
    /// the unit is kept; otherwise the result is in the base unit.
    fn sub(self, rhs: Self) -> Self {
        if self.unit == rhs.unit {
            Self::new(self.value - rhs.value, self.unit)
        } else {
            Self::from_base(self.base_value() - rhs.base_value())
        }
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value, self.unit)
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.unit)
    }
}

impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;

    fn mul(self, rhs: Quantity<U>) -> Quantity<U> {
        Quantity::new(self * rhs.value, rhs.unit)
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs, self.unit)
    }
}

impl<U: Unit> Div for Quantity<U> {
    type Output = f64;

    /// The dimensionless ratio of two quantities of the same type.
    fn div(self, rhs: Self) -> f64 {
        self.base_value() / rhs.base_value()
    }
}

impl<U: Unit> Rem<f64> for Quantity<U> {
    type Output = Self;

    /// The remainder of the magnitude divided by a scalar. The unit is kept, so the result depends
    /// on the unit the quantity is expressed in.
    fn rem(self, rhs: f64) -> Self {
        Self::new(self.value % rhs, self.unit)
    }
}

impl<U: Unit> AddAssign for Quantity<U> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<U: Unit> SubAssign for Quantity<U> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<U: Unit> MulAssign<f64> for Quantity<U> {
    fn mul_assign(&mut self, rhs: f64) {
        self.value *= rhs;
    }
}

impl<U: Unit> DivAssign<f64> for Quantity<U> {
    fn div_assign(&mut self, rhs: f64) {
        self.value /= rhs;
    }
}

impl<U: Unit> RemAssign<f64> for Quantity<U> {
    fn rem_assign(&mut self, rhs: f64) {
        self.value %= rhs;
    }
}

impl<U: Unit> Sum for Quantity<U> {
    /// Adds up the quantities with `+`. The sum of an empty iterator is zero in the base unit.
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Add::add).unwrap_or_default()
    }
}

impl<'a, U: Unit> Sum<&'a Quantity<U>> for Quantity<U> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<U: Unit> AbsDiffEq for Quantity<U> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EQUALITY_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.base_value().abs_diff_eq(&other.base_value(), epsilon)
    }
}

impl<U: Unit> RelativeEq for Quantity<U> {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.base_value().relative_eq(&other.base_value(), epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use crate::unit::*;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn cross_unit_equality() {
        assert_eq!(Length::new(1000.0, LengthUnit::Millimeter), Length::new(1.0, LengthUnit::Meter));
        assert_eq!(Mass::new(1.0, MassUnit::Kilogram), Mass::new(1000.0, MassUnit::Gram));
        assert_ne!(Length::new(1.0, LengthUnit::Meter), Length::new(1.0, LengthUnit::Foot));
    }

    #[test]
    fn nan_is_never_equal() {
        let nan = Length::new(f64::NAN, LengthUnit::Meter);
        assert_ne!(nan, nan);
        assert_eq!(nan.partial_cmp(&nan), None);
    }

    #[test]
    fn self_conversion_is_exact() {
        let q = Temperature::new(98.6, TemperatureUnit::DegreeFahrenheit);
        let same = q.to(TemperatureUnit::DegreeFahrenheit);
        assert_eq!(same.value(), 98.6);
        assert_eq!(same.unit(), TemperatureUnit::DegreeFahrenheit);
    }

    #[test]
    fn convert_and_back() {
        let q = Speed::new(100.0, SpeedUnit::KilometerPerHour);
        let mph = q.to(SpeedUnit::MilePerHour);
        assert_relative_eq!(mph.value(), 62.13711922373339, max_relative = 1e-12);
        assert_relative_eq!(mph.to(SpeedUnit::KilometerPerHour).value(), 100.0, max_relative = 1e-12);
    }

    #[test]
    fn temperature_reference_points() {
        let freezing_c = Temperature::new(0.0, TemperatureUnit::DegreeCelsius);
        let freezing_f = Temperature::new(32.0, TemperatureUnit::DegreeFahrenheit);
        assert_eq!(freezing_c.base_value(), 273.15);
        assert_eq!(freezing_f.base_value(), 273.15);
        assert_eq!(freezing_c, freezing_f);

        let body = Temperature::new(37.0, TemperatureUnit::DegreeCelsius);
        assert_relative_eq!(body.to(TemperatureUnit::DegreeFahrenheit).value(), 98.6, max_relative = 1e-12);
    }

    #[test]
    fn add_same_unit_keeps_unit() {
        let sum = Length::new(1.0, LengthUnit::Meter) + Length::new(1.0, LengthUnit::Meter);
        assert_eq!(sum.unit(), LengthUnit::Meter);
        assert_eq!(sum.value(), 2.0);

        let sum = Length::new(3.0, LengthUnit::Foot) + Length::new(1.0, LengthUnit::Foot);
        assert_eq!(sum.unit(), LengthUnit::Foot);
        assert_eq!(sum.value(), 4.0);
    }

    #[test]
    fn add_mixed_units_uses_base() {
        let sum = Length::new(1.0, LengthUnit::Meter) + Length::new(100.0, LengthUnit::Centimeter);
        assert_eq!(sum, Length::new(2.0, LengthUnit::Meter));
        assert_eq!(sum.unit(), LengthUnit::Meter);

        let diff = Length::new(1.0, LengthUnit::Kilometer) - Length::new(1.0, LengthUnit::Meter);
        assert_eq!(diff.unit(), LengthUnit::Meter);
        assert_eq!(diff.value(), 999.0);
    }

    #[test]
    fn add_temperatures_through_base() {
        let sum = Temperature::new(0.0, TemperatureUnit::DegreeCelsius)
            + Temperature::new(0.0, TemperatureUnit::Kelvin);
        assert_eq!(sum.unit(), TemperatureUnit::Kelvin);
        assert_eq!(sum.value(), 273.15);
    }

    #[test]
    fn scalar_arithmetic() {
        let q = Mass::new(4.0, MassUnit::Pound);
        assert_eq!((q * 2.0).value(), 8.0);
        assert_eq!((2.0 * q).unit(), MassUnit::Pound);
        assert_eq!((q / 8.0).value(), 0.5);
        assert_eq!((-q).value(), -4.0);
        assert_eq!((q % 3.0).value(), 1.0);

        let mut q = q;
        q *= 3.0;
        q /= 4.0;
        q %= 2.0;
        assert_eq!(q.value(), 1.0);
        assert_eq!(q.unit(), MassUnit::Pound);
    }

    #[test]
    fn assign_operators() {
        let mut total = Length::new(1.0, LengthUnit::Meter);
        total += Length::new(50.0, LengthUnit::Centimeter);
        total -= Length::new(0.25, LengthUnit::Meter);
        assert_eq!(total, Length::new(1.25, LengthUnit::Meter));
    }

    #[test]
    fn ratio_is_dimensionless() {
        let ratio = Length::new(1.0, LengthUnit::Kilometer) / Length::new(250.0, LengthUnit::Meter);
        assert_eq!(ratio, 4.0);
    }

    #[test]
    fn ordering() {
        let inch = Length::new(1.0, LengthUnit::Inch);
        let centimeter = Length::new(1.0, LengthUnit::Centimeter);
        assert!(inch > centimeter);
        assert!(centimeter <= inch);
        assert_eq!(
            Length::new(1000.0, LengthUnit::Millimeter).partial_cmp(&Length::new(1.0, LengthUnit::Meter)),
            Some(Ordering::Equal),
        );
    }

    #[test]
    fn sum() {
        let total: Time = [
            Time::new(30.0, TimeUnit::Minute),
            Time::new(30.0, TimeUnit::Minute),
            Time::new(1.0, TimeUnit::Hour),
        ].into_iter().sum();
        assert_eq!(total, Time::new(2.0, TimeUnit::Hour));

        let empty: Time = std::iter::empty::<Time>().sum();
        assert_eq!(empty.unit(), TimeUnit::Second);
        assert_eq!(empty.value(), 0.0);
    }

    #[test]
    fn math_keeps_unit() {
        let q = Area::new(16.0, AreaUnit::SquareFoot);
        assert_eq!(q.sqrt().value(), 4.0);
        assert_eq!(q.sqrt().unit(), AreaUnit::SquareFoot);
        assert_eq!(q.log2().value(), 4.0);
        assert_relative_eq!(q.log(4.0).value(), 2.0);
        assert_eq!(q.powi(2).value(), 256.0);
        assert_relative_eq!(q.powf(0.5).value(), 4.0);
        assert_relative_eq!(Area::new(27.0, AreaUnit::Acre).cbrt().value(), 3.0);
        assert_relative_eq!(Area::new(1000.0, AreaUnit::Hectare).log10().value(), 3.0);
        assert_relative_eq!(Area::new(1.0, AreaUnit::Acre).ln().value(), 0.0);
    }

    #[test]
    fn rounding() {
        let q = Length::new(-2.5, LengthUnit::Meter);
        assert_eq!(q.round().value(), -3.0);
        assert_eq!(q.floor().value(), -3.0);
        assert_eq!(q.ceil().value(), -2.0);
        assert_eq!(q.trunc().value(), -2.0);
        assert_eq!(q.abs().value(), 2.5);

        assert_eq!(Length::new(3.14159, LengthUnit::Meter).round_to(2).value(), 3.14);
        assert_relative_eq!(Length::new(1234.0, LengthUnit::Meter).round_to(-2).value(), 1200.0);
    }

    #[test]
    fn round_to_out_of_range_digits() {
        let huge = Length::new(1e300, LengthUnit::Meter);
        assert_eq!(huge.round_to(17).value(), 1e300);

        let q = Length::new(1.5, LengthUnit::Meter);
        assert_eq!(q.round_to(400).value(), 1.5);
        assert_eq!(q.round_to(-400).value(), 1.5);
        assert_eq!(q.round_to(400).unit(), LengthUnit::Meter);

        let nan = Length::new(f64::NAN, LengthUnit::Meter);
        assert!(nan.round_to(2).is_nan());
    }

    #[test]
    fn infinite_quantities() {
        let inf = Length::new(f64::INFINITY, LengthUnit::Meter);
        let neg = Length::new(f64::NEG_INFINITY, LengthUnit::Meter);

        assert_eq!(inf, inf);
        assert_eq!(inf.partial_cmp(&inf), Some(Ordering::Equal));
        assert_eq!(inf.to(LengthUnit::Meter), inf);
        assert_eq!(inf.to(LengthUnit::Foot), inf);

        assert_ne!(inf, neg);
        assert_eq!(neg.partial_cmp(&inf), Some(Ordering::Less));
        assert_ne!(inf, Length::new(1e308, LengthUnit::Meter));
        assert!(inf.equals_within(&inf, 0.0, Comparison::Relative));
    }

    #[test]
    fn predicates() {
        let nan = Force::new(f64::NAN, ForceUnit::Newton);
        let pos = Force::new(f64::INFINITY, ForceUnit::Newton);
        let neg = Force::new(f64::NEG_INFINITY, ForceUnit::Newton);
        let finite = Force::new(-3.0, ForceUnit::Newton);

        assert!(nan.is_nan() && !nan.is_finite());
        assert!(pos.is_infinite() && pos.is_positive_infinity() && !pos.is_negative_infinity());
        assert!(neg.is_infinite() && neg.is_negative_infinity());
        assert!(finite.is_finite());

        assert_eq!(nan.sign(), None);
        assert_eq!(pos.sign(), Some(1));
        assert_eq!(finite.sign(), Some(-1));
        assert_eq!(Force::zero().sign(), Some(0));
        assert_eq!(Force::new(-0.0, ForceUnit::Newton).sign(), Some(0));
    }

    #[test]
    fn special_values_propagate() {
        let nan = Pressure::new(f64::NAN, PressureUnit::Bar);
        assert!(nan.to(PressureUnit::PoundForcePerSquareInch).is_nan());

        let inf = Pressure::new(f64::NEG_INFINITY, PressureUnit::Bar);
        assert!(inf.to(PressureUnit::Pascal).is_negative_infinity());
    }

    #[test]
    fn explicit_tolerance() {
        let a = Energy::new(1.0, EnergyUnit::Megajoule);
        let b = Energy::new(1_000_001.0, EnergyUnit::Joule);
        assert_ne!(a, b);
        assert!(a.equals_within(&b, 1.0, Comparison::Absolute));
        assert!(a.equals_within(&b, 1e-6, Comparison::Relative));
        assert!(!a.equals_within(&b, 1e-7, Comparison::Relative));
    }

    #[test]
    fn approx_traits() {
        let a = Length::new(1.0, LengthUnit::Mile);
        let b = Length::new(5280.0, LengthUnit::Foot);
        assert_relative_eq!(a, b);
        assert_abs_diff_eq!(a, Length::new(1609.344, LengthUnit::Meter), epsilon = 1e-9);
    }

    #[test]
    fn defaults() {
        let q = Angle::default();
        assert_eq!(q.unit(), AngleUnit::Radian);
        assert_eq!(q.value(), 0.0);
        assert_eq!(q.info().name, "Angle");
        assert_eq!(Angle::from_base(std::f64::consts::PI), Angle::new(180.0, AngleUnit::Degree));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_unit_names() {
        let q = MassFlowRate::new(2.5, MassFlowRateUnit::PoundPerHour);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"Value":2.5,"Unit":"PoundPerHour"}"#);

        let back: MassFlowRate = serde_json::from_str(&json).unwrap();
        assert_eq!(back.unit(), MassFlowRateUnit::PoundPerHour);
        assert_eq!(back.value(), 2.5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_rejects_unknown_units() {
        let result = serde_json::from_str::<Length>(r#"{"Value":1.0,"Unit":"Furlong"}"#);
        assert!(result.is_err());
    }
}
