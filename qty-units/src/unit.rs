//! Unit enumerations of every shipped quantity type.
//!
//! Each quantity type is declared with one invocation of the `quantity!` macro, which turns a
//! table of `Variant: "symbol" => rule` entries into a unit enum implementing [`Unit`], plus a
//! type alias for the corresponding [`Quantity`]. A rule is either a plain `f64` factor (a
//! [`Rule::Linear`] rule) or an explicit [`Rule`].

use crate::{
    convert::{QuantityInfo, Rule, Unit, UnitDescriptor},
    dimension::Dimension,
    prefix::*,
    quantity::Quantity,
};
use once_cell::sync::Lazy;
use std::{fmt::{self, Display, Formatter}, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error returned if a string is not the symbol of any unit of a quantity type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a valid {quantity} unit: `{symbol}`")]
pub struct InvalidUnit {
    /// The quantity type that was searched.
    pub quantity: &'static str,

    /// The unrecognized symbol.
    pub symbol: String,
}

/// Declares a unit enum and its [`Quantity`] alias from a table of units.
macro_rules! quantity {
    (
        $doc:literal,
        $quantity:ident, $enum_name:ident, $base_variant:ident: $base_symbol:literal, $dimension:expr,
        $(
            $($variant_doc:literal,)? $variant:ident: $symbol:literal => $rule:expr
        ),*
        $(,)?
    ) => {
        #[doc = concat!("A unit of ", stringify!($quantity), ".")]
        ///
        /// The listed symbol is the one used to format and parse the unit. The conversions are
        /// listed in terms of the [base unit]. The base unit for
        #[doc = concat!("[`", stringify!($enum_name), "`] is [`", stringify!($enum_name), "::", stringify!($base_variant), "`].")]
        ///
        /// [base unit]: Unit::BASE
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $enum_name {
            $(
                $(
                    #[doc = $variant_doc]
                    ///
                )?
                #[doc = concat!("- Symbol: `", $symbol, "`")]
                ///
                #[doc = concat!("- Conversion to `", $base_symbol, "`: `", stringify!($rule), "`")]
                $variant,
            )*
        }

        impl Unit for $enum_name {
            const BASE: Self = $enum_name::$base_variant;

            const ALL: &'static [Self] = &[$($enum_name::$variant),*];

            const INFO: QuantityInfo = QuantityInfo {
                name: stringify!($quantity),
                base_symbol: $base_symbol,
                dimension: $dimension,
            };

            fn ordinal(self) -> usize {
                self as usize
            }

            fn rule(self) -> Rule {
                match self {
                    $(
                        $enum_name::$variant => Rule::from($rule),
                    )*
                }
            }

            fn symbol(self) -> &'static str {
                match self {
                    $(
                        $enum_name::$variant => $symbol,
                    )*
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $(
                        $enum_name::$variant => stringify!($variant),
                    )*
                }
            }

            fn descriptor() -> &'static UnitDescriptor<Self> {
                static DESCRIPTOR: Lazy<UnitDescriptor<$enum_name>> = Lazy::new(UnitDescriptor::build);
                &DESCRIPTOR
            }
        }

        impl Display for $enum_name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.symbol())
            }
        }

        impl FromStr for $enum_name {
            type Err = InvalidUnit;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::from_symbol(value).ok_or_else(|| InvalidUnit {
                    quantity: stringify!($quantity),
                    symbol: value.to_owned(),
                })
            }
        }

        impl TryFrom<&str> for $enum_name {
            type Error = InvalidUnit;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        #[doc = $doc]
        pub type $quantity = Quantity<$enum_name>;
    };
}

quantity!("A distance.",
    Length, LengthUnit, Meter: "m", Dimension::new([1, 0, 0, 0, 0, 0, 0]),
    Kilometer: "km" => KILO,
    Meter: "m" => 1.0,
    Decimeter: "dm" => DECI,
    Centimeter: "cm" => CENTI,
    Millimeter: "mm" => MILLI,
    Micrometer: "µm" => MICRO,
    Nanometer: "nm" => NANO,
    Mile: "mi" => MILE,
    Yard: "yd" => YARD,
    Foot: "ft" => FOOT,
    Inch: "in" => INCH,
    NauticalMile: "NM" => NAUTICAL_MILE,
    AstronomicalUnit: "au" => ASTRONOMICAL_UNIT,
    "A Julian year (365.25 days) of light travel.", LightYear: "ly" => LIGHT_YEAR,
);

quantity!("An amount of matter.",
    Mass, MassUnit, Kilogram: "kg", Dimension::new([0, 1, 0, 0, 0, 0, 0]),
    "A metric tonne (1000 kilograms).", Tonne: "t" => KILO,
    Kilogram: "kg" => 1.0,
    Gram: "g" => MILLI,
    Milligram: "mg" => MICRO,
    Microgram: "µg" => NANO,
    "A US (short) ton (2000 pounds).", ShortTon: "t (short)" => SHORT_TON,
    "An imperial (long) ton (2240 pounds).", LongTon: "long tn" => LONG_TON,
    Pound: "lb" => POUND,
    Ounce: "oz" => OUNCE,
    Stone: "st" => STONE,
);

quantity!("A duration.",
    Time, TimeUnit, Second: "s", Dimension::new([0, 0, 1, 0, 0, 0, 0]),
    "A calendar year of 365 days.", Year: "yr" => YEAR,
    Week: "wk" => WEEK,
    Day: "d" => DAY,
    Hour: "h" => HOUR,
    Minute: "min" => MINUTE,
    Second: "s" => 1.0,
    Millisecond: "ms" => MILLI,
    Microsecond: "µs" => MICRO,
    Nanosecond: "ns" => NANO,
);

quantity!("A two-dimensional extent.",
    Area, AreaUnit, SquareMeter: "m²", Dimension::new([2, 0, 0, 0, 0, 0, 0]),
    SquareKilometer: "km²" => KILO * KILO,
    "10,000 square meters.", Hectare: "ha" => 1e4,
    SquareMeter: "m²" => 1.0,
    SquareDecimeter: "dm²" => DECI * DECI,
    SquareCentimeter: "cm²" => CENTI * CENTI,
    SquareMillimeter: "mm²" => MILLI * MILLI,
    SquareMile: "mi²" => MILE * MILE,
    "An international acre (43,560 square feet).", Acre: "ac" => 43560.0 * FOOT * FOOT,
    SquareYard: "yd²" => YARD * YARD,
    SquareFoot: "ft²" => FOOT * FOOT,
    SquareInch: "in²" => INCH * INCH,
);

quantity!("A three-dimensional extent.",
    Volume, VolumeUnit, CubicMeter: "m³", Dimension::new([3, 0, 0, 0, 0, 0, 0]),
    CubicMeter: "m³" => 1.0,
    CubicDecimeter: "dm³" => DECI * DECI * DECI,
    Liter: "L" => MILLI,
    Deciliter: "dL" => DECI * MILLI,
    Centiliter: "cL" => CENTI * MILLI,
    Milliliter: "mL" => MICRO,
    CubicCentimeter: "cm³" => CENTI * CENTI * CENTI,
    CubicMillimeter: "mm³" => NANO,
    CubicFoot: "ft³" => FOOT * FOOT * FOOT,
    CubicInch: "in³" => INCH * INCH * INCH,
    "A US liquid gallon (231 cubic inches).", UsGallon: "gal (U.S.)" => US_GALLON,
    "An imperial gallon (4.54609 liters).", ImperialGallon: "gal (imp.)" => IMPERIAL_GALLON,
);

quantity!("A rate of change of position.",
    Speed, SpeedUnit, MeterPerSecond: "m/s", Dimension::new([1, 0, -1, 0, 0, 0, 0]),
    MeterPerSecond: "m/s" => 1.0,
    MillimeterPerSecond: "mm/s" => MILLI,
    KilometerPerHour: "km/h" => KILO / HOUR,
    MilePerHour: "mph" => MILE / HOUR,
    FootPerSecond: "ft/s" => FOOT,
    "One nautical mile per hour.", Knot: "kn" => NAUTICAL_MILE / HOUR,
);

quantity!("A rate of change of speed.",
    Acceleration, AccelerationUnit, MeterPerSecondSquared: "m/s²", Dimension::new([1, 0, -2, 0, 0, 0, 0]),
    MeterPerSecondSquared: "m/s²" => 1.0,
    CentimeterPerSecondSquared: "cm/s²" => CENTI,
    FootPerSecondSquared: "ft/s²" => FOOT,
    KilometerPerHourPerSecond: "km/h/s" => KILO / HOUR,
    "The standard acceleration due to gravity.", StandardGravity: "g" => STANDARD_GRAVITY,
);

quantity!("An interaction that changes the motion of a mass.",
    Force, ForceUnit, Newton: "N", Dimension::new([1, 1, -2, 0, 0, 0, 0]),
    Meganewton: "MN" => MEGA,
    Kilonewton: "kN" => KILO,
    Newton: "N" => 1.0,
    Millinewton: "mN" => MILLI,
    Dyne: "dyn" => 1e-5,
    KilogramForce: "kgf" => STANDARD_GRAVITY,
    PoundForce: "lbf" => POUND_FORCE,
    Poundal: "pdl" => POUND * FOOT,
);

quantity!("A force applied per unit area.",
    Pressure, PressureUnit, Pascal: "Pa", Dimension::new([-1, 1, -2, 0, 0, 0, 0]),
    Megapascal: "MPa" => MEGA,
    Kilopascal: "kPa" => KILO,
    Hectopascal: "hPa" => 1e2,
    Pascal: "Pa" => 1.0,
    Bar: "bar" => BAR,
    Millibar: "mbar" => BAR * MILLI,
    "A standard atmosphere.", Atmosphere: "atm" => ATMOSPHERE,
    PoundForcePerSquareInch: "psi" => PSI,
    MillimeterOfMercury: "mmHg" => MILLIMETER_OF_MERCURY,
    Torr: "torr" => TORR,
);

quantity!("The capacity to do work.",
    Energy, EnergyUnit, Joule: "J", Dimension::new([2, 1, -2, 0, 0, 0, 0]),
    Megajoule: "MJ" => MEGA,
    Kilojoule: "kJ" => KILO,
    Joule: "J" => 1.0,
    Millijoule: "mJ" => MILLI,
    WattHour: "Wh" => HOUR,
    KilowattHour: "kWh" => KILO * HOUR,
    "A thermochemical calorie.", Calorie: "cal" => CALORIE,
    Kilocalorie: "kcal" => KILO * CALORIE,
    "An International Table British thermal unit.", BritishThermalUnit: "BTU" => BTU,
    Electronvolt: "eV" => ELECTRONVOLT,
    FootPound: "ft·lbf" => FOOT * POUND_FORCE,
);

quantity!("A rate of transfer of energy.",
    Power, PowerUnit, Watt: "W", Dimension::new([2, 1, -3, 0, 0, 0, 0]),
    Gigawatt: "GW" => GIGA,
    Megawatt: "MW" => MEGA,
    Kilowatt: "kW" => KILO,
    Watt: "W" => 1.0,
    Milliwatt: "mW" => MILLI,
    MechanicalHorsepower: "hp(I)" => MECHANICAL_HORSEPOWER,
    MetricHorsepower: "hp(M)" => METRIC_HORSEPOWER,
    BritishThermalUnitPerHour: "Btu/h" => BTU / HOUR,
);

quantity!("An absolute temperature.\n\nThe scales of this quantity have different zero points, so conversions between them are affine rather than linear. Use [`TemperatureDelta`] for differences between two temperatures.",
    Temperature, TemperatureUnit, Kelvin: "K", Dimension::new([0, 0, 0, 0, 1, 0, 0]),
    Kelvin: "K" => Rule::affine(0.0, 1.0, 0.0),
    Millikelvin: "mK" => Rule::affine(0.0, MILLI, 0.0),
    DegreeCelsius: "°C" => Rule::affine(0.0, 1.0, ICE_POINT),
    DegreeFahrenheit: "°F" => Rule::affine(-32.0, FAHRENHEIT_STEP, ICE_POINT),
    DegreeRankine: "°R" => Rule::affine(0.0, FAHRENHEIT_STEP, 0.0),
);

quantity!("A difference between two temperatures.\n\nUnlike [`Temperature`], a difference has no zero point to shift, so its units convert linearly: a difference of `1 ∆°C` is a difference of `1 ∆K`.",
    TemperatureDelta, TemperatureDeltaUnit, Kelvin: "∆K", Dimension::new([0, 0, 0, 0, 1, 0, 0]),
    Kelvin: "∆K" => 1.0,
    Millikelvin: "∆mK" => MILLI,
    DegreeCelsius: "∆°C" => 1.0,
    DegreeFahrenheit: "∆°F" => FAHRENHEIT_STEP,
    DegreeRankine: "∆°R" => FAHRENHEIT_STEP,
);

quantity!("A plane angle.",
    Angle, AngleUnit, Radian: "rad", Dimension::DIMENSIONLESS,
    Revolution: "r" => REVOLUTION,
    Degree: "°" => DEGREE,
    Gradian: "g" => GRADIAN,
    Radian: "rad" => 1.0,
    Milliradian: "mrad" => MILLI,
    Arcminute: "′" => ARCMINUTE,
    Arcsecond: "″" => ARCSECOND,
);

quantity!("A rate of change of angle.",
    AngularVelocity, AngularVelocityUnit, RadianPerSecond: "rad/s", Dimension::new([0, 0, -1, 0, 0, 0, 0]),
    RadianPerSecond: "rad/s" => 1.0,
    DegreePerSecond: "°/s" => DEGREE,
    DegreePerMinute: "°/min" => DEGREE / MINUTE,
    RevolutionPerSecond: "r/s" => REVOLUTION,
    RevolutionPerMinute: "rpm" => REVOLUTION / MINUTE,
);

quantity!("A rate of change of angular velocity.",
    AngularAcceleration, AngularAccelerationUnit, RadianPerSecondSquared: "rad/s²", Dimension::new([0, 0, -2, 0, 0, 0, 0]),
    RadianPerSecondSquared: "rad/s²" => 1.0,
    DegreePerSecondSquared: "°/s²" => DEGREE,
    RevolutionPerSecondSquared: "r/s²" => REVOLUTION,
    RevolutionPerMinutePerSecond: "rpm/s" => REVOLUTION / MINUTE,
);

quantity!("An amount of mass passing per unit of time.",
    MassFlowRate, MassFlowRateUnit, KilogramPerSecond: "kg/s", Dimension::new([0, 1, -1, 0, 0, 0, 0]),
    KilogramPerSecond: "kg/s" => 1.0,
    GramPerSecond: "g/s" => MILLI,
    KilogramPerMinute: "kg/min" => 1.0 / MINUTE,
    KilogramPerHour: "kg/h" => 1.0 / HOUR,
    TonnePerHour: "t/h" => KILO / HOUR,
    PoundPerSecond: "lb/s" => POUND,
    PoundPerHour: "lb/h" => POUND / HOUR,
);

quantity!("A number of occurrences per unit of time.",
    Frequency, FrequencyUnit, Hertz: "Hz", Dimension::new([0, 0, -1, 0, 0, 0, 0]),
    Gigahertz: "GHz" => GIGA,
    Megahertz: "MHz" => MEGA,
    Kilohertz: "kHz" => KILO,
    Hertz: "Hz" => 1.0,
    BeatPerMinute: "bpm" => 1.0 / MINUTE,
);

quantity!("A flow of electric charge.",
    ElectricCurrent, ElectricCurrentUnit, Ampere: "A", Dimension::new([0, 0, 0, 1, 0, 0, 0]),
    Kiloampere: "kA" => KILO,
    Ampere: "A" => 1.0,
    Milliampere: "mA" => MILLI,
    Microampere: "µA" => MICRO,
    Nanoampere: "nA" => NANO,
);

quantity!("A difference in electric potential.",
    ElectricPotential, ElectricPotentialUnit, Volt: "V", Dimension::new([2, 1, -3, -1, 0, 0, 0]),
    Megavolt: "MV" => MEGA,
    Kilovolt: "kV" => KILO,
    Volt: "V" => 1.0,
    Millivolt: "mV" => MILLI,
    Microvolt: "µV" => MICRO,
);

quantity!("An opposition to the flow of electric current.",
    ElectricResistance, ElectricResistanceUnit, Ohm: "Ω", Dimension::new([2, 1, -3, -2, 0, 0, 0]),
    Gigaohm: "GΩ" => GIGA,
    Megaohm: "MΩ" => MEGA,
    Kiloohm: "kΩ" => KILO,
    Ohm: "Ω" => 1.0,
    Milliohm: "mΩ" => MILLI,
);

quantity!("A volume of fluid passing per unit of time.",
    VolumeFlow, VolumeFlowUnit, CubicMeterPerSecond: "m³/s", Dimension::new([3, 0, -1, 0, 0, 0, 0]),
    CubicMeterPerSecond: "m³/s" => 1.0,
    CubicMeterPerHour: "m³/h" => 1.0 / HOUR,
    LiterPerSecond: "L/s" => MILLI,
    LiterPerMinute: "L/min" => MILLI / MINUTE,
    LiterPerHour: "L/h" => MILLI / HOUR,
    CubicFootPerMinute: "ft³/min" => FOOT * FOOT * FOOT / MINUTE,
    UsGallonPerMinute: "gal (U.S.)/min" => US_GALLON / MINUTE,
);

quantity!("An amount of mass per unit of volume.",
    Density, DensityUnit, KilogramPerCubicMeter: "kg/m³", Dimension::new([-3, 1, 0, 0, 0, 0, 0]),
    KilogramPerCubicMeter: "kg/m³" => 1.0,
    GramPerCubicCentimeter: "g/cm³" => KILO,
    KilogramPerLiter: "kg/L" => KILO,
    GramPerLiter: "g/L" => 1.0,
    PoundPerCubicFoot: "lb/ft³" => POUND / (FOOT * FOOT * FOOT),
    PoundPerCubicInch: "lb/in³" => POUND / (INCH * INCH * INCH),
);

quantity!("A rotational force.",
    Torque, TorqueUnit, NewtonMeter: "N·m", Dimension::new([2, 1, -2, 0, 0, 0, 0]),
    KilonewtonMeter: "kN·m" => KILO,
    NewtonMeter: "N·m" => 1.0,
    NewtonMillimeter: "N·mm" => MILLI,
    PoundForceFoot: "lbf·ft" => POUND_FORCE * FOOT,
    PoundForceInch: "lbf·in" => POUND_FORCE * INCH,
);

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use super::*;

    fn ordinals_match_positions<U: Unit>() {
        for (i, unit) in U::ALL.iter().enumerate() {
            assert_eq!(unit.ordinal(), i, "{}", U::INFO.name);
        }
    }

    fn symbols_are_unique<U: Unit>() {
        let mut seen = HashSet::new();
        for unit in U::ALL {
            assert!(seen.insert(unit.symbol()), "duplicate symbol `{}` in {}", unit.symbol(), U::INFO.name);
        }
    }

    fn base_unit_is_identity<U: Unit>() {
        assert_eq!(U::BASE.symbol(), U::INFO.base_symbol);
        for value in [0.0, 1.0, -42.5, 1e-300, 6.02e23] {
            assert_eq!(U::BASE.to_base(value), value);
            assert_eq!(U::BASE.from_base(value), value);
        }
    }

    fn factors_are_positive_and_finite<U: Unit>() {
        for unit in U::ALL {
            let scale = match unit.rule() {
                Rule::Linear { factor } => factor,
                Rule::Affine { scale, .. } => scale,
            };
            assert!(scale.is_finite() && scale > 0.0, "{:?}", unit);
        }
    }

    fn symbols_parse_back<U: Unit>() {
        for &unit in U::ALL {
            assert_eq!(U::from_symbol(unit.symbol()), Some(unit));
        }
    }

    #[test]
    fn ordinals() {
        for_each_unit!(ordinals_match_positions);
    }

    #[test]
    fn unique_symbols() {
        for_each_unit!(symbols_are_unique);
    }

    #[test]
    fn base_identity() {
        for_each_unit!(base_unit_is_identity);
    }

    #[test]
    fn positive_factors() {
        for_each_unit!(factors_are_positive_and_finite);
    }

    #[test]
    fn symbol_lookup() {
        for_each_unit!(symbols_parse_back);
    }

    #[test]
    fn parse_unit() {
        let unit: LengthUnit = "µm".parse().unwrap();
        assert_eq!(unit, LengthUnit::Micrometer);

        let err = "um".parse::<LengthUnit>().unwrap_err();
        assert_eq!(err.to_string(), "not a valid Length unit: `um`");
    }

    #[test]
    fn display_unit() {
        assert_eq!(PowerUnit::Watt.to_string(), "W");
        assert_eq!(MassFlowRateUnit::PoundPerHour.to_string(), "lb/h");
        assert_eq!(TemperatureUnit::DegreeCelsius.to_string(), "°C");
        assert_eq!(ElectricResistanceUnit::Kiloohm.to_string(), "kΩ");
    }

    #[test]
    fn unit_names() {
        assert_eq!(LengthUnit::NauticalMile.name(), "NauticalMile");
        assert_eq!(AreaUnit::INFO.name, "Area");
    }

    #[test]
    fn convert_length() {
        assert_float_relative_eq!(LengthUnit::Mile.convert(LengthUnit::Decimeter, 2.0), 32186.88);
        assert_float_relative_eq!(LengthUnit::Yard.convert(LengthUnit::Yard, 2.0), 2.0);
    }

    #[test]
    fn convert_mass() {
        assert_float_relative_eq!(MassUnit::Kilogram.convert(MassUnit::Pound, 37.0), 81.571037);
    }

    #[test]
    fn convert_volume() {
        assert_float_relative_eq!(VolumeUnit::CubicInch.convert(VolumeUnit::Milliliter, 56.0), 917.675584);
        assert_float_relative_eq!(VolumeUnit::UsGallon.convert(VolumeUnit::CubicInch, 1.0), 231.0);
    }

    #[test]
    fn convert_time() {
        assert_float_relative_eq!(TimeUnit::Week.convert(TimeUnit::Minute, 1.0), 10080.0);
    }

    #[test]
    fn convert_temperature_delta_is_linear() {
        assert_float_relative_eq!(
            TemperatureDeltaUnit::DegreeCelsius.convert(TemperatureDeltaUnit::DegreeFahrenheit, 10.0),
            18.0
        );
        assert_eq!(TemperatureDeltaUnit::DegreeCelsius.to_base(0.0), 0.0);
    }

    #[test]
    fn convert_temperature_is_affine() {
        assert_float_relative_eq!(
            TemperatureUnit::DegreeCelsius.convert(TemperatureUnit::DegreeFahrenheit, 100.0),
            212.0
        );
        assert_float_relative_eq!(
            TemperatureUnit::DegreeRankine.convert(TemperatureUnit::DegreeFahrenheit, 491.67),
            32.0
        );
    }
}
