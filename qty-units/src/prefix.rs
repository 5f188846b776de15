//! Scale factors used to build the unit tables.
//!
//! The SI prefixes are exposed through [`Prefix`]; customary units are exposed as named
//! constants, each expressed in the SI base (or coherent derived) unit of its quantity. Every
//! exact definition is written once here and reused by the tables in [`crate::unit`].

/// An SI prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prefix {
    Quecto,
    Ronto,
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
    Ronna,
    Quetta,
}

impl Prefix {
    /// Every prefix, from smallest to largest.
    pub const ALL: &'static [Prefix] = &[
        Prefix::Quecto, Prefix::Ronto, Prefix::Yocto, Prefix::Zepto, Prefix::Atto,
        Prefix::Femto, Prefix::Pico, Prefix::Nano, Prefix::Micro, Prefix::Milli,
        Prefix::Centi, Prefix::Deci, Prefix::Deca, Prefix::Hecto, Prefix::Kilo,
        Prefix::Mega, Prefix::Giga, Prefix::Tera, Prefix::Peta, Prefix::Exa,
        Prefix::Zetta, Prefix::Yotta, Prefix::Ronna, Prefix::Quetta,
    ];

    /// The power of ten this prefix represents.
    pub const fn exponent(self) -> i32 {
        match self {
            Prefix::Quecto => -30,
            Prefix::Ronto => -27,
            Prefix::Yocto => -24,
            Prefix::Zepto => -21,
            Prefix::Atto => -18,
            Prefix::Femto => -15,
            Prefix::Pico => -12,
            Prefix::Nano => -9,
            Prefix::Micro => -6,
            Prefix::Milli => -3,
            Prefix::Centi => -2,
            Prefix::Deci => -1,
            Prefix::Deca => 1,
            Prefix::Hecto => 2,
            Prefix::Kilo => 3,
            Prefix::Mega => 6,
            Prefix::Giga => 9,
            Prefix::Tera => 12,
            Prefix::Peta => 15,
            Prefix::Exa => 18,
            Prefix::Zetta => 21,
            Prefix::Yotta => 24,
            Prefix::Ronna => 27,
            Prefix::Quetta => 30,
        }
    }

    /// The multiplier this prefix applies to a unit.
    ///
    /// Literal values are used rather than `10f64.powi(..)` so that, for example, the factor of
    /// [`Prefix::Milli`] is exactly the double nearest to `0.001`.
    pub const fn factor(self) -> f64 {
        match self {
            Prefix::Quecto => 1e-30,
            Prefix::Ronto => 1e-27,
            Prefix::Yocto => 1e-24,
            Prefix::Zepto => 1e-21,
            Prefix::Atto => 1e-18,
            Prefix::Femto => 1e-15,
            Prefix::Pico => 1e-12,
            Prefix::Nano => 1e-9,
            Prefix::Micro => 1e-6,
            Prefix::Milli => 1e-3,
            Prefix::Centi => 1e-2,
            Prefix::Deci => 1e-1,
            Prefix::Deca => 1e1,
            Prefix::Hecto => 1e2,
            Prefix::Kilo => 1e3,
            Prefix::Mega => 1e6,
            Prefix::Giga => 1e9,
            Prefix::Tera => 1e12,
            Prefix::Peta => 1e15,
            Prefix::Exa => 1e18,
            Prefix::Zetta => 1e21,
            Prefix::Yotta => 1e24,
            Prefix::Ronna => 1e27,
            Prefix::Quetta => 1e30,
        }
    }

    /// The symbol prepended to a unit symbol, e.g. `k` for [`Prefix::Kilo`].
    pub const fn symbol(self) -> &'static str {
        match self {
            Prefix::Quecto => "q",
            Prefix::Ronto => "r",
            Prefix::Yocto => "y",
            Prefix::Zepto => "z",
            Prefix::Atto => "a",
            Prefix::Femto => "f",
            Prefix::Pico => "p",
            Prefix::Nano => "n",
            Prefix::Micro => "µ",
            Prefix::Milli => "m",
            Prefix::Centi => "c",
            Prefix::Deci => "d",
            Prefix::Deca => "da",
            Prefix::Hecto => "h",
            Prefix::Kilo => "k",
            Prefix::Mega => "M",
            Prefix::Giga => "G",
            Prefix::Tera => "T",
            Prefix::Peta => "P",
            Prefix::Exa => "E",
            Prefix::Zetta => "Z",
            Prefix::Yotta => "Y",
            Prefix::Ronna => "R",
            Prefix::Quetta => "Q",
        }
    }
}

pub const PICO: f64 = Prefix::Pico.factor();
pub const NANO: f64 = Prefix::Nano.factor();
pub const MICRO: f64 = Prefix::Micro.factor();
pub const MILLI: f64 = Prefix::Milli.factor();
pub const CENTI: f64 = Prefix::Centi.factor();
pub const DECI: f64 = Prefix::Deci.factor();
pub const KILO: f64 = Prefix::Kilo.factor();
pub const MEGA: f64 = Prefix::Mega.factor();
pub const GIGA: f64 = Prefix::Giga.factor();

// length, in meters
pub const INCH: f64 = 0.0254;
pub const FOOT: f64 = 0.3048;
pub const YARD: f64 = 0.9144;
pub const MILE: f64 = 1609.344;
pub const NAUTICAL_MILE: f64 = 1852.0;
pub const ASTRONOMICAL_UNIT: f64 = 1.495978707e11;
pub const LIGHT_YEAR: f64 = 9.4607304725808e15;

// mass, in kilograms
pub const POUND: f64 = 0.45359237;
pub const OUNCE: f64 = 0.028349523125;
pub const STONE: f64 = 6.35029318;
pub const SHORT_TON: f64 = 907.18474;
pub const LONG_TON: f64 = 1016.0469088;

// time, in seconds
pub const MINUTE: f64 = 60.0;
pub const HOUR: f64 = 3600.0;
pub const DAY: f64 = 86400.0;
pub const WEEK: f64 = 604800.0;
/// A year of 365 days.
pub const YEAR: f64 = 31536000.0;

// volume, in cubic meters
pub const US_GALLON: f64 = 3.785411784e-3;
pub const IMPERIAL_GALLON: f64 = 4.54609e-3;

/// Standard acceleration due to gravity, in meters per second squared.
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Force exerted by one pound of mass under standard gravity, in newtons.
pub const POUND_FORCE: f64 = 4.4482216152605;

// pressure, in pascals
pub const ATMOSPHERE: f64 = 101325.0;
pub const BAR: f64 = 1e5;
pub const PSI: f64 = 6894.757293168361;
pub const MILLIMETER_OF_MERCURY: f64 = 133.322387415;
pub const TORR: f64 = ATMOSPHERE / 760.0;

// energy, in joules
pub const CALORIE: f64 = 4.184;
pub const BTU: f64 = 1055.05585262;
pub const ELECTRONVOLT: f64 = 1.602176634e-19;

// power, in watts
pub const MECHANICAL_HORSEPOWER: f64 = 745.69987158227022;
pub const METRIC_HORSEPOWER: f64 = 735.49875;

// plane angle, in radians
pub const DEGREE: f64 = std::f64::consts::PI / 180.0;
pub const GRADIAN: f64 = std::f64::consts::PI / 200.0;
pub const REVOLUTION: f64 = std::f64::consts::TAU;
pub const ARCMINUTE: f64 = DEGREE / 60.0;
pub const ARCSECOND: f64 = DEGREE / 3600.0;

/// Size of one degree Fahrenheit / Rankine, in kelvins.
pub const FAHRENHEIT_STEP: f64 = 5.0 / 9.0;

/// Temperature of the ice point, in kelvins.
pub const ICE_POINT: f64 = 273.15;
