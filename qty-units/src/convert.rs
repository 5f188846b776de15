//! Provides the [`Unit`] trait, which is implemented by all unit enumerations, and the
//! [`UnitDescriptor`] that performs the actual conversions.

use crate::dimension::Dimension;
use std::{collections::{hash_map::Entry, HashMap}, fmt::Debug, hash::Hash};

/// The rule converting a magnitude in some unit to a magnitude in the base unit of its quantity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rule {
    /// A pure rescaling: `base = value * factor`.
    ///
    /// This is the rule used by almost every unit, including interval quantities such as a
    /// temperature *difference*, which have no zero point to shift.
    Linear {
        factor: f64,
    },

    /// An affine mapping: `base = (value + raw_offset) * scale + base_offset`.
    ///
    /// Only absolute temperature scales use this rule. Splitting the offset into a part applied
    /// before scaling and a part applied after lets exact reference points (such as `32 °F` and
    /// `0 °C`, both `273.15 K`) convert without rounding error.
    Affine {
        raw_offset: f64,
        scale: f64,
        base_offset: f64,
    },
}

impl Rule {
    /// Creates a [`Rule::Linear`] rule.
    pub const fn linear(factor: f64) -> Self {
        Rule::Linear { factor }
    }

    /// Creates a [`Rule::Affine`] rule.
    pub const fn affine(raw_offset: f64, scale: f64, base_offset: f64) -> Self {
        Rule::Affine { raw_offset, scale, base_offset }
    }

    /// Applies this rule to a magnitude, returning the magnitude in the base unit.
    pub fn to_base(&self, value: f64) -> f64 {
        match *self {
            Rule::Linear { factor } => value * factor,
            Rule::Affine { raw_offset, scale, base_offset } => (value + raw_offset) * scale + base_offset,
        }
    }

    /// The multiplicative part of this rule.
    fn scale(&self) -> f64 {
        match *self {
            Rule::Linear { factor } => factor,
            Rule::Affine { scale, .. } => scale,
        }
    }
}

impl From<f64> for Rule {
    fn from(factor: f64) -> Self {
        Rule::linear(factor)
    }
}

/// A [`Rule`] together with the reciprocal of its scale, so that converting out of the base
/// unit never divides.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Resolved {
    rule: Rule,
    inverse: f64,
}

impl Resolved {
    fn new(rule: Rule) -> Self {
        Self { rule, inverse: rule.scale().recip() }
    }

    fn to_base(&self, value: f64) -> f64 {
        self.rule.to_base(value)
    }

    fn from_base(&self, base: f64) -> f64 {
        match self.rule {
            Rule::Linear { .. } => base * self.inverse,
            Rule::Affine { raw_offset, base_offset, .. } => (base - base_offset) * self.inverse - raw_offset,
        }
    }
}

/// Static information about a quantity type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QuantityInfo {
    /// The name of the quantity type, e.g. `"Length"`.
    pub name: &'static str,

    /// The symbol of the base unit, e.g. `"m"`.
    pub base_symbol: &'static str,

    /// The dimensional signature of the quantity type.
    pub dimension: Dimension,
}

/// The conversion and symbol tables of a quantity type.
///
/// One descriptor exists per quantity type. It is built on first use (see
/// [`Unit::descriptor`]) and never mutated afterwards, so it can be read from any number of
/// threads without locking.
#[derive(Debug)]
pub struct UnitDescriptor<U: 'static> {
    /// Resolved conversion rules, indexed by unit ordinal.
    rules: Vec<Resolved>,

    /// Reverse lookup from display symbol to unit.
    by_symbol: HashMap<&'static str, U>,
}

impl<U: Unit> UnitDescriptor<U> {
    /// Builds the descriptor from the tables declared on `U`.
    ///
    /// Linear factors are normalized by the factor of the base unit, so the base unit always
    /// converts with a factor of exactly `1.0`.
    pub fn build() -> Self {
        let base_factor = match U::BASE.rule() {
            Rule::Linear { factor } => factor,
            Rule::Affine { .. } => 1.0,
        };

        let rules = U::ALL.iter()
            .map(|unit| match unit.rule() {
                Rule::Linear { factor } => Resolved::new(Rule::linear(factor / base_factor)),
                rule @ Rule::Affine { .. } => Resolved::new(rule),
            })
            .collect();

        let mut by_symbol = HashMap::with_capacity(U::ALL.len());
        for &unit in U::ALL {
            match by_symbol.entry(unit.symbol()) {
                Entry::Vacant(entry) => {
                    entry.insert(unit);
                },
                Entry::Occupied(entry) => tracing::warn!(
                    quantity = U::INFO.name,
                    symbol = unit.symbol(),
                    kept = ?entry.get(),
                    shadowed = ?unit,
                    "duplicate unit symbol; the shadowed unit cannot be parsed"
                ),
            }
        }

        tracing::debug!(quantity = U::INFO.name, units = U::ALL.len(), "built unit descriptor");
        Self { rules, by_symbol }
    }

    /// Returns the rule used to convert the given unit, after normalization.
    pub fn rule(&self, unit: U) -> Rule {
        self.rules[unit.ordinal()].rule
    }

    /// Converts a magnitude in `unit` to a magnitude in the base unit.
    pub fn to_base(&self, unit: U, value: f64) -> f64 {
        self.rules[unit.ordinal()].to_base(value)
    }

    /// Converts a magnitude in the base unit to a magnitude in `unit`.
    pub fn from_base(&self, unit: U, base: f64) -> f64 {
        self.rules[unit.ordinal()].from_base(base)
    }

    /// Converts a magnitude from one unit to another, routing through the base unit.
    ///
    /// Converting a unit to itself returns the magnitude unchanged.
    pub fn convert(&self, from: U, to: U, value: f64) -> f64 {
        if from == to {
            value
        } else {
            self.from_base(to, self.to_base(from, value))
        }
    }

    /// Finds the unit whose symbol is exactly `symbol`.
    pub fn lookup(&self, symbol: &str) -> Option<U> {
        self.by_symbol.get(symbol).copied()
    }
}

/// A trait implemented by every unit enumeration, providing the information needed to convert
/// between the units of one quantity type.
///
/// The trait is implemented by the `quantity!` macro in [`crate::unit`]; the unit tables are
/// plain data and all conversion logic lives in [`UnitDescriptor`].
pub trait Unit: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// The base unit of this quantity type.
    ///
    /// The base unit is the unit in which conversions to other units of the same quantity are
    /// defined. For example, the base unit of length is the meter. In some cases, the choice of
    /// base unit may affect the precision of conversions: conversions between two customary units
    /// are done by converting to the metric base unit and back, which is where precision loss can
    /// occur.
    const BASE: Self;

    /// Every unit of this quantity type, in ordinal order.
    const ALL: &'static [Self];

    /// Static information about the quantity type.
    const INFO: QuantityInfo;

    /// The position of this unit in [`Unit::ALL`].
    fn ordinal(self) -> usize;

    /// The rule converting this unit to [`Unit::BASE`], as declared in the unit table.
    fn rule(self) -> Rule;

    /// The display symbol of this unit. Symbols are unique within a quantity type.
    fn symbol(self) -> &'static str;

    /// The enumerator name of this unit, e.g. `"Kilometer"`.
    fn name(self) -> &'static str;

    /// The process-wide descriptor of this quantity type.
    fn descriptor() -> &'static UnitDescriptor<Self>;

    /// Finds the unit whose symbol is exactly `symbol`.
    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::descriptor().lookup(symbol)
    }

    /// Converts a magnitude in this unit to a magnitude in [`Unit::BASE`].
    fn to_base(self, value: f64) -> f64 {
        Self::descriptor().to_base(self, value)
    }

    /// Converts a magnitude in [`Unit::BASE`] to a magnitude in this unit.
    fn from_base(self, base: f64) -> f64 {
        Self::descriptor().from_base(self, base)
    }

    /// Converts a magnitude in this unit to a magnitude in `target`.
    fn convert(self, target: Self, value: f64) -> f64 {
        Self::descriptor().convert(self, target, value)
    }
}
