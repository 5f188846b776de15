//! Text formatting of quantities.
//!
//! The [`Display`] implementation of [`Quantity`] writes `"<magnitude> <symbol>"` using the
//! shortest representation of the magnitude that parses back to the same `f64`, which makes it the
//! inverse of [`Quantity::parse`](crate::Quantity::parse). The standard precision, sign, width,
//! fill and alignment flags are honored, and [`LowerExp`] / [`UpperExp`] are implemented as well:
//!
//! ```
//! use qty_units::{Length, LengthUnit};
//!
//! let q = Length::new(1500.0, LengthUnit::Meter);
//! assert_eq!(q.to_string(), "1500 m");
//! assert_eq!(format!("{:.2}", q), "1500.00 m");
//! assert_eq!(format!("{:e}", q), "1.5e3 m");
//! assert_eq!(format!("{:>10}", q), "    1500 m");
//! ```
//!
//! Further customization is available through [`FormatOptions`] and [`Quantity::format`].

use crate::{convert::Unit, quantity::Quantity};
use std::fmt::{self, Alignment, Display, Formatter, LowerExp, UpperExp, Write};

/// Formatting options for quantities.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// How to format the magnitude.
    pub number: NumberFormat,

    /// Which suffix notation to use for scientific notation.
    ///
    /// This option is ignored if the magnitude is not formatted in scientific notation.
    pub scientific: Scientific,

    /// The number of fractional digits to show. If [`None`], the shortest representation that
    /// round-trips through parsing is used.
    ///
    /// In scientific notation, this is the number of fractional digits of the mantissa.
    pub precision: Option<usize>,

    /// Whether to display separators for large numbers.
    ///
    /// Separators are only inserted in decimal notation. Output formatted with separators cannot
    /// be parsed back into a quantity.
    pub separators: Separator,
}

impl FormatOptions {
    /// Wraps the given [`FormatOptions`] into a builder for further customization.
    pub fn into_builder(self) -> FormatOptionsBuilder {
        FormatOptionsBuilder(self)
    }
}

/// The different ways to format a magnitude.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Formats the magnitude in decimal notation, regardless of its size.
    ///
    /// This is the default option, and the format used by [`Display`].
    #[default]
    Plain,

    /// Chooses between decimal and scientific notation based on the magnitude.
    ///
    /// Nonzero magnitudes in the ranges `[-1e-6, 1e-6]` U `[-inf, -1e+12] U [1e+12, inf]` are
    /// represented in scientific notation, while all other magnitudes are formatted in decimal
    /// notation.
    Auto,

    /// Formats the magnitude in scientific notation.
    ///
    /// The formatting of this option can be further customized using the [`scientific`] option in
    /// the [`FormatOptions`] struct.
    ///
    /// [`scientific`]: FormatOptions::scientific
    Scientific,
}

/// The different ways to format the suffix of scientific notation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Scientific {
    /// Uses `e` to denote the exponent, as in `1.5e3`. This is the notation Rust uses, so the
    /// output can be parsed back into a quantity.
    ///
    /// This is the default option.
    #[default]
    E,

    /// Uses the suffix `× 10^` to denote the exponent, as in `1.5 × 10^3`.
    ///
    /// This formatting option includes a non-ASCII `×` character.
    Times,
}

/// Whether to display separators for large numbers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// Always display separators. For example, _one million_ meters is rendered with commas as
    /// `1,000,000 m`.
    Always,

    /// Never display separators.
    ///
    /// This is the default option.
    #[default]
    Never,
}

/// Helper struct to build a [`FormatOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptionsBuilder(FormatOptions);

impl FormatOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number format. See [`NumberFormat`] for more information.
    pub fn number(mut self, number: NumberFormat) -> Self {
        self.0.number = number;
        self
    }

    /// Sets the scientific notation suffix. See [`Scientific`] for more information.
    pub fn scientific(mut self, scientific: Scientific) -> Self {
        self.0.scientific = scientific;
        self
    }

    /// Sets the number of fractional digits to show. See [`FormatOptions::precision`].
    pub fn precision(mut self, precision: Option<usize>) -> Self {
        self.0.precision = precision;
        self
    }

    /// Sets whether to display separators for large numbers. See [`Separator`] for more
    /// information.
    pub fn separators(mut self, separators: Separator) -> Self {
        self.0.separators = separators;
        self
    }

    /// Builds the [`FormatOptions`] struct.
    pub fn build(self) -> FormatOptions {
        self.0
    }
}

/// Returns true if the given magnitude is small or large enough that [`NumberFormat::Auto`]
/// should format it in scientific notation.
fn should_use_scientific(n: f64) -> bool {
    let abs = n.abs();
    n != 0.0 && n.is_finite() && (abs <= 1e-6 || abs >= 1e+12)
}

/// Inserts separators in a string representing an unsigned integer / float.
fn insert_separators(s: &mut String) {
    let decimal = s.find('.').unwrap_or(s.len());
    s.reserve(s.len() / 3);

    // go backwards from the decimal point so that earlier insertions don't shift later indices
    let mut i = decimal.saturating_sub(3);
    while i > 0 {
        s.insert(i, ',');
        i = i.saturating_sub(3);
    }
}

/// Formats a magnitude in decimal notation.
fn fmt_decimal(f: &mut Formatter<'_>, n: f64, precision: Option<usize>, separators: Separator) -> fmt::Result {
    let mut s = match precision {
        Some(precision) => format!("{:.*}", precision, n.abs()),
        None => format!("{}", n.abs()),
    };

    if separators == Separator::Always && n.is_finite() {
        insert_separators(&mut s);
    }

    // NaN has no meaningful sign
    let sign = if n.is_sign_negative() && !n.is_nan() { "-" } else { "" };
    write!(f, "{}{}", sign, s)
}

/// Formats a magnitude in scientific notation.
fn fmt_scientific(f: &mut Formatter<'_>, n: f64, precision: Option<usize>, suffix: Scientific) -> fmt::Result {
    let s = match precision {
        Some(precision) => format!("{:.*e}", precision, n),
        None => format!("{:e}", n),
    };

    match (suffix, s.split_once('e')) {
        (Scientific::Times, Some((mantissa, exponent))) => write!(f, "{} × 10^{}", mantissa, exponent),
        // `E` notation, or a non-finite value, which has no exponent
        _ => write!(f, "{}", s),
    }
}

/// Formats a magnitude according to the given options.
fn fmt_number(f: &mut Formatter<'_>, n: f64, options: FormatOptions) -> fmt::Result {
    let scientific = match options.number {
        NumberFormat::Plain => false,
        NumberFormat::Auto => should_use_scientific(n),
        NumberFormat::Scientific => n.is_finite(),
    };

    if scientific {
        fmt_scientific(f, n, options.precision, options.scientific)
    } else {
        fmt_decimal(f, n, options.precision, options.separators)
    }
}

/// Formatter for a [`Quantity`], created by [`Quantity::format`].
#[derive(Debug, Clone, Copy)]
pub struct QuantityFormatter<'a, U> {
    /// The quantity to format.
    pub quantity: &'a Quantity<U>,

    /// The options to use when formatting.
    pub options: FormatOptions,
}

impl<U: Unit> Display for QuantityFormatter<'_, U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_number(f, self.quantity.value(), self.options)?;
        write!(f, " {}", self.quantity.unit().symbol())
    }
}

impl<U: Unit> Quantity<U> {
    /// Returns a formatter that formats this quantity with the given options.
    ///
    /// ```
    /// use qty_units::{fmt::{FormatOptionsBuilder, NumberFormat, Scientific}, Power, PowerUnit};
    ///
    /// let options = FormatOptionsBuilder::new()
    ///     .number(NumberFormat::Scientific)
    ///     .scientific(Scientific::Times)
    ///     .build();
    /// let q = Power::new(2500.0, PowerUnit::Watt);
    /// assert_eq!(q.format(options).to_string(), "2.5 × 10^3 W");
    /// ```
    pub fn format(&self, options: FormatOptions) -> QuantityFormatter<'_, U> {
        QuantityFormatter { quantity: self, options }
    }
}

/// Writes `"<number> <symbol>"` as a whole, honoring the sign, width, fill and alignment flags of
/// `f`. Text is left-aligned unless requested otherwise.
fn write_padded(f: &mut Formatter<'_>, value: f64, number: &str, symbol: &str) -> fmt::Result {
    let sign = if f.sign_plus() && value.is_sign_positive() && !value.is_nan() { "+" } else { "" };
    let s = format!("{}{} {}", sign, number, symbol);

    let len = s.chars().count();
    let padding = match f.width() {
        Some(width) if width > len => width - len,
        _ => return f.write_str(&s),
    };
    let (before, after) = match f.align() {
        Some(Alignment::Right) => (padding, 0),
        Some(Alignment::Center) => (padding / 2, padding - padding / 2),
        Some(Alignment::Left) | None => (0, padding),
    };

    let fill = f.fill();
    for _ in 0..before {
        f.write_char(fill)?;
    }
    f.write_str(&s)?;
    for _ in 0..after {
        f.write_char(fill)?;
    }
    Ok(())
}

impl<U: Unit> Display for Quantity<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let number = match f.precision() {
            Some(precision) => format!("{:.*}", precision, self.value()),
            None => self.value().to_string(),
        };
        write_padded(f, self.value(), &number, self.unit().symbol())
    }
}

impl<U: Unit> LowerExp for Quantity<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let number = match f.precision() {
            Some(precision) => format!("{:.*e}", precision, self.value()),
            None => format!("{:e}", self.value()),
        };
        write_padded(f, self.value(), &number, self.unit().symbol())
    }
}

impl<U: Unit> UpperExp for Quantity<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let number = match f.precision() {
            Some(precision) => format!("{:.*E}", precision, self.value()),
            None => format!("{:E}", self.value()),
        };
        write_padded(f, self.value(), &number, self.unit().symbol())
    }
}
