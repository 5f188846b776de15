//! Parsing quantities from text.
//!
//! The accepted format is the one produced by [`Display`](std::fmt::Display): a floating-point
//! literal, exactly one ASCII space, and the symbol of a unit of the target quantity type, e.g.
//! `"9.81 m/s²"`. The magnitude is parsed with [`f64::from_str`], so it uses `.` as the decimal
//! point and also accepts `NaN`, `inf` and exponents such as `1.5e3`. The symbol must match exactly
//! (it is case-sensitive, and no surrounding whitespace is trimmed).

use ariadne::{Fmt, Label, Report, ReportKind};
use crate::{convert::Unit, quantity::Quantity};
use qty_error::{ErrorKind, EXPR};
use std::{ops::Range, str::FromStr};

/// The reason text could not be parsed into a quantity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// The input is empty or only contains whitespace.
    #[error("cannot parse a quantity from empty input")]
    Empty,

    /// There is no space between the magnitude and the unit symbol.
    #[error("missing space between the magnitude and the unit symbol")]
    MissingSeparator,

    /// The text before the first space is not a number.
    #[error("`{token}` is not a valid number")]
    InvalidMagnitude {
        token: String,
    },

    /// The text after the first space is not the symbol of any unit of the quantity type.
    #[error("`{symbol}` is not a {quantity} unit")]
    UnknownSymbol {
        /// The quantity type that was parsed.
        quantity: &'static str,

        /// The unrecognized symbol.
        symbol: String,

        /// The symbols that would have been accepted.
        expected: Vec<&'static str>,
    },
}

impl ParseErrorKind {
    /// The message attached to the highlighted span.
    fn label(&self) -> String {
        match self {
            ParseErrorKind::Empty => "I expected a quantity here, like `5 m`".to_owned(),
            ParseErrorKind::MissingSeparator => format!(
                "add a {} between the number and the unit",
                "space".fg(EXPR),
            ),
            ParseErrorKind::InvalidMagnitude { .. } => "I could not read this as a number".to_owned(),
            ParseErrorKind::UnknownSymbol { quantity, .. } => format!("unknown {} unit", quantity),
        }
    }

    /// An optional help line.
    fn help(&self) -> Option<String> {
        match self {
            ParseErrorKind::InvalidMagnitude { .. } => {
                Some("numbers use `.` as the decimal point and may have an exponent, like `1.5e3`".to_owned())
            },
            ParseErrorKind::UnknownSymbol { expected, .. } => Some(format!(
                "expected one of: {}",
                expected.iter()
                    .map(|symbol| format!("`{}`", symbol.fg(EXPR)))
                    .collect::<Vec<_>>()
                    .join(", "),
            )),
            _ => None,
        }
    }
}

impl ErrorKind for ParseErrorKind {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let span = spans.first().cloned().unwrap_or(0..0);
        let mut builder = Report::build(ReportKind::Error, src_id, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((src_id, span))
                    .with_message(self.label())
                    .with_color(EXPR),
            );

        if let Some(help) = self.help() {
            builder.set_help(help);
        }
        builder.finish()
    }
}

/// An error produced when parsing a quantity from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    /// The range of the offending part of the input, counted in characters.
    pub span: Range<usize>,

    /// What went wrong.
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Creates an error from a byte range of `input`. The range must lie on character boundaries.
    fn new(input: &str, bytes: Range<usize>, kind: ParseErrorKind) -> Self {
        let start = input[..bytes.start].chars().count();
        let end = start + input[bytes].chars().count();
        Self { span: start..end, kind }
    }
}

impl From<ParseError> for qty_error::Error {
    fn from(err: ParseError) -> Self {
        qty_error::Error::new(vec![err.span], err.kind)
    }
}

impl<U: Unit> Quantity<U> {
    /// Parses a quantity from text of the form `"<magnitude> <symbol>"`.
    ///
    /// The input is split at its first space; everything after it must be a unit symbol of this
    /// quantity type.
    ///
    /// ```
    /// use qty_units::{Speed, SpeedUnit};
    ///
    /// let q = Speed::parse("88 mph").unwrap();
    /// assert_eq!(q, Speed::new(88.0, SpeedUnit::MilePerHour));
    /// assert!(Speed::parse("88mph").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::new(input, 0..input.len(), ParseErrorKind::Empty));
        }

        let Some((magnitude, symbol)) = input.split_once(' ') else {
            return Err(ParseError::new(input, 0..input.len(), ParseErrorKind::MissingSeparator));
        };

        let value = magnitude.parse::<f64>()
            .map_err(|_| ParseError::new(
                input,
                0..magnitude.len(),
                ParseErrorKind::InvalidMagnitude { token: magnitude.to_owned() },
            ))?;

        let symbol_start = magnitude.len() + 1;
        let unit = U::from_symbol(symbol)
            .ok_or_else(|| ParseError::new(
                input,
                symbol_start..input.len(),
                ParseErrorKind::UnknownSymbol {
                    quantity: U::INFO.name,
                    symbol: symbol.to_owned(),
                    expected: U::ALL.iter().map(|unit| unit.symbol()).collect(),
                },
            ))?;

        Ok(Self::new(value, unit))
    }

    /// Parses a quantity like [`Quantity::parse`], returning [`None`] instead of an error.
    pub fn try_parse(input: &str) -> Option<Self> {
        match Self::parse(input) {
            Ok(quantity) => Some(quantity),
            Err(err) => {
                tracing::trace!(quantity = U::INFO.name, input, error = %err, "failed to parse quantity");
                None
            },
        }
    }
}

impl<U: Unit> FromStr for Quantity<U> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
