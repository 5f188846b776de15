//! Dimensional relations between quantity types.
//!
//! A relation combines two quantities of (usually) different types into a third, such as
//! `Mass × Acceleration = Force`. Each relation is exposed in two ways:
//!
//! - as an operator implementation on the quantity types themselves, so that `mass * acceleration`
//!   has type [`Force`];
//! - as a [`Relation`] record in [`RELATIONS`], which describes the relation at runtime and can
//!   check it for dimensional consistency.
//!
//! Both operands are reduced to their base values, and the result is always expressed in the base
//! unit of the output type:
//!
//! ```
//! use qty_units::{Acceleration, AccelerationUnit, Force, ForceUnit, Mass, MassUnit};
//!
//! let mass = Mass::new(2.0, MassUnit::Kilogram);
//! let acceleration = Acceleration::new(3.0, AccelerationUnit::MeterPerSecondSquared);
//! let force = mass * acceleration;
//! assert_eq!(force, Force::new(6.0, ForceUnit::Newton));
//! assert_eq!(force.unit(), ForceUnit::Newton);
//! ```

use crate::{convert::QuantityInfo, quantity::Quantity, unit::*};
use std::{fmt::{self, Display, Formatter}, ops::{Div, Mul}};

/// The operator of a [`Relation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Multiplication, `lhs × rhs`.
    Mul,

    /// Division, `lhs ÷ rhs`.
    Div,
}

impl Operator {
    /// Applies the operator to two base values.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }

    /// The symbol used when displaying the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Mul => "×",
            Operator::Div => "÷",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A relation `lhs operator rhs = output` between three quantity types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Relation {
    /// The quantity type of the left operand.
    pub lhs: &'static QuantityInfo,

    /// The operator combining the operands.
    pub operator: Operator,

    /// The quantity type of the right operand.
    pub rhs: &'static QuantityInfo,

    /// The quantity type of the result.
    pub output: &'static QuantityInfo,
}

impl Relation {
    /// Computes the base value of the output from the base values of the operands.
    pub fn apply(&self, lhs_base: f64, rhs_base: f64) -> f64 {
        self.operator.apply(lhs_base, rhs_base)
    }

    /// Returns true if the dimension of the output is the product / quotient of the dimensions of
    /// the operands.
    pub fn is_consistent(&self) -> bool {
        let expected = match self.operator {
            Operator::Mul => self.lhs.dimension.multiply(&self.rhs.dimension),
            Operator::Div => self.lhs.dimension.divide(&self.rhs.dimension),
        };
        expected == Some(self.output.dimension)
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.lhs.name, self.operator, self.rhs.name, self.output.name)
    }
}

/// Finds the relation with the given operand quantity types, by name.
///
/// ```
/// use qty_units::relation::{find, Operator};
///
/// let relation = find("Force", Operator::Div, "Mass").unwrap();
/// assert_eq!(relation.output.name, "Acceleration");
/// ```
pub fn find(lhs: &str, operator: Operator, rhs: &str) -> Option<&'static Relation> {
    RELATIONS.iter()
        .find(|relation| relation.lhs.name == lhs && relation.operator == operator && relation.rhs.name == rhs)
}

/// Generates the operator implementation and the [`Relation`] record of each relation.
macro_rules! relations {
    (@impl $lhs:ident * $rhs:ident = $output:ident) => {
        impl Mul<$rhs> for $lhs {
            type Output = $output;

            fn mul(self, rhs: $rhs) -> $output {
                Quantity::from_base(Operator::Mul.apply(self.base_value(), rhs.base_value()))
            }
        }
    };
    (@impl $lhs:ident / $rhs:ident = $output:ident) => {
        impl Div<$rhs> for $lhs {
            type Output = $output;

            fn div(self, rhs: $rhs) -> $output {
                Quantity::from_base(Operator::Div.apply(self.base_value(), rhs.base_value()))
            }
        }
    };
    (@op *) => { Operator::Mul };
    (@op /) => { Operator::Div };
    ($($lhs:ident $op:tt $rhs:ident = $output:ident),* $(,)?) => {
        $(
            relations!(@impl $lhs $op $rhs = $output);
        )*

        /// Every relation with an operator implementation, in declaration order.
        pub static RELATIONS: &[Relation] = &[
            $(
                Relation {
                    lhs: &$lhs::INFO,
                    operator: relations!(@op $op),
                    rhs: &$rhs::INFO,
                    output: &$output::INFO,
                },
            )*
        ];
    };
}

relations! {
    // F = m·a
    Mass * Acceleration = Force,
    Acceleration * Mass = Force,
    Force / Mass = Acceleration,
    Force / Acceleration = Mass,

    // mass flow
    MassFlowRate * Time = Mass,
    Time * MassFlowRate = Mass,
    Mass / Time = MassFlowRate,
    Mass / MassFlowRate = Time,

    // rotation
    AngularVelocity * Time = Angle,
    Time * AngularVelocity = Angle,
    Angle / Time = AngularVelocity,
    Angle / AngularVelocity = Time,
    AngularAcceleration * Time = AngularVelocity,
    Time * AngularAcceleration = AngularVelocity,
    AngularVelocity / Time = AngularAcceleration,
    AngularVelocity / AngularAcceleration = Time,
    Angle * Frequency = AngularVelocity,
    Frequency * Angle = AngularVelocity,

    // geometry
    Length * Length = Area,
    Area * Length = Volume,
    Length * Area = Volume,
    Area / Length = Length,
    Volume / Area = Length,
    Volume / Length = Area,

    // kinematics
    Speed * Time = Length,
    Time * Speed = Length,
    Length / Time = Speed,
    Length / Speed = Time,
    Acceleration * Time = Speed,
    Time * Acceleration = Speed,
    Speed / Time = Acceleration,
    Speed / Acceleration = Time,

    // work, energy and power
    Force * Length = Energy,
    Length * Force = Energy,
    Energy / Length = Force,
    Energy / Force = Length,
    Power * Time = Energy,
    Time * Power = Energy,
    Energy / Time = Power,
    Energy / Power = Time,
    Force * Speed = Power,
    Speed * Force = Power,
    Power / Speed = Force,
    Power / Force = Speed,
    Torque / Length = Force,
    Torque / Force = Length,

    // pressure
    Pressure * Area = Force,
    Area * Pressure = Force,
    Force / Area = Pressure,
    Force / Pressure = Area,
    Pressure * Volume = Energy,
    Volume * Pressure = Energy,
    Energy / Volume = Pressure,

    // electricity
    ElectricCurrent * ElectricResistance = ElectricPotential,
    ElectricResistance * ElectricCurrent = ElectricPotential,
    ElectricPotential / ElectricCurrent = ElectricResistance,
    ElectricPotential / ElectricResistance = ElectricCurrent,
    ElectricPotential * ElectricCurrent = Power,
    ElectricCurrent * ElectricPotential = Power,
    Power / ElectricCurrent = ElectricPotential,
    Power / ElectricPotential = ElectricCurrent,

    // density and flow
    Density * Volume = Mass,
    Volume * Density = Mass,
    Mass / Volume = Density,
    Mass / Density = Volume,
    VolumeFlow * Time = Volume,
    Time * VolumeFlow = Volume,
    Volume / Time = VolumeFlow,
    Volume / VolumeFlow = Time,
}
