#![doc = include_str!("../README.md")]

/// Runs a generic check against the unit enum of every shipped quantity type.
#[cfg(test)]
macro_rules! for_each_unit {
    ($check:ident) => {
        $check::<$crate::unit::LengthUnit>();
        $check::<$crate::unit::MassUnit>();
        $check::<$crate::unit::TimeUnit>();
        $check::<$crate::unit::AreaUnit>();
        $check::<$crate::unit::VolumeUnit>();
        $check::<$crate::unit::SpeedUnit>();
        $check::<$crate::unit::AccelerationUnit>();
        $check::<$crate::unit::ForceUnit>();
        $check::<$crate::unit::PressureUnit>();
        $check::<$crate::unit::EnergyUnit>();
        $check::<$crate::unit::PowerUnit>();
        $check::<$crate::unit::TemperatureUnit>();
        $check::<$crate::unit::TemperatureDeltaUnit>();
        $check::<$crate::unit::AngleUnit>();
        $check::<$crate::unit::AngularVelocityUnit>();
        $check::<$crate::unit::AngularAccelerationUnit>();
        $check::<$crate::unit::MassFlowRateUnit>();
        $check::<$crate::unit::FrequencyUnit>();
        $check::<$crate::unit::ElectricCurrentUnit>();
        $check::<$crate::unit::ElectricPotentialUnit>();
        $check::<$crate::unit::ElectricResistanceUnit>();
        $check::<$crate::unit::VolumeFlowUnit>();
        $check::<$crate::unit::DensityUnit>();
        $check::<$crate::unit::TorqueUnit>();
    };
}

pub mod convert;
pub mod dimension;
pub mod fmt;
pub mod parse;
pub mod prefix;
pub mod quantity;
pub mod relation;
pub mod unit;

pub use convert::{QuantityInfo, Rule, Unit, UnitDescriptor};
pub use dimension::Dimension;
pub use parse::{ParseError, ParseErrorKind};
pub use quantity::{Comparison, Quantity};
pub use relation::{Operator, Relation, RELATIONS};
pub use unit::*;

/// The largest difference between the base values of two quantities that still compare equal.
pub const EQUALITY_TOLERANCE: f64 = 1e-14;

#[cfg(test)]
mod tests {
    use super::*;

    /// Magnitudes exercised for every unit.
    const MAGNITUDES: [f64; 6] = [0.0, 1.0, -2.5, 0.1, 123.456, 1e-9];

    fn self_conversion_is_identity<U: Unit>() {
        for &unit in U::ALL {
            for value in MAGNITUDES {
                let q = Quantity::new(value, unit);
                let same = q.to(unit);
                assert_eq!(same.value(), value, "{:?}", unit);
                assert_eq!(same, q);
            }
        }
    }

    fn conversion_is_transitive<U: Unit>() {
        let q = Quantity::new(7.25, U::ALL[U::ALL.len() / 2]);
        for &a in U::ALL {
            for &b in U::ALL {
                let through = q.to(a).to(b).base_value();
                let direct = q.to(b).base_value();
                let scale = through.abs().max(direct.abs()).max(f64::MIN_POSITIVE);
                assert!(
                    (through - direct).abs() / scale <= 1e-9,
                    "{} via {:?} to {:?}: {} != {}", U::INFO.name, a, b, through, direct,
                );
            }
        }
    }

    fn text_round_trips<U: Unit>() {
        for &unit in U::ALL {
            for value in MAGNITUDES {
                let q = Quantity::new(value, unit);
                let text = q.to_string();
                let parsed = Quantity::<U>::parse(&text)
                    .unwrap_or_else(|err| panic!("`{}` failed to parse: {}", text, err));
                assert_eq!(parsed, q, "{}", text);
                assert_eq!(parsed.unit(), unit);
            }
        }
    }

    fn base_unit_round_trips<U: Unit>() {
        for &unit in U::ALL {
            let q = Quantity::new(3.0, unit);
            let back = q.to_base().to(unit);
            assert!(
                (back.value() - 3.0).abs() <= 1e-12,
                "{:?}: {}", unit, back.value(),
            );
        }
    }

    #[test]
    fn self_conversion() {
        for_each_unit!(self_conversion_is_identity);
    }

    #[test]
    fn transitivity() {
        for_each_unit!(conversion_is_transitive);
    }

    #[test]
    fn text_round_trip() {
        for_each_unit!(text_round_trips);
    }

    #[test]
    fn base_round_trip() {
        for_each_unit!(base_unit_round_trips);
    }

    #[test]
    fn cross_unit_equality() {
        assert_eq!(Length::new(1000.0, LengthUnit::Millimeter), Length::new(1.0, LengthUnit::Meter));
        assert_eq!(Mass::new(1.0, MassUnit::Kilogram), Mass::new(1000.0, MassUnit::Gram));
    }

    #[test]
    fn temperature_offsets() {
        assert_eq!(Temperature::new(0.0, TemperatureUnit::DegreeCelsius).base_value(), 273.15);
        assert_eq!(Temperature::new(32.0, TemperatureUnit::DegreeFahrenheit).base_value(), 273.15);
        assert_eq!(
            Temperature::new(0.0, TemperatureUnit::DegreeCelsius),
            Temperature::new(32.0, TemperatureUnit::DegreeFahrenheit),
        );

        // a difference is not shifted
        assert_eq!(TemperatureDelta::new(0.0, TemperatureDeltaUnit::DegreeCelsius).base_value(), 0.0);
    }

    #[test]
    fn parse_failures() {
        assert!(Length::try_parse("").is_none());
        assert!(Length::try_parse("5").is_none());
        assert!(Length::try_parse("5 xyz").is_none());
    }

    #[test]
    fn addition_units() {
        let sum = Length::new(1.0, LengthUnit::Meter) + Length::new(100.0, LengthUnit::Centimeter);
        assert_eq!(sum, Length::new(2.0, LengthUnit::Meter));
        assert_eq!(sum.unit(), LengthUnit::Meter);

        let sum = Length::new(1.0, LengthUnit::Meter) + Length::new(1.0, LengthUnit::Meter);
        assert_eq!(sum.unit(), LengthUnit::Meter);
    }

    #[test]
    fn concurrent_first_use() {
        let handles = (0..8)
            .map(|i| std::thread::spawn(move || {
                Torque::new(i as f64, TorqueUnit::PoundForceFoot).base_value()
            }))
            .collect::<Vec<_>>();

        for (i, handle) in handles.into_iter().enumerate() {
            let expected = i as f64 * prefix::POUND_FORCE * prefix::FOOT;
            assert!((handle.join().unwrap() - expected).abs() <= 1e-12);
        }
    }
}
