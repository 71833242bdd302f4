//! # Float Backend
//!
//! `f64` magnitudes with plain IEEE-754 semantics.
//!
//! Never reports an error: division by zero yields `±inf` or `NaN`, and so
//! do even roots of negative numbers. Comparison uses `f64::total_cmp`, so
//! `NaN` sorts after every number and `-0.0 < 0.0`.
//!
//! Also provides the standard `f64` measure type, which carries the
//! rounding and transcendental operations a float user expects.

use std::cmp::Ordering;
use std::sync::OnceLock;

use crate::engine::{require_dimensionless, Measure, MeasureResult, MeasureType};
use crate::ports::{Numeric, NumericResult, Power};

impl Numeric for f64 {
    fn one() -> Self {
        1.0
    }

    fn neg(&self) -> Self {
        -self
    }

    fn add(&self, rhs: &Self) -> NumericResult<Self> {
        Ok(self + rhs)
    }

    fn sub(&self, rhs: &Self) -> NumericResult<Self> {
        Ok(self - rhs)
    }

    fn mult(&self, rhs: &Self) -> NumericResult<Self> {
        Ok(self * rhs)
    }

    fn div(&self, rhs: &Self) -> NumericResult<Self> {
        Ok(self / rhs)
    }

    fn pow(&self, power: Power) -> NumericResult<Self> {
        if power.is_integer() {
            return Ok(self.powi(power.numerator()));
        }
        let value = match (power.numerator(), power.denominator()) {
            (1, 2) => self.sqrt(),
            (1, 3) => self.cbrt(),
            // Odd roots of negatives are real; powf would return NaN.
            (1, n) if n % 2 == 1 && *self < 0.0 => -(-self).powf(power.as_f64()),
            _ => self.powf(power.as_f64()),
        };
        Ok(value)
    }

    fn compare(&self, rhs: &Self) -> Ordering {
        self.total_cmp(rhs)
    }

    fn format(&self) -> String {
        format!("{}", self)
    }
}

fn dimensionless_fn(
    name: &'static str,
    f: fn(f64) -> f64,
) -> impl Fn(&Measure<f64>) -> MeasureResult<Measure<f64>> + Send + Sync + 'static {
    move |measure: &Measure<f64>| {
        require_dimensionless(measure, name)?;
        Ok(measure.map_value(|v| f(*v)))
    }
}

/// Build the standard `f64` measure type
///
/// Extra operations on top of the built-ins:
/// - any unit: `abs`, `floor`, `ceil`, `round`, `trunc`
/// - dimensionless only: `sin`, `cos`, `tan`, `exp`, `ln`
pub fn measure_type() -> MeasureType<f64> {
    MeasureType::builder()
        .operation("abs", |m: &Measure<f64>| Ok(m.map_value(|v| v.abs())))
        .operation("floor", |m: &Measure<f64>| Ok(m.map_value(|v| v.floor())))
        .operation("ceil", |m: &Measure<f64>| Ok(m.map_value(|v| v.ceil())))
        .operation("round", |m: &Measure<f64>| Ok(m.map_value(|v| v.round())))
        .operation("trunc", |m: &Measure<f64>| Ok(m.map_value(|v| v.trunc())))
        .operation("sin", dimensionless_fn("sin", f64::sin))
        .operation("cos", dimensionless_fn("cos", f64::cos))
        .operation("tan", dimensionless_fn("tan", f64::tan))
        .operation("exp", dimensionless_fn("exp", f64::exp))
        .operation("ln", dimensionless_fn("ln", f64::ln))
        .build()
}

/// The process-wide standard `f64` measure type, built on first use
pub fn measures() -> &'static MeasureType<f64> {
    static MEASURES: OnceLock<MeasureType<f64>> = OnceLock::new();
    MEASURES.get_or_init(measure_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MeasureError;

    #[test]
    fn test_float_arithmetic() {
        assert_eq!(<f64 as Numeric>::add(&2.0, &3.0), Ok(5.0));
        assert_eq!(<f64 as Numeric>::sub(&2.0, &3.0), Ok(-1.0));
        assert_eq!(<f64 as Numeric>::mult(&2.0, &3.0), Ok(6.0));
        assert_eq!(<f64 as Numeric>::div(&3.0, &2.0), Ok(1.5));
        assert_eq!(<f64 as Numeric>::neg(&2.0), -2.0);
        assert_eq!(<f64 as Numeric>::one(), 1.0);
    }

    #[test]
    fn test_float_division_by_zero_is_infinite() {
        let result = <f64 as Numeric>::div(&1.0, &0.0).unwrap();
        assert!(result.is_infinite());
    }

    #[test]
    fn test_float_pow() {
        assert_eq!(<f64 as Numeric>::pow(&3.0, Power::integer(2)), Ok(9.0));
        assert_eq!(<f64 as Numeric>::pow(&2.0, Power::integer(-1)), Ok(0.5));
        assert_eq!(<f64 as Numeric>::pow(&16.0, Power::root(2)), Ok(4.0));
        assert!((<f64 as Numeric>::pow(&-27.0, Power::root(3)).unwrap() + 3.0).abs() < 1e-12);
        assert!((<f64 as Numeric>::pow(&-32.0, Power::root(5)).unwrap() + 2.0).abs() < 1e-12);
        assert!(<f64 as Numeric>::pow(&-4.0, Power::root(2)).unwrap().is_nan());
    }

    #[test]
    fn test_float_compare_and_format() {
        assert_eq!(<f64 as Numeric>::compare(&1.0, &2.0), Ordering::Less);
        assert_eq!(<f64 as Numeric>::compare(&f64::NAN, &1.0), Ordering::Greater);
        assert_eq!(<f64 as Numeric>::format(&6.0), "6");
        assert_eq!(<f64 as Numeric>::format(&0.25), "0.25");
    }

    #[test]
    fn test_standard_operations() {
        let ty = measure_type();
        let meters = ty.dimension("length", Some("m"));
        let negative = ty.of(-2.6, &meters, None).unwrap();

        assert_eq!(*ty.apply("abs", &negative).unwrap().value(), 2.6);
        assert_eq!(*ty.apply("floor", &negative).unwrap().value(), -3.0);
        assert_eq!(*ty.apply("ceil", &negative).unwrap().value(), -2.0);
        assert_eq!(*ty.apply("round", &negative).unwrap().value(), -3.0);
        assert_eq!(*ty.apply("trunc", &negative).unwrap().value(), -2.0);
        assert_eq!(ty.apply("abs", &negative).unwrap().unit(), meters.unit());
    }

    #[test]
    fn test_trig_requires_dimensionless() {
        let ty = measure_type();
        let angle = ty.dimensionless(0.0);

        assert_eq!(*ty.apply("sin", &angle).unwrap().value(), 0.0);
        assert_eq!(*ty.apply("cos", &angle).unwrap().value(), 1.0);
        assert_eq!(*ty.apply("exp", &angle).unwrap().value(), 1.0);

        let meters = ty.dimension("length", None);
        match ty.apply("sin", &meters) {
            Err(MeasureError::NotDimensionless { operation, .. }) => assert_eq!(operation, "sin"),
            other => panic!("Expected NotDimensionless, got {:?}", other),
        }
    }

    #[test]
    fn test_measures_is_shared() {
        let a = measures();
        let b = measures();

        assert_eq!(a.id(), b.id());
        assert!(a.has_operation("abs"));
    }
}
