//! # Uncertain Backend
//!
//! A best value with an absolute standard uncertainty, `v ± u`.
//!
//! Uncertainties propagate to first order, treating operands as
//! independent:
//!
//! ```text
//! a ± b        u = hypot(ua, ub)
//! a · b        u = hypot(b·ua, a·ub)
//! a / b        u = hypot(ua/b, a·ub/b²)
//! a^p          u = |p · a^(p-1)| · ua
//! ```
//!
//! Division by a value that is exactly zero reports `DivisionByZero`, as
//! does a negative power of zero. A root of a zero with non-zero
//! uncertainty reports `Domain`, since the derivative is unbounded there;
//! an exact value, or the power 0, always yields an exact result.
//! Ordering looks at the best value only.

use std::cmp::Ordering;
use std::fmt;

use crate::ports::{Numeric, NumericError, NumericResult, Power};

/// A value with an absolute uncertainty (always non-negative)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uncertain {
    value: f64,
    uncertainty: f64,
}

impl Uncertain {
    pub fn new(value: f64, uncertainty: f64) -> Self {
        Self {
            value,
            uncertainty: uncertainty.abs(),
        }
    }

    /// A value known exactly
    pub fn exact(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn uncertainty(&self) -> f64 {
        self.uncertainty
    }

    /// `uncertainty / |value|`; infinite for an uncertain zero
    pub fn relative_uncertainty(&self) -> f64 {
        self.uncertainty / self.value.abs()
    }
}

impl Numeric for Uncertain {
    fn one() -> Self {
        Self::exact(1.0)
    }

    fn neg(&self) -> Self {
        Self::new(-self.value, self.uncertainty)
    }

    fn add(&self, rhs: &Self) -> NumericResult<Self> {
        Ok(Self::new(
            self.value + rhs.value,
            self.uncertainty.hypot(rhs.uncertainty),
        ))
    }

    fn sub(&self, rhs: &Self) -> NumericResult<Self> {
        Ok(Self::new(
            self.value - rhs.value,
            self.uncertainty.hypot(rhs.uncertainty),
        ))
    }

    fn mult(&self, rhs: &Self) -> NumericResult<Self> {
        Ok(Self::new(
            self.value * rhs.value,
            (rhs.value * self.uncertainty).hypot(self.value * rhs.uncertainty),
        ))
    }

    fn div(&self, rhs: &Self) -> NumericResult<Self> {
        if rhs.value == 0.0 {
            return Err(NumericError::DivisionByZero);
        }
        let value = self.value / rhs.value;
        let uncertainty = (self.uncertainty / rhs.value)
            .hypot(self.value * rhs.uncertainty / (rhs.value * rhs.value));
        Ok(Self::new(value, uncertainty))
    }

    fn pow(&self, power: Power) -> NumericResult<Self> {
        let p = power.as_f64();
        if self.value == 0.0 && p < 0.0 {
            return Err(NumericError::DivisionByZero);
        }
        if self.value < 0.0 && power.denominator() % 2 == 0 {
            return Err(NumericError::Domain(format!(
                "even root of negative value {}",
                self.value
            )));
        }

        let value = Numeric::pow(&self.value, power)?;
        if p == 0.0 || self.uncertainty == 0.0 {
            return Ok(Self::exact(value));
        }
        if self.value == 0.0 && p < 1.0 {
            return Err(NumericError::Domain(format!(
                "power {} of an uncertain zero has an unbounded derivative",
                power
            )));
        }

        let slope = if self.value == 0.0 {
            // 0^(p-1) is 1 at p = 1 and 0 above it
            p * 0.0_f64.powf(p - 1.0)
        } else {
            p * value / self.value
        };
        Ok(Self::new(value, slope.abs() * self.uncertainty))
    }

    fn compare(&self, rhs: &Self) -> Ordering {
        self.value.total_cmp(&rhs.value)
    }

    fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Uncertain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.uncertainty == 0.0 {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} ± {}", self.value, self.uncertainty)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MeasureType;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_uncertain_add_sub() {
        let a = Uncertain::new(10.0, 3.0);
        let b = Uncertain::new(5.0, 4.0);

        let sum = Numeric::add(&a, &b).unwrap();
        assert_eq!(sum.value(), 15.0);
        assert!(close(sum.uncertainty(), 5.0));

        let diff = Numeric::sub(&a, &b).unwrap();
        assert_eq!(diff.value(), 5.0);
        assert!(close(diff.uncertainty(), 5.0));
    }

    #[test]
    fn test_uncertain_mult_div() {
        let a = Uncertain::new(2.0, 0.1);
        let b = Uncertain::new(4.0, 0.2);

        let product = Numeric::mult(&a, &b).unwrap();
        assert_eq!(product.value(), 8.0);
        // relative uncertainties 5% and 5% combine to 5·√2 %
        assert!(close(product.relative_uncertainty(), 0.05 * 2f64.sqrt()));

        let quotient = Numeric::div(&a, &b).unwrap();
        assert_eq!(quotient.value(), 0.5);
        assert!(close(quotient.relative_uncertainty(), 0.05 * 2f64.sqrt()));
    }

    #[test]
    fn test_uncertain_division_by_zero() {
        let a = Uncertain::new(1.0, 0.1);
        let zero = Uncertain::new(0.0, 0.1);

        assert_eq!(Numeric::div(&a, &zero), Err(NumericError::DivisionByZero));
        assert_eq!(
            Numeric::pow(&zero, Power::integer(-1)),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_uncertain_pow() {
        let a = Uncertain::new(3.0, 0.1);

        let squared = Numeric::pow(&a, Power::integer(2)).unwrap();
        assert_eq!(squared.value(), 9.0);
        assert!(close(squared.uncertainty(), 0.6));

        let root = Numeric::pow(&Uncertain::new(16.0, 0.8), Power::root(2)).unwrap();
        assert_eq!(root.value(), 4.0);
        assert!(close(root.uncertainty(), 0.1));

        assert!(matches!(
            Numeric::pow(&Uncertain::exact(-4.0), Power::root(2)),
            Err(NumericError::Domain(_))
        ));
    }

    #[test]
    fn test_uncertain_pow_at_zero() {
        let exact_zero = Uncertain::exact(0.0);
        let fuzzy_zero = Uncertain::new(0.0, 0.1);

        let root = Numeric::pow(&exact_zero, Power::root(2)).unwrap();
        assert_eq!(root, Uncertain::exact(0.0));

        let unit_power = Numeric::pow(&fuzzy_zero, Power::integer(0)).unwrap();
        assert_eq!(unit_power, Uncertain::exact(1.0));

        let first = Numeric::pow(&fuzzy_zero, Power::integer(1)).unwrap();
        assert_eq!(first.value(), 0.0);
        assert!(close(first.uncertainty(), 0.1));

        let squared = Numeric::pow(&fuzzy_zero, Power::integer(2)).unwrap();
        assert_eq!(squared, Uncertain::exact(0.0));

        assert!(matches!(
            Numeric::pow(&fuzzy_zero, Power::root(2)),
            Err(NumericError::Domain(_))
        ));
    }

    #[test]
    fn test_uncertain_sqrt_of_exact_zero_area() {
        let ty = MeasureType::<Uncertain>::new();
        let meters = ty.dimension("length", Some("m"));
        let area = ty
            .of(Uncertain::exact(0.0), &meters.squared().unwrap(), None)
            .unwrap();

        let side = area.sqrt().unwrap();
        assert_eq!(side.value().value(), 0.0);
        assert_eq!(side.value().uncertainty(), 0.0);
        assert_eq!(side.unit(), meters.unit());

        let dimensionless = ty.dimensionless(Uncertain::new(0.0, 0.1));
        let one = dimensionless.pow(0).unwrap();
        assert_eq!(one.value().value(), 1.0);
        assert!(!one.value().uncertainty().is_nan());
    }

    #[test]
    fn test_uncertain_format() {
        assert_eq!(Uncertain::exact(2.0).to_string(), "2");
        assert_eq!(Uncertain::new(2.0, -0.5).to_string(), "2 ± 0.5");
    }

    #[test]
    fn test_uncertain_measures() {
        let ty = MeasureType::<Uncertain>::new();
        let meters = ty.dimension("length", Some("m"));
        let seconds = ty.dimension("time", Some("s"));

        let distance = ty.of(Uncertain::new(100.0, 1.0), &meters, None).unwrap();
        let time = ty.of(Uncertain::new(10.0, 0.0), &seconds, None).unwrap();
        let speed = distance.per(&time).unwrap();

        assert_eq!(speed.value().value(), 10.0);
        assert!(close(speed.value().uncertainty(), 0.1));
        assert_eq!(speed.with_symbol("m/s").to_string(), "10 ± 0.1 m/s");
    }
}
