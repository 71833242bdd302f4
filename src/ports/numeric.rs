//! # Numeric Port
//!
//! The contract a magnitude type must satisfy to live inside a measure.
//!
//! The engine never inspects a magnitude except through this trait, so any
//! number-like type works: floats, exact rationals, values with an
//! uncertainty, intervals.
//!
//! Division by zero and other domain failures are backend-defined. A
//! backend either follows its own semantics (IEEE floats return infinities)
//! or reports a [`NumericError`]; the engine passes that error through
//! untouched.

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

/// Result alias for backend arithmetic
pub type NumericResult<T> = Result<T, NumericError>;

/// Failure reported by a numeric backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("arithmetic overflow")]
    Overflow,

    /// The backend cannot represent the exact result of a fractional power
    #[error("power {power} has no exact result in this numeric type")]
    InexactPower { power: Power },

    /// Any other backend-specific domain failure
    #[error("numeric domain error: {0}")]
    Domain(String),
}

/// A rational exponent `numerator / denominator`
///
/// Integer powers have denominator 1; `root(n)` is `1/n`.
/// The denominator is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Power {
    numerator: i32,
    denominator: i32,
}

impl Power {
    /// `x^n`
    pub fn integer(n: i32) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }

    /// `x^(1/n)`; `n` must be positive
    pub fn root(n: i32) -> Self {
        debug_assert!(n > 0, "root index must be positive");
        Self {
            numerator: 1,
            denominator: n.max(1),
        }
    }

    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    pub fn denominator(&self) -> i32 {
        self.denominator
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    pub fn as_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Arithmetic a magnitude type provides to the measure engine
///
/// Implementors document their own division-by-zero behaviour.
pub trait Numeric: Clone + fmt::Debug + Send + Sync + 'static {
    /// Multiplicative identity
    fn one() -> Self;

    fn neg(&self) -> Self;

    fn add(&self, rhs: &Self) -> NumericResult<Self>;

    fn sub(&self, rhs: &Self) -> NumericResult<Self>;

    fn mult(&self, rhs: &Self) -> NumericResult<Self>;

    fn div(&self, rhs: &Self) -> NumericResult<Self>;

    /// Raise to a (possibly fractional) power
    fn pow(&self, power: Power) -> NumericResult<Self>;

    /// Total order used by measure comparison
    fn compare(&self, rhs: &Self) -> Ordering;

    /// Human-readable rendering of the magnitude
    fn format(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_display() {
        assert_eq!(Power::integer(-2).to_string(), "-2");
        assert_eq!(Power::root(3).to_string(), "1/3");
    }

    #[test]
    fn test_power_as_f64() {
        assert_eq!(Power::integer(2).as_f64(), 2.0);
        assert_eq!(Power::root(2).as_f64(), 0.5);
        assert!(Power::integer(3).is_integer());
        assert!(!Power::root(2).is_integer());
    }
}
