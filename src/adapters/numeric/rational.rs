//! # Rational Backend
//!
//! Exact arbitrary-precision fractions (`num_rational::BigRational`).
//!
//! Error behaviour:
//! - division by zero, and a negative power of zero, report `DivisionByZero`
//! - a fractional power succeeds only when the root is exact
//!   (`4/9` has a square root, `2` does not); otherwise `InexactPower`
//! - an even root of a negative value reports `Domain`

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::ports::{Numeric, NumericError, NumericResult, Power};

/// Build `numer / denom`, rejecting a zero denominator
pub fn rational(numer: i64, denom: i64) -> NumericResult<BigRational> {
    if denom == 0 {
        return Err(NumericError::DivisionByZero);
    }
    Ok(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
}

fn integer_power(base: &BigRational, n: i32) -> NumericResult<BigRational> {
    let k = n.unsigned_abs();
    let numer = base.numer().pow(k);
    let denom = base.denom().pow(k);
    if n >= 0 {
        Ok(BigRational::new(numer, denom))
    } else if numer.is_zero() {
        Err(NumericError::DivisionByZero)
    } else {
        Ok(BigRational::new(denom, numer))
    }
}

fn exact_root(value: &BigRational, n: u32, power: Power) -> NumericResult<BigRational> {
    if value.is_negative() && n % 2 == 0 {
        return Err(NumericError::Domain(format!(
            "even root of negative value {}",
            value
        )));
    }

    let numer_root = value.numer().nth_root(n);
    let denom_root = value.denom().nth_root(n);
    if &numer_root.pow(n) != value.numer() || &denom_root.pow(n) != value.denom() {
        return Err(NumericError::InexactPower { power });
    }

    Ok(BigRational::new(numer_root, denom_root))
}

impl Numeric for BigRational {
    fn one() -> Self {
        <BigRational as One>::one()
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
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    fn pow(&self, power: Power) -> NumericResult<Self> {
        let raised = integer_power(self, power.numerator())?;
        if power.is_integer() {
            return Ok(raised);
        }
        exact_root(&raised, power.denominator() as u32, power)
    }

    fn compare(&self, rhs: &Self) -> Ordering {
        self.cmp(rhs)
    }

    fn format(&self) -> String {
        self.to_string()
    }
}
