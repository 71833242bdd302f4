//! # Exponent Domain
//!
//! The bounded set of integer powers a dimension may carry inside a unit.
//!
//! The range is symmetric, `-5..=5`. Every named SI derived unit fits; the
//! largest magnitude is `s⁴` in the farad (`kg⁻¹·m⁻²·s⁴·A²`).
//!
//! All arithmetic is checked: it returns `None` rather than wrapping or
//! clamping, and the unit layer turns that into a descriptive error.

use std::fmt;
use std::ops::Neg;

/// Error for an integer that does not fit the exponent domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("exponent {0} is outside the supported range {min}..={max}", min = Exponent::MIN, max = Exponent::MAX)]
pub struct ExponentRangeError(pub i32);

/// An integer power of a dimension, bounded to `Exponent::MIN..=Exponent::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Exponent(i8);

impl Exponent {
    /// Smallest representable exponent
    pub const MIN: Exponent = Exponent(-5);

    /// Largest representable exponent
    pub const MAX: Exponent = Exponent(5);

    pub const ZERO: Exponent = Exponent(0);
    pub const ONE: Exponent = Exponent(1);

    /// Create an exponent, rejecting values outside the domain
    pub fn new(value: i32) -> Result<Self, ExponentRangeError> {
        if Self::contains(value) {
            Ok(Exponent(value as i8))
        } else {
            Err(ExponentRangeError(value))
        }
    }

    /// Whether `value` lies inside the domain
    pub fn contains(value: i32) -> bool {
        (Self::MIN.0 as i32..=Self::MAX.0 as i32).contains(&value)
    }

    /// The exponent as a plain integer
    pub fn value(self) -> i32 {
        self.0 as i32
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `self + rhs`, or `None` if the sum leaves the domain
    pub fn checked_add(self, rhs: Exponent) -> Option<Exponent> {
        Self::new(self.value() + rhs.value()).ok()
    }

    /// `self - rhs`, or `None` if the difference leaves the domain
    pub fn checked_sub(self, rhs: Exponent) -> Option<Exponent> {
        Self::new(self.value() - rhs.value()).ok()
    }

    /// `self * k`, or `None` if the product leaves the domain
    pub fn checked_mul(self, k: i32) -> Option<Exponent> {
        self.value().checked_mul(k).and_then(|v| Self::new(v).ok())
    }

    /// `self / k`, or `None` if `k` is zero or does not divide `self` evenly
    ///
    /// This backs unit roots: the nth root of a unit exists only when every
    /// exponent is a multiple of n.
    pub fn checked_div(self, k: i32) -> Option<Exponent> {
        if k == 0 || self.value() % k != 0 {
            return None;
        }
        Self::new(self.value() / k).ok()
    }

    /// Render as superscript digits, e.g. `⁻²`. Renders nothing for 1.
    pub fn to_superscript(self) -> String {
        if self.0 == 1 {
            return String::new();
        }
        self.value()
            .to_string()
            .chars()
            .map(|c| match c {
                '-' => '⁻',
                '0' => '⁰',
                '1' => '¹',
                '2' => '²',
                '3' => '³',
                '4' => '⁴',
                '5' => '⁵',
                '6' => '⁶',
                '7' => '⁷',
                '8' => '⁸',
                '9' => '⁹',
                other => other,
            })
            .collect()
    }
}

impl Neg for Exponent {
    type Output = Exponent;

    // The domain is symmetric, so negation never leaves it.
    fn neg(self) -> Exponent {
        Exponent(-self.0)
    }
}

impl TryFrom<i32> for Exponent {
    type Error = ExponentRangeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Exponent::new(value)
    }
}

impl From<Exponent> for i32 {
    fn from(exponent: Exponent) -> i32 {
        exponent.value()
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
