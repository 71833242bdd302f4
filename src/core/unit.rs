//! # Unit Algebra
//!
//! A unit is a normalized map from dimension to non-zero exponent:
//! `{length: 1, time: -2}` is an acceleration, `{}` is dimensionless.
//!
//! - multiply: exponent-wise sum
//! - divide: exponent-wise difference
//! - power: exponent-wise scalar multiple
//! - root: exponent-wise exact division
//!
//! Every operation is checked against the exponent domain and returns a
//! [`UnitError`] instead of producing a clamped or truncated unit.
//!
//! A unit may also carry a display symbol per dimension (`length -> "m"`).
//! Symbols are presentation only: equality and hashing ignore them, and
//! algebra drops them because there is no sound rule for merging two
//! symbol tables.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::config::{ExponentStyle, UnitFormat};
use super::dimension::Dimension;
use super::error::{UnitError, UnitResult};
use super::exponent::Exponent;

/// A dimension-exponent vector with optional per-dimension symbols
///
/// Invariant: no stored exponent is zero.
#[derive(Debug, Clone, Default)]
pub struct Unit {
    exponents: BTreeMap<Dimension, Exponent>,
    symbols: BTreeMap<Dimension, String>,
}

impl Unit {
    /// The empty unit (identity of multiply)
    pub fn dimensionless() -> Self {
        Self::default()
    }

    /// A single dimension at exponent 1
    pub fn base(dimension: impl Into<Dimension>) -> Self {
        let mut exponents = BTreeMap::new();
        exponents.insert(dimension.into(), Exponent::ONE);
        Self {
            exponents,
            symbols: BTreeMap::new(),
        }
    }

    /// A single dimension at exponent 1, labelled with a display symbol
    pub fn base_with_symbol(dimension: impl Into<Dimension>, symbol: impl Into<String>) -> Self {
        let dimension = dimension.into();
        let mut unit = Self::base(dimension.clone());
        unit.symbols.insert(dimension, symbol.into());
        unit
    }

    /// Build a unit from explicit `(dimension, exponent)` pairs
    ///
    /// Repeated dimensions are summed and zero totals are dropped.
    pub fn from_exponents<D, I>(pairs: I) -> UnitResult<Self>
    where
        D: Into<Dimension>,
        I: IntoIterator<Item = (D, i32)>,
    {
        let mut totals: BTreeMap<Dimension, i64> = BTreeMap::new();
        for (dimension, exponent) in pairs {
            *totals.entry(dimension.into()).or_insert(0) += exponent as i64;
        }

        let mut exponents = BTreeMap::new();
        for (dimension, total) in totals {
            if total == 0 {
                continue;
            }
            let exponent = i32::try_from(total)
                .ok()
                .and_then(|value| Exponent::new(value).ok())
                .ok_or_else(|| UnitError::ExponentOutOfRange {
                    dimension: dimension.to_string(),
                    exponent: total,
                })?;
            exponents.insert(dimension, exponent);
        }

        Ok(Self {
            exponents,
            symbols: BTreeMap::new(),
        })
    }

    /// Label one of this unit's dimensions with a display symbol
    ///
    /// Dimensions the unit does not contain are ignored.
    pub fn with_dimension_symbol(mut self, dimension: &str, symbol: impl Into<String>) -> Self {
        if let Some((key, _)) = self.exponents.get_key_value(dimension) {
            let key = key.clone();
            self.symbols.insert(key, symbol.into());
        }
        self
    }

    /// Exponent of a dimension, zero if absent
    pub fn exponent(&self, dimension: &str) -> Exponent {
        self.exponents
            .get(dimension)
            .copied()
            .unwrap_or(Exponent::ZERO)
    }

    /// Iterate `(dimension, exponent)` pairs in dimension-name order
    pub fn dimensions(&self) -> impl Iterator<Item = (&Dimension, Exponent)> + '_ {
        self.exponents.iter().map(|(d, e)| (d, *e))
    }

    /// Display symbol of a dimension, if one is attached
    pub fn symbol(&self, dimension: &str) -> Option<&str> {
        self.symbols.get(dimension).map(String::as_str)
    }

    /// Number of dimensions with a non-zero exponent
    pub fn len(&self) -> usize {
        self.exponents.len()
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Same exponent vector (symbols ignored)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.exponents == other.exponents
    }

    // ========================================================================
    // ALGEBRA
    // ========================================================================

    /// Product of two units: exponent-wise sum
    pub fn multiply(&self, other: &Unit) -> UnitResult<Unit> {
        self.combine(other, Exponent::checked_add, |l, r| l + r)
    }

    /// Quotient of two units: exponent-wise difference
    pub fn divide(&self, other: &Unit) -> UnitResult<Unit> {
        self.combine(other, Exponent::checked_sub, |l, r| l - r)
    }

    /// Raise to an integer power
    ///
    /// `power(0)` is dimensionless for every unit, including ones whose
    /// exponents sit at the edge of the domain. `power(1)` is the identity.
    pub fn power(&self, n: i32) -> UnitResult<Unit> {
        if !Exponent::contains(n) {
            return Err(UnitError::PowerOutOfRange { power: n });
        }
        match n {
            0 => return Ok(Unit::dimensionless()),
            1 => return Ok(self.clone()),
            _ => {}
        }

        let mut exponents = BTreeMap::new();
        for (dimension, &exponent) in &self.exponents {
            let scaled = exponent
                .checked_mul(n)
                .ok_or_else(|| UnitError::ExponentOutOfRange {
                    dimension: dimension.to_string(),
                    exponent: exponent.value() as i64 * n as i64,
                })?;
            exponents.insert(dimension.clone(), scaled);
        }

        Ok(Unit {
            exponents,
            symbols: BTreeMap::new(),
        })
    }

    /// Take the nth root
    ///
    /// Legal only when every exponent is a multiple of `n`. `root(1)` is the
    /// identity.
    pub fn root(&self, n: i32) -> UnitResult<Unit> {
        if n < 1 || !Exponent::contains(n) {
            return Err(UnitError::InvalidRoot { root: n });
        }
        if n == 1 {
            return Ok(self.clone());
        }

        let mut exponents = BTreeMap::new();
        for (dimension, &exponent) in &self.exponents {
            let reduced = exponent.checked_div(n).ok_or_else(|| {
                tracing::trace!(%dimension, %exponent, root = n, "rejected inexact unit root");
                UnitError::InexactRoot {
                    dimension: dimension.to_string(),
                    exponent: exponent.value(),
                    root: n,
                }
            })?;
            exponents.insert(dimension.clone(), reduced);
        }

        Ok(Unit {
            exponents,
            symbols: BTreeMap::new(),
        })
    }

    /// Whether `power(n)` would succeed
    pub fn can_raise_to(&self, n: i32) -> bool {
        self.power(n).is_ok()
    }

    /// Every power this unit may be raised to without leaving the domain
    ///
    /// Always contains -1, 0 and 1.
    pub fn allowed_powers(&self) -> Vec<i32> {
        (Exponent::MIN.value()..=Exponent::MAX.value())
            .filter(|&n| self.can_raise_to(n))
            .collect()
    }

    /// Whether `root(n)` would succeed
    pub fn can_take_root(&self, n: i32) -> bool {
        self.root(n).is_ok()
    }

    fn combine(
        &self,
        other: &Unit,
        checked: impl Fn(Exponent, Exponent) -> Option<Exponent>,
        raw: impl Fn(i64, i64) -> i64,
    ) -> UnitResult<Unit> {
        let keys: BTreeSet<&Dimension> = self.exponents.keys().chain(other.exponents.keys()).collect();

        let mut exponents = BTreeMap::new();
        for dimension in keys {
            let left = self.exponent(dimension.as_str());
            let right = other.exponent(dimension.as_str());
            let result = checked(left, right).ok_or_else(|| UnitError::ExponentOutOfRange {
                dimension: dimension.to_string(),
                exponent: raw(left.value() as i64, right.value() as i64),
            })?;
            if !result.is_zero() {
                exponents.insert(dimension.clone(), result);
            }
        }

        Ok(Unit {
            exponents,
            symbols: BTreeMap::new(),
        })
    }

    // ========================================================================
    // FORMATTING
    // ========================================================================

    /// Render the dimension/exponent pairs, e.g. `m·s⁻¹`
    ///
    /// Positive exponents come first, then negative ones. A dimension's
    /// symbol is used when present, else its name. The empty unit renders
    /// as the empty string.
    pub fn format_with(&self, format: &UnitFormat) -> String {
        let factor = |dimension: &Dimension, exponent: Exponent| {
            let label = self.symbol(dimension.as_str()).unwrap_or(dimension.as_str());
            match format.exponent_style {
                ExponentStyle::Superscript => format!("{}{}", label, exponent.to_superscript()),
                ExponentStyle::Caret if exponent == Exponent::ONE => label.to_string(),
                ExponentStyle::Caret => format!("{}^{}", label, exponent),
            }
        };

        let (positive, negative): (Vec<_>, Vec<_>) =
            self.dimensions().partition(|(_, exponent)| exponent.value() > 0);

        positive
            .into_iter()
            .chain(negative)
            .map(|(dimension, exponent)| factor(dimension, exponent))
            .collect::<Vec<_>>()
            .join(&format.separator)
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.exponents == other.exponents
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.exponents.hash(state);
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        f.write_str(&self.format_with(&UnitFormat::default()))
    }
}
