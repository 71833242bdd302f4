//! # Measure
//!
//! A magnitude of some numeric backend tagged with a unit.
//!
//! Every operation is pure and returns a new measure. Unit algebra runs
//! first, so a dimensionally illegal operation is rejected before the
//! backend is asked to do any arithmetic.
//!
//! Symbols never combine: the result of any arithmetic carries no overall
//! symbol until the caller attaches one with [`Measure::with_symbol`].
//! Origins are not checked either: a binary result takes the left
//! operand's origin.

use std::cmp::Ordering;
use std::fmt;

use crate::core::{MeasureConfig, Unit};
use crate::ports::{Numeric, Power};

use super::error::{MeasureError, MeasureResult};
use super::factory::FactoryId;

/// A magnitude paired with a unit and an optional display symbol
#[derive(Debug, Clone)]
pub struct Measure<N: Numeric> {
    value: N,
    unit: Unit,
    symbol: Option<String>,
    origin: FactoryId,
}

impl<N: Numeric> Measure<N> {
    pub(crate) fn from_parts(value: N, unit: Unit, symbol: Option<String>, origin: FactoryId) -> Self {
        Self {
            value,
            unit,
            symbol,
            origin,
        }
    }

    /// A new measure with this measure's origin, without a symbol
    fn derive(&self, value: N, unit: Unit) -> Self {
        Self {
            value,
            unit,
            symbol: None,
            origin: self.origin,
        }
    }

    /// Magnitude in the unit's base dimensions
    pub fn value(&self) -> &N {
        &self.value
    }

    pub fn into_value(self) -> N {
        self.value
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Overall display symbol, e.g. `"N"`
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// The factory that created this measure
    pub fn origin(&self) -> FactoryId {
        self.origin
    }

    pub fn is_dimensionless(&self) -> bool {
        self.unit.is_dimensionless()
    }

    fn require_same_unit(&self, other: &Self, operation: &'static str) -> MeasureResult<()> {
        if self.unit == other.unit {
            return Ok(());
        }
        tracing::trace!(operation, left = %self.unit, right = %other.unit, "rejected incompatible units");
        Err(MeasureError::IncompatibleUnits {
            operation,
            left: self.unit.clone(),
            right: other.unit.clone(),
        })
    }

    // ========================================================================
    // ADDITIVE OPERATIONS
    // ========================================================================

    /// Sum of two measures in the same unit
    pub fn plus(&self, other: &Self) -> MeasureResult<Self> {
        self.require_same_unit(other, "add")?;
        let value = self.value.add(&other.value)?;
        Ok(self.derive(value, self.unit.clone()))
    }

    /// Difference of two measures in the same unit
    pub fn minus(&self, other: &Self) -> MeasureResult<Self> {
        self.require_same_unit(other, "subtract")?;
        let value = self.value.sub(&other.value)?;
        Ok(self.derive(value, self.unit.clone()))
    }

    pub fn negate(&self) -> Self {
        self.derive(self.value.neg(), self.unit.clone())
    }

    // ========================================================================
    // MULTIPLICATIVE OPERATIONS
    // ========================================================================

    /// Multiply the magnitude by a plain number, keeping the unit
    pub fn scale(&self, factor: &N) -> MeasureResult<Self> {
        let value = self.value.mult(factor)?;
        Ok(self.derive(value, self.unit.clone()))
    }

    /// Product; the unit is the exponent-wise sum
    pub fn times(&self, other: &Self) -> MeasureResult<Self> {
        let unit = self.unit.multiply(&other.unit)?;
        let value = self.value.mult(&other.value)?;
        Ok(self.derive(value, unit))
    }

    /// Quotient; the unit is the exponent-wise difference
    ///
    /// Division by a zero magnitude follows the backend's semantics.
    pub fn per(&self, other: &Self) -> MeasureResult<Self> {
        let unit = self.unit.divide(&other.unit)?;
        let value = self.value.div(&other.value)?;
        Ok(self.derive(value, unit))
    }

    /// Integer power
    pub fn pow(&self, n: i32) -> MeasureResult<Self> {
        let unit = self.unit.power(n)?;
        let value = self.value.pow(Power::integer(n))?;
        Ok(self.derive(value, unit))
    }

    pub fn squared(&self) -> MeasureResult<Self> {
        self.pow(2)
    }

    pub fn cubed(&self) -> MeasureResult<Self> {
        self.pow(3)
    }

    pub fn inverse(&self) -> MeasureResult<Self> {
        self.pow(-1)
    }

    /// nth root; fails with `InexactRoot` unless every exponent divides by `n`
    ///
    /// The magnitude is delegated to the backend as `pow(value, 1/n)`.
    pub fn root(&self, n: i32) -> MeasureResult<Self> {
        let unit = self.unit.root(n)?;
        let value = if n == 1 {
            self.value.clone()
        } else {
            self.value.pow(Power::root(n))?
        };
        Ok(self.derive(value, unit))
    }

    pub fn sqrt(&self) -> MeasureResult<Self> {
        self.root(2)
    }

    pub fn cbrt(&self) -> MeasureResult<Self> {
        self.root(3)
    }

    // ========================================================================
    // COMPARISON
    // ========================================================================

    /// Order two measures in the same unit
    pub fn compare_to(&self, other: &Self) -> MeasureResult<Ordering> {
        self.require_same_unit(other, "compare")?;
        Ok(self.value.compare(&other.value))
    }

    pub fn lt(&self, other: &Self) -> MeasureResult<bool> {
        Ok(self.compare_to(other)? == Ordering::Less)
    }

    pub fn le(&self, other: &Self) -> MeasureResult<bool> {
        Ok(self.compare_to(other)? != Ordering::Greater)
    }

    pub fn gt(&self, other: &Self) -> MeasureResult<bool> {
        Ok(self.compare_to(other)? == Ordering::Greater)
    }

    pub fn ge(&self, other: &Self) -> MeasureResult<bool> {
        Ok(self.compare_to(other)? != Ordering::Less)
    }

    // ========================================================================
    // SYMBOLS & CONVERSION
    // ========================================================================

    /// Copy of this measure carrying `symbol`
    pub fn with_symbol(&self, symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            ..self.clone()
        }
    }

    /// How many `unit`s fit in this measure
    ///
    /// This is unit conversion: `length.value_in(&feet)` is the length in feet.
    pub fn value_in(&self, unit: &Self) -> MeasureResult<N> {
        self.require_same_unit(unit, "express")?;
        Ok(self.value.div(&unit.value)?)
    }

    /// Render this measure expressed in `unit`, e.g. `"10 ft"`
    pub fn format_in(&self, unit: &Self) -> MeasureResult<String> {
        let value = self.value_in(unit)?.format();
        let label = match &unit.symbol {
            Some(symbol) => symbol.clone(),
            None => unit.unit.format_with(&MeasureConfig::default().unit_format),
        };
        if label.is_empty() {
            Ok(value)
        } else {
            Ok(format!("{} {}", value, label))
        }
    }

    /// Transform the magnitude without touching the unit
    ///
    /// No dimensional check happens here; callers are responsible for
    /// `f` being meaningful in this unit.
    pub fn map_value(&self, f: impl FnOnce(&N) -> N) -> Self {
        self.derive(f(&self.value), self.unit.clone())
    }

    /// Render with explicit presentation settings
    pub fn format_with(&self, config: &MeasureConfig) -> String {
        let value = self.value.format();
        let unit = match &self.symbol {
            Some(symbol) => symbol.clone(),
            None => self.unit.format_with(&config.unit_format),
        };
        if unit.is_empty() {
            value
        } else {
            format!("{}{}{}", value, config.value_separator, unit)
        }
    }
}

impl<N: Numeric> PartialEq for Measure<N> {
    /// Same unit and equal magnitude; symbols and origin are ignored
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.value.compare(&other.value) == Ordering::Equal
    }
}

impl<N: Numeric> fmt::Display for Measure<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(&MeasureConfig::default()))
    }
}
