//! # Measure Type
//!
//! The closed family of constructors and operations for one numeric backend.
//!
//! A `MeasureType<N>` wires together:
//! - constructors (`dimension`, `dimensionless`, `of`)
//! - the measure arithmetic, pre-bound as static-style helpers
//! - caller-supplied named operations (the extension point)
//! - presentation config
//!
//! It holds no mutable state after `build()`, so one instance can be
//! shared freely across threads.

use std::any::Any;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::core::{Dimension, MeasureConfig, Unit};
use crate::ports::Numeric;
use crate::units::Prefix;

use super::error::{MeasureError, MeasureResult};
use super::measure::Measure;
use super::operations::Operations;

static NEXT_FACTORY_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a measure type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FactoryId(u64);

impl FactoryId {
    fn next() -> Self {
        Self(NEXT_FACTORY_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Builder for a [`MeasureType`]
pub struct MeasureTypeBuilder<N: Numeric> {
    config: MeasureConfig,
    operations: Operations<N>,
}

impl<N: Numeric> MeasureTypeBuilder<N> {
    fn new() -> Self {
        Self {
            config: MeasureConfig::default(),
            operations: Operations::builtin(),
        }
    }

    /// Presentation settings
    pub fn config(mut self, config: MeasureConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach a named unary operation
    ///
    /// Takes precedence over a built-in with the same name.
    pub fn operation<F>(mut self, name: impl Into<String>, operation: F) -> Self
    where
        F: Fn(&Measure<N>) -> MeasureResult<Measure<N>> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.operations.insert(name.clone(), operation) {
            tracing::debug!(operation = %name, "caller operation replaces existing one");
        }
        self
    }

    pub fn build(self) -> MeasureType<N> {
        let id = FactoryId::next();
        tracing::debug!(
            factory = id.as_u64(),
            backend = std::any::type_name::<N>(),
            operations = self.operations.len(),
            "built measure type"
        );
        MeasureType {
            id,
            config: self.config,
            operations: self.operations,
        }
    }
}

/// Constructors and operations bound to one numeric backend
#[derive(Debug)]
pub struct MeasureType<N: Numeric> {
    id: FactoryId,
    config: MeasureConfig,
    operations: Operations<N>,
}

impl<N: Numeric> MeasureType<N> {
    /// A measure type with default config and only built-in operations
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> MeasureTypeBuilder<N> {
        MeasureTypeBuilder::new()
    }

    pub fn id(&self) -> FactoryId {
        self.id
    }

    pub fn config(&self) -> &MeasureConfig {
        &self.config
    }

    pub fn operations(&self) -> &Operations<N> {
        &self.operations
    }

    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// One base unit of a new dimension, e.g. `dimension("length", Some("m"))` is 1 m
    pub fn dimension(&self, name: impl Into<Dimension>, symbol: Option<&str>) -> Measure<N> {
        let dimension = name.into();
        let unit = match symbol {
            Some(symbol) => Unit::base_with_symbol(dimension, symbol),
            None => Unit::base(dimension),
        };
        Measure::from_parts(N::one(), unit, symbol.map(str::to_string), self.id)
    }

    /// A pure number
    pub fn dimensionless(&self, value: N) -> Measure<N> {
        Measure::from_parts(value, Unit::dimensionless(), None, self.id)
    }

    /// `value` times `quantity`, in `quantity`'s unit
    ///
    /// Defines multiples and derived constants, e.g. `of(0.3048, &meters, Some("ft"))`.
    pub fn of(&self, value: N, quantity: &Measure<N>, symbol: Option<&str>) -> MeasureResult<Measure<N>> {
        let value = value.mult(quantity.value())?;
        Ok(Measure::from_parts(
            value,
            quantity.unit().clone(),
            symbol.map(str::to_string),
            self.id,
        ))
    }

    /// Whether `value` is a measure created by this very measure type
    ///
    /// Measures of another backend, or of another instance with the same
    /// backend, are rejected. Arithmetic does not check origins: a result
    /// always carries the left operand's origin, so combining a foreign
    /// measure into one of ours yields a measure this type owns.
    pub fn is_measure(&self, value: &dyn Any) -> bool {
        value
            .downcast_ref::<Measure<N>>()
            .is_some_and(|measure| self.owns(measure))
    }

    /// Whether `measure` carries this type's origin; see [`MeasureType::is_measure`]
    pub fn owns(&self, measure: &Measure<N>) -> bool {
        measure.origin() == self.id
    }

    /// A metric-style prefix bound to this backend
    pub fn prefix(&self, symbol: impl Into<String>, multiplier: N) -> Prefix<N> {
        Prefix::new(symbol, multiplier)
    }

    // ========================================================================
    // ARITHMETIC
    // ========================================================================

    pub fn add(&self, left: &Measure<N>, right: &Measure<N>) -> MeasureResult<Measure<N>> {
        left.plus(right)
    }

    pub fn subtract(&self, left: &Measure<N>, right: &Measure<N>) -> MeasureResult<Measure<N>> {
        left.minus(right)
    }

    pub fn multiply(&self, left: &Measure<N>, right: &Measure<N>) -> MeasureResult<Measure<N>> {
        left.times(right)
    }

    pub fn divide(&self, left: &Measure<N>, right: &Measure<N>) -> MeasureResult<Measure<N>> {
        left.per(right)
    }

    pub fn pow(&self, measure: &Measure<N>, n: i32) -> MeasureResult<Measure<N>> {
        measure.pow(n)
    }

    pub fn root(&self, measure: &Measure<N>, n: i32) -> MeasureResult<Measure<N>> {
        measure.root(n)
    }

    pub fn compare(&self, left: &Measure<N>, right: &Measure<N>) -> MeasureResult<Ordering> {
        left.compare_to(right)
    }

    /// Sum of one or more measures in the same unit
    pub fn sum(&self, measures: &[Measure<N>]) -> MeasureResult<Measure<N>> {
        let (first, rest) = measures
            .split_first()
            .ok_or(MeasureError::EmptyInput { operation: "sum" })?;
        rest.iter().try_fold(first.clone(), |total, measure| total.plus(measure))
    }

    /// Smallest of one or more measures in the same unit
    pub fn min(&self, measures: &[Measure<N>]) -> MeasureResult<Measure<N>> {
        self.extreme(measures, "min", Ordering::Less)
    }

    /// Largest of one or more measures in the same unit
    pub fn max(&self, measures: &[Measure<N>]) -> MeasureResult<Measure<N>> {
        self.extreme(measures, "max", Ordering::Greater)
    }

    fn extreme(
        &self,
        measures: &[Measure<N>],
        operation: &'static str,
        wanted: Ordering,
    ) -> MeasureResult<Measure<N>> {
        let (first, rest) = measures
            .split_first()
            .ok_or(MeasureError::EmptyInput { operation })?;
        let mut best = first;
        for candidate in rest {
            if candidate.compare_to(best)? == wanted {
                best = candidate;
            }
        }
        Ok(best.clone())
    }

    // ========================================================================
    // EXTENSIONS & PRESENTATION
    // ========================================================================

    /// Run a named operation; caller-supplied ones shadow built-ins
    pub fn apply(&self, name: &str, measure: &Measure<N>) -> MeasureResult<Measure<N>> {
        self.operations.apply(name, measure)
    }

    pub fn has_operation(&self, name: &str) -> bool {
        self.operations.contains(name)
    }

    /// Render with this type's config
    pub fn format(&self, measure: &Measure<N>) -> String {
        measure.format_with(&self.config)
    }
}

impl<N: Numeric> Default for MeasureType<N> {
    fn default() -> Self {
        Self::new()
    }
}
