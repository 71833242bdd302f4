//! # Operations
//!
//! Named unary operations attached to a measure type.
//!
//! A measure type starts with the built-in set below and callers may add
//! their own (absolute value, rounding, trigonometry, ...). A caller
//! operation with a built-in's name replaces it.
//!
//! Built-ins: `negate`, `inverse`, `squared`, `cubed`, `sqrt`, `cbrt`.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::ports::Numeric;

use super::error::{MeasureError, MeasureResult};
use super::measure::Measure;

/// A shareable unary measure operation
pub type Operation<N> = Arc<dyn Fn(&Measure<N>) -> MeasureResult<Measure<N>> + Send + Sync>;

/// Reject dimensioned measures for operations that only make sense on pure numbers
pub fn require_dimensionless<N: Numeric>(measure: &Measure<N>, operation: &str) -> MeasureResult<()> {
    if measure.is_dimensionless() {
        Ok(())
    } else {
        Err(MeasureError::NotDimensionless {
            operation: operation.to_string(),
            unit: measure.unit().clone(),
        })
    }
}

/// Name -> operation table
#[derive(Clone)]
pub struct Operations<N: Numeric> {
    table: HashMap<String, Operation<N>>,
}

impl<N: Numeric> Operations<N> {
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// The operations every measure type carries
    pub fn builtin() -> Self {
        let mut ops = Self::empty();
        ops.insert("negate", |m: &Measure<N>| Ok(m.negate()));
        ops.insert("inverse", |m: &Measure<N>| m.inverse());
        ops.insert("squared", |m: &Measure<N>| m.squared());
        ops.insert("cubed", |m: &Measure<N>| m.cubed());
        ops.insert("sqrt", |m: &Measure<N>| m.sqrt());
        ops.insert("cbrt", |m: &Measure<N>| m.cbrt());
        ops
    }

    /// Register an operation; returns true if it replaced an existing one
    pub fn insert<F>(&mut self, name: impl Into<String>, operation: F) -> bool
    where
        F: Fn(&Measure<N>) -> MeasureResult<Measure<N>> + Send + Sync + 'static,
    {
        self.table.insert(name.into(), Arc::new(operation)).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Operation<N>> {
        self.table.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.table.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Run the named operation
    pub fn apply(&self, name: &str, measure: &Measure<N>) -> MeasureResult<Measure<N>> {
        let operation = self
            .get(name)
            .ok_or_else(|| MeasureError::UnknownOperation(name.to_string()))?;
        (**operation)(measure)
    }
}

impl<N: Numeric> Default for Operations<N> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<N: Numeric> fmt::Debug for Operations<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
