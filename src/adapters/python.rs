//! # Python Bindings
//!
//! PyO3 bindings over the standard `f64` measure type.
//!
//! ## Python API
//!
//! ```python
//! from arms_measure import Measure
//!
//! meters = Measure.dimension("length", "m")
//! seconds = Measure.dimension("time", "s")
//!
//! speed = Measure.of(3.0, meters) / seconds
//! print(speed)            # 3 length·time⁻¹
//! print(speed.unit)       # {'length': 1, 'time': -1}
//!
//! feet = Measure.of(0.3048, meters, "ft")
//! Measure.of(0.9144, meters).value_in(feet)   # 3.0
//!
//! meters + seconds        # ValueError: cannot add ...
//! ```

use std::collections::BTreeMap;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::adapters::numeric::measures;
use crate::engine::{Measure, MeasureError};

fn to_py_err(error: MeasureError) -> PyErr {
    PyValueError::new_err(format!("{}", error))
}

/// Python wrapper for an `f64` measure
#[pyclass(name = "Measure")]
#[derive(Clone)]
pub struct PyMeasure {
    inner: Measure<f64>,
}

impl From<Measure<f64>> for PyMeasure {
    fn from(inner: Measure<f64>) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyMeasure {
    /// One base unit of a new dimension
    #[staticmethod]
    #[pyo3(signature = (name, symbol=None))]
    fn dimension(name: &str, symbol: Option<&str>) -> Self {
        measures().dimension(name, symbol).into()
    }

    /// A pure number
    #[staticmethod]
    fn dimensionless(value: f64) -> Self {
        measures().dimensionless(value).into()
    }

    /// `value` times `quantity`, in `quantity`'s unit
    #[staticmethod]
    #[pyo3(signature = (value, quantity, symbol=None))]
    fn of(value: f64, quantity: &PyMeasure, symbol: Option<&str>) -> PyResult<Self> {
        measures()
            .of(value, &quantity.inner, symbol)
            .map(Self::from)
            .map_err(to_py_err)
    }

    #[getter]
    fn value(&self) -> f64 {
        *self.inner.value()
    }

    #[getter]
    fn symbol(&self) -> Option<String> {
        self.inner.symbol().map(str::to_string)
    }

    /// Dimension name -> exponent
    #[getter]
    fn unit(&self) -> BTreeMap<String, i32> {
        self.inner
            .unit()
            .dimensions()
            .map(|(dimension, exponent)| (dimension.to_string(), exponent.value()))
            .collect()
    }

    fn plus(&self, other: &PyMeasure) -> PyResult<Self> {
        self.inner.plus(&other.inner).map(Self::from).map_err(to_py_err)
    }

    fn minus(&self, other: &PyMeasure) -> PyResult<Self> {
        self.inner.minus(&other.inner).map(Self::from).map_err(to_py_err)
    }

    fn times(&self, other: &PyMeasure) -> PyResult<Self> {
        self.inner.times(&other.inner).map(Self::from).map_err(to_py_err)
    }

    fn per(&self, other: &PyMeasure) -> PyResult<Self> {
        self.inner.per(&other.inner).map(Self::from).map_err(to_py_err)
    }

    fn pow(&self, n: i32) -> PyResult<Self> {
        self.inner.pow(n).map(Self::from).map_err(to_py_err)
    }

    fn root(&self, n: i32) -> PyResult<Self> {
        self.inner.root(n).map(Self::from).map_err(to_py_err)
    }

    fn with_symbol(&self, symbol: &str) -> Self {
        self.inner.with_symbol(symbol).into()
    }

    /// How many `unit`s fit in this measure
    fn value_in(&self, unit: &PyMeasure) -> PyResult<f64> {
        self.inner.value_in(&unit.inner).map_err(to_py_err)
    }

    /// Run a named operation of the standard measure type (`abs`, `sin`, ...)
    fn apply(&self, name: &str) -> PyResult<Self> {
        measures()
            .apply(name, &self.inner)
            .map(Self::from)
            .map_err(to_py_err)
    }

    fn __add__(&self, other: &PyMeasure) -> PyResult<Self> {
        self.plus(other)
    }

    fn __sub__(&self, other: &PyMeasure) -> PyResult<Self> {
        self.minus(other)
    }

    fn __mul__(&self, other: &PyMeasure) -> PyResult<Self> {
        self.times(other)
    }

    fn __truediv__(&self, other: &PyMeasure) -> PyResult<Self> {
        self.per(other)
    }

    fn __neg__(&self) -> Self {
        self.inner.negate().into()
    }

    fn __eq__(&self, other: &PyMeasure) -> bool {
        self.inner == other.inner
    }

    fn __repr__(&self) -> String {
        format!("Measure({})", self.inner)
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

/// arms-measure Python module
#[pymodule]
fn arms_measure(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMeasure>()?;

    // Add module docstring
    m.add("__doc__", "arms-measure: dimensional analysis over f64 measures")?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
