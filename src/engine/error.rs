//! Errors raised by measure arithmetic

use thiserror::Error;

use crate::core::{Unit, UnitError};
use crate::ports::NumericError;

/// Result alias for measure operations
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Why a measure operation was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    /// Addition, subtraction, comparison or conversion across different units
    #[error("cannot {operation} a measure in {left} and a measure in {right}")]
    IncompatibleUnits {
        operation: &'static str,
        left: Unit,
        right: Unit,
    },

    /// Unit algebra failure (exponent range, inexact root)
    #[error(transparent)]
    Unit(#[from] UnitError),

    /// Failure reported by the numeric backend, passed through as-is
    #[error(transparent)]
    Backend(#[from] NumericError),

    /// An operation restricted to dimensionless measures got a dimensioned one
    #[error("{operation} requires a dimensionless measure, got one in {unit}")]
    NotDimensionless { operation: String, unit: Unit },

    /// No operation with this name is registered on the measure type
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    /// An aggregate was asked to fold zero measures
    #[error("{operation} needs at least one measure")]
    EmptyInput { operation: &'static str },
}
