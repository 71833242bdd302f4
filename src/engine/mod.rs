//! # Engine
//!
//! The measure layer that wires everything together.
//!
//! This is where:
//! - Unit algebra (core) meets magnitude arithmetic (Numeric port)
//! - A backend is bound into a closed measure type
//! - Caller operations are attached

mod error;
mod factory;
mod measure;
mod operations;

pub use error::{MeasureError, MeasureResult};
pub use factory::{FactoryId, MeasureType, MeasureTypeBuilder};
pub use measure::Measure;
pub use operations::{require_dimensionless, Operation, Operations};
