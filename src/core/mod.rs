//! # Core
//!
//! Pure unit algebra. No numeric backend, no I/O.
//!
//! Contains:
//! - `Exponent` - bounded integer power of a dimension
//! - `Dimension` - the name of a physical axis
//! - `Unit` - normalized dimension/exponent vector
//! - `MeasureConfig` - presentation settings

pub mod config;
pub mod dimension;
pub mod error;
pub mod exponent;
pub mod unit;

pub use config::{ExponentStyle, MeasureConfig, UnitFormat};
pub use dimension::Dimension;
pub use error::{UnitError, UnitResult};
pub use exponent::{Exponent, ExponentRangeError};
pub use unit::Unit;
