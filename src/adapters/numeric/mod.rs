//! # Numeric Adapters
//!
//! Implementations of the Numeric port for different magnitude types.
//!
//! Available adapters:
//! - `f64` - IEEE floats (fast, inexact, never errors)
//! - `BigRational` - exact fractions (errors on division by zero, inexact roots)
//! - `Uncertain` - value ± uncertainty with first-order propagation

pub mod float;
pub mod rational;
mod uncertain;

pub use float::{measure_type, measures};
pub use rational::rational;
pub use uncertain::Uncertain;
