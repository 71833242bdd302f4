//! # Adapters
//!
//! Swappable implementations of port traits.
//!
//! This is where the hexagonal architecture meets reality:
//! - Numeric adapters: f64, BigRational, Uncertain
//! - Python bindings (when enabled)
//!
//! Each adapter implements the Numeric port.
//! Adapters can be swapped without changing the unit algebra.

pub mod numeric;

#[cfg(feature = "python")]
pub mod python;
