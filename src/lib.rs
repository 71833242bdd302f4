//! # ARMS Measure - dimensional analysis over any numeric type
//!
//! A measure is a magnitude tagged with a unit. A unit is a vector of
//! dimension exponents: `{length: 1, time: -2}` is an acceleration.
//! Arithmetic keeps the two in lock-step, so adding a length to a time, or
//! taking the square root of a volume, is rejected instead of silently
//! producing nonsense.
//!
//! ## Philosophy
//!
//! - **Dimensions are names** - no fixed list, any string is a dimension
//! - **Any magnitude** - floats, exact rationals, uncertain values
//! - **Bounded exponents** - every exponent stays within `-5..=5`
//! - **Pure core, swappable adapters** - Hexagonal architecture
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ARMS MEASURE                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure unit algebra, no numbers)                       │
//! │    Exponent, Dimension, Unit, MeasureConfig                 │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    Numeric                                                   │
//! │                                                              │
//! │  ADAPTERS (swappable implementations)                       │
//! │    Numeric: f64, BigRational, Uncertain                     │
//! │    API: Python bindings                                      │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    Measure, MeasureType - the main entry point              │
//! │                                                              │
//! │  UNITS (built on the public API)                            │
//! │    SI base and derived units, metric prefixes               │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use arms_measure::MeasureType;
//!
//! let measures = MeasureType::<f64>::new();
//! let meters = measures.dimension("length", Some("m"));
//! let seconds = measures.dimension("time", Some("s"));
//!
//! let distance = measures.of(100.0, &meters, None).unwrap();
//! let time = measures.of(9.58, &seconds, None).unwrap();
//! let speed = distance.per(&time).unwrap().with_symbol("m/s");
//!
//! assert_eq!(speed.unit().exponent("time").value(), -1);
//! assert!(distance.plus(&time).is_err());
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure unit algebra, no numeric backend
/// Contains: Exponent, Dimension, Unit, MeasureConfig, UnitError
pub mod core;

/// Port definitions - trait contracts for adapters
/// Contains: Numeric trait, Power, NumericError
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: numeric backends, python submodule
pub mod adapters;

/// Engine - orchestration layer
/// Contains: Measure, MeasureType, Operations
pub mod engine;

/// Ready-made units
/// Contains: SiUnits, Prefix, metric prefix table
pub mod units;

// ============================================================================
// PYTHON BINDINGS (when enabled)
// ============================================================================

#[cfg(feature = "python")]
pub use adapters::python::*;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{Dimension, Exponent, ExponentRangeError, Unit, UnitError, UnitResult};
pub use crate::core::config::{ExponentStyle, MeasureConfig, UnitFormat};

// Port traits
pub use crate::ports::{Numeric, NumericError, NumericResult, Power};

// Adapters
pub use crate::adapters::numeric::{measures, rational, Uncertain};

// Engine
pub use crate::engine::{FactoryId, Measure, MeasureError, MeasureResult, MeasureType, MeasureTypeBuilder};

// Units
pub use crate::units::{Prefix, SiUnits};
