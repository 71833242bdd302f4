//! # Ports
//!
//! Trait contracts the engine depends on.
//!
//! - `Numeric` - magnitude arithmetic (implemented by adapters)

pub mod numeric;

pub use numeric::{Numeric, NumericError, NumericResult, Power};
