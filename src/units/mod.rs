//! # Units
//!
//! Ready-made units and prefixes, built only from the public measure API.

pub mod prefix;
pub mod si;

pub use prefix::{metric, metric_prefix, Prefix};
pub use si::SiUnits;
