//! # Dimension
//!
//! An opaque name for an independent physical axis (length, time, mass, ...).
//! Names are the only identity a dimension has.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// The name of a base dimension
///
/// Cheap to clone; units copy their keys on every algebra step.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dimension(Arc<str>);

impl Dimension {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Dimension {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Dimension {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Borrow<str> for Dimension {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
