//! # Configuration
//!
//! Presentation settings for units and measures.
//!
//! Nothing here affects the algebra: two factories with different configs
//! produce the same units and magnitudes, only rendered differently.

/// How exponents are written when a unit is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExponentStyle {
    /// `m·s⁻²`
    #[default]
    Superscript,
    /// `m·s^-2`
    Caret,
}

/// How a unit's dimension/exponent pairs are rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFormat {
    /// Placed between dimension factors
    pub separator: String,

    /// Exponent notation
    pub exponent_style: ExponentStyle,
}

impl UnitFormat {
    /// Plain ASCII rendering, e.g. `kg*m*s^-2`
    pub fn ascii() -> Self {
        Self {
            separator: "*".to_string(),
            exponent_style: ExponentStyle::Caret,
        }
    }
}

impl Default for UnitFormat {
    fn default() -> Self {
        Self {
            separator: "·".to_string(),
            exponent_style: ExponentStyle::Superscript,
        }
    }
}

/// Configuration carried by a measure factory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasureConfig {
    /// Rendering of units without an explicit symbol
    pub unit_format: UnitFormat,

    /// Placed between the magnitude and the unit
    pub value_separator: String,
}

impl MeasureConfig {
    /// Create a config with the default rendering
    pub fn new() -> Self {
        Self {
            unit_format: UnitFormat::default(),
            value_separator: " ".to_string(),
        }
    }

    pub fn with_unit_format(mut self, unit_format: UnitFormat) -> Self {
        self.unit_format = unit_format;
        self
    }

    pub fn with_value_separator(mut self, separator: impl Into<String>) -> Self {
        self.value_separator = separator.into();
        self
    }
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self::new()
    }
}
