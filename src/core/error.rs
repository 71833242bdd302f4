//! Errors raised by the unit algebra

use thiserror::Error;

use super::exponent::Exponent;

/// Result alias for unit algebra
pub type UnitResult<T> = Result<T, UnitError>;

/// A unit combination that would leave the exponent domain or has no exact result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// A dimension's resulting exponent does not fit `Exponent::MIN..=Exponent::MAX`
    #[error(
        "exponent {exponent} for dimension '{dimension}' is outside the supported range {min}..={max}",
        min = Exponent::MIN,
        max = Exponent::MAX
    )]
    ExponentOutOfRange { dimension: String, exponent: i64 },

    /// The power itself is not a legal exponent
    #[error(
        "cannot raise a unit to the power {power}: powers must lie in {min}..={max}",
        min = Exponent::MIN,
        max = Exponent::MAX
    )]
    PowerOutOfRange { power: i32 },

    /// Some exponent is not a multiple of the root index
    #[error("cannot take root {root} of dimension '{dimension}' with exponent {exponent}")]
    InexactRoot {
        dimension: String,
        exponent: i32,
        root: i32,
    },

    /// Roots are only defined for positive indices inside the exponent domain
    #[error("invalid root index {root}: must lie in 1..={max}", max = Exponent::MAX)]
    InvalidRoot { root: i32 },
}
