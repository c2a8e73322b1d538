//! Error types for vigor-core

use thiserror::Error;

/// Core error type
///
/// Every catalog operation validates before mutating, so a returned error
/// always leaves the catalog unchanged.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("Unknown attribute set: {0}")]
    UnknownSet(String),

    #[error("Unknown effect: {0}")]
    UnknownEffect(String),

    #[error("Unknown attribute type: {0}")]
    UnknownAttributeType(String),

    #[error("Base value {base} outside bounds [{min}, {max}]")]
    OutOfRangeValue { min: f64, base: f64, max: f64 },

    #[error("Periodic effect requires a positive interval, got {0}")]
    InvalidPeriodicity(f64),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
