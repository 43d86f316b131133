/*!
# Errors

Only conditions that prevent a result from being produced at all are errors. Everything the
library can recover from (skipped edges, negative cycles) is reported through
[`Diagnostics`](crate::diagnostics::Diagnostics) instead.
*/

use thiserror::Error;

/// Errors raised by generators, the engine and the flat export.
#[derive(Debug, Error)]
pub enum Error {
    /// A generator or weight assignment was configured with values outside of its domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The engine observed its interrupt flag between two relaxation phases.
    #[error("computation interrupted after {completed_phases} of {total_phases} relaxation phases")]
    Interrupted {
        completed_phases: usize,
        total_phases: usize,
    },

    #[error("malformed flat export: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Shorthand for returning `Err(Error::InvalidParameter)` early when a condition fails
macro_rules! invalid_unless {
    ($cond : expr, $($info : tt)+) => {
        if !($cond) {
            return Err($crate::error::Error::InvalidParameter(format!($($info)+)));
        }
    };
}

pub(crate) use invalid_unless;
