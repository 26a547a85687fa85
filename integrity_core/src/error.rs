// integrity_core/src/error.rs

use crate::spatial::DeadReckoningAlgorithm;
use thiserror::Error;

/// Every failure the core can report. All of them are local and synchronous:
/// the operation that raised one produced no partial value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntegrityError {
    /// A fixture string held a token that is not a number.
    #[error("malformed input token '{token}': {reason}")]
    MalformedInput { token: String, reason: String },

    /// The elements supplied for a spatial representation do not match what its
    /// dead-reckoning algorithm mandates.
    #[error("invalid element combination for {algorithm}: {reason}")]
    InvalidCombination {
        algorithm: DeadReckoningAlgorithm,
        reason: String,
    },

    /// A scalar argument is outside its domain (e.g. negative elapsed time).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Two spatial states carrying different algorithm tags were compared.
    #[error("cannot compare a {predicted} prediction against a {reported} report")]
    InvalidComparison {
        predicted: DeadReckoningAlgorithm,
        reported: DeadReckoningAlgorithm,
    },
}

pub type IntegrityResult<T> = Result<T, IntegrityError>;
