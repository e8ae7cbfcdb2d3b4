//! Error types shared by the FEC codecs.
//!
//! All core operations fail fast with a single [`FecError`] value; no codec
//! returns partial output alongside an error. The comparison harness is the
//! one caller that swallows per-method failures (see [`crate::comparison`]).

use std::fmt;

/// Errors produced by the FEC codecs and their textual front-ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FecError {
    /// Unknown standard name passed to a codec constructor.
    UnknownStandard(String),
    /// Invalid codec configuration (generator set, code rate, parity count).
    Configuration(String),
    /// Malformed textual bit or polynomial input.
    Parse(String),
    /// More symbol errors than the Reed-Solomon code can correct.
    TooManyErrors,
    /// Message longer than a shortened RS code allows (len > 255 - nsym).
    MessageTooLong { len: usize, max: usize },
    /// Codeword shorter than its own parity overhead.
    CodewordTooShort { len: usize, nsym: usize },
    /// Codeword longer than the block length of the field (255 for GF(2^8)).
    CodewordTooLong { len: usize, max: usize },
}

impl fmt::Display for FecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FecError::UnknownStandard(name) => write!(f, "unknown standard: {}", name),
            FecError::Configuration(msg) => write!(f, "invalid configuration: {}", msg),
            FecError::Parse(msg) => write!(f, "parse error: {}", msg),
            FecError::TooManyErrors => write!(f, "too many errors to correct"),
            FecError::MessageTooLong { len, max } => {
                write!(f, "message length {} exceeds maximum {} for this code", len, max)
            }
            FecError::CodewordTooShort { len, nsym } => {
                write!(f, "codeword length {} does not cover {} parity symbols", len, nsym)
            }
            FecError::CodewordTooLong { len, max } => {
                write!(f, "codeword length {} exceeds maximum block length {}", len, max)
            }
        }
    }
}

impl std::error::Error for FecError {}

/// Result type for FEC operations.
pub type FecResult<T> = Result<T, FecError>;
