//! Error types for CNP parsing and validation.

use thiserror::Error;

use crate::layout::Field;
use crate::validation::Check;

/// The input is not a well-formed digit string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected {expected} digits, got {got} bytes")]
    InvalidLength { expected: usize, got: usize },

    #[error("non-digit character {found:?} at position {position}")]
    NonDigit { position: usize, found: char },

    #[error("{field} value {value} does not fit in {width} digits")]
    FieldOverflow { field: Field, value: u16, width: usize },
}

/// The first check a candidate failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("malformed CNP: {0}")]
    Format(#[from] FormatError),

    #[error("invalid gender digit: {0}")]
    InvalidGender(u8),

    #[error("invalid month: {0}")]
    InvalidMonth(u8),

    #[error("invalid day {day} for month {month}")]
    InvalidDay { month: u8, day: u8 },

    #[error("invalid county code: {0}")]
    InvalidCounty(u8),

    #[error("sequence number must be positive")]
    InvalidSequence,

    #[error("checksum mismatch: expected control digit {expected}, got {got}")]
    ChecksumMismatch { expected: u8, got: u8 },
}

impl ValidationError {
    /// The check that produced this error.
    pub fn check(&self) -> Check {
        match self {
            ValidationError::Format(_) => Check::Format,
            ValidationError::InvalidGender(_) => Check::Gender,
            ValidationError::InvalidMonth(_) | ValidationError::InvalidDay { .. } => {
                Check::MonthDay
            }
            ValidationError::InvalidCounty(_) => Check::County,
            ValidationError::InvalidSequence => Check::Sequence,
            ValidationError::ChecksumMismatch { .. } => Check::Checksum,
        }
    }
}
