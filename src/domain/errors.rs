//! Domain validation errors.

use thiserror::Error;

/// Errors raised when a field's validation hook rejects a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number was rejected.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// The provided birthday was rejected.
    #[error("Invalid birthday: {0}")]
    InvalidBirthday(String),

    /// A value was rejected by a caller-defined field kind.
    #[error("Invalid {kind} value: {value}")]
    Rejected { kind: &'static str, value: String },
}
