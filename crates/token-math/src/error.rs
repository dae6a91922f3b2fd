use thiserror::Error;

/// Token-amount arithmetic and formatting errors.
///
/// Every failure here is local, deterministic, and non-retryable: it
/// signals misuse or malformed input, never a transient fault.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    /// A raw quantity left the `[0, 2^64 - 1]` domain. Never clamped.
    #[error("amount out of range: {0}")]
    OutOfRange(String),

    /// Arithmetic attempted between amounts of different token identities.
    #[error("token mismatch between amounts")]
    TokenMismatch,

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid decimal string: {0}")]
    InvalidDecimal(String),

    /// Formatting requested more precision than the token's native scale.
    #[error("invalid precision request: {0}")]
    InvalidPrecisionRequest(String),
}
