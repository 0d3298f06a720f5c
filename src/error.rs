// src/error.rs

use thiserror::Error;

/// Errors surfaced by the numeric types.
///
/// Invalid input is reported at the boundary that introduced it; internal
/// invariant breaches surface as `InvalidOperation` and indicate a bug in
/// this crate rather than in the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed numeric string.
    #[error("malformed numeric string: {0}")]
    Format(&'static str),
    /// An argument fell outside its permitted range.
    #[error("argument out of range: {0}")]
    OutOfRange(&'static str),
    /// Integer division by zero.
    #[error("division by zero")]
    DivideByZero,
    /// A decimal arithmetic failure: division by zero, rounding prohibited
    /// by `RoundingMode::Unnecessary`, or a non-terminating expansion.
    #[error("arithmetic error: {0}")]
    Arithmetic(&'static str),
    /// A value or exponent did not fit its destination.
    #[error("overflow: {0}")]
    Overflow(&'static str),
    /// An internal invariant was breached.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
