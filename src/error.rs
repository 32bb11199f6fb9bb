use thiserror::Error;

/// Errors from strictly parsing a [`BigUint`](crate::BigUint) out of a string
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ParseBigUintError {
    #[error("cannot parse a number from an empty string")]
    Empty,
    #[error("invalid binary digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}
