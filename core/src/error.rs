use thiserror::Error;

use crate::constants::MAX_WIDTH;

/// Errors raised while building or combining bit sequences.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BitsError {
    // Zero-width or too wide to cache the decimal value
    #[error("Invalid width {width}: must be between 1 and {max} bits", max = MAX_WIDTH)]
    InvalidWidth { width: usize },

    // A dynamically typed bit that is not a boolean
    #[error("Bit {index} is not a boolean; bit lists must only consist of boolean values")]
    InvalidBit { index: usize },

    // A bit-string character other than '0' or '1'
    #[error("Character {digit:?} at position {index} is not a binary digit")]
    InvalidDigit { index: usize, digit: char },

    #[error("Bit string length {actual} does not match width {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Cannot represent {value} with {width} bits; valid range is {min} to {max}")]
    OutOfRange {
        value: i128,
        width: usize,
        min: i128,
        max: i128,
    },

    #[error(
        "Incompatible operands: {lhs_width}-bit {} and {rhs_width}-bit {}",
        signedness(.lhs_signed),
        signedness(.rhs_signed)
    )]
    IncompatibleOperands {
        lhs_width: usize,
        lhs_signed: bool,
        rhs_width: usize,
        rhs_signed: bool,
    },

    #[error("{lhs} {op} {rhs} cannot be represented using {width} bits")]
    Overflow {
        op: char,
        lhs: i128,
        rhs: i128,
        width: usize,
    },

    // Unsigned results cannot go below zero
    #[error("Unsigned subtraction requires the minuend to exceed the subtrahend ({minuend} - {subtrahend})")]
    Underflow { minuend: i128, subtrahend: i128 },
}

fn signedness(signed: &bool) -> &'static str {
    if *signed {
        "signed"
    } else {
        "unsigned"
    }
}

/// Result type for bit sequence operations.
pub type Result<T, E = BitsError> = std::result::Result<T, E>;
