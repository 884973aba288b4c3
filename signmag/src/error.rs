//! Basic error reporting.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Represents a failure to convert a native integer (or a sign and
/// magnitude pair) into a [`crate::SignMagnitude`] of some width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversionFailed {
    TooLarge,
    TooSmall,
}

impl Error for ConversionFailed {}

impl Display for ConversionFailed {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ConversionFailed::TooLarge => f.write_str("value is too large"),
            ConversionFailed::TooSmall => f.write_str("value is too small"),
        }
    }
}

/// A bit vector was rejected before any arithmetic was performed on
/// it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidOperand {
    /// The bit vector does not have exactly the number of bits of the
    /// type being constructed.
    WrongWidth { expected: usize, got: usize },
    /// The element at `index` is neither 0 nor 1.
    NotABit { index: usize, value: u8 },
}

impl Error for InvalidOperand {}

impl Display for InvalidOperand {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            InvalidOperand::WrongWidth { expected, got } => {
                write!(f, "operand should have {expected} bits but has {got}")
            }
            InvalidOperand::NotABit { index, value } => {
                write!(f, "operand element {index} has value {value}, which is not a bit")
            }
        }
    }
}
