//! The signed-magnitude representation itself.  A number of width
//! `W` is a vector of `W` bits: the sign bit at index 0, followed by
//! `W-1` magnitude bits, most significant first.  So with `W = 8`,
//! -5 is `1,0000101`.

use std::fmt::{self, Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::error::{ConversionFailed, InvalidOperand};
use super::magnitude::magnitude;
use super::sign::{Sign, Signum};

#[cfg(test)]
mod tests;

/// A fixed-width signed-magnitude integer.
///
/// Every element of the bit vector is 0 or 1; this is checked by
/// every public constructor, so the arithmetic never has to deal
/// with a malformed operand.
///
/// Equality is equality of representation, so `+0 != -0`.  Use
/// [`SignMagnitude::same_value`] to compare values instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct SignMagnitude<const W: usize> {
    pub(crate) bits: [u8; W],
}

/// One sign bit and seven magnitude bits.
pub type SignMagnitude8 = SignMagnitude<8>;

impl<const W: usize> SignMagnitude<W> {
    // Mentioned by every constructor, so an unsupported width fails
    // to compile as soon as anything builds a value of that type.
    const WIDTH_OK: () = assert!(
        W >= 2 && W <= 64,
        "signed-magnitude width must be between 2 and 64 bits"
    );

    pub const WIDTH: usize = W;
    pub const MAGNITUDE_BITS: usize = W - 1;
    pub const MAX_MAGNITUDE: u64 = u64::MAX >> (65 - W);

    pub const ZERO: Self = Self::from_parts(Sign::Positive, 0);
    pub const MINUS_ZERO: Self = Self::from_parts(Sign::Negative, 0);
    pub const ONE: Self = Self::from_parts(Sign::Positive, 1);
    pub const MAX: Self = Self::from_parts(Sign::Positive, Self::MAX_MAGNITUDE);
    pub const MIN: Self = Self::from_parts(Sign::Negative, Self::MAX_MAGNITUDE);

    /// Builds a value whose magnitude is already known to fit.
    /// Magnitude bits above `MAX_MAGNITUDE` are discarded.
    pub(crate) const fn from_parts(sign: Sign, magnitude: u64) -> Self {
        let () = Self::WIDTH_OK;
        let mut bits = [0_u8; W];
        bits[0] = sign.bit();
        let mut i = 1;
        while i < W {
            bits[i] = ((magnitude >> (W - 1 - i)) & 1) as u8;
            i += 1;
        }
        Self { bits }
    }

    /// Builds a value from bits which the caller has already
    /// verified to be 0 or 1.
    pub(crate) const fn from_raw(bits: [u8; W]) -> Self {
        let () = Self::WIDTH_OK;
        Self { bits }
    }

    pub fn new(sign: Sign, magnitude: u64) -> Result<Self, ConversionFailed> {
        if magnitude > Self::MAX_MAGNITUDE {
            Err(ConversionFailed::TooLarge)
        } else {
            Ok(Self::from_parts(sign, magnitude))
        }
    }

    /// Validates a bit vector (sign bit first) and converts it.
    pub fn from_bits(bits: &[u8]) -> Result<Self, InvalidOperand> {
        let array: [u8; W] = bits.try_into().map_err(|_| InvalidOperand::WrongWidth {
            expected: W,
            got: bits.len(),
        })?;
        Self::try_from(array)
    }

    /// Like `TryFrom<i64>`, but usable in constant expressions (see
    /// the [`crate::sm8`] macro).
    pub const fn checked_from_i64(n: i64) -> Option<Self> {
        let magnitude = n.unsigned_abs();
        if magnitude > Self::MAX_MAGNITUDE {
            None
        } else if n < 0 {
            Some(Self::from_parts(Sign::Negative, magnitude))
        } else {
            Some(Self::from_parts(Sign::Positive, magnitude))
        }
    }

    pub const fn bits(&self) -> &[u8; W] {
        &self.bits
    }

    pub fn magnitude_bits(&self) -> &[u8] {
        &self.bits[1..]
    }

    pub const fn sign(&self) -> Sign {
        if self.bits[0] == 0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    pub fn magnitude(&self) -> u64 {
        magnitude(self)
    }

    #[must_use]
    pub const fn with_sign(self, sign: Sign) -> Self {
        let mut bits = self.bits;
        bits[0] = sign.bit();
        Self { bits }
    }

    /// Flips the sign bit only.  The negation of +0 is -0.
    #[must_use]
    pub const fn negate(self) -> Self {
        self.with_sign(self.sign().flip())
    }

    #[must_use]
    pub const fn abs(self) -> Self {
        self.with_sign(Sign::Positive)
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude_bits().iter().all(|&bit| bit == 0)
    }

    pub fn is_positive_zero(&self) -> bool {
        self.is_zero() && self.sign() == Sign::Positive
    }

    pub fn is_negative_zero(&self) -> bool {
        self.is_zero() && self.sign() == Sign::Negative
    }

    pub fn is_negative(&self) -> bool {
        self.sign() == Sign::Negative && !self.is_zero()
    }

    pub fn signum(&self) -> Signum {
        if self.is_zero() {
            Signum::Zero
        } else if self.is_negative() {
            Signum::Negative
        } else {
            Signum::Positive
        }
    }

    /// Compares numeric values, so that `+0` and `-0` are the same.
    pub fn same_value(&self, other: &Self) -> bool {
        i64::from(*self) == i64::from(*other)
    }
}

impl<const W: usize> Default for SignMagnitude<W> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const W: usize> TryFrom<[u8; W]> for SignMagnitude<W> {
    type Error = InvalidOperand;

    fn try_from(bits: [u8; W]) -> Result<Self, InvalidOperand> {
        match bits.iter().enumerate().find(|&(_, &value)| value > 1) {
            Some((index, &value)) => Err(InvalidOperand::NotABit { index, value }),
            None => Ok(Self::from_raw(bits)),
        }
    }
}

impl<const W: usize> TryFrom<&[u8]> for SignMagnitude<W> {
    type Error = InvalidOperand;

    fn try_from(bits: &[u8]) -> Result<Self, InvalidOperand> {
        Self::from_bits(bits)
    }
}

impl<const W: usize> TryFrom<Vec<u8>> for SignMagnitude<W> {
    type Error = InvalidOperand;

    fn try_from(bits: Vec<u8>) -> Result<Self, InvalidOperand> {
        Self::from_bits(&bits)
    }
}

impl<const W: usize> From<SignMagnitude<W>> for Vec<u8> {
    fn from(n: SignMagnitude<W>) -> Vec<u8> {
        n.bits.to_vec()
    }
}

impl<const W: usize> TryFrom<i64> for SignMagnitude<W> {
    type Error = ConversionFailed;

    fn try_from(n: i64) -> Result<Self, ConversionFailed> {
        match Self::checked_from_i64(n) {
            Some(value) => Ok(value),
            None if n > 0 => Err(ConversionFailed::TooLarge),
            None => Err(ConversionFailed::TooSmall),
        }
    }
}

// The magnitude of a number no wider than 64 bits is at most
// 2^63-1, so this conversion always succeeds.  Both zeros map to 0.
impl<const W: usize> From<SignMagnitude<W>> for i64 {
    fn from(n: SignMagnitude<W>) -> i64 {
        let magnitude = n.magnitude() as i64;
        match n.sign() {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        }
    }
}

impl<const W: usize> Display for SignMagnitude<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},", self.bits[0])?;
        for bit in self.magnitude_bits() {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

impl<const W: usize> Debug for SignMagnitude<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sign = match self.sign() {
            Sign::Positive => '+',
            Sign::Negative => '-',
        };
        write!(
            f,
            "SignMagnitude<{W}>{{bits: {self} ({sign}{})}}",
            self.magnitude()
        )
    }
}
