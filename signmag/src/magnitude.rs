//! Decoding and comparing the magnitude (absolute value) part of a
//! signed-magnitude number.

use std::cmp::Ordering;

use super::number::SignMagnitude;

/// Returns the unsigned value of the magnitude bits of `x`; the sign
/// bit is ignored.  Index 1 is the most significant bit.
///
/// Since the width is at most 64 bits there are at most 63 magnitude
/// bits, so this cannot overflow.
pub fn magnitude<const W: usize>(x: &SignMagnitude<W>) -> u64 {
    x.magnitude_bits()
        .iter()
        .fold(0_u64, |value, &bit| (value << 1) | u64::from(bit))
}

/// Which of two operands has the larger magnitude.  A tie is its own
/// case rather than being folded into one of the other two, so
/// callers have to decide what a tie means for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MagnitudeOrder {
    ALarger,
    BLarger,
    Equal,
}

impl From<Ordering> for MagnitudeOrder {
    fn from(ord: Ordering) -> MagnitudeOrder {
        match ord {
            Ordering::Greater => MagnitudeOrder::ALarger,
            Ordering::Less => MagnitudeOrder::BLarger,
            Ordering::Equal => MagnitudeOrder::Equal,
        }
    }
}

pub fn compare_magnitude<const W: usize>(
    a: &SignMagnitude<W>,
    b: &SignMagnitude<W>,
) -> MagnitudeOrder {
    magnitude(a).cmp(&magnitude(b)).into()
}
