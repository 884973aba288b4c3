//! Digit-wise combination of the magnitude bits of two operands,
//! working from the least significant bit (index `W-1`) up to the
//! most significant magnitude bit (index 1).  The sign bit is not
//! touched; the combined result always has a sign bit of 0 and it is
//! up to the caller to set it.

use super::number::SignMagnitude;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
}

/// The output of [`combine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Combined<const W: usize> {
    /// The combined magnitude bits, with a positive sign.
    pub magnitude: SignMagnitude<W>,
    /// Whether a carry (for [`Op::Add`]) or a borrow (for
    /// [`Op::Sub`]) was left over after the most significant
    /// magnitude bit.  It is not reflected in `magnitude`.
    pub carry_out: bool,
}

/// Adds or subtracts the magnitudes of `a` and `b`.
///
/// The carry (or borrow) is threaded through the loop; neither
/// operand is modified.  Subtraction is only meaningful when
/// `magnitude(a) >= magnitude(b)`; otherwise the result is the
/// difference modulo 2^(W-1) and `carry_out` is set.
pub fn combine<const W: usize>(op: Op, a: &SignMagnitude<W>, b: &SignMagnitude<W>) -> Combined<W> {
    let mut bits = [0_u8; W];
    let mut carry: u8 = 0;
    for i in (1..W).rev() {
        let (digit, next_carry) = match op {
            Op::Add => {
                let sum = a.bits[i] + b.bits[i] + carry;
                (sum % 2, sum / 2)
            }
            Op::Sub => {
                let subtrahend = b.bits[i] + carry;
                if a.bits[i] >= subtrahend {
                    (a.bits[i] - subtrahend, 0)
                } else {
                    (a.bits[i] + 2 - subtrahend, 1)
                }
            }
        };
        bits[i] = digit;
        carry = next_carry;
    }
    Combined {
        magnitude: SignMagnitude::from_raw(bits),
        carry_out: carry != 0,
    }
}
