//! Signed addition and subtraction.
//!
//! Both operations dispatch on the signs of their operands.  When
//! the signs agree, the magnitudes are added and the result takes the
//! common sign.  When they differ, the smaller magnitude is
//! subtracted from the larger one and the result takes the sign of
//! the operand with the larger magnitude.  Because the subtraction is
//! always larger-minus-smaller, the borrow never runs off the top of
//! the magnitude.
//!
//! Subtraction is addition of the operand with its sign bit flipped
//! (`a - b = a + (-b)`).
//!
//! # Zero
//!
//! When operands of opposite sign have equal magnitudes the result
//! is +0.  When both operands have the same sign the result keeps
//! that sign even if its magnitude is zero, so `-0 + -0` is `-0`.
//!
//! # Overflow
//!
//! The overflow flag of the [`Outcome`] is set exactly when the sum
//! of the operands' magnitudes exceeds
//! [`SignMagnitude::MAX_MAGNITUDE`], whatever their signs.  This is a
//! coarse test: it also fires for mixed-sign operands whose true
//! result is representable.  The result is never clamped.  When
//! same-signed operands really do overflow, the carry out of the
//! most significant magnitude bit is dropped, so +127 + +1 gives
//! `0,0000000` at width 8.

use std::ops::{Add, Sub};

use tracing::{event, Level};

use super::combine::{combine, Combined, Op};
use super::magnitude::{compare_magnitude, magnitude, MagnitudeOrder};
use super::number::SignMagnitude;


/// The result of a signed addition or subtraction.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome<const W: usize> {
    pub value: SignMagnitude<W>,
    /// The operands' magnitudes add up to more than
    /// `MAX_MAGNITUDE` (see the module documentation).
    pub overflow: bool,
}

impl<const W: usize> Outcome<W> {
    /// Returns the computed value unless the overflow flag is set.
    pub fn checked(self) -> Option<SignMagnitude<W>> {
        if self.overflow {
            None
        } else {
            Some(self.value)
        }
    }
}

impl<const W: usize> From<Outcome<W>> for (SignMagnitude<W>, bool) {
    fn from(outcome: Outcome<W>) -> Self {
        (outcome.value, outcome.overflow)
    }
}

fn magnitude_sum_overflows<const W: usize>(a: &SignMagnitude<W>, b: &SignMagnitude<W>) -> bool {
    // Each magnitude is below 2^63, so the sum fits in a u64.
    magnitude(a) + magnitude(b) > SignMagnitude::<W>::MAX_MAGNITUDE
}

/// Subtracts the magnitude of `smaller` from that of `larger`,
/// giving the result the sign of `larger`.
fn difference<const W: usize>(
    larger: &SignMagnitude<W>,
    smaller: &SignMagnitude<W>,
) -> SignMagnitude<W> {
    let Combined {
        magnitude,
        carry_out: borrow_out,
    } = combine(Op::Sub, larger, smaller);
    debug_assert!(
        !borrow_out,
        "magnitude of {larger} should not be less than that of {smaller}"
    );
    magnitude.with_sign(larger.sign())
}

/// Adds two signed-magnitude numbers.
pub fn add<const W: usize>(a: &SignMagnitude<W>, b: &SignMagnitude<W>) -> Outcome<W> {
    let value = if a.sign() == b.sign() {
        event!(Level::TRACE, "{a} + {b}: signs agree, adding magnitudes");
        let Combined {
            magnitude,
            carry_out,
        } = combine(Op::Add, a, b);
        if carry_out {
            event!(
                Level::TRACE,
                "{a} + {b}: dropping carry out of the most significant magnitude bit"
            );
        }
        magnitude.with_sign(a.sign())
    } else {
        match compare_magnitude(a, b) {
            MagnitudeOrder::ALarger => {
                event!(Level::TRACE, "{a} + {b}: signs differ, computing |a| - |b|");
                difference(a, b)
            }
            MagnitudeOrder::BLarger => {
                event!(Level::TRACE, "{a} + {b}: signs differ, computing |b| - |a|");
                difference(b, a)
            }
            MagnitudeOrder::Equal => {
                event!(Level::TRACE, "{a} + {b}: operands cancel out");
                SignMagnitude::ZERO
            }
        }
    };
    let overflow = magnitude_sum_overflows(a, b);
    if overflow {
        event!(
            Level::WARN,
            "Overflow! magnitudes of {a} and {b} add up to more than {}",
            SignMagnitude::<W>::MAX_MAGNITUDE
        );
    }
    Outcome { value, overflow }
}

/// Subtracts `b` from `a`.
pub fn subtract<const W: usize>(a: &SignMagnitude<W>, b: &SignMagnitude<W>) -> Outcome<W> {
    let negated = b.negate();
    event!(Level::TRACE, "{a} - {b}: computing {a} + {negated}");
    add(a, &negated)
}

impl<const W: usize> SignMagnitude<W> {
    pub fn checked_add(self, rhs: SignMagnitude<W>) -> Option<SignMagnitude<W>> {
        add(&self, &rhs).checked()
    }

    pub fn checked_sub(self, rhs: SignMagnitude<W>) -> Option<SignMagnitude<W>> {
        subtract(&self, &rhs).checked()
    }

    pub fn overflowing_add(self, rhs: SignMagnitude<W>) -> (SignMagnitude<W>, bool) {
        add(&self, &rhs).into()
    }

    pub fn overflowing_sub(self, rhs: SignMagnitude<W>) -> (SignMagnitude<W>, bool) {
        subtract(&self, &rhs).into()
    }
}

impl<const W: usize> Add for SignMagnitude<W> {
    type Output = Outcome<W>;

    fn add(self, rhs: SignMagnitude<W>) -> Outcome<W> {
        add(&self, &rhs)
    }
}

impl<const W: usize> Sub for SignMagnitude<W> {
    type Output = Outcome<W>;

    fn sub(self, rhs: SignMagnitude<W>) -> Outcome<W> {
        subtract(&self, &rhs)
    }
}
