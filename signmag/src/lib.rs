//! The `signmag` crate implements fixed-width signed-magnitude
//! integers and their addition and subtraction.  A number is stored
//! as an explicit sign bit followed by a binary magnitude, and the
//! arithmetic works digit by digit on those bits (with an explicit
//! carry or borrow) rather than relying on the host's
//! two's-complement arithmetic.
//!
//! The width is a const generic parameter; [`SignMagnitude8`] is
//! the 8-bit form (one sign bit, seven magnitude bits).
//!
//! ```
//! use signmag::prelude::*;
//!
//! let a = SignMagnitude8::try_from(-5_i64).unwrap();
//! let b = SignMagnitude8::try_from(3_i64).unwrap();
//! let sum = add(&a, &b);
//! assert_eq!(sum.value.to_string(), "1,0000010");
//! assert!(!sum.overflow);
//! ```

mod arith;
mod combine;
mod error;
mod magnitude;
mod number;
mod sign;

pub mod prelude;
pub use crate::prelude::*;

/// Builds a [`SignMagnitude8`] from an integer constant, failing at
/// compile time if the value is out of range.
#[macro_export]
macro_rules! sm8 {
    ($n:expr) => {
        const {
            match $crate::prelude::SignMagnitude8::checked_from_i64($n) {
                Some(n) => n,
                None => panic!("value is out of range for an 8-bit signed-magnitude number"),
            }
        }
    };
}

#[test]
fn test_sm8() {
    use prelude::SignMagnitude8;
    let m: SignMagnitude8 = sm8!(-40);
    let n: SignMagnitude8 =
        SignMagnitude8::try_from(-40_i64).expect("test data should be in range");
    assert_eq!(m, n);
    assert_eq!(sm8!(127), SignMagnitude8::MAX);
    assert_eq!(sm8!(0), SignMagnitude8::ZERO);
}
