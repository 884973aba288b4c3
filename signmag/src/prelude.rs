//! The prelude exports the signed-magnitude number type together
//! with the operations on it.
pub use super::arith::{add, subtract, Outcome};
pub use super::combine::{combine, Combined, Op};
pub use super::error::*;
pub use super::magnitude::{compare_magnitude, magnitude, MagnitudeOrder};
pub use super::number::{SignMagnitude, SignMagnitude8};
pub use super::sign::{Sign, Signum};
pub use super::sm8;
