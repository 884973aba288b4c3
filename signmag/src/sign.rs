use serde::{Deserialize, Serialize};

#[cfg(test)]
use test_strategy::Arbitrary;

/// The contents of the sign bit of a signed-magnitude number.  Zero
/// can be stored with either sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub const fn from_bit(bit: u8) -> Option<Sign> {
        match bit {
            0 => Some(Sign::Positive),
            1 => Some(Sign::Negative),
            _ => None,
        }
    }

    pub const fn bit(self) -> u8 {
        match self {
            Sign::Positive => 0,
            Sign::Negative => 1,
        }
    }

    pub const fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// The sign of a number (mathematically, sgn(x)).  Although in a
/// signed-magnitude system all values have a sign bit, we treat zero
/// specially so that +0 and -0 both count as zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signum {
    Negative = -1, // <= -1
    Zero = 0,      // +0 or -0
    Positive = 1,  // >= +1
}

#[test]
fn test_sign_bit_round_trip() {
    for sign in [Sign::Positive, Sign::Negative] {
        assert_eq!(Sign::from_bit(sign.bit()), Some(sign));
    }
    assert_eq!(Sign::from_bit(2), None);
}

#[test]
fn test_flip() {
    assert_eq!(Sign::Positive.flip(), Sign::Negative);
    assert_eq!(Sign::Negative.flip(), Sign::Positive);
}
