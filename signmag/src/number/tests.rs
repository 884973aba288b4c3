use super::super::error::{ConversionFailed, InvalidOperand};
use super::super::sign::{Sign, Signum};
use super::{SignMagnitude, SignMagnitude8};

#[test]
fn test_constants() {
    assert_eq!(SignMagnitude8::MAX_MAGNITUDE, 127);
    assert_eq!(SignMagnitude8::MAGNITUDE_BITS, 7);
    assert_eq!(SignMagnitude8::ZERO.bits, [0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(SignMagnitude8::MINUS_ZERO.bits, [1, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(SignMagnitude8::MAX.bits, [0, 1, 1, 1, 1, 1, 1, 1]);
    assert_eq!(SignMagnitude8::MIN.bits, [1, 1, 1, 1, 1, 1, 1, 1]);
    assert_eq!(SignMagnitude::<2>::MAX_MAGNITUDE, 1);
    assert_eq!(SignMagnitude::<64>::MAX_MAGNITUDE, i64::MAX as u64);
}

#[test]
fn test_from_bits() {
    let n = SignMagnitude8::from_bits(&[1, 0, 0, 0, 0, 1, 0, 1]).expect("valid bits");
    assert_eq!(n.sign(), Sign::Negative);
    assert_eq!(n.magnitude(), 5);
    assert_eq!(i64::from(n), -5);
}

#[test]
fn test_from_bits_rejects_wrong_width() {
    assert_eq!(
        SignMagnitude8::from_bits(&[0, 1, 0]),
        Err(InvalidOperand::WrongWidth {
            expected: 8,
            got: 3
        })
    );
    assert_eq!(
        SignMagnitude8::try_from(vec![0; 9]),
        Err(InvalidOperand::WrongWidth {
            expected: 8,
            got: 9
        })
    );
}

#[test]
fn test_from_bits_rejects_non_bits() {
    assert_eq!(
        SignMagnitude8::try_from([0, 0, 0, 0, 2, 0, 0, 1]),
        Err(InvalidOperand::NotABit { index: 4, value: 2 })
    );
    // The sign bit is validated too.
    assert_eq!(
        SignMagnitude8::from_bits(&[255, 0, 0, 0, 0, 0, 0, 1]),
        Err(InvalidOperand::NotABit {
            index: 0,
            value: 255
        })
    );
}

#[test]
fn test_new() {
    assert_eq!(
        SignMagnitude8::new(Sign::Negative, 127),
        Ok(SignMagnitude8::MIN)
    );
    assert_eq!(
        SignMagnitude8::new(Sign::Positive, 128),
        Err(ConversionFailed::TooLarge)
    );
    assert_eq!(
        SignMagnitude8::new(Sign::Negative, 0),
        Ok(SignMagnitude8::MINUS_ZERO)
    );
}

#[test]
fn test_i64_round_tripping() {
    for i in -127_i64..=127_i64 {
        let n = SignMagnitude8::try_from(i).expect("input is in range");
        let out = i64::from(n);
        assert_eq!(i, out, "Round trip failed for {}->{:?}->{}", i, &n, out);
    }
}

#[test]
fn test_try_from_i64_out_of_range() {
    assert_eq!(
        SignMagnitude8::try_from(128_i64),
        Err(ConversionFailed::TooLarge)
    );
    assert_eq!(
        SignMagnitude8::try_from(-128_i64),
        Err(ConversionFailed::TooSmall)
    );
    assert_eq!(
        SignMagnitude::<64>::try_from(i64::MIN),
        Err(ConversionFailed::TooSmall)
    );
    assert_eq!(
        i64::from(SignMagnitude::<64>::try_from(i64::MIN + 1).expect("in range")),
        i64::MIN + 1
    );
}

#[test]
fn test_zeroes() {
    let zero = SignMagnitude8::ZERO;
    let minus_zero = SignMagnitude8::MINUS_ZERO;
    assert!(zero.is_zero());
    assert!(minus_zero.is_zero());
    assert!(zero.is_positive_zero());
    assert!(!zero.is_negative_zero());
    assert!(minus_zero.is_negative_zero());
    assert!(!minus_zero.is_negative());
    assert_ne!(zero, minus_zero, "representations should differ");
    assert!(zero.same_value(&minus_zero));
    assert_eq!(i64::from(minus_zero), 0);
    assert_eq!(minus_zero.signum() as i8, Signum::Zero as i8);
}

#[test]
fn test_negate_flips_sign_bit_only() {
    let five = SignMagnitude8::try_from(5_i64).unwrap();
    let minus_five = five.negate();
    assert_eq!(minus_five.bits, [1, 0, 0, 0, 0, 1, 0, 1]);
    assert_eq!(minus_five.negate(), five);
    assert_eq!(minus_five.abs(), five);
    assert_eq!(SignMagnitude8::ZERO.negate(), SignMagnitude8::MINUS_ZERO);
}

#[test]
fn test_signum() {
    assert_eq!(
        SignMagnitude8::try_from(-3_i64).unwrap().signum(),
        Signum::Negative
    );
    assert_eq!(
        SignMagnitude8::try_from(3_i64).unwrap().signum(),
        Signum::Positive
    );
    assert_eq!(SignMagnitude8::ZERO.signum(), Signum::Zero);
}

#[test]
fn test_display() {
    assert_eq!(
        SignMagnitude8::try_from(-5_i64).unwrap().to_string(),
        "1,0000101"
    );
    assert_eq!(SignMagnitude8::MAX.to_string(), "0,1111111");
    assert_eq!(SignMagnitude::<3>::MIN.to_string(), "1,11");
}

#[test]
fn test_debug() {
    assert_eq!(
        format!("{:?}", SignMagnitude8::try_from(-5_i64).unwrap()),
        "SignMagnitude<8>{bits: 1,0000101 (-5)}"
    );
    assert_eq!(
        format!("{:?}", SignMagnitude8::MINUS_ZERO),
        "SignMagnitude<8>{bits: 1,0000000 (-0)}"
    );
}

#[test]
fn test_serialize() {
    let n = SignMagnitude8::try_from(-5_i64).unwrap();
    let json = serde_json::to_string(&n).expect("serialization should succeed");
    assert_eq!(json, "[1,0,0,0,0,1,0,1]");
    let back: SignMagnitude8 = serde_json::from_str(&json).expect("valid input");
    assert_eq!(back, n);
}

#[test]
fn test_deserialize_validates() {
    assert!(serde_json::from_str::<SignMagnitude8>("[0,0,0,0,0,1,0,2]").is_err());
    assert!(serde_json::from_str::<SignMagnitude8>("[0,0,0,1]").is_err());
}

#[test]
fn test_default_is_positive_zero() {
    assert!(SignMagnitude8::default().is_positive_zero());
}
