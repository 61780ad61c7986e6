//! Property tests for multi-base value decoding

use num_bigint::BigUint;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use sharecheck::codec::{decode_value, encode_value};
use sharecheck::domain::Base;

#[derive(Clone, Copy, Debug)]
struct AnyBase(u32);

impl Arbitrary for AnyBase {
    fn arbitrary(g: &mut Gen) -> Self {
        AnyBase(u32::arbitrary(g) % (Base::MAX - Base::MIN + 1) + Base::MIN)
    }
}

/// Rendering a value and decoding it again gives back the value
#[quickcheck]
fn prop_encode_decode_round_trip(bytes: Vec<u8>, base: AnyBase) -> bool {
    let base = Base::new(base.0).unwrap();
    let value = BigUint::from_bytes_be(&bytes);
    decode_value(&encode_value(&value, base), base) == Ok(value)
}

/// Bases up to 36 ignore the case of letters
#[quickcheck]
fn prop_small_bases_fold_case(value: u64, base: AnyBase) -> bool {
    let base = Base::new(base.0.min(36)).unwrap();
    let digits = encode_value(&BigUint::from(value), base);
    decode_value(&digits.to_uppercase(), base) == decode_value(&digits, base)
}

/// A digit equal to the base is always rejected
#[quickcheck]
fn prop_digit_equal_to_base_rejected(base: AnyBase) -> bool {
    let base = base.0;
    // In base 36 the character for 36 folds to 10, and base 62 has no spare character
    if base == 36 || base == Base::MAX {
        return true;
    }
    let first_invalid = encode_value(&BigUint::from(base), Base::new(Base::MAX).unwrap());
    decode_value(&first_invalid, Base::new(base).unwrap()).is_err()
}
