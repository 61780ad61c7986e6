//! Multi-base share value encoding
//!
//! This module turns the raw `(index, base, digits)` triples found in test cases into
//! exact-integer [`Share`]s, and renders integers back into the same digit alphabet.
//!
//! # Alphabet
//!
//! The alphabet follows the GMP convention so that test cases produced by GMP-based
//! tooling decode identically:
//! - `0-9` are the digits 0 through 9
//! - for bases up to 36, letters are case-insensitive: `a`/`A` is 10, `z`/`Z` is 35
//! - for bases 37 through 62, `A-Z` are 10 through 35 and `a-z` are 36 through 61
//!
//! Signs, whitespace, separators and prefixes such as `0x` are not part of any base's
//! alphabet and are rejected.
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigInt;
//! use sharecheck::codec::decode_share;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let share = decode_share("6", "4", "213")?;
//!
//! assert_eq!(share.x, BigInt::from(6));
//! assert_eq!(share.y, BigInt::from(39));
//! # Ok(())
//! # }
//! ```

use std::str::FromStr;

use num_bigint::{BigInt, BigUint};

use crate::domain::{Base, Share};
use crate::error::DecodeError;

/// Returns the value of `ch` as a digit in `base`, if it is one
fn digit_value(ch: char, base: Base) -> Option<u8> {
    let value = match ch {
        '0'..='9' => ch as u8 - b'0',
        'A'..='Z' => ch as u8 - b'A' + 10,
        'a'..='z' if base.folds_case() => ch as u8 - b'a' + 10,
        'a'..='z' => ch as u8 - b'a' + 36,
        _ => return None,
    };
    (u32::from(value) < *base).then_some(value)
}

/// Returns the character for digit `value` in `base`
///
/// Bases that fold case render letters in lowercase.
fn digit_char(value: u8, base: Base) -> char {
    match value {
        0..=9 => char::from(b'0' + value),
        10..=35 if base.folds_case() => char::from(b'a' + value - 10),
        10..=35 => char::from(b'A' + value - 10),
        _ => char::from(b'a' + value - 36),
    }
}

/// Decodes a digit string in `base` into an exact-precision magnitude
///
/// # Errors
/// Returns an error if the string is empty or contains a character that is not a
/// digit of `base`
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigUint;
/// use sharecheck::codec::decode_value;
/// use sharecheck::domain::Base;
///
/// let value = decode_value("ff", Base::new(16).unwrap()).unwrap();
/// assert_eq!(value, BigUint::from(255u32));
///
/// // 'g' is not a hexadecimal digit
/// assert!(decode_value("fg", Base::new(16).unwrap()).is_err());
/// ```
pub fn decode_value(digits: &str, base: Base) -> Result<BigUint, DecodeError> {
    if digits.is_empty() {
        return Err(DecodeError::EmptyValue);
    }

    let values = digits
        .chars()
        .enumerate()
        .map(|(position, digit)| {
            digit_value(digit, base).ok_or(DecodeError::InvalidDigit {
                digit,
                position,
                base: *base,
            })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    BigUint::from_radix_be(&values, *base)
        .ok_or_else(|| DecodeError::UnsupportedBase((*base).to_string()))
}

/// Renders a magnitude in `base` using the same alphabet [`decode_value`] accepts
///
/// # Examples
///
/// ```rust
/// use num_bigint::BigUint;
/// use sharecheck::codec::encode_value;
/// use sharecheck::domain::Base;
///
/// assert_eq!(encode_value(&BigUint::from(255u32), Base::new(16).unwrap()), "ff");
/// assert_eq!(encode_value(&BigUint::from(61u32), Base::new(62).unwrap()), "z");
/// ```
#[must_use]
pub fn encode_value(value: &BigUint, base: Base) -> String {
    value
        .to_radix_be(*base)
        .into_iter()
        .map(|digit| digit_char(digit, base))
        .collect()
}

/// Parses a share index key, an optionally negative decimal integer
///
/// # Errors
/// Returns [`DecodeError::InvalidIndex`] if the key is not a decimal integer
pub fn decode_index(key: &str) -> Result<BigInt, DecodeError> {
    let digits = key.strip_prefix('-').unwrap_or(key);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::InvalidIndex(key.to_string()));
    }
    BigInt::from_str(key).map_err(|_| DecodeError::InvalidIndex(key.to_string()))
}

/// Decodes one raw test case entry into a [`Share`]
///
/// # Arguments
/// * `index_key` - The entry's key, the share's x-value in decimal
/// * `base` - The base the value is written in, as a decimal string
/// * `digits` - The share's y-value written in `base`
///
/// # Errors
/// Returns an error if the index is not a decimal integer, the base is outside
/// `2..=62`, or the value contains a character that is not a digit of the base
pub fn decode_share(index_key: &str, base: &str, digits: &str) -> Result<Share, DecodeError> {
    let x = decode_index(index_key)?;
    let base = Base::from_str(base)?;
    let y = decode_value(digits, base)?;
    Ok(Share::new(x, BigInt::from(y)))
}
