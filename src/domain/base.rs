//! `Base` newtype for encoded share values

use crate::error::DecodeError;

/// Radix of an encoded share value (2..=62)
///
/// Bases above 36 use the extended alphabet where uppercase and lowercase
/// letters are distinct digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Base(u32);

impl Base {
    /// Smallest supported base
    pub const MIN: u32 = 2;

    /// Largest supported base
    pub const MAX: u32 = 62;

    /// Creates a new base
    ///
    /// # Errors
    /// Returns [`DecodeError::UnsupportedBase`] outside `2..=62`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharecheck::domain::Base;
    ///
    /// assert_eq!(*Base::new(16).unwrap(), 16);
    /// assert!(Base::new(1).is_err());
    /// assert!(Base::new(63).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self, DecodeError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DecodeError::UnsupportedBase(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Whether letters are case-insensitive in this base
    #[must_use]
    pub fn folds_case(self) -> bool {
        self.0 <= 36
    }
}

impl std::ops::Deref for Base {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::str::FromStr for Base {
    type Err = DecodeError;

    /// Parses a base written as a decimal string, as test cases store it
    ///
    /// Only ASCII digits are accepted; surrounding whitespace is an error.
    ///
    /// ```rust
    /// use sharecheck::domain::Base;
    ///
    /// assert_eq!(*"16".parse::<Base>().unwrap(), 16);
    /// assert!(" 16 ".parse::<Base>().is_err());
    /// assert!("+16".parse::<Base>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecodeError::UnsupportedBase(s.to_string()));
        }
        let value: u32 = s
            .parse()
            .map_err(|_| DecodeError::UnsupportedBase(s.to_string()))?;
        Self::new(value).map_err(|_| DecodeError::UnsupportedBase(s.to_string()))
    }
}
