//! `ShareCount` newtype for threshold secret sharing

use anyhow::{Result, bail};

/// Declared number of shares `n` (n >= 1)
///
/// This is the share count a test case claims to carry. The loader compares it
/// against the entries actually present but the analysis itself works on the
/// shares it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(usize);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: usize = 1;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns an error if count is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharecheck::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value < Self::MIN {
            bail!("Share count must be at least {}", Self::MIN);
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
