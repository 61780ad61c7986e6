//! Threshold newtype for threshold secret sharing

use anyhow::Result;

/// Reconstruction threshold `k` (k >= 1)
///
/// Invariant: threshold >= 1 (enforced at construction)
/// The polynomial behind a threshold of `k` has degree `k - 1`, so a threshold of zero
/// describes no polynomial at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(usize);

impl Threshold {
    /// Creates a new threshold, returning an error if value < 1
    ///
    /// # Errors
    /// Returns an error if the threshold is zero
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharecheck::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// // Invalid: threshold must be at least 1
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value < 1 {
            anyhow::bail!("Threshold must be at least 1 (got {value})");
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
