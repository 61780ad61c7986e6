//! Scheme parameters read from a test case

use super::{ShareCount, Threshold};

/// Threshold and declared share count of a test case
///
/// The declared count is informational. A threshold above it is allowed here and
/// surfaces later as a no-consensus outcome once the shares actually present are
/// enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeParams {
    threshold: Threshold,
    share_count: ShareCount,
}

impl SchemeParams {
    /// Creates new scheme parameters
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sharecheck::domain::{SchemeParams, Threshold, ShareCount};
    ///
    /// let params = SchemeParams::new(
    ///     Threshold::new(3).unwrap(),
    ///     ShareCount::new(5).unwrap()
    /// );
    ///
    /// assert_eq!(*params.threshold(), 3);
    /// assert_eq!(*params.share_count(), 5);
    /// assert!(!params.threshold_exceeds_share_count());
    ///
    /// let params = SchemeParams::new(
    ///     Threshold::new(5).unwrap(),
    ///     ShareCount::new(3).unwrap()
    /// );
    /// assert!(params.threshold_exceeds_share_count());
    /// ```
    #[must_use]
    pub fn new(threshold: Threshold, share_count: ShareCount) -> Self {
        Self {
            threshold,
            share_count,
        }
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the share count value
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }

    /// Whether the threshold asks for more shares than were declared
    #[must_use]
    pub fn threshold_exceeds_share_count(&self) -> bool {
        *self.threshold > *self.share_count
    }
}
