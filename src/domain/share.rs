use num_bigint::BigInt;

/// A decoded share: the point `(x, f(x))` on the sharing polynomial
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Share {
    /// Share index, unique within one test case
    pub x: BigInt,
    /// Share value
    pub y: BigInt,
}

impl Share {
    #[must_use]
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl std::fmt::Display for Share {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
